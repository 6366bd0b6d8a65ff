use autoapply_core::{AppViewModel, StatusKind, INPUT_LABEL, INPUT_PLACEHOLDER, TITLE};
use ratatui::layout::{Alignment, Position};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::constants::*;
use super::layout::form_areas;

pub fn render(frame: &mut Frame, view: &AppViewModel) {
    let areas = form_areas(frame.area());

    frame.render_widget(Clear, areas.frame);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(MUTED)),
        areas.frame,
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        areas.title,
    );

    frame.render_widget(Paragraph::new(INPUT_LABEL), areas.label);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT));
    let input_line = if view.keyword_input.is_empty() {
        Line::from(Span::styled(INPUT_PLACEHOLDER, Style::default().fg(MUTED)))
    } else {
        Line::from(view.keyword_input.as_str())
    };
    let inner_width = areas.input.width.saturating_sub(2);
    let (scroll_x, cursor_offset) = input_viewport(&view.keyword_input, inner_width);
    frame.render_widget(
        Paragraph::new(input_line)
            .scroll((0, scroll_x))
            .block(input_block),
        areas.input,
    );
    frame.set_cursor_position(Position::new(
        areas.input.x.saturating_add(1).saturating_add(cursor_offset),
        areas.input.y.saturating_add(1),
    ));

    frame.render_widget(
        Paragraph::new(view.submit_label)
            .alignment(Alignment::Center)
            .style(button_style(view.submit_enabled))
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded)),
        areas.button,
    );

    if let Some(status) = &view.status {
        let color = status_color(status.kind);
        frame.render_widget(
            Paragraph::new(status.text.as_str())
                .style(Style::default().fg(color))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(color)),
                ),
            areas.status,
        );
    }

    frame.render_widget(
        Paragraph::new(Span::styled(KEY_HINTS, Style::default().fg(MUTED)))
            .alignment(Alignment::Center),
        areas.hints,
    );
}

/// Horizontal scroll and cursor column for the single-line input, in terminal cells.
///
/// The tail of the text stays visible with one free cell for the cursor.
fn input_viewport(text: &str, inner_width: u16) -> (u16, u16) {
    let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    if inner_width == 0 {
        return (width, 0);
    }
    if width < inner_width {
        (0, width)
    } else {
        (width - inner_width + 1, inner_width - 1)
    }
}

fn status_color(kind: StatusKind) -> ratatui::style::Color {
    match kind {
        StatusKind::Info => INFO,
        StatusKind::Error => ERROR,
        StatusKind::Success => SUCCESS,
    }
}

fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED).add_modifier(Modifier::DIM)
    }
}
