use std::io;

use anyhow::Context;
use autoapply_core::{update, AppState, AppViewModel, Msg};
use autoapply_engine::SubmitSettings;
use autoapply_logging::{apply_debug, apply_info, apply_trace};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use super::effects::EffectRunner;
use super::ui;
use super::ui::keys::{self, UiAction};

pub fn run_app(settings: SubmitSettings) -> anyhow::Result<()> {
    apply_info!(
        "Starting form target={} base_url={}",
        settings.target,
        settings.base_url
    );
    let runner = EffectRunner::new(settings).context("failed to start submission engine")?;

    let mut terminal = ratatui::try_init().context("failed to initialize terminal")?;
    let result = FormApp::new(runner).run(&mut terminal);
    ratatui::restore();

    result.context("terminal ui failed")
}

struct FormApp {
    state: AppState,
    view: AppViewModel,
    runner: EffectRunner,
    running: bool,
}

impl FormApp {
    fn new(runner: EffectRunner) -> Self {
        let state = AppState::new();
        let view = state.view();
        Self {
            state,
            view,
            runner,
            running: true,
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        terminal.draw(|frame| ui::render::render(frame, &self.view))?;

        while self.running {
            let mut resized = false;
            // The poll timeout doubles as the tick that drains engine events.
            if event::poll(ui::constants::TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if let Some(action) = keys::map_key(key) {
                            self.handle_action(action);
                        }
                    }
                    Event::Resize(..) => resized = true,
                    _ => {}
                }
            }

            for msg in self.runner.drain() {
                self.dispatch_msg(msg);
            }
            self.dispatch_msg(Msg::Tick);

            if self.refresh_view() || resized {
                terminal.draw(|frame| ui::render::render(frame, &self.view))?;
            }
        }
        Ok(())
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::Quit => {
                apply_debug!("Quit requested");
                self.running = false;
            }
            UiAction::Submit => self.dispatch_msg(Msg::SubmitClicked),
            edit => {
                if let Some(text) = keys::edit_input(self.state.keyword_input(), edit) {
                    self.dispatch_msg(Msg::KeywordsChanged(text));
                }
            }
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        apply_trace!("Dispatching {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    /// Rebuild the view model if the state changed. Returns whether a redraw is due.
    fn refresh_view(&mut self) -> bool {
        if self.state.consume_dirty() {
            self.view = self.state.view();
            true
        } else {
            false
        }
    }
}
