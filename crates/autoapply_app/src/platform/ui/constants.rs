use std::time::Duration;

use ratatui::style::Color;

pub const TICK_INTERVAL: Duration = Duration::from_millis(75);

pub const FORM_WIDTH: u16 = 64;
pub const FORM_HEIGHT: u16 = 19;

pub const KEY_HINTS: &str = "Enter: submit   Ctrl-U: clear   Esc: quit";

pub const ACCENT: Color = Color::Blue;
pub const MUTED: Color = Color::DarkGray;
pub const INFO: Color = Color::Blue;
pub const ERROR: Color = Color::Red;
pub const SUCCESS: Color = Color::Green;
