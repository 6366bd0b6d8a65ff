use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Insert(char),
    Backspace,
    ClearInput,
    Submit,
    Quit,
}

pub fn map_key(key: KeyEvent) -> Option<UiAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(UiAction::Quit),
        KeyCode::Char('u') if ctrl => Some(UiAction::ClearInput),
        KeyCode::Char(c) if !ctrl && !alt => Some(UiAction::Insert(c)),
        KeyCode::Esc => Some(UiAction::Quit),
        KeyCode::Enter => Some(UiAction::Submit),
        KeyCode::Backspace => Some(UiAction::Backspace),
        _ => None,
    }
}

/// Apply an editing action to the current input. `None` when nothing changes.
pub fn edit_input(current: &str, action: UiAction) -> Option<String> {
    match action {
        UiAction::Insert(c) => {
            let mut text = current.to_owned();
            text.push(c);
            Some(text)
        }
        UiAction::Backspace if !current.is_empty() => {
            let mut text = current.to_owned();
            text.pop();
            Some(text)
        }
        UiAction::ClearInput if !current.is_empty() => Some(String::new()),
        _ => None,
    }
}
