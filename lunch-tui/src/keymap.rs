//! Key bindings
//!
//! | Command | Keys |
//! |---------|------|
//! | Quit | Ctrl+C |
//! | Cancel | Esc |
//! | Confirm | Enter |
//! | FocusNext | Down, Tab |
//! | FocusPrev | Up, Shift+Tab |
//!
//! Everything else is an edit for whichever input has focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Cancel,
    Confirm,
    FocusNext,
    FocusPrev,
    Edit(KeyEvent),
}

impl From<KeyEvent> for Command {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
            KeyCode::Esc => Command::Cancel,
            KeyCode::Enter => Command::Confirm,
            KeyCode::Down | KeyCode::Tab => Command::FocusNext,
            KeyCode::Up | KeyCode::BackTab => Command::FocusPrev,
            _ => Command::Edit(key),
        }
    }
}
