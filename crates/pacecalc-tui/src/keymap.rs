//! Keyboard shortcut handling.
//!
//! Letters are free for shortcuts because the input fields only accept
//! digits and a decimal point.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Cancel,
    NextField,
    PrevField,
    CycleMode,
    ToggleUnit,
    ClearAll,
    LoadExample,
    Input(char),
    Backspace,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Cancel,
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => KeyAction::NextField,
        KeyCode::BackTab | KeyCode::Up => KeyAction::PrevField,
        KeyCode::Char('m') => KeyAction::CycleMode,
        KeyCode::Char('u') => KeyAction::ToggleUnit,
        KeyCode::Char('x') => KeyAction::ClearAll,
        KeyCode::Char('e') => KeyAction::LoadExample,
        KeyCode::Char(c @ ('0'..='9' | '.')) => KeyAction::Input(c),
        KeyCode::Backspace => KeyAction::Backspace,
        _ => KeyAction::None,
    }
}
