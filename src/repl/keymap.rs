//! Key bindings for the interactive explorer
//!
//! Emacs-style control keys with arrow/page key equivalents.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Everything a key press can ask the explorer to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert(char),
    DeleteChar,
    DeleteBeforeCursor,
    DeleteAfterCursor,
    CursorBackward,
    CursorForward,
    CursorHome,
    CursorEnd,
    Complete,
    CancelCompletion,
    Accept,
    ToggleOnlyKeys,
    ScrollUp,
    ScrollDown,
    NextScreen,
    PreviousScreen,
    ScrollTop,
    ScrollBottom,
    Abort,
}

/// Map a key event to an action; unbound keys and key releases map to `None`
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => control_action(c),
        KeyCode::Char(c) => Some(Action::Insert(c)),
        KeyCode::Backspace => Some(Action::DeleteChar),
        KeyCode::Tab => Some(Action::Complete),
        KeyCode::Enter => Some(Action::Accept),
        KeyCode::Esc => Some(Action::CancelCompletion),
        KeyCode::Up => Some(Action::ScrollUp),
        KeyCode::Down => Some(Action::ScrollDown),
        KeyCode::Left => Some(Action::CursorBackward),
        KeyCode::Right => Some(Action::CursorForward),
        KeyCode::Home => Some(Action::CursorHome),
        KeyCode::End => Some(Action::CursorEnd),
        KeyCode::PageDown => Some(Action::NextScreen),
        KeyCode::PageUp => Some(Action::PreviousScreen),
        _ => None,
    }
}

fn control_action(c: char) -> Option<Action> {
    let action = match c.to_ascii_lowercase() {
        'a' => Action::CursorHome,
        'b' => Action::CursorBackward,
        'c' => Action::Abort,
        'e' => Action::CursorEnd,
        'f' => Action::CursorForward,
        'g' => Action::CancelCompletion,
        'h' => Action::DeleteChar,
        'k' => Action::DeleteAfterCursor,
        'l' => Action::ToggleOnlyKeys,
        'n' => Action::ScrollDown,
        'o' => Action::PreviousScreen,
        'p' => Action::ScrollUp,
        'r' => Action::ScrollBottom,
        't' => Action::ScrollTop,
        'u' => Action::DeleteBeforeCursor,
        'v' => Action::NextScreen,
        _ => return None,
    };
    Some(action)
}
