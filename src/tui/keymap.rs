//! Key bindings
//!
//! Translates crossterm key events into [`TuiInput`]. The selected row's mode
//! decides whether printable keys are commands or draft text.

use super::input::InputOperation;
use crate::tui_state::TuiInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn map_key(key: KeyEvent, editing: bool) -> Option<TuiInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Bindings shared by both modes
    match key.code {
        KeyCode::Char('c') if ctrl => return Some(TuiInput::Quit),
        KeyCode::F(1) => return Some(TuiInput::ToggleHelp),
        KeyCode::Up => return Some(TuiInput::NavigateUp),
        KeyCode::Down => return Some(TuiInput::NavigateDown),
        KeyCode::Char('p') if ctrl => return Some(TuiInput::NavigateUp),
        KeyCode::Char('n') if ctrl => return Some(TuiInput::NavigateDown),
        KeyCode::PageUp => return Some(TuiInput::PageUp),
        KeyCode::PageDown => return Some(TuiInput::PageDown),
        _ => {}
    }

    if editing {
        map_editing_key(key.code, ctrl)
    } else {
        map_viewing_key(key.code)
    }
}

fn map_viewing_key(code: KeyCode) -> Option<TuiInput> {
    let input = match code {
        KeyCode::Esc | KeyCode::Char('q') => TuiInput::Quit,
        KeyCode::Char('?') => TuiInput::ToggleHelp,
        KeyCode::Char('k') => TuiInput::NavigateUp,
        KeyCode::Char('j') => TuiInput::NavigateDown,
        KeyCode::Char('g') | KeyCode::Home => TuiInput::First,
        KeyCode::Char('G') | KeyCode::End => TuiInput::Last,
        KeyCode::Char('e') | KeyCode::Enter => TuiInput::ToggleEditMode,
        KeyCode::Char('d') | KeyCode::Delete => TuiInput::Delete,
        _ => return None,
    };
    Some(input)
}

fn map_editing_key(code: KeyCode, ctrl: bool) -> Option<TuiInput> {
    let op = match code {
        KeyCode::Enter => return Some(TuiInput::Confirm),
        KeyCode::Esc => return Some(TuiInput::ToggleEditMode),
        KeyCode::Char('x') if ctrl => return Some(TuiInput::Delete),
        KeyCode::Char('a') if ctrl => InputOperation::MoveCursorToStart,
        KeyCode::Char('e') if ctrl => InputOperation::MoveCursorToEnd,
        KeyCode::Char('b') if ctrl => InputOperation::MoveCursorLeft,
        KeyCode::Char('f') if ctrl => InputOperation::MoveCursorRight,
        KeyCode::Char('d') if ctrl => InputOperation::DeleteCharForward,
        KeyCode::Char('h') if ctrl => InputOperation::DeleteCharBackward,
        KeyCode::Char('k') if ctrl => InputOperation::KillLine,
        KeyCode::Char('y') if ctrl => InputOperation::Yank,
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(c) => InputOperation::InsertChar(c),
        KeyCode::Home => InputOperation::MoveCursorToStart,
        KeyCode::End => InputOperation::MoveCursorToEnd,
        KeyCode::Left => InputOperation::MoveCursorLeft,
        KeyCode::Right => InputOperation::MoveCursorRight,
        KeyCode::Delete => InputOperation::DeleteCharForward,
        KeyCode::Backspace => InputOperation::DeleteCharBackward,
        _ => return None,
    };
    Some(TuiInput::Edit(op))
}
