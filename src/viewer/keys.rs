//! Keyboard handling for the viewer.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::ViewerState;

/// Result of handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Continue,
    Quit,
}

/// Apply a key press to the scroll state.
pub fn handle_key(state: &mut ViewerState, key: KeyEvent) -> KeyResult {
    if key.kind == KeyEventKind::Release {
        return KeyResult::Continue;
    }

    let page = state.height.saturating_sub(1).max(1);
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return KeyResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyResult::Quit
        }
        KeyCode::Down | KeyCode::Char('j') => state.scroll_down(state.step),
        KeyCode::Up | KeyCode::Char('k') => state.scroll_up(state.step),
        KeyCode::PageDown | KeyCode::Char(' ') => state.scroll_down(page),
        KeyCode::PageUp | KeyCode::Char('b') => state.scroll_up(page),
        KeyCode::Home | KeyCode::Char('g') => state.offset = 0,
        KeyCode::End | KeyCode::Char('G') => state.offset = state.max_offset(),
        _ => {}
    }
    KeyResult::Continue
}
