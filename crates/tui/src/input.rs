//! Keyboard-to-command mapping.
//!
//! This module owns the key bindings so the rest of the application never
//! inspects `crossterm` events directly. Character keys that can belong in a
//! numeric field (digits and the decimal point) are forwarded as inserts;
//! the per-field filters in `state` decide whether they actually land.

use crossterm::event::{KeyCode, KeyEvent};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Cycle to the next / previous view.
    NextView,
    PrevView,
    /// Move field focus within the active view.
    FocusUp,
    FocusDown,
    FocusLeft,
    FocusRight,
    /// Append a character to the focused field, subject to its filter.
    Insert(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Empty the focused field.
    Clear,
    /// No meaningful command was produced.
    None,
}

/// Converts a raw key event into a higher-level command.
///
/// `q` never collides with field input: the numeric filters reject letters,
/// so it is safe to treat as quit unconditionally.
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Tab => KeyAction::NextView,
        KeyCode::BackTab => KeyAction::PrevView,
        KeyCode::Up => KeyAction::FocusUp,
        KeyCode::Down => KeyAction::FocusDown,
        KeyCode::Left => KeyAction::FocusLeft,
        KeyCode::Right => KeyAction::FocusRight,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Delete => KeyAction::Clear,
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '.' => KeyAction::Insert(ch),
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(map_key(key(KeyCode::Char('Q'))), KeyAction::Quit);
        assert_eq!(map_key(key(KeyCode::Esc)), KeyAction::Quit);
    }

    #[test]
    fn maps_view_cycling() {
        assert_eq!(map_key(key(KeyCode::Tab)), KeyAction::NextView);
        assert_eq!(map_key(key(KeyCode::BackTab)), KeyAction::PrevView);
    }

    #[test]
    fn maps_editing_keys() {
        assert_eq!(map_key(key(KeyCode::Char('7'))), KeyAction::Insert('7'));
        assert_eq!(map_key(key(KeyCode::Char('.'))), KeyAction::Insert('.'));
        assert_eq!(map_key(key(KeyCode::Backspace)), KeyAction::Backspace);
        assert_eq!(map_key(key(KeyCode::Delete)), KeyAction::Clear);
    }

    #[test]
    fn ignores_unbound_keys() {
        assert_eq!(map_key(key(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(map_key(key(KeyCode::Enter)), KeyAction::None);
        assert_eq!(map_key(key(KeyCode::F(1))), KeyAction::None);
    }
}
