#![forbid(unsafe_code)]

//! Fixed key-to-command table.
//!
//! One decoded command per key event. Unrecognized input becomes
//! [`Command::Unknown`] for diagnostic display, never an error.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Navigation commands the event loop understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// End the loop after the current frame.
    Quit,
    /// Flip the cursor node's open flag.
    ToggleOpen,
    /// Previous sibling.
    MoveUp,
    /// Next sibling.
    MoveDown,
    /// Move to the parent node.
    IntoParent,
    /// Move to the first structural child.
    IntoChild,
    /// Anything else, carried along for diagnostics.
    Unknown(String),
}

/// Map one key event through the fixed table.
#[must_use]
pub fn decode(key: &KeyEvent) -> Command {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Command::Quit;
    }
    match key.code {
        KeyCode::Char('q') => Command::Quit,
        KeyCode::Enter | KeyCode::Char(' ') => Command::ToggleOpen,
        KeyCode::Up | KeyCode::Char('k') => Command::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Command::MoveDown,
        KeyCode::Left | KeyCode::Char('h') => Command::IntoParent,
        KeyCode::Right | KeyCode::Char('l') => Command::IntoChild,
        other => Command::Unknown(format!("{other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn every_listed_binding_maps() {
        assert_eq!(decode(&key(KeyCode::Char('q'))), Command::Quit);
        assert_eq!(decode(&key(KeyCode::Enter)), Command::ToggleOpen);
        assert_eq!(decode(&key(KeyCode::Char(' '))), Command::ToggleOpen);
        assert_eq!(decode(&key(KeyCode::Up)), Command::MoveUp);
        assert_eq!(decode(&key(KeyCode::Char('k'))), Command::MoveUp);
        assert_eq!(decode(&key(KeyCode::Down)), Command::MoveDown);
        assert_eq!(decode(&key(KeyCode::Char('j'))), Command::MoveDown);
        assert_eq!(decode(&key(KeyCode::Left)), Command::IntoParent);
        assert_eq!(decode(&key(KeyCode::Char('h'))), Command::IntoParent);
        assert_eq!(decode(&key(KeyCode::Right)), Command::IntoChild);
        assert_eq!(decode(&key(KeyCode::Char('l'))), Command::IntoChild);
    }

    #[test]
    fn ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(decode(&event), Command::Quit);
    }

    #[test]
    fn unrecognized_keys_pass_through() {
        match decode(&key(KeyCode::Char('z'))) {
            Command::Unknown(text) => assert!(text.contains('z')),
            other => panic!("expected Unknown, got {other:?}"),
        }
    }
}
