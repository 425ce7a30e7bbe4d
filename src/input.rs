//! Key mapping for the terminal frontend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Direction, GameAction};

/// Map a key press to a player action.
pub fn map_key(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(GameAction::MoveCursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(GameAction::MoveCursor(Direction::Right)),
        KeyCode::Up | KeyCode::Char('k') => Some(GameAction::MoveCursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(GameAction::MoveCursor(Direction::Down)),
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::RotateTile),
        KeyCode::Char('n') => Some(GameAction::AdvanceLevel),
        _ => None,
    }
}

/// Quit on q, Esc, or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
