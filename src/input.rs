//! Input module - keyboard mapping for game controls

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to an engine command
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(Command::SoftDrop),

        // Rotation (clockwise only)
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(Command::Rotate),

        // Hard drop
        KeyCode::Char(' ') => Some(Command::HardDrop),

        _ => None,
    }
}

/// Restart key: resets the session (primarily after game over)
pub fn is_reset(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
