//! Key mapping from terminal events to controller intents.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the game loop should do with a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// Shift the active piece
    Move(Direction),
    /// Accepted and logged, but has no effect on the board
    Inert,
    Quit,
    /// Start a new board (only honored once the game is over)
    Retry,
    /// Not bound; shown as a warning
    Unknown,
}

/// Map keyboard input to an intent.
///
/// Up/down and the vim/wasd vertical keys are accepted but inert: the board
/// has no rotation or drop.
pub fn map_key(key: KeyEvent) -> KeyIntent {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyIntent::Quit;
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => {
            KeyIntent::Move(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => {
            KeyIntent::Move(Direction::Right)
        }

        // Accepted without effect
        KeyCode::Up
        | KeyCode::Down
        | KeyCode::Char('w')
        | KeyCode::Char('s')
        | KeyCode::Char('j')
        | KeyCode::Char('k') => KeyIntent::Inert,

        KeyCode::Char('q') => KeyIntent::Quit,
        KeyCode::Char('r') => KeyIntent::Retry,

        _ => KeyIntent::Unknown,
    }
}

/// Short printable name for a key, used in log lines.
pub fn key_label(key: KeyEvent) -> String {
    let base = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        other => format!("{other:?}"),
    };

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        format!("Ctrl+{base}")
    } else {
        base
    }
}
