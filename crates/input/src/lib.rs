//! Terminal input module (board-facing).
//!
//! Maps `crossterm` key events into [`KeyIntent`]s. The controller never
//! touches the board itself: the game loop turns `KeyIntent::Move` into a
//! `Board::move_piece` call and handles quit/retry.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{key_label, map_key, KeyIntent};
