//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the board state machine for the falling-block game.
//! It has **no dependencies** on rendering, terminals, or input devices:
//! renderers read a [`Board`] and controllers call its two mutators.
//!
//! # Module Structure
//!
//! - [`board`]: the [`Board`] state machine (spawn, move, gravity, settle)
//! - [`collision`]: pure shift check returning a [`ShiftOutcome`]
//! - [`grid`]: flat row-major cell storage
//! - [`piece`]: active piece and spawn footprint
//! - [`status`]: [`Status`] returned by every mutation, printable as a log line
//! - [`error`]: construction errors
//!
//! # Rules
//!
//! - Only the horizontal 4-cell bar spawns, centered in row 0
//! - Pieces move one column left or right; there is no rotation or drop
//! - Gravity moves the piece down one row per `update`
//! - A piece that cannot move down settles in place; no lines are cleared
//! - If the spawn segment is occupied the game is over for good
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{Board, Status};
//! use tui_blockfall_types::Direction;
//!
//! let mut board = Board::new(20, 10).unwrap();
//!
//! // First tick spawns the bar at columns 3..=6
//! let status = board.update();
//! assert_eq!(status.to_string(), "Summoned piece 1 at [[0, 3], [0, 4], [0, 5], [0, 6]]");
//!
//! board.move_piece(Direction::Left);
//! assert_eq!(board.get(0, 2), Some(1));
//! assert_eq!(board.get(0, 6), Some(0));
//!
//! // Gravity
//! assert!(matches!(board.update(), Status::MovedDown(_)));
//! ```

pub mod board;
pub mod collision;
pub mod error;
pub mod grid;
pub mod piece;
pub mod status;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Phase};
pub use collision::{check_shift, ShiftOutcome};
pub use error::BoardError;
pub use grid::Grid;
pub use piece::{spawn_footprint, ActivePiece, Footprint, NEXT_PIECE};
pub use status::Status;
