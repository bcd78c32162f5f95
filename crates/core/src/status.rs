//! Outcome of a board mutation, rendered as a log line.

use std::fmt;

use crate::piece::Footprint;
use crate::types::{Cells, Direction, PieceKind};

/// What a call to `move_piece` or `update` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Nothing happened (game over, or no piece to move)
    Ignored,
    Moved {
        direction: Direction,
        cells: Footprint,
    },
    /// Carries the unchanged footprint
    BlockedByWall(Footprint),
    BlockedByPiece,
    Spawned {
        kind: PieceKind,
        cells: Footprint,
    },
    /// Spawn segment was occupied; the game-over latch is now set
    GameOver,
    MovedDown(Footprint),
    Settled,
}

impl Status {
    /// True when there is nothing worth logging
    pub fn is_empty(&self) -> bool {
        matches!(self, Status::Ignored)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ignored => Ok(()),
            Status::Moved { direction, cells } => {
                write!(f, "Piece moved {} to {}", direction.as_str(), Cells(cells))
            }
            Status::BlockedByWall(cells) => write!(f, "Move blocked by wall {}", Cells(cells)),
            Status::BlockedByPiece => f.write_str("Move blocked by piece"),
            Status::Spawned { kind, cells } => {
                write!(f, "Summoned piece {} at {}", kind.value(), Cells(cells))
            }
            Status::GameOver => f.write_str("Spawn blocked, game over"),
            Status::MovedDown(cells) => write!(f, "Piece moved down to {}", Cells(cells)),
            Status::Settled => f.write_str("Piece settled, summoning new piece"),
        }
    }
}
