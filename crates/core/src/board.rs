//! Board module - the falling-block state machine
//!
//! The board owns the grid, the active piece, the next/held piece slots, the
//! score and the game-over latch. `move_piece` and `update` are the only
//! mutators; everything else is a read accessor for renderers.
//!
//! The active piece is always written into the grid, so the grid reflects
//! exactly what should be drawn.
//!
//! ```text
//! Spawning --update--> Falling --update (blocked)--> Spawning
//!     |
//!     +--update (spawn row occupied)--> GameOver (terminal)
//! ```

use std::fmt;

use tracing::{debug, info, warn};

use crate::collision::{check_shift, ShiftOutcome};
use crate::error::BoardError;
use crate::grid::Grid;
use crate::piece::{spawn_footprint, ActivePiece, Footprint, NEXT_PIECE};
use crate::status::Status;
use crate::types::{
    Cell, ColorName, Coord, Direction, PieceKind, EMPTY, MAX_BOARD_DIMENSION, MIN_BOARD_DIMENSION,
};

/// Lifecycle phase derived from board state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No active piece; the next `update` spawns one
    Spawning,
    /// An active piece is on the grid
    Falling,
    /// Terminal
    GameOver,
}

/// The game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    grid: Grid,
    active: Option<ActivePiece>,
    next: PieceKind,
    held: Option<PieceKind>,
    score: u32,
    game_over: bool,
}

impl Board {
    /// Create an empty board with `height` rows and `width` columns.
    ///
    /// Fails when either axis is smaller than [`MIN_BOARD_DIMENSION`] or
    /// larger than [`MAX_BOARD_DIMENSION`].
    pub fn new(height: usize, width: usize) -> Result<Self, BoardError> {
        if height < MIN_BOARD_DIMENSION || width < MIN_BOARD_DIMENSION {
            return Err(BoardError::TooSmall { height, width });
        }
        if height > MAX_BOARD_DIMENSION || width > MAX_BOARD_DIMENSION {
            return Err(BoardError::TooLarge { height, width });
        }

        Ok(Self {
            grid: Grid::new(height, width),
            active: None,
            next: NEXT_PIECE,
            held: None,
            score: 0,
            game_over: false,
        })
    }

    /// Create a board from fractional dimensions, truncating toward zero.
    ///
    /// Negative and non-finite sizes are treated as zero and rejected.
    pub fn from_size(height: f64, width: f64) -> Result<Self, BoardError> {
        Self::new(truncate_dimension(height), truncate_dimension(width))
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Cell value at `(row, col)`. Returns None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row, col)
    }

    /// Rows from top to bottom, for rendering
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.grid.rows()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    /// Cell value of the active piece, `0` when there is none
    pub fn active_value(&self) -> Cell {
        self.active.as_ref().map_or(EMPTY, ActivePiece::value)
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn held_piece(&self) -> Option<PieceKind> {
        self.held
    }

    /// Color table lookup for a cell value
    pub fn color_name(&self, value: Cell) -> Option<ColorName> {
        ColorName::from_cell(value)
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.active.is_some() {
            Phase::Falling
        } else {
            Phase::Spawning
        }
    }

    /// Shift the active piece one column left or right.
    ///
    /// Blocked moves leave the board untouched and report why.
    pub fn move_piece(&mut self, direction: Direction) -> Status {
        if self.game_over {
            return Status::Ignored;
        }
        let Some(active) = self.active.as_ref() else {
            return Status::Ignored;
        };

        let current = active.cells.clone();
        match check_shift(&self.grid, &current, 0, direction.col_delta()) {
            ShiftOutcome::Accepted(next) => {
                self.relocate(next.clone());
                debug!(direction = direction.as_str(), "piece moved");
                Status::Moved {
                    direction,
                    cells: next,
                }
            }
            ShiftOutcome::RejectedWall | ShiftOutcome::RejectedFloor => {
                debug!(direction = direction.as_str(), "move blocked by wall");
                Status::BlockedByWall(current)
            }
            ShiftOutcome::RejectedPiece => {
                debug!(direction = direction.as_str(), "move blocked by piece");
                Status::BlockedByPiece
            }
        }
    }

    /// Advance one gravity tick: spawn when there is no active piece,
    /// otherwise drop the piece one row or settle it.
    pub fn update(&mut self) -> Status {
        if self.game_over {
            return Status::Ignored;
        }

        match self.active.as_ref() {
            None => self.spawn(),
            Some(active) => {
                let current = active.cells.clone();
                self.fall(&current)
            }
        }
    }

    fn spawn(&mut self) -> Status {
        let kind = std::mem::replace(&mut self.next, NEXT_PIECE);

        let Some(cells) = spawn_footprint(kind, self.width()) else {
            warn!(kind = kind.as_str(), "no spawn footprint for piece kind");
            return Status::Ignored;
        };

        if cells.iter().any(|&c| self.grid.is_occupied(c)) {
            self.game_over = true;
            info!(score = self.score, "spawn blocked, game over");
            return Status::GameOver;
        }

        for &c in &cells {
            self.grid.set(c, kind.value());
        }
        self.active = Some(ActivePiece::new(kind, cells.clone()));
        debug!(kind = kind.as_str(), "piece spawned");

        Status::Spawned { kind, cells }
    }

    fn fall(&mut self, current: &[Coord]) -> Status {
        match check_shift(&self.grid, current, 1, 0) {
            ShiftOutcome::Accepted(next) => {
                self.relocate(next.clone());
                Status::MovedDown(next)
            }
            _ => {
                // Cells stay in the grid as settled blocks.
                self.active = None;
                debug!("piece settled");
                Status::Settled
            }
        }
    }

    /// Clear the old footprint, then write the piece at `next`.
    fn relocate(&mut self, next: Footprint) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let value = active.kind.value();

        for &c in &active.cells {
            self.grid.set(c, EMPTY);
        }
        for &c in &next {
            self.grid.set(c, value);
        }
        active.cells = next;
    }
}

fn truncate_dimension(v: f64) -> usize {
    if v.is_finite() && v > 0.0 {
        v.trunc() as usize
    } else {
        0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
