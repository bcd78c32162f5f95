//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board logic, terminal rendering, key mapping).
//!
//! # Board Dimensions
//!
//! The playfield defaults to 20 rows by 10 columns and can be configured at
//! construction time. Both axes must hold at least [`MIN_BOARD_DIMENSION`]
//! cells so the 4-wide spawn bar always fits.
//!
//! - **Rows**: indexed from 0 (top) to `height - 1` (bottom)
//! - **Columns**: indexed from 0 (left) to `width - 1` (right)
//! - **Spawn segment**: row 0, columns `width / 2 - 2 ..= width / 2 + 1`
//!
//! # Cell Values
//!
//! | Value | Piece | Color      |
//! |-------|-------|------------|
//! | 0     | -     | background |
//! | 1     | I     | cyan       |
//! | 2     | J     | blue       |
//! | 3     | L     | orange     |
//! | 4     | O     | white      |
//! | 5     | S     | green      |
//! | 6     | T     | purple     |
//! | 7     | Z     | red        |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{ColorName, Coord, Direction, PieceKind};
//!
//! let piece = PieceKind::I;
//! assert_eq!(piece.value(), 1);
//! assert_eq!(PieceKind::from_value(1), Some(PieceKind::I));
//! assert_eq!(ColorName::from_cell(piece.value()), Some(ColorName::Cyan));
//!
//! assert_eq!(Direction::Left.col_delta(), -1);
//! assert_eq!(Coord::new(0, 3).to_string(), "[0, 3]");
//! ```

use std::fmt;

/// Default board width in cells (10 columns)
pub const DEFAULT_BOARD_WIDTH: usize = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: usize = 20;

/// Smallest accepted size for either board axis
pub const MIN_BOARD_DIMENSION: usize = 4;

/// Largest accepted size for either board axis
pub const MAX_BOARD_DIMENSION: usize = 1024;

/// Number of cells in every piece footprint
pub const PIECE_CELLS: usize = 4;

/// Gravity interval: one `update()` per second
pub const DEFAULT_UPDATE_DELAY_MS: u64 = 1000;

/// Upper bound on how long the game loop waits for input before redrawing (~60 FPS)
pub const FRAME_MS: u64 = 16;

/// Default number of status messages kept by the on-screen log
pub const DEFAULT_LOG_CAPACITY: usize = 256;

/// A cell on the game board
///
/// `0` is empty, `1..=7` is a piece color index (see [`PieceKind::value`]).
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;

/// The seven piece kinds, each bound to a fixed cell value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in cell-value order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Cell value written into the grid for this kind (`1..=7`)
    pub fn value(&self) -> Cell {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Map a cell value back to its kind
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_value(6), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_value(0), None);
    /// assert_eq!(PieceKind::from_value(8), None);
    /// ```
    pub fn from_value(value: Cell) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == value)
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Symbolic color names for cell values
///
/// The mapping is fixed; renderers turn these names into concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    Background,
    Cyan,
    Blue,
    Orange,
    White,
    Green,
    Purple,
    Red,
}

impl ColorName {
    /// Color table lookup. Returns `None` for values outside `0..=7`.
    pub fn from_cell(value: Cell) -> Option<Self> {
        if value == EMPTY {
            return Some(ColorName::Background);
        }
        PieceKind::from_value(value).map(|kind| match kind {
            PieceKind::I => ColorName::Cyan,
            PieceKind::J => ColorName::Blue,
            PieceKind::L => ColorName::Orange,
            PieceKind::O => ColorName::White,
            PieceKind::S => ColorName::Green,
            PieceKind::T => ColorName::Purple,
            PieceKind::Z => ColorName::Red,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorName::Background => "background",
            ColorName::Cyan => "cyan",
            ColorName::Blue => "blue",
            ColorName::Orange => "orange",
            ColorName::White => "white",
            ColorName::Green => "green",
            ColorName::Purple => "purple",
            ColorName::Red => "red",
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column offset applied by a move in this direction
    pub fn col_delta(&self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A grid position (row 0 is the top)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset by a signed delta. Returns `None` when either axis would go negative.
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

/// Display adapter for a footprint: `[[0, 3], [0, 4]]`
pub struct Cells<'a>(pub &'a [Coord]);

impl fmt::Display for Cells<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("]")
    }
}
