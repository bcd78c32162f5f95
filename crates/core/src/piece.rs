//! Active piece and spawn geometry
//!
//! Only the horizontal 4-cell bar has a spawn footprint. Every other kind
//! returns `None` from [`spawn_footprint`].

use arrayvec::ArrayVec;

use crate::types::{Cell, Coord, PieceKind, PIECE_CELLS};

/// Cells covered by a piece, in a fixed order
pub type Footprint = ArrayVec<Coord, PIECE_CELLS>;

/// Kind that every spawn promotes into the next-piece slot
pub const NEXT_PIECE: PieceKind = PieceKind::I;

/// The piece currently under player control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub cells: Footprint,
}

impl ActivePiece {
    pub fn new(kind: PieceKind, cells: Footprint) -> Self {
        Self { kind, cells }
    }

    pub fn value(&self) -> Cell {
        self.kind.value()
    }
}

/// Spawn footprint for `kind` on a board `width` columns wide.
///
/// The bar sits in row 0 at columns `width / 2 - 2 ..= width / 2 + 1`.
/// `width` must be at least 4.
pub fn spawn_footprint(kind: PieceKind, width: usize) -> Option<Footprint> {
    match kind {
        PieceKind::I => {
            let left = (width / 2).checked_sub(2)?;
            Some((left..left + PIECE_CELLS).map(|col| Coord::new(0, col)).collect())
        }
        _ => None,
    }
}
