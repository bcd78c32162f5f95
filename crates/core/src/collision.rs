//! Collision check for shifting a footprint.
//!
//! [`check_shift`] is pure: it reads the grid and returns a tagged outcome.
//! The board applies accepted shifts separately.

use crate::grid::Grid;
use crate::piece::Footprint;
use crate::types::Coord;

/// Result of trying to shift a footprint by one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftOutcome {
    /// Every shifted cell is free; carries the new footprint
    Accepted(Footprint),
    /// A shifted cell left the board through the side
    RejectedWall,
    /// A shifted cell dropped below the last row
    RejectedFloor,
    /// A shifted cell outside the current footprint is occupied
    RejectedPiece,
}

/// Shift every cell of `footprint` by `(d_row, d_col)` and check the result.
///
/// Cells are checked in footprint order and the first failing cell decides the
/// outcome. Bounds are checked for every cell. Occupancy is only checked for
/// cells outside the current footprint, since those are about to be vacated.
pub fn check_shift(grid: &Grid, footprint: &[Coord], d_row: isize, d_col: isize) -> ShiftOutcome {
    let mut next = Footprint::new();

    for cell in footprint {
        let Some(shifted) = cell.offset(d_row, d_col) else {
            return ShiftOutcome::RejectedWall;
        };
        if shifted.col >= grid.width() {
            return ShiftOutcome::RejectedWall;
        }
        if !grid.in_bounds(shifted) {
            return ShiftOutcome::RejectedFloor;
        }
        if !footprint.contains(&shifted) && grid.is_occupied(shifted) {
            return ShiftOutcome::RejectedPiece;
        }
        next.push(shifted);
    }

    ShiftOutcome::Accepted(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(row: usize, left: usize) -> Footprint {
        (left..left + 4).map(|col| Coord::new(row, col)).collect()
    }

    fn place(grid: &mut Grid, cells: &[Coord], value: u8) {
        for c in cells {
            grid.set(*c, value);
        }
    }

    #[test]
    fn shift_within_own_footprint_is_accepted() {
        let mut grid = Grid::new(20, 10);
        let cells = bar(0, 3);
        place(&mut grid, &cells, 1);

        match check_shift(&grid, &cells, 0, -1) {
            ShiftOutcome::Accepted(next) => assert_eq!(next, bar(0, 2)),
            other => panic!("expected accepted, got {other:?}"),
        }
    }

    #[test]
    fn left_wall_rejects() {
        let grid = Grid::new(20, 10);
        assert_eq!(check_shift(&grid, &bar(0, 0), 0, -1), ShiftOutcome::RejectedWall);
    }

    #[test]
    fn right_wall_rejects() {
        let grid = Grid::new(20, 10);
        assert_eq!(check_shift(&grid, &bar(0, 6), 0, 1), ShiftOutcome::RejectedWall);
    }

    #[test]
    fn floor_rejects() {
        let grid = Grid::new(20, 10);
        assert_eq!(check_shift(&grid, &bar(19, 3), 1, 0), ShiftOutcome::RejectedFloor);
    }

    #[test]
    fn occupied_neighbour_rejects() {
        let mut grid = Grid::new(20, 10);
        let cells = bar(5, 3);
        place(&mut grid, &cells, 1);
        grid.set(Coord::new(5, 2), 4);
        assert_eq!(check_shift(&grid, &cells, 0, -1), ShiftOutcome::RejectedPiece);

        grid.set(Coord::new(6, 5), 4);
        assert_eq!(check_shift(&grid, &cells, 1, 0), ShiftOutcome::RejectedPiece);
    }

    #[test]
    fn check_does_not_mutate() {
        let mut grid = Grid::new(8, 8);
        let cells = bar(3, 2);
        place(&mut grid, &cells, 1);
        let before = grid.clone();
        assert!(matches!(
            check_shift(&grid, &cells, 1, 0),
            ShiftOutcome::Accepted(_)
        ));
        assert_eq!(grid, before);
    }
}
