//! Grid module - flat storage for cell values
//!
//! The grid is `height x width` cells in row-major order (`row * width + col`).
//! It has no notion of pieces; it only stores values and answers bounds and
//! occupancy queries. Dimensions are validated by [`crate::Board`].

use crate::types::{Cell, Coord, EMPTY};

/// Row-major grid of cell values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a zeroed grid. Callers check `height * width` fits first.
    pub(crate) fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![EMPTY; height * width],
        }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get cell at `(row, col)`. Returns None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at `coord`. Returns false if out of bounds.
    pub fn set(&mut self, coord: Coord, value: Cell) -> bool {
        match self.index(coord.row, coord.col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Row and column both inside the grid
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// Within bounds and non-empty
    pub fn is_occupied(&self, coord: Coord) -> bool {
        matches!(self.get(coord.row, coord.col), Some(v) if v != EMPTY)
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // A zero-width grid holds no cells, so any chunk size yields no rows.
        self.cells.chunks_exact(self.width.max(1))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&v| v == EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major() {
        let grid = Grid::new(20, 10);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(0, 9), Some(9));
        assert_eq!(grid.index(1, 0), Some(10));
        assert_eq!(grid.index(19, 9), Some(199));
        assert_eq!(grid.index(20, 0), None);
        assert_eq!(grid.index(0, 10), None);
    }

    #[test]
    fn set_and_get() {
        let mut grid = Grid::new(6, 5);
        assert!(grid.set(Coord::new(2, 4), 3));
        assert_eq!(grid.get(2, 4), Some(3));
        assert!(grid.is_occupied(Coord::new(2, 4)));
        assert!(!grid.set(Coord::new(6, 0), 3));
        assert!(!grid.is_occupied(Coord::new(6, 0)));
    }

    #[test]
    fn rows_are_width_sized() {
        let mut grid = Grid::new(4, 7);
        grid.set(Coord::new(3, 6), 1);
        let rows: Vec<&[Cell]> = grid.rows().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.len() == 7));
        assert_eq!(rows[3][6], 1);
    }

    #[test]
    fn zero_width_has_no_rows() {
        let grid = Grid::new(3, 0);
        assert_eq!(grid.rows().count(), 0);
        assert!(!grid.in_bounds(Coord::new(0, 0)));
    }
}
