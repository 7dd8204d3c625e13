//! Grid geometry: board constants and cell identification.
//!
//! ## Indexing
//!
//! The grid is a fixed 15×15 square addressed by a flat index:
//!
//! - `index = row * 15 + col`, with row and col in `[0, 15)`
//! - valid indices are `[0, 225)`
//!
//! `CellId` wraps that flat index. Both constructors assert range, so a
//! `CellId` built through them always addresses a real cell.
//!
//! ## Usage
//!
//! ```
//! use rust_gomoku::core::{CellId, BOARD_SIZE};
//!
//! let center = CellId::from_coords(7, 7);
//! assert_eq!(center.index(), 7 * BOARD_SIZE + 7);
//! assert_eq!(center.row(), 7);
//! assert_eq!(center.col(), 7);
//! ```

use serde::{Deserialize, Serialize};

/// Side length of the square grid.
pub const BOARD_SIZE: usize = 15;

/// Number of consecutive same-player stones that wins.
pub const WIN_LENGTH: usize = 5;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Identifier for one cell of the grid, as a flat `row * 15 + col` index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId(pub u16);

impl CellId {
    /// Create a cell ID from a flat index.
    ///
    /// Panics if `index` is not below `CELL_COUNT`.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        assert!((index as usize) < CELL_COUNT, "Cell index out of range");
        Self(index)
    }

    /// Create a cell ID from row and column coordinates.
    ///
    /// Panics if either coordinate is not below `BOARD_SIZE`.
    ///
    /// ```
    /// use rust_gomoku::core::CellId;
    ///
    /// assert_eq!(CellId::from_coords(0, 0), CellId::new(0));
    /// assert_eq!(CellId::from_coords(1, 0), CellId::new(15));
    /// assert_eq!(CellId::from_coords(14, 14), CellId::new(224));
    /// ```
    #[must_use]
    pub const fn from_coords(row: usize, col: usize) -> Self {
        assert!(row < BOARD_SIZE, "Row out of range");
        assert!(col < BOARD_SIZE, "Column out of range");
        Self((row * BOARD_SIZE + col) as u16)
    }

    /// Get the flat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get the row coordinate (0-based, top row first).
    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Get the column coordinate (0-based, leftmost first).
    #[must_use]
    pub const fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Iterate over every cell of the grid in flat index order.
    ///
    /// ```
    /// use rust_gomoku::core::{CellId, CELL_COUNT};
    ///
    /// let cells: Vec<_> = CellId::all().collect();
    /// assert_eq!(cells.len(), CELL_COUNT);
    /// assert_eq!(cells[0], CellId::new(0));
    /// assert_eq!(cells[16], CellId::from_coords(1, 1));
    /// ```
    pub fn all() -> impl Iterator<Item = CellId> {
        (0..CELL_COUNT as u16).map(CellId)
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(BOARD_SIZE, 15);
        assert_eq!(WIN_LENGTH, 5);
        assert_eq!(CELL_COUNT, 225);
    }

    #[test]
    fn test_flat_index_round_trip() {
        for cell in CellId::all() {
            assert_eq!(CellId::from_coords(cell.row(), cell.col()), cell);
            assert_eq!(cell.row() * BOARD_SIZE + cell.col(), cell.index());
        }
    }

    #[test]
    fn test_corner_coordinates() {
        assert_eq!(CellId::new(0).row(), 0);
        assert_eq!(CellId::new(0).col(), 0);
        assert_eq!(CellId::new(14).row(), 0);
        assert_eq!(CellId::new(14).col(), 14);
        assert_eq!(CellId::new(210).row(), 14);
        assert_eq!(CellId::new(210).col(), 0);
        assert_eq!(CellId::new(224).row(), 14);
        assert_eq!(CellId::new(224).col(), 14);
    }

    #[test]
    fn test_all_covers_grid_in_order() {
        let cells: Vec<_> = CellId::all().collect();
        assert_eq!(cells.len(), CELL_COUNT);
        assert_eq!(cells.first(), Some(&CellId::new(0)));
        assert_eq!(cells.last(), Some(&CellId::new(224)));
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.index(), i);
        }
    }

    #[test]
    #[should_panic(expected = "Cell index out of range")]
    fn test_new_rejects_out_of_range() {
        let _ = CellId::new(225);
    }

    #[test]
    #[should_panic(expected = "Row out of range")]
    fn test_from_coords_rejects_bad_row() {
        let _ = CellId::from_coords(15, 0);
    }

    #[test]
    #[should_panic(expected = "Column out of range")]
    fn test_from_coords_rejects_bad_col() {
        let _ = CellId::from_coords(0, 15);
    }

    #[test]
    fn test_display() {
        assert_eq!(CellId::from_coords(7, 3).to_string(), "(7, 3)");
        assert_eq!(CellId::new(0).to_string(), "(0, 0)");
    }

    #[test]
    fn test_serialization_round_trip() {
        let cell = CellId::from_coords(9, 11);
        let json = serde_json::to_string(&cell).unwrap();
        let back: CellId = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, back);
    }
}
