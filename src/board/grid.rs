//! Immutable board snapshots.
//!
//! ## Board
//!
//! One full 225-cell picture of the grid at a specific move number. Boards
//! are never edited in place: `place` returns a fresh snapshot and leaves
//! the original untouched, so a history can hold every past position.
//!
//! Cells live in an `im::Vector`, so the snapshot after a move shares
//! structure with the snapshot before it; cloning a board is cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Cell, CellId, Player, BOARD_SIZE, CELL_COUNT};

/// An immutable snapshot of the 15×15 grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vector<Cell>,
}

impl Board {
    /// Create an all-empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: std::iter::repeat(Cell::Empty).take(CELL_COUNT).collect(),
        }
    }

    /// Get the contents of one cell.
    #[must_use]
    pub fn get(&self, cell: CellId) -> Cell {
        self.cells[cell.index()]
    }

    /// Check whether one cell is empty.
    #[must_use]
    pub fn is_empty(&self, cell: CellId) -> bool {
        self.get(cell).is_empty()
    }

    /// Return a new board with `player`'s stone on `cell`.
    ///
    /// Pure: `self` is unchanged. The caller is responsible for only
    /// placing on empty cells; the session enforces that before calling.
    ///
    /// ```
    /// use rust_gomoku::board::Board;
    /// use rust_gomoku::core::{Cell, CellId, Player};
    ///
    /// let before = Board::new();
    /// let cell = CellId::from_coords(7, 7);
    /// let after = before.place(cell, Player::X);
    ///
    /// assert_eq!(before.get(cell), Cell::Empty);
    /// assert_eq!(after.get(cell), Cell::Occupied(Player::X));
    /// ```
    #[must_use]
    pub fn place(&self, cell: CellId, player: Player) -> Self {
        Self {
            cells: self.cells.update(cell.index(), Cell::Occupied(player)),
        }
    }

    /// Check whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Count the stones on the board.
    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Iterate over all 225 cell values in flat index order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(CellId::from_coords(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
