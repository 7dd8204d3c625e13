//! Win detection over a single board snapshot.
//!
//! A player wins by occupying five consecutive cells along one of four
//! directions: horizontal, vertical, down-right diagonal, or up-right
//! diagonal. Detection is pure brute force: every contiguous run of
//! exactly five cells inside the grid is examined once per direction,
//! and the first run held entirely by one player decides. A reachable
//! position holds at most one winning player, so enumeration order can
//! only change which of that player's lines is reported, never the
//! result.
//!
//! These functions take any snapshot, not just the latest; time travel
//! re-evaluates them against whichever board the cursor selects.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, CellId, Player, BOARD_SIZE, WIN_LENGTH};

use super::grid::Board;

/// A winning line: five consecutive cells held by one player.
///
/// `cells` are listed in scan order for their direction: left to right for
/// horizontal and both diagonals, top to bottom for vertical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    /// The player holding all five cells.
    pub player: Player,
    /// The five cells of the line.
    pub cells: [CellId; WIN_LENGTH],
}

/// Find the first winning line on the board, if any.
///
/// Scans horizontal runs first, then vertical, then down-right diagonals,
/// then up-right diagonals.
#[must_use]
pub fn winning_line(board: &Board) -> Option<Run> {
    // Horizontal: anchored at the leftmost cell of each run.
    for row in 0..BOARD_SIZE {
        for col in 0..=BOARD_SIZE - WIN_LENGTH {
            let cells = std::array::from_fn(|i| CellId::from_coords(row, col + i));
            if let Some(run) = check_run(board, cells) {
                return Some(run);
            }
        }
    }

    // Vertical: anchored at the topmost cell.
    for col in 0..BOARD_SIZE {
        for row in 0..=BOARD_SIZE - WIN_LENGTH {
            let cells = std::array::from_fn(|i| CellId::from_coords(row + i, col));
            if let Some(run) = check_run(board, cells) {
                return Some(run);
            }
        }
    }

    // Down-right diagonal: anchored at the top-left cell.
    for row in 0..=BOARD_SIZE - WIN_LENGTH {
        for col in 0..=BOARD_SIZE - WIN_LENGTH {
            let cells = std::array::from_fn(|i| CellId::from_coords(row + i, col + i));
            if let Some(run) = check_run(board, cells) {
                return Some(run);
            }
        }
    }

    // Up-right diagonal: anchored at the bottom-left cell, so the anchor
    // row starts high enough that the run stays on the board.
    for row in WIN_LENGTH - 1..BOARD_SIZE {
        for col in 0..=BOARD_SIZE - WIN_LENGTH {
            let cells = std::array::from_fn(|i| CellId::from_coords(row - i, col + i));
            if let Some(run) = check_run(board, cells) {
                return Some(run);
            }
        }
    }

    None
}

/// Find the winning player on the board, if any.
///
/// ```
/// use rust_gomoku::board::{winner, Board};
/// use rust_gomoku::core::{CellId, Player};
///
/// let mut board = Board::new();
/// for col in 0..4 {
///     board = board.place(CellId::from_coords(0, col), Player::X);
/// }
/// assert_eq!(winner(&board), None);
///
/// board = board.place(CellId::from_coords(0, 4), Player::X);
/// assert_eq!(winner(&board), Some(Player::X));
/// ```
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|run| run.player)
}

/// Check one candidate run: all five cells must hold the same player.
fn check_run(board: &Board, cells: [CellId; WIN_LENGTH]) -> Option<Run> {
    let player = board.get(cells[0]).player()?;
    let uniform = cells[1..]
        .iter()
        .all(|&cell| board.get(cell) == Cell::Occupied(player));
    uniform.then_some(Run { player, cells })
}
