//! Player identification and cell contents.
//!
//! ## Player
//!
//! The two players of a connect-five game, X and O. X always moves first.
//!
//! ## Cell
//!
//! The contents of one grid position: empty, or a stone placed by a player.
//! Keeping `Cell` separate from `Player` means player-typed values (active
//! player, winner) can never hold "empty".

use serde::{Deserialize, Serialize};

/// One of the two players. X moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The first player.
    X,
    /// The second player.
    O,
}

impl Player {
    /// Get the other player.
    ///
    /// ```
    /// use rust_gomoku::core::Player;
    ///
    /// assert_eq!(Player::X.opponent(), Player::O);
    /// assert_eq!(Player::O.opponent(), Player::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Contents of one grid cell.
///
/// Starts `Empty` and transitions at most once, to `Occupied`, when a move
/// places a stone there. Cells never revert within a single snapshot;
/// "undo" is done by selecting an earlier snapshot, not by clearing cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No stone placed here.
    #[default]
    Empty,
    /// A stone placed by the given player.
    Occupied(Player),
}

impl Cell {
    /// Check whether this cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Get the owning player, if any.
    ///
    /// ```
    /// use rust_gomoku::core::{Cell, Player};
    ///
    /// assert_eq!(Cell::Empty.player(), None);
    /// assert_eq!(Cell::Occupied(Player::O).player(), Some(Player::O));
    /// ```
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Occupied(player) => write!(f, "{}", player),
        }
    }
}
