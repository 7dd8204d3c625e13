//! The game session: canonical history, cursor, and derived outputs.
//!
//! ## GameSession
//!
//! Owns the ordered history of board snapshots plus a cursor selecting the
//! live one. Everything else a consumer renders (active player, winner,
//! status line, move list) is derived from those two fields on demand and
//! never stored, so no derived value can drift out of sync.
//!
//! ## Time travel
//!
//! `jump_to` moves only the cursor; history contents are untouched, so
//! jumping around is free. The first move played from an earlier snapshot
//! discards everything after the cursor before appending, which is how an
//! abandoned future disappears.
//!
//! ## Sequencing
//!
//! The session is single threaded: both mutators take `&mut self`, so no
//! observer can read a half-updated history/cursor pair.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::board::{winner, winning_line, Board, Run};
use crate::core::{CellId, Player};

/// Progress of the game at the live snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No winner yet; the active player may move.
    InProgress,
    /// The given player holds five in a row. Terminal for further moves,
    /// not for time travel.
    Won(Player),
}

impl GameStatus {
    /// Get the winning player, if the game is won.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(player),
        }
    }
}

/// One entry of the displayable move list.
///
/// Carries no game state of its own; it exists so a UI can render one
/// jump button per history entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub index: usize,
    /// Display label: `"game start"` for entry 0, `"move #m"` after.
    pub label: String,
}

/// A complete connect-five game with full history navigation.
///
/// The history always holds at least one snapshot: entry 0 is the all-empty
/// board, entry k the board right after the k-th move. The cursor stays
/// within `[0, history length)`; the player to move is X when the cursor is
/// even and O when it is odd.
///
/// ```
/// use rust_gomoku::core::{CellId, Player};
/// use rust_gomoku::session::GameSession;
///
/// let mut session = GameSession::new();
/// assert_eq!(session.active_player(), Player::X);
///
/// assert!(session.try_play(CellId::from_coords(7, 7)));
/// assert_eq!(session.active_player(), Player::O);
///
/// // Same cell again: refused, nothing changes.
/// assert!(!session.try_play(CellId::from_coords(7, 7)));
/// assert_eq!(session.history_len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Snapshots in move order; entry 0 is the all-empty board.
    history: Vector<Board>,
    /// Index of the live snapshot.
    cursor: usize,
}

impl GameSession {
    /// Create a session at the start of a new game.
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: Vector::unit(Board::new()),
            cursor: 0,
        }
    }

    /// Apply the active player's move to `cell`.
    ///
    /// Refused with no state change, returning `false`, when the live
    /// snapshot already has a winner or `cell` is occupied on it. Both are
    /// expected inputs (stale clicks, clicks on stones), not errors.
    ///
    /// On success the history after the cursor is discarded, the new
    /// snapshot is appended, the cursor advances to it, and `true` comes
    /// back. This is the only operation that changes history contents.
    #[instrument(skip(self))]
    pub fn try_play(&mut self, cell: CellId) -> bool {
        if self.winner().is_some() {
            debug!(%cell, "move refused: game already won");
            return false;
        }
        if !self.board().is_empty(cell) {
            debug!(%cell, "move refused: cell occupied");
            return false;
        }

        let player = self.active_player();
        let next = self.board().place(cell, player);
        self.history.truncate(self.cursor + 1);
        self.history.push_back(next);
        self.cursor = self.history.len() - 1;

        debug!(%cell, %player, cursor = self.cursor, "move applied");
        true
    }

    /// Move the cursor to history entry `mov`.
    ///
    /// Returns `false` and changes nothing when `mov` is past the end of
    /// history. Never alters history contents either way.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, mov: usize) -> bool {
        if mov >= self.history.len() {
            warn!(
                mov,
                history_len = self.history.len(),
                "jump target out of range"
            );
            return false;
        }

        self.cursor = mov;
        debug!(cursor = self.cursor, "jumped");
        true
    }

    /// The player who moves next from the live snapshot: X on even cursor
    /// positions, O on odd ones.
    #[must_use]
    pub const fn active_player(&self) -> Player {
        if self.cursor % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// The live snapshot.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// The winner on the live snapshot, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        winner(self.board())
    }

    /// The winning line on the live snapshot, if any.
    #[must_use]
    pub fn winning_line(&self) -> Option<Run> {
        winning_line(self.board())
    }

    /// Progress of the game at the live snapshot.
    ///
    /// A full board without a winner stays `InProgress`; every move is
    /// refused from there, and no separate "draw" state is announced.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None => GameStatus::InProgress,
        }
    }

    /// The status line: `"Winner: X"` once won, else `"Next player: O"`.
    #[must_use]
    pub fn status_text(&self) -> String {
        match self.winner() {
            Some(player) => format!("Winner: {}", player),
            None => format!("Next player: {}", self.active_player()),
        }
    }

    /// One labeled entry per history snapshot, for rendering jump targets.
    #[must_use]
    pub fn move_list(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|index| MoveEntry {
                index,
                label: if index == 0 {
                    "game start".to_string()
                } else {
                    format!("move #{}", index)
                },
            })
            .collect()
    }

    /// The history index of the live snapshot.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots in history, the initial empty board included.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Read-only access to any snapshot, live or not.
    #[must_use]
    pub fn snapshot(&self, mov: usize) -> Option<&Board> {
        self.history.get(mov)
    }

    /// Check whether the cursor sits on the initial empty board.
    #[must_use]
    pub const fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    /// Check whether the cursor sits on the newest snapshot.
    #[must_use]
    pub fn is_at_latest(&self) -> bool {
        self.cursor == self.history.len() - 1
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
