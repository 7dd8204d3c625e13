//! # rust-gomoku
//!
//! A two-player connect-five game core with full move-history navigation.
//!
//! ## Design Principles
//!
//! 1. **Derived, Never Stored**: The session keeps only snapshot history
//!    and a cursor. Active player, winner, status line, and move list are
//!    computed from those on demand, so nothing can drift out of sync.
//!
//! 2. **Persistent Snapshots**: Boards and the history are `im-rs`
//!    structures. Each move produces a new snapshot sharing structure with
//!    its predecessor, so keeping every past position stays cheap.
//!
//! 3. **Pure Win Detection**: `winner` is a side-effect-free scan over one
//!    snapshot, equally valid for the live board or any historical one.
//!
//! ## Architecture
//!
//! Two layers, composed vertically:
//!
//! - **Board** (leaf): one immutable 225-cell snapshot plus win detection
//!   over it.
//! - **Session**: the ordered snapshot history and cursor; applies moves,
//!   travels in time, and derives everything a UI renders.
//!
//! The crate has no I/O surface of its own. A presentation layer calls
//! `try_play` / `jump_to` and re-renders from `board`, `status_text`, and
//! `move_list`.
//!
//! ## Example
//!
//! ```
//! use rust_gomoku::{CellId, GameSession, Player};
//!
//! let mut session = GameSession::new();
//! session.try_play(CellId::from_coords(7, 7));
//! session.try_play(CellId::from_coords(8, 8));
//!
//! assert_eq!(session.status_text(), "Next player: X");
//! assert_eq!(session.move_list().len(), 3);
//!
//! // Step back to before O's reply; the next move will branch from there.
//! session.jump_to(1);
//! assert_eq!(session.active_player(), Player::O);
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, cells, grid geometry
//! - `board`: Immutable board snapshots and win detection
//! - `session`: Game session, history, time travel

pub mod core;
pub mod board;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Cell, CellId, Player, BOARD_SIZE, CELL_COUNT, WIN_LENGTH};

pub use crate::board::{winner, winning_line, Board, Run};

pub use crate::session::{GameSession, GameStatus, MoveEntry};
