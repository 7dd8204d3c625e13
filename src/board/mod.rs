//! Board snapshots and win detection.
//!
//! A `Board` is one immutable 225-cell picture of the grid; `winner` and
//! `winning_line` are pure scans over any such picture. Everything that
//! changes over time (history, cursor, whose turn it is) lives one layer
//! up, in the session.

pub mod grid;
pub mod win;

pub use grid::Board;
pub use win::{winner, winning_line, Run};
