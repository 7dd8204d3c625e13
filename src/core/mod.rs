//! Core game types: players, cells, and grid geometry.
//!
//! This module contains the fundamental building blocks that every layer
//! above (board snapshots, the game session) is written in terms of.

pub mod player;
pub mod position;

pub use player::{Cell, Player};
pub use position::{CellId, BOARD_SIZE, CELL_COUNT, WIN_LENGTH};
