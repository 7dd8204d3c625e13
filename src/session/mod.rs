//! Game sessions: move application, history, and time travel.

pub mod game;

pub use game::{GameSession, GameStatus, MoveEntry};
