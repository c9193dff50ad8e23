//! Commonly used types and utilities for ease of import.

pub use crate::{
    CellState, Command, Coord, GameConfig, GameError, GameSession, Grid, Player, RandomPlayer,
    SessionStatus, SizeBounds, TurnOutcome,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, play_game, CliPlayer, Ending};
