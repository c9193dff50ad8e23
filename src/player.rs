use rand::rngs::SmallRng;

use crate::{common::Coord, grid::ConcealedGrid, session::TurnReport};

/// What a player wants to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire(Coord),
    /// Abandon this game and start a new one.
    Retry,
    Exit,
}

/// Source of moves for a game: a human at a terminal, a bot, a script.
///
/// Players only ever see a [`ConcealedGrid`], so ships stay hidden.
pub trait Player {
    /// Choose the next command. Fired coordinates are expected to lie on the grid.
    fn next_command(&mut self, rng: &mut SmallRng, grid: ConcealedGrid<'_>) -> Command;

    /// Ask a yes/no question, e.g. before a retry or exit. `None` means the
    /// player can no longer answer.
    fn confirm(&mut self, _question: &str) -> Option<bool> {
        Some(true)
    }

    /// Inform the player of the result of its last shot.
    fn handle_turn(&mut self, _coord: Coord, _report: &TurnReport) {}
}
