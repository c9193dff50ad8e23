use log::trace;
use rand::{rngs::SmallRng, seq::IndexedRandom};

use crate::{
    common::Coord,
    grid::ConcealedGrid,
    player::{Command, Player},
    session::TurnReport,
};

/// Bot that fires at a random cell it has not tried yet.
#[derive(Debug, Default)]
pub struct RandomPlayer {
    shots: usize,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shots reported back through [`Player::handle_turn`].
    pub fn shots(&self) -> usize {
        self.shots
    }
}

impl Player for RandomPlayer {
    fn next_command(&mut self, rng: &mut SmallRng, grid: ConcealedGrid<'_>) -> Command {
        match grid.unplayed().choose(rng) {
            Some(&coord) => Command::Fire(coord),
            // nothing left to shoot at
            None => Command::Exit,
        }
    }

    fn handle_turn(&mut self, coord: Coord, report: &TurnReport) {
        trace!("bot shot {} -> {:?}", coord, report.outcome);
        self.shots += 1;
    }
}
