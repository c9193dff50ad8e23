use log::{debug, info};
use rand::Rng;

use crate::{
    common::{CellState, Coord, GameError, TurnOutcome},
    config::GameConfig,
    grid::Grid,
    placer, resolver,
};

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionStatus {
    InProgress,
    Won,
}

/// Snapshot of a session's progress for status reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    pub hits: usize,
    pub ship_count: usize,
    /// Turns that hit or missed. Repeated shots are not counted.
    pub shots: usize,
    pub status: SessionStatus,
}

impl Progress {
    pub fn remaining(&self) -> usize {
        self.ship_count.saturating_sub(self.hits)
    }
}

/// What a single turn produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub outcome: TurnOutcome,
    pub status: SessionStatus,
    pub hits: usize,
    pub ship_count: usize,
}

/// One game: a seeded grid plus the hit counter.
///
/// `InProgress` moves to `Won` when the last ship is hit. Nothing but
/// [`GameSession::reset`] or a new session leaves `Won`.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    grid: Grid,
    hits: usize,
    shots: usize,
    status: SessionStatus,
}

impl GameSession {
    /// Validate `config`, create its grid and place the ships at random.
    pub fn new<R>(config: GameConfig, rng: &mut R) -> Result<Self, GameError>
    where
        R: Rng + ?Sized,
    {
        config.validate()?;
        let mut grid = Grid::new(config.size);
        placer::place_ships(&mut grid, config.ship_count, rng)?;
        info!(
            "new game: {}x{} grid, {} ships",
            config.size, config.size, config.ship_count
        );
        Ok(Self::start(config, grid, 0))
    }

    /// Adopt an already seeded grid. Every `Ship` or `Hit` cell counts as a
    /// ship; existing `Hit` cells count as hits already scored.
    pub fn from_grid(grid: Grid) -> Self {
        let hits = grid.count(CellState::Hit);
        let ship_count = grid.count(CellState::Ship) + hits;
        let config = GameConfig::unbounded(grid.size(), ship_count);
        Self::start(config, grid, hits)
    }

    fn start(config: GameConfig, grid: Grid, hits: usize) -> Self {
        let status = if hits == config.ship_count {
            SessionStatus::Won
        } else {
            SessionStatus::InProgress
        };
        GameSession {
            config,
            grid,
            hits,
            shots: 0,
            status,
        }
    }

    /// Fire at (row, col) and update the hit counter.
    ///
    /// Out-of-bounds coordinates fail and leave the session unchanged.
    pub fn play_turn(&mut self, row: usize, col: usize) -> Result<TurnReport, GameError> {
        let outcome = resolver::resolve(&mut self.grid, row, col)?;
        match outcome {
            TurnOutcome::Hit => {
                self.shots += 1;
                self.hits += 1;
                if self.hits == self.config.ship_count {
                    info!("all {} ships found in {} shots", self.hits, self.shots);
                    self.status = SessionStatus::Won;
                }
            }
            TurnOutcome::Miss => self.shots += 1,
            TurnOutcome::AlreadyPlayed => {
                debug!("({}, {}) was already played", row, col);
            }
        }
        Ok(self.report(outcome))
    }

    /// [`GameSession::play_turn`] for a [`Coord`].
    pub fn fire(&mut self, coord: Coord) -> Result<TurnReport, GameError> {
        self.play_turn(coord.row, coord.col)
    }

    /// [`GameSession::play_turn`] for signed input. Negative components fail
    /// with `OutOfBounds` like any other off-grid coordinate.
    pub fn play_turn_signed(&mut self, row: i64, col: i64) -> Result<TurnReport, GameError> {
        let coord = Coord::try_from((row, col)).map_err(|_| GameError::OutOfBounds {
            row,
            col,
            size: Some(self.grid.size()),
        })?;
        self.fire(coord)
    }

    /// Start over with a freshly seeded grid of the same size and ship count.
    /// On failure the current game is kept.
    pub fn reset<R>(&mut self, rng: &mut R) -> Result<(), GameError>
    where
        R: Rng + ?Sized,
    {
        *self = Self::new(self.config, rng)?;
        Ok(())
    }

    fn report(&self, outcome: TurnOutcome) -> TurnReport {
        TurnReport {
            outcome,
            status: self.status,
            hits: self.hits,
            ship_count: self.config.ship_count,
        }
    }

    pub fn progress(&self) -> Progress {
        Progress {
            hits: self.hits,
            ship_count: self.config.ship_count,
            shots: self.shots,
            status: self.status,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_won(&self) -> bool {
        self.status == SessionStatus::Won
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn size(&self) -> usize {
        self.config.size
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn shots(&self) -> usize {
        self.shots
    }

    pub fn ship_count(&self) -> usize {
        self.config.ship_count
    }
}
