use log::trace;

use crate::common::{CellState, GameError, TurnOutcome};
use crate::grid::Grid;

/// Fire at (row, col).
///
/// A ship becomes `Hit` and water becomes `Miss`. Cells already hit or missed
/// are left alone and report `AlreadyPlayed`. Out-of-bounds coordinates fail
/// without touching the grid.
pub fn resolve(grid: &mut Grid, row: usize, col: usize) -> Result<TurnOutcome, GameError> {
    let outcome = match grid.get(row, col)? {
        CellState::Ship => {
            grid.set(row, col, CellState::Hit)?;
            TurnOutcome::Hit
        }
        CellState::Water => {
            grid.set(row, col, CellState::Miss)?;
            TurnOutcome::Miss
        }
        CellState::Hit | CellState::Miss => TurnOutcome::AlreadyPlayed,
    };
    trace!("shot at ({}, {}): {:?}", row, col, outcome);
    Ok(outcome)
}
