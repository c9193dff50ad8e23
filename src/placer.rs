//! Random ship placement.
//!
//! Ships are single cells. Placement samples without replacement from the
//! cells that are still water, so it never retries and always terminates.

use alloc::collections::BTreeSet;
use log::debug;
use rand::{seq::index, Rng};

use crate::common::{CellState, Coord, GameError};
use crate::grid::Grid;

/// Turn `count` distinct water cells of `grid` into ships, chosen uniformly at
/// random. Returns the chosen coordinates.
///
/// Fails with `InsufficientSpace`, leaving the grid untouched, when fewer than
/// `count` water cells remain.
pub fn place_ships<R>(
    grid: &mut Grid,
    count: usize,
    rng: &mut R,
) -> Result<BTreeSet<Coord>, GameError>
where
    R: Rng + ?Sized,
{
    let water = grid.positions(CellState::Water);
    if count > water.len() {
        return Err(GameError::InsufficientSpace {
            requested: count,
            available: water.len(),
        });
    }

    let mut placed = BTreeSet::new();
    for i in index::sample(rng, water.len(), count) {
        let coord = water[i];
        grid.set(coord.row, coord.col, CellState::Ship)?;
        placed.insert(coord);
    }
    debug!(
        "placed {} ships on a {}x{} grid",
        placed.len(),
        grid.size(),
        grid.size()
    );
    Ok(placed)
}

/// Put a ship at `coord`. Returns `false` if the cell was not water.
pub fn place_ship_at(grid: &mut Grid, coord: Coord) -> Result<bool, GameError> {
    if grid.get(coord.row, coord.col)? != CellState::Water {
        return Ok(false);
    }
    grid.set(coord.row, coord.col, CellState::Ship)?;
    Ok(true)
}
