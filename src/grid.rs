//! Square game grid stored row-major in a flat vector.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{CellState, CellView, Coord, GameError};
use crate::config::SizeBounds;

/// An `n×n` matrix of [`CellState`].
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an `n×n` grid of water. `n = 0` yields an empty grid.
    ///
    /// # Panics
    ///
    /// If `n * n` overflows; sizes from a validated [`GameConfig`](crate::GameConfig)
    /// never do.
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: alloc::vec![CellState::Water; size * size],
        }
    }

    /// Like [`Grid::new`], rejecting sizes outside `bounds`.
    pub fn bounded(size: usize, bounds: &SizeBounds) -> Result<Self, GameError> {
        bounds.check(size)?;
        Ok(Self::new(size))
    }

    /// Build a grid from explicit rows. Every row must be as long as there are rows.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, GameError>
    where
        R: AsRef<[CellState]>,
    {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return Err(GameError::InvalidSize {
                    size: row.len(),
                    min: size,
                    max: size,
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Grid { size, cells })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Cell state at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<CellState, GameError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Overwrite the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), GameError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Concealed view of the cell at (row, col).
    pub fn view(&self, row: usize, col: usize) -> Result<CellView, GameError> {
        self.get(row, col).map(CellState::view)
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        // chunks(0) panics; an empty grid has no cells anyway
        self.cells.chunks(self.size.max(1))
    }

    /// Iterate over every cell with its coordinate.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (Coord::new(i / size, i % size), state))
    }

    /// Coordinates of every cell currently in `state`.
    pub fn positions(&self, state: CellState) -> Vec<Coord> {
        self.cells()
            .filter(|&(_, s)| s == state)
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GameError> {
        if self.contains(row, col) {
            Ok(row * self.size + col)
        } else {
            Err(GameError::out_of_bounds(row, col, self.size))
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{ size: {} }}", self.size)?;
        for row in self.rows() {
            for state in row {
                let ch = match state {
                    CellState::Water => '~',
                    CellState::Ship => 'B',
                    CellState::Hit => 'X',
                    CellState::Miss => 'O',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Read-only view of a [`Grid`] that hides unrevealed ships.
#[derive(Clone, Copy)]
pub struct ConcealedGrid<'a> {
    grid: &'a Grid,
}

impl<'a> ConcealedGrid<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn view(&self, row: usize, col: usize) -> Result<CellView, GameError> {
        self.grid.view(row, col)
    }

    /// Cells not fired at yet.
    pub fn unplayed(&self) -> Vec<Coord> {
        self.grid
            .cells()
            .filter(|&(_, state)| !state.is_revealed())
            .map(|(coord, _)| coord)
            .collect()
    }
}

impl Grid {
    pub fn concealed(&self) -> ConcealedGrid<'_> {
        ConcealedGrid::new(self)
    }
}
