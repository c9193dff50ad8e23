//! Common types for the game: cell states, coordinates, turn outcomes and errors.

use core::fmt;

/// State of a single grid cell.
///
/// `Water` and `Ship` are unrevealed; `Hit` and `Miss` are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Water,
    Ship,
    Hit,
    Miss,
}

impl CellState {
    /// Returns `true` once the cell has been fired at.
    pub fn is_revealed(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }

    /// What an outside observer is allowed to see of this cell.
    pub fn view(self) -> CellView {
        match self {
            CellState::Water | CellState::Ship => CellView::Unknown,
            CellState::Hit => CellView::Hit,
            CellState::Miss => CellView::Miss,
        }
    }
}

/// Public view of a cell. Ships and water both show as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellView {
    Unknown,
    Hit,
    Miss,
}

/// A (row, col) position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

impl TryFrom<(i64, i64)> for Coord {
    type Error = GameError;

    /// Negative components can never be on a grid.
    fn try_from((row, col): (i64, i64)) -> Result<Self, Self::Error> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(row), Ok(col)) => Ok(Coord { row, col }),
            _ => Err(GameError::OutOfBounds { row, col, size: None }),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnOutcome {
    /// The cell held a ship.
    Hit,
    /// The cell was plain water.
    Miss,
    /// The cell had already been fired at; nothing changed.
    AlreadyPlayed,
}

/// Errors returned by grid, placement and session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Grid dimension outside the configured bounds, or a non-square matrix.
    InvalidSize { size: usize, min: usize, max: usize },
    /// Coordinate outside the current grid. `size` is `None` when the
    /// coordinate was rejected before a grid was consulted.
    OutOfBounds { row: i64, col: i64, size: Option<usize> },
    /// More ships requested than there are free cells.
    InsufficientSpace { requested: usize, available: usize },
}

impl GameError {
    pub(crate) fn out_of_bounds(row: usize, col: usize, size: usize) -> Self {
        GameError::OutOfBounds {
            row: i64::try_from(row).unwrap_or(i64::MAX),
            col: i64::try_from(col).unwrap_or(i64::MAX),
            size: Some(size),
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidSize { size, min, max } => {
                write!(f, "Grid size {} must be between {} and {}", size, min, max)
            }
            GameError::OutOfBounds {
                row,
                col,
                size: Some(size),
            } => write!(
                f,
                "Coordinate ({}, {}) is outside a {}x{} grid",
                row, col, size, size
            ),
            GameError::OutOfBounds { row, col, size: None } => {
                write!(f, "Coordinate ({}, {}) is outside the grid", row, col)
            }
            GameError::InsufficientSpace {
                requested,
                available,
            } => write!(
                f,
                "Cannot place {} ships: only {} free cells",
                requested, available
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
