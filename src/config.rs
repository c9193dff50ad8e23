use crate::common::GameError;

/// Smallest grid the console game accepts.
pub const MIN_SIZE: usize = 3;
/// Largest grid the console game accepts.
pub const MAX_SIZE: usize = 10;
pub const DEFAULT_SIZE: usize = 5;
pub const DEFAULT_SHIPS: usize = 3;
/// Largest side whose cell count still fits in a `usize`.
pub const MAX_SIDE: usize = (1 << (usize::BITS / 2)) - 1;

/// Inclusive range of accepted grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounds {
    pub min: usize,
    pub max: usize,
}

impl SizeBounds {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, size: usize) -> bool {
        (self.min..=self.max).contains(&size)
    }

    /// Fails with `InvalidSize` when `size` falls outside `[min, max]`.
    pub fn check(&self, size: usize) -> Result<(), GameError> {
        if self.contains(size) {
            Ok(())
        } else {
            Err(GameError::InvalidSize {
                size,
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self::new(MIN_SIZE, MAX_SIZE)
    }
}

/// Parameters of one game. Passed to [`GameSession::new`](crate::GameSession::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub ship_count: usize,
    /// Bounds on `size`; `None` accepts any dimension, including 0.
    pub bounds: Option<SizeBounds>,
}

impl GameConfig {
    /// Configuration checked against the default [`SizeBounds`].
    pub fn new(size: usize, ship_count: usize) -> Self {
        Self {
            size,
            ship_count,
            bounds: Some(SizeBounds::default()),
        }
    }

    pub fn unbounded(size: usize, ship_count: usize) -> Self {
        Self {
            size,
            ship_count,
            bounds: None,
        }
    }

    pub fn with_bounds(mut self, bounds: SizeBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Number of cells, or `None` if it does not fit in a `usize`.
    pub fn cell_count(&self) -> Option<usize> {
        self.size.checked_mul(self.size)
    }

    /// Check the size bounds and that every ship fits on the grid.
    pub fn validate(&self) -> Result<(), GameError> {
        if let Some(bounds) = self.bounds {
            bounds.check(self.size)?;
        }
        let cells = self.cell_count().ok_or(GameError::InvalidSize {
            size: self.size,
            min: 0,
            max: MAX_SIDE,
        })?;
        if self.ship_count > cells {
            return Err(GameError::InsufficientSpace {
                requested: self.ship_count,
                available: cells,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SHIPS)
    }
}
