//! Map errors

use core::fmt;

/// Errors returned by [`SpatialMap`](super::SpatialMap) operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MapError {
    /// Grid size is zero or above [`MAX_GRID_SIZE`](super::MAX_GRID_SIZE)
    InvalidGridSize(u16),
    /// Entry name is empty or only whitespace
    EmptyName,
    /// Coordinate lies outside `[0, grid_size)`
    OutOfBounds { x: i32, y: i32, grid_size: u16 },
    /// Index does not address an existing entry
    IndexOutOfRange { index: i64, len: usize },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::InvalidGridSize(size) => write!(f, "invalid grid size {}", size),
            MapError::EmptyName => write!(f, "a space needs a name"),
            MapError::OutOfBounds { x, y, grid_size } => write!(
                f,
                "({}, {}) is off the map; use 0 to {}",
                x,
                y,
                grid_size.saturating_sub(1)
            ),
            MapError::IndexOutOfRange { index, len } => {
                write!(f, "no space at index {} (map has {})", index, len)
            }
        }
    }
}
