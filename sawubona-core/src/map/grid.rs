//! Rendered grid
//!
//! A [`Grid`] is a snapshot of the map: one cell per coordinate holding
//! either nothing or the symbol of the last entry placed there.

use alloc::vec;
use alloc::vec::Vec;

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cell {
    /// Background, nothing placed here
    #[default]
    Empty,
    /// Occupied by an entry
    Occupied {
        /// Symbol of the entry's location type
        symbol: char,
        /// Index of the entry in the map
        entry: usize,
    },
}

impl Cell {
    /// Symbol to draw, or `background` for an empty cell
    pub fn glyph(&self, background: char) -> char {
        match self {
            Cell::Empty => background,
            Cell::Occupied { symbol, .. } => *symbol,
        }
    }

    /// Entry index for an occupied cell
    pub fn entry(&self) -> Option<usize> {
        match self {
            Cell::Empty => None,
            Cell::Occupied { entry, .. } => Some(*entry),
        }
    }

    /// Check if nothing is placed here
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Square grid of cells, stored row by row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-background grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Width and height
    pub fn size(&self) -> usize {
        self.size
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x < self.size && y < self.size {
            Some(y * self.size + x)
        } else {
            None
        }
    }

    /// Cell at `(x, y)`, or `None` outside the grid
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `(x, y)`
    ///
    /// Returns `false` and leaves the grid untouched for coordinates
    /// outside the grid.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.offset(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Rows from `y = 0` downwards
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() panics on a zero size
        self.cells.chunks(self.size.max(1))
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}
