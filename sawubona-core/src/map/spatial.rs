//! The spatial map
//!
//! Entries are kept in insertion order. That order numbers the listing
//! shown to learners and defines the indices used by [`SpatialMap::distance`].
//! Nothing is ever removed, so an index stays valid for the life of the map.

use alloc::string::ToString;
use alloc::vec::Vec;

use super::catalog::{LocationCatalog, LocationType, LocationTypeId};
use super::entry::{Distance, LocationEntry};
use super::error::MapError;
use super::grid::{Cell, Grid};

/// Grid size used by the lessons (10 × 10)
pub const DEFAULT_GRID_SIZE: u16 = 10;

/// Largest supported grid size
pub const MAX_GRID_SIZE: u16 = 256;

/// Whether any entries have been placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MapState {
    /// No entries; distances always fail
    Empty,
    /// At least one entry
    Populated,
}

/// One line of the legend: a symbol and the type it stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendItem<'c> {
    /// Map symbol
    pub symbol: char,
    /// Type id within the catalog
    pub type_id: LocationTypeId,
    /// Type with its localized names
    pub location_type: &'c LocationType,
}

/// Square map of named, typed locations
#[derive(Debug, Clone)]
pub struct SpatialMap<'c> {
    grid_size: u16,
    catalog: &'c LocationCatalog,
    entries: Vec<LocationEntry>,
}

impl<'c> SpatialMap<'c> {
    /// Create an empty map
    ///
    /// # Errors
    /// `InvalidGridSize` if `grid_size` is zero or above [`MAX_GRID_SIZE`].
    pub fn new(grid_size: u16, catalog: &'c LocationCatalog) -> Result<Self, MapError> {
        if grid_size == 0 || grid_size > MAX_GRID_SIZE {
            return Err(MapError::InvalidGridSize(grid_size));
        }
        Ok(Self {
            grid_size,
            catalog,
            entries: Vec::new(),
        })
    }

    /// Width and height of the grid
    pub fn grid_size(&self) -> u16 {
        self.grid_size
    }

    /// Catalog the entries' types come from
    pub fn catalog(&self) -> &'c LocationCatalog {
        self.catalog
    }

    /// Check if a coordinate lies on the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let size = i32::from(self.grid_size);
        (0..size).contains(&x) && (0..size).contains(&y)
    }

    /// Place a new entry and return its index
    ///
    /// An unrecognized `kind` is stored as the catalog's default type.
    /// Duplicate names and shared cells are allowed.
    ///
    /// # Errors
    /// - `EmptyName` if `name` is blank
    /// - `OutOfBounds` if `(x, y)` is not on the grid
    ///
    /// The map is unchanged on error.
    pub fn add_entry(&mut self, name: &str, x: i32, y: i32, kind: &str) -> Result<usize, MapError> {
        let kind = self.catalog.resolve(kind);
        self.add_entry_of_type(name, x, y, kind)
    }

    /// Place a new entry with an already resolved type
    ///
    /// Ids from another catalog are replaced by the default type.
    pub fn add_entry_of_type(
        &mut self,
        name: &str,
        x: i32,
        y: i32,
        kind: LocationTypeId,
    ) -> Result<usize, MapError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MapError::EmptyName);
        }
        if !self.contains(x, y) {
            return Err(MapError::OutOfBounds {
                x,
                y,
                grid_size: self.grid_size,
            });
        }

        let kind = match self.catalog.get(kind) {
            Some(_) => kind,
            None => self.catalog.default_type(),
        };

        let index = self.entries.len();
        self.entries.push(LocationEntry {
            name: name.to_string(),
            x,
            y,
            kind,
        });
        Ok(index)
    }

    /// Render the grid
    ///
    /// Entries are drawn in insertion order, so the last entry placed on a
    /// cell is the one shown. Off-grid entries are skipped.
    pub fn render_grid(&self) -> Grid {
        let mut grid = Grid::new(usize::from(self.grid_size));
        for (index, entry) in self.entries.iter().enumerate() {
            let cell = Cell::Occupied {
                symbol: self.symbol_of(entry),
                entry: index,
            };
            grid.set(entry.x, entry.y, cell);
        }
        grid
    }

    /// One legend item per type present, in order of first appearance
    pub fn legend(&self) -> Vec<LegendItem<'c>> {
        let mut legend: Vec<LegendItem<'c>> = Vec::new();
        for entry in &self.entries {
            if legend.iter().any(|item| item.type_id == entry.kind) {
                continue;
            }
            let location_type = self.catalog.type_of(entry.kind);
            legend.push(LegendItem {
                symbol: location_type.symbol(),
                type_id: entry.kind,
                location_type,
            });
        }
        legend
    }

    /// Distance from entry `a` to entry `b`
    ///
    /// # Errors
    /// `IndexOutOfRange` if either index does not address an entry.
    pub fn distance(&self, a: usize, b: usize) -> Result<Distance, MapError> {
        let from = self.checked_entry(a)?;
        let to = self.checked_entry(b)?;
        Ok(Distance::between(a, from, b, to))
    }

    /// Validate a caller-supplied index, which may be negative
    ///
    /// Consoles number spaces from 1, so a learner typing 0 arrives here
    /// as -1.
    pub fn entry_index(&self, index: i64) -> Result<usize, MapError> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.entries.len())
            .ok_or(MapError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }

    fn checked_entry(&self, index: usize) -> Result<&LocationEntry, MapError> {
        self.entries.get(index).ok_or(MapError::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len: self.entries.len(),
        })
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[LocationEntry] {
        &self.entries
    }

    /// Entry at `index`
    pub fn entry(&self, index: usize) -> Option<&LocationEntry> {
        self.entries.get(index)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries have been placed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current state
    pub fn state(&self) -> MapState {
        if self.entries.is_empty() {
            MapState::Empty
        } else {
            MapState::Populated
        }
    }

    /// Location type of an entry
    pub fn location_type_of(&self, entry: &LocationEntry) -> &'c LocationType {
        self.catalog.type_of(entry.kind)
    }

    /// Map symbol of an entry
    pub fn symbol_of(&self, entry: &LocationEntry) -> char {
        self.location_type_of(entry).symbol()
    }
}
