//! Spatial map of named, typed locations
//!
//! A [`SpatialMap`] owns a square grid and an insertion-ordered list of
//! entries. Everything the presentation layer needs (rendered grid, legend,
//! listing, distances) is returned as plain data.

pub mod catalog;
pub mod entry;
pub mod error;
pub mod grid;
pub mod spatial;

pub use catalog::{
    CatalogError, LangCode, LocalizedName, LocationCatalog, LocationType, LocationTypeId,
    MAX_LANG_LEN, MAX_TYPE_KEY_LEN,
};
pub use entry::{Distance, LocationEntry};
pub use error::MapError;
pub use grid::{Cell, Grid};
pub use spatial::{LegendItem, MapState, SpatialMap, DEFAULT_GRID_SIZE, MAX_GRID_SIZE};
