//! Subcommand implementations
//!
//! Every command works on a [`Console`](crate::console::Console), so the
//! same code runs on a terminal and under scripted tests.

pub mod catalog;
pub mod demo;
pub mod game;
pub mod interactive;

use sawubona_core::map::SpatialMap;

/// Confirmation printed after a space is placed
pub(crate) fn added_lines(map: &SpatialMap<'_>, index: usize) -> Vec<String> {
    let Some(entry) = map.entry(index) else {
        return Vec::new();
    };
    let location_type = map.location_type_of(entry);
    let names: Vec<&str> = location_type.names().iter().map(|n| n.name.as_str()).collect();
    vec![
        format!("✓ Added: {}", entry.name),
        format!("  Location: ({}, {})", entry.x, entry.y),
        format!("  Type: {}", names.join(" | ")),
        format!("  Symbol: {}", location_type.symbol()),
    ]
}
