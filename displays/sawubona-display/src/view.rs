//! Text layout of the school map
//!
//! ```text
//! ==================================================
//! SCHOOL MAP - IBALAZWE LESIKOLE - SKOOLKAART
//! ==================================================
//!
//!   0 1 2 3 4 5 6 7 8 9
//! 0 . . . . . . . . . .
//! 1 . . . . . △ . . . .
//! 2 . . □ . . . . ▣ . .
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use sawubona_core::map::{Distance, SpatialMap};

use crate::backend::{DisplayBackend, DisplayError};

/// Glyph drawn on empty cells
pub const DEFAULT_BACKGROUND: char = '.';

/// Width of banner rules
pub const RULE_WIDTH: usize = 50;

pub const MAP_TITLE: &str = "SCHOOL MAP - IBALAZWE LESIKOLE - SKOOLKAART";
pub const LEGEND_TITLE: &str = "LEGEND - UMFANEKISO - LEGENDE:";
pub const SPACES_TITLE: &str = "SPACES IN OUR SCHOOL:";

fn rule(c: char) -> String {
    core::iter::repeat(c).take(RULE_WIDTH).collect()
}

/// Number of decimal digits of `n`
fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// Text view of a [`SpatialMap`]
pub struct MapView<'m, 'c> {
    map: &'m SpatialMap<'c>,
    background: char,
}

impl<'m, 'c> MapView<'m, 'c> {
    /// Create a view with the default background glyph
    pub fn new(map: &'m SpatialMap<'c>) -> Self {
        Self {
            map,
            background: DEFAULT_BACKGROUND,
        }
    }

    /// Use a different glyph for empty cells
    pub fn with_background(mut self, background: char) -> Self {
        self.background = background;
        self
    }

    /// Banner, grid, legend and listing
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push(rule('='));
        lines.push(String::from(MAP_TITLE));
        lines.push(rule('='));
        lines.push(String::new());
        lines.extend(self.grid_lines());
        lines.push(String::new());
        lines.push(rule('-'));
        lines.push(String::from(LEGEND_TITLE));
        lines.push(rule('-'));
        lines.extend(self.legend_lines());
        lines.push(String::new());
        lines.push(rule('-'));
        lines.push(String::from(SPACES_TITLE));
        lines.push(rule('-'));
        lines.extend(self.listing_lines());
        lines
    }

    /// Column header followed by one line per grid row
    ///
    /// Cells are padded to the width of the largest coordinate so columns
    /// stay aligned on grids larger than 10.
    pub fn grid_lines(&self) -> Vec<String> {
        let grid = self.map.render_grid();
        let width = digits(grid.size().saturating_sub(1));

        let mut lines = Vec::with_capacity(grid.size() + 1);
        let mut header = String::new();
        let _ = write!(header, "{:w$} ", "", w = width);
        for x in 0..grid.size() {
            let _ = write!(header, "{:>w$} ", x, w = width);
        }
        lines.push(String::from(header.trim_end()));

        for (y, row) in grid.rows().enumerate() {
            let mut line = String::new();
            let _ = write!(line, "{:>w$} ", y, w = width);
            for cell in row {
                let _ = write!(line, "{:>w$} ", cell.glyph(self.background), w = width);
            }
            lines.push(String::from(line.trim_end()));
        }
        lines
    }

    /// One line per legend item: `"□ = Classroom | Igumbi Lokufunda | Klaskamer"`
    pub fn legend_lines(&self) -> Vec<String> {
        self.map
            .legend()
            .iter()
            .map(|item| {
                let names: Vec<&str> = item
                    .location_type
                    .names()
                    .iter()
                    .map(|n| n.name.as_str())
                    .collect();
                format!("{} = {}", item.symbol, names.join(" | "))
            })
            .collect()
    }

    /// Numbered listing: `"1. Grade R Classroom at (2, 2)"`
    pub fn listing_lines(&self) -> Vec<String> {
        self.map
            .entries()
            .iter()
            .enumerate()
            .map(|(i, e)| format!("{}. {} at ({}, {})", i + 1, e.name, e.x, e.y))
            .collect()
    }

    /// Draw [`lines`](Self::lines) from the top of a backend
    ///
    /// Lines beyond the display height are dropped.
    pub fn draw<B: DisplayBackend>(&self, backend: &mut B) -> Result<(), DisplayError> {
        draw_lines(backend, &self.lines())
    }
}

/// Distance report for two entries of `map`
///
/// ```text
/// Distance from Grade R Classroom to School Library:
///    3 grid units
///    Pattern: Move 0 steps horizontally
///            Move 3 steps vertically
/// ```
pub fn distance_lines(map: &SpatialMap<'_>, distance: &Distance) -> Vec<String> {
    let name = |i: usize| map.entry(i).map(|e| e.name.as_str()).unwrap_or("?");
    let mut lines = Vec::with_capacity(4);
    lines.push(format!(
        "Distance from {} to {}:",
        name(distance.from),
        name(distance.to)
    ));
    lines.push(format!("   {} grid units", distance.manhattan()));
    lines.push(format!(
        "   Pattern: Move {} steps horizontally",
        distance.horizontal()
    ));
    lines.push(format!(
        "           Move {} steps vertically",
        distance.vertical()
    ));
    lines
}

/// Clear a backend, draw lines from the top and flush
pub fn draw_lines<B: DisplayBackend>(backend: &mut B, lines: &[String]) -> Result<(), DisplayError> {
    let (_, rows) = backend.dimensions();
    backend.clear()?;
    for (row, line) in (0..rows).zip(lines) {
        if !line.is_empty() {
            backend.draw_text(row, 0, line)?;
        }
    }
    backend.flush()
}
