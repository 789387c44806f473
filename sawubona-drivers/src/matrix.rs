//! LED matrix map display
//!
//! Draws a rendered school map on a square LED matrix, one LED per grid
//! cell, coloured by location type.

use sawubona_core::map::{Cell, LocationTypeId, SpatialMap};
use sawubona_core::traits::{ColorOutput, PixelError, Rgb};

/// Colours assigned to location types in catalog order
pub const DEFAULT_COLORS: [Rgb; 5] = [Rgb::BLUE, Rgb::RED, Rgb::GREEN, Rgb::YELLOW, Rgb::WHITE];

/// How grid cells are wired to LED indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatrixLayout {
    /// Every row runs left to right
    #[default]
    RowMajor,
    /// Rows alternate direction (typical for NeoPixel panels)
    Serpentine,
}

impl MatrixLayout {
    /// LED index of cell `(x, y)` on a `width`-wide matrix
    pub fn index(&self, x: usize, y: usize, width: usize) -> usize {
        match self {
            MatrixLayout::RowMajor => y * width + x,
            MatrixLayout::Serpentine if y % 2 == 1 => y * width + (width - 1 - x),
            MatrixLayout::Serpentine => y * width + x,
        }
    }
}

/// Colour per location type
#[derive(Debug, Clone, Copy)]
pub struct Palette<'a> {
    colors: &'a [Rgb],
    /// Brightness 0-255 applied to every colour
    brightness: u8,
}

impl Default for Palette<'static> {
    fn default() -> Self {
        Self::new(&DEFAULT_COLORS, 51)
    }
}

impl<'a> Palette<'a> {
    /// Create a palette; types beyond `colors.len()` reuse colours cyclically
    pub fn new(colors: &'a [Rgb], brightness: u8) -> Self {
        Self { colors, brightness }
    }

    /// Colour of a location type
    pub fn color(&self, kind: LocationTypeId) -> Rgb {
        let base = if self.colors.is_empty() {
            Rgb::WHITE
        } else {
            self.colors[kind.index() % self.colors.len()]
        };
        base.dimmed(self.brightness)
    }
}

/// Draw the map on an LED matrix and show it
///
/// Empty cells are switched off.
///
/// # Errors
/// `OutOfRange` if the output has fewer LEDs than grid cells.
pub fn render_map<O: ColorOutput>(
    map: &SpatialMap<'_>,
    palette: &Palette<'_>,
    layout: MatrixLayout,
    output: &mut O,
) -> Result<(), PixelError> {
    let grid = map.render_grid();
    let size = grid.size();
    if output.len() < size * size {
        return Err(PixelError::OutOfRange);
    }

    output.clear()?;
    for (y, row) in grid.rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let color = match cell {
                Cell::Empty => Rgb::OFF,
                Cell::Occupied { entry, .. } => match map.entry(*entry) {
                    Some(e) => palette.color(e.kind),
                    None => Rgb::OFF,
                },
            };
            output.set_pixel(layout.index(x, y, size), color)?;
        }
    }
    output.show()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sawubona_core::map::LocationCatalog;

    /// Mock 8x8 LED panel
    struct MockPanel {
        pixels: [Rgb; 64],
        shown: bool,
    }

    impl MockPanel {
        fn new() -> Self {
            Self {
                pixels: [Rgb::WHITE; 64],
                shown: false,
            }
        }
    }

    impl ColorOutput for MockPanel {
        fn len(&self) -> usize {
            self.pixels.len()
        }

        fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), PixelError> {
            let pixel = self.pixels.get_mut(index).ok_or(PixelError::OutOfRange)?;
            *pixel = color;
            Ok(())
        }

        fn show(&mut self) -> Result<(), PixelError> {
            self.shown = true;
            Ok(())
        }
    }

    #[test]
    fn test_layout_index() {
        assert_eq!(MatrixLayout::RowMajor.index(2, 1, 8), 10);
        assert_eq!(MatrixLayout::Serpentine.index(2, 0, 8), 2);
        assert_eq!(MatrixLayout::Serpentine.index(2, 1, 8), 13);
    }

    #[test]
    fn test_render_map() {
        let catalog = LocationCatalog::school();
        let mut map = SpatialMap::new(8, &catalog).unwrap();
        map.add_entry("Library", 1, 0, "library").unwrap();
        map.add_entry("Gate", 3, 1, "entrance").unwrap();

        let palette = Palette::new(&DEFAULT_COLORS, 255);
        let mut panel = MockPanel::new();
        render_map(&map, &palette, MatrixLayout::Serpentine, &mut panel).unwrap();

        assert!(panel.shown);
        // Library is type 3, entrance type 4
        assert_eq!(panel.pixels[1], Rgb::YELLOW);
        assert_eq!(panel.pixels[8 + (7 - 3)], Rgb::WHITE);
        assert_eq!(panel.pixels[0], Rgb::OFF);
        assert_eq!(panel.pixels.iter().filter(|p| **p != Rgb::OFF).count(), 2);
    }

    #[test]
    fn test_panel_too_small() {
        let catalog = LocationCatalog::school();
        let map = SpatialMap::new(10, &catalog).unwrap();
        let mut panel = MockPanel::new();
        assert_eq!(
            render_map(&map, &Palette::default(), MatrixLayout::RowMajor, &mut panel),
            Err(PixelError::OutOfRange)
        );
    }

    #[test]
    fn test_palette_cycles() {
        let catalog = LocationCatalog::school();
        const TWO: [Rgb; 2] = [Rgb::RED, Rgb::GREEN];
        let palette = Palette::new(&TWO, 255);
        let ids: [LocationTypeId; 5] = {
            let mut ids = catalog.iter().map(|(id, _)| id);
            core::array::from_fn(|_| ids.next().unwrap())
        };
        assert_eq!(palette.color(ids[0]), Rgb::RED);
        assert_eq!(palette.color(ids[2]), Rgb::RED);
        assert_eq!(palette.color(ids[3]), Rgb::GREEN);
    }
}
