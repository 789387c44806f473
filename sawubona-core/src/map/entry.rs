//! Map entries and distances between them

use alloc::string::String;

use super::catalog::LocationTypeId;

/// A named place on the map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationEntry {
    /// Label given by the learner
    pub name: String,
    /// Column, `0..grid_size`
    pub x: i32,
    /// Row, `0..grid_size`
    pub y: i32,
    /// Category of the place
    pub kind: LocationTypeId,
}

impl LocationEntry {
    /// Grid position as `(x, y)`
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

/// Grid-step distance between two entries
///
/// Movement is grid-aligned, so the distance is the Manhattan distance:
/// horizontal steps plus vertical steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Distance {
    /// Index of the starting entry
    pub from: usize,
    /// Index of the destination entry
    pub to: usize,
    /// Signed column change, `to.x - from.x`
    pub dx: i32,
    /// Signed row change, `to.y - from.y`
    pub dy: i32,
}

impl Distance {
    /// Measure from one entry to another
    pub fn between(from: usize, a: &LocationEntry, to: usize, b: &LocationEntry) -> Self {
        Self {
            from,
            to,
            dx: b.x - a.x,
            dy: b.y - a.y,
        }
    }

    /// Steps along the x axis
    pub fn horizontal(&self) -> u32 {
        self.dx.unsigned_abs()
    }

    /// Steps along the y axis
    pub fn vertical(&self) -> u32 {
        self.dy.unsigned_abs()
    }

    /// Total steps
    pub fn manhattan(&self) -> u32 {
        self.horizontal() + self.vertical()
    }

    /// The same measurement walked the other way
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(x: i32, y: i32) -> LocationEntry {
        LocationEntry {
            name: String::from("spot"),
            x,
            y,
            kind: crate::map::LocationCatalog::school().default_type(),
        }
    }

    #[test]
    fn test_distance_components() {
        let d = Distance::between(0, &entry(7, 2), 1, &entry(2, 5));
        assert_eq!(d.dx, -5);
        assert_eq!(d.dy, 3);
        assert_eq!(d.horizontal(), 5);
        assert_eq!(d.vertical(), 3);
        assert_eq!(d.manhattan(), 8);
    }

    #[test]
    fn test_reversed() {
        let d = Distance::between(0, &entry(1, 1), 1, &entry(4, 0));
        let r = d.reversed();
        assert_eq!(r, Distance::between(1, &entry(4, 0), 0, &entry(1, 1)));
        assert_eq!(r.manhattan(), d.manhattan());
    }
}
