//! Colour pixel output trait (NeoPixel strips, LED matrices)

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const OFF: Self = Self::new(0, 0, 0);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const YELLOW: Self = Self::new(255, 255, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a colour
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale by a brightness in `0..=255`
    pub fn dimmed(self, brightness: u8) -> Self {
        let scale = |c: u8| ((u16::from(c) * u16::from(brightness)) / 255) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

/// Errors from pixel outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelError {
    /// Pixel index beyond the strip length
    OutOfRange,
    /// Failed to push data to the LEDs
    Transfer,
}

/// Trait for addressable colour outputs
///
/// Writes are buffered until [`show`](Self::show).
pub trait ColorOutput {
    /// Number of pixels
    fn len(&self) -> usize;

    /// Check if the output has no pixels
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set one pixel in the buffer
    fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), PixelError>;

    /// Push the buffer to the LEDs
    fn show(&mut self) -> Result<(), PixelError>;

    /// Set every pixel to one colour
    fn fill(&mut self, color: Rgb) -> Result<(), PixelError> {
        for i in 0..self.len() {
            self.set_pixel(i, color)?;
        }
        Ok(())
    }

    /// Turn every pixel off
    fn clear(&mut self) -> Result<(), PixelError> {
        self.fill(Rgb::OFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimmed() {
        assert_eq!(Rgb::WHITE.dimmed(255), Rgb::WHITE);
        assert_eq!(Rgb::WHITE.dimmed(0), Rgb::OFF);
        assert_eq!(Rgb::new(200, 100, 0).dimmed(51), Rgb::new(40, 20, 0));
    }
}
