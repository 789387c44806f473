//! Text display backend
//!
//! Map views draw through this trait: the console prints a [`Screen`](crate::Screen),
//! a board could forward the same rows to a character LCD.

/// Errors from drawing or showing text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Rows could not be written out
    Communication,
    /// Text starts outside the display
    InvalidCoordinates,
}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DisplayError::Communication => write!(f, "display communication failed"),
            DisplayError::InvalidCoordinates => write!(f, "text outside the display"),
        }
    }
}

/// Grid of character cells addressed by row and column
///
/// Drawing only changes the backend's buffer; nothing is shown until
/// [`flush`](Self::flush).
pub trait DisplayBackend {
    /// Blank every row
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Write `text` starting at a 0-based row and column
    ///
    /// Characters past the last column are cut.
    fn draw_text(&mut self, row: u16, col: u16, text: &str) -> Result<(), DisplayError>;

    /// Show what has been drawn since the last clear
    ///
    /// The console writes its drawn rows to the terminal here.
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Size as (columns, rows) in characters
    ///
    /// Views drop rows past the last one.
    fn dimensions(&self) -> (u16, u16);
}
