//! Screen buffer
//!
//! A character-based screen buffer. The console front end draws into a
//! `Screen` and prints its lines; tests inspect them directly.

use alloc::string::String;
use alloc::vec::Vec;

use crate::backend::{DisplayBackend, DisplayError};

/// Text buffer with a fixed size in characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    cols: u16,
    rows: u16,
    /// Drawn rows; rows never drawn are absent
    lines: Vec<String>,
    /// Whether the screen changed since the last flush
    dirty: bool,
}

impl Screen {
    /// Create an empty screen of `cols` × `rows` characters
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            lines: Vec::new(),
            dirty: true,
        }
    }

    /// Get the content of a specific row, without trailing spaces
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.trim_end())
    }

    /// Iterate over drawn rows, without trailing spaces
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.trim_end())
    }

    /// Check if screen needs flushing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl DisplayBackend for Screen {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.lines.clear();
        self.dirty = true;
        Ok(())
    }

    fn draw_text(&mut self, row: u16, col: u16, text: &str) -> Result<(), DisplayError> {
        if row >= self.rows || col >= self.cols {
            return Err(DisplayError::InvalidCoordinates);
        }
        let row = usize::from(row);
        let col = usize::from(col);
        while self.lines.len() <= row {
            self.lines.push(String::new());
        }

        let mut chars: Vec<char> = self.lines[row].chars().collect();
        if chars.len() < col {
            chars.resize(col, ' ');
        }
        let room = usize::from(self.cols) - col;
        for (i, c) in text.chars().take(room).enumerate() {
            match chars.get_mut(col + i) {
                Some(slot) => *slot = c,
                None => chars.push(c),
            }
        }

        self.lines[row] = chars.into_iter().collect();
        self.dirty = true;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.dirty = false;
        Ok(())
    }

    fn dimensions(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_and_overwrite() {
        let mut screen = Screen::new(20, 4);
        screen.draw_text(1, 0, "Sawubona").unwrap();
        screen.draw_text(1, 4, "BONA!").unwrap();
        assert_eq!(screen.get_line(0), Some(""));
        assert_eq!(screen.get_line(1), Some("SawuBONA!"));
    }

    #[test]
    fn test_pads_to_column() {
        let mut screen = Screen::new(20, 2);
        screen.draw_text(0, 3, "□").unwrap();
        assert_eq!(screen.get_line(0), Some("   □"));
    }

    #[test]
    fn test_truncates_at_width() {
        let mut screen = Screen::new(5, 1);
        screen.draw_text(0, 2, "○○○○○").unwrap();
        assert_eq!(screen.get_line(0), Some("  ○○○"));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut screen = Screen::new(5, 1);
        assert_eq!(screen.draw_text(1, 0, "x"), Err(DisplayError::InvalidCoordinates));
        assert_eq!(screen.draw_text(0, 5, "x"), Err(DisplayError::InvalidCoordinates));
    }

    #[test]
    fn test_clear_and_flush() {
        let mut screen = Screen::new(5, 2);
        screen.draw_text(0, 0, "hi").unwrap();
        screen.flush().unwrap();
        assert!(!screen.is_dirty());
        screen.clear().unwrap();
        assert!(screen.is_dirty());
        assert_eq!(screen.lines().count(), 0);
    }
}
