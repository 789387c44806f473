//! Line-based console
//!
//! [`Console`] reads answers from any `BufRead` and writes to any `Write`,
//! so sessions can be scripted in tests. Map views are drawn through the
//! [`DisplayBackend`] interface into a [`Screen`] that is printed on flush.

use std::io::{BufRead, Write};

use sawubona_display::view::draw_lines;
use sawubona_display::{DisplayBackend, DisplayError, Screen};

use crate::error::CliError;

/// Console over an input and an output stream
pub struct Console<R, W> {
    input: R,
    output: W,
    screen: Screen,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            screen: Screen::new(0, 0),
        }
    }

    /// Write one line
    pub fn say(&mut self, text: &str) -> Result<(), CliError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write an empty line
    pub fn blank(&mut self) -> Result<(), CliError> {
        self.say("")
    }

    /// Draw a block of lines
    ///
    /// The screen is sized to fit the block, so wide grids are never cut.
    pub fn show(&mut self, lines: &[String]) -> Result<(), CliError> {
        let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0).max(1);
        let rows = lines.len().max(1);
        self.screen = Screen::new(
            u16::try_from(cols).unwrap_or(u16::MAX),
            u16::try_from(rows).unwrap_or(u16::MAX),
        );
        draw_lines(self, lines)?;
        Ok(())
    }

    /// Ask a question and read the answer
    ///
    /// Returns `None` once the input is exhausted.
    pub fn prompt(&mut self, question: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(answer.trim().to_string()))
    }

    /// Take back the output stream
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R, W: Write> DisplayBackend for Console<R, W> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.screen.clear()
    }

    fn draw_text(&mut self, row: u16, col: u16, text: &str) -> Result<(), DisplayError> {
        self.screen.draw_text(row, col, text)
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        for line in self.screen.lines() {
            writeln!(self.output, "{}", line).map_err(|_| DisplayError::Communication)?;
        }
        self.screen.flush()
    }

    fn dimensions(&self) -> (u16, u16) {
        self.screen.dimensions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn output(console: Console<Cursor<&[u8]>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_prompt_reads_trimmed_lines() {
        let mut console = Console::new(Cursor::new(&b"  Library \n3\n"[..]), Vec::new());
        assert_eq!(console.prompt("Name: ").unwrap().as_deref(), Some("Library"));
        assert_eq!(console.prompt("X: ").unwrap().as_deref(), Some("3"));
        assert_eq!(console.prompt("Y: ").unwrap(), None);
        assert_eq!(output(console), "Name: X: Y: \n");
    }

    #[test]
    fn test_show_keeps_blank_lines() {
        let mut console = Console::new(Cursor::new(&b""[..]), Vec::new());
        let lines = vec!["one".to_string(), String::new(), "three".to_string()];
        console.show(&lines).unwrap();
        assert_eq!(output(console), "one\n\nthree\n");
    }

    #[test]
    fn test_show_does_not_cut_wide_lines() {
        let mut console = Console::new(Cursor::new(&b""[..]), Vec::new());
        let wide = "□ ".repeat(200);
        console.show(&[wide.clone()]).unwrap();
        assert_eq!(output(console), format!("{}\n", wide.trim_end()));
    }
}
