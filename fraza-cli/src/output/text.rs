//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Plain text formatter, one item per line; documents are separated by a
/// blank line.
pub struct TextFormatter<W: Write> {
    writer: W,
    any_file_written: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            any_file_written: false,
        }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn begin_file(&mut self, _path: &Path) -> Result<()> {
        if self.any_file_written {
            writeln!(self.writer)?;
        }
        self.any_file_written = true;
        Ok(())
    }

    fn write_item(&mut self, item: &str) -> Result<()> {
        writeln!(self.writer, "{}", item.trim())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
