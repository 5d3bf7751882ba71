//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// JSON formatter, emitting an array of per-file documents on finish.
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
}

/// One input file and its extracted items
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Source file path
    pub file: String,
    /// Items in document order
    pub items: Vec<ItemData>,
}

/// One extracted sentence or chunk
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemData {
    /// Position within the document, starting at zero
    pub index: usize,
    /// The item text
    pub text: String,
    /// Length in characters
    pub chars: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn begin_file(&mut self, path: &Path) -> Result<()> {
        self.documents.push(DocumentData {
            file: path.display().to_string(),
            items: Vec::new(),
        });
        Ok(())
    }

    fn write_item(&mut self, item: &str) -> Result<()> {
        if self.documents.is_empty() {
            self.begin_file(Path::new("-"))?;
        }
        if let Some(document) = self.documents.last_mut() {
            let text = item.trim().to_string();
            document.items.push(ItemData {
                index: document.items.len(),
                chars: text.chars().count(),
                text,
            });
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
