//! Writes JSON documents to files or any writer.

use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::types::GraphResult;

/// Writer for JSON documents.
pub struct DocumentWriter {
    pretty: bool,
}

impl DocumentWriter {
    /// Create a writer. `pretty` selects indented output.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Write a document to a file, replacing any existing content.
    pub fn write_to_file<T: Serialize>(&self, value: &T, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(value, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a document to any writer.
    pub fn write_to<T: Serialize>(&self, value: &T, writer: &mut impl Write) -> GraphResult<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, value)?;
        } else {
            serde_json::to_writer(&mut *writer, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}
