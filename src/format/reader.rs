//! Reads JSON documents from files or any reader.

use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::types::GraphResult;

/// Reader for JSON input documents.
pub struct DocumentReader;

impl DocumentReader {
    /// Read and parse a JSON document from a file.
    pub fn read_from_file<T: DeserializeOwned>(path: &Path) -> GraphResult<T> {
        let file = std::fs::File::open(path)?;
        Self::read_from(&mut BufReader::new(file))
    }

    /// Read and parse a JSON document from any reader.
    pub fn read_from<T: DeserializeOwned>(reader: &mut impl Read) -> GraphResult<T> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a JSON document held in memory.
    pub fn read_from_str<T: DeserializeOwned>(text: &str) -> GraphResult<T> {
        Ok(serde_json::from_str(text)?)
    }
}
