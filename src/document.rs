/// Loading documents produced by an external parser
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::ast::Document;
use crate::error::{Error, Result};

impl Document {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read a JSON document from `path`
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            blocks = document.blocks.len(),
            references = document.references.len(),
            "loaded document"
        );
        Ok(document)
    }
}
