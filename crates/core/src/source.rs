//! JSON import of dropped-item records.
//!
//! The save reader that produces these records lives outside this repo; it
//! exports a plain JSON array of item objects.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::item::DroppedItem;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Parse an item list from a JSON array.
pub fn items_from_json(json: &str) -> Result<Vec<DroppedItem>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load an item list from a JSON export on disk.
pub fn load_items(path: &Path) -> Result<Vec<DroppedItem>, SourceError> {
    let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    items_from_json(&content).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
