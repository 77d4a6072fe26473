//! Saving and loading shape documents on disk.
//!
//! Thin wrappers over the codec and `std::fs`. A failed load returns an error
//! and the caller keeps its current collection; replacement happens only on
//! success, via [`crate::editor::Editor::replace_shapes`].

use crate::codec::{self, CodecError};
use crate::document::ShapeList;
use log::debug;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Write a shape list to `path` as a JSON document.
pub fn save_to_path(path: &Path, shapes: &ShapeList) -> StorageResult<()> {
    let json = codec::to_json(shapes)?;
    fs::write(path, json).map_err(|source| StorageError::Io {
        path: path.display().to_string(),
        source,
    })?;
    debug!("saved {} shapes to {}", shapes.len(), path.display());
    Ok(())
}

/// Read a shape list from the JSON document at `path`.
pub fn load_from_path(path: &Path) -> StorageResult<ShapeList> {
    let json = fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let shapes = codec::from_json(&json)?;
    debug!("loaded {} shapes from {}", shapes.len(), path.display());
    Ok(shapes)
}
