use std::path::PathBuf;

use charcat_core::types::DbId;

/// Failures reading or writing the backing JSON file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The filesystem refused a read, write or rename.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not parse as a catalog document.
    #[error("Corrupt data file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The largest stored id leaves no room for another record.
    #[error("No character id left after {max}")]
    IdsExhausted { max: DbId },

    /// The in-memory document could not be encoded.
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| StoreError::Io { path, source }
    }
}
