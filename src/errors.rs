use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not encode contacts: {0}")]
    Json(#[from] serde_json::Error),

    /// The persisted contact file exists but could not be parsed.
    #[error("Error reading the contacts file {}: {source}", .path.display())]
    CorruptStore {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),

    #[error("{0}")]
    Selection(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
