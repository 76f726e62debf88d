//! Content store error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the content store.
///
/// Missing files and directories are not errors (they read as empty
/// collections); only storage that exists but cannot be read or decoded is.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid JSON in `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),
}

pub type Result<T, E = ContentError> = std::result::Result<T, E>;
