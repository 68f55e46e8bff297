use std::path::PathBuf;

use thiserror::Error;

use crate::config::MatcherError;

/// Errors raised while aggregating a translation directory.
///
/// Any of these aborts the whole load; no partial document is published.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Error when the directory walk fails (missing root, permission denied, ...)
    #[error("Failed to enumerate translation directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Error when failing to read a translation file
    #[error("Failed to read translation file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error when a translation file is not valid JSON
    #[error("Invalid json for {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Error when a lone root file cannot be hoisted because it is not an object
    #[error("Default translation file {} must contain a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    /// Error when the exclude patterns cannot be compiled
    #[error(transparent)]
    InvalidPattern(#[from] MatcherError),
}
