//! Error types used by the crate.

use thiserror::Error;

/// Geodraw error type.
#[derive(Debug, Error)]
pub enum GeodrawError {
    /// I/O error (network or file)
    #[error("failed to load data")]
    Io,
    /// Error decoding data.
    #[error("failed to decode data: {0}")]
    Decoding(String),
    /// Point cannot be converted between coordinate systems.
    #[error("coordinates cannot be projected")]
    Projection,
    /// Item not found.
    #[error("item not found")]
    NotFound,
    /// Generic error - details are inside.
    #[error("{0}")]
    Generic(String),
    /// Error reading/writing data to the FS.
    #[error("failed to read file")]
    FsIo(#[from] std::io::Error),
}

impl From<serde_json::Error> for GeodrawError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decoding(value.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for GeodrawError {
    fn from(_value: reqwest::Error) -> Self {
        Self::Io
    }
}
