//! Domain Errors
//!
//! Error types for the citation update flow.

use thiserror::Error;

/// Errors that abort a citation update.
///
/// Every variant is terminal for the current action; nothing is retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CiteError {
    #[error("Nothing is selected")]
    NoSelection,

    #[error("Too many requests, please try again later.")]
    RateLimited,

    #[error("HTTP error {status}")]
    Remote { status: u16 },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid Dontpad path: {0}")]
    InvalidPath(String),

    #[error("No Dontpad path configured")]
    MissingPath,

    #[error("Selection unavailable: {0}")]
    SelectionUnavailable(String),
}

impl CiteError {
    pub fn remote(status: u16) -> Self {
        Self::Remote { status }
    }

    /// Whether this error came back from the remote page store.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::RateLimited
                | Self::Remote { .. }
                | Self::Transport(_)
                | Self::InvalidResponse(_)
        )
    }
}
