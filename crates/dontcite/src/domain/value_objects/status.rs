//! StatusMessage - the single user-visible outcome of an update

use serde::{Deserialize, Serialize};

use crate::domain::errors::CiteError;

pub const MSG_SUCCESS: &str = "Text added to Dontpad!";
pub const MSG_NO_SELECTION: &str = "Please select some text on the page first!";
pub const MSG_RATE_LIMITED: &str = "Too many requests, please try again later.";
pub const MSG_MISSING_PATH: &str = "Set a Dontpad path first!";
pub const MSG_GENERIC_ERROR: &str = "Error updating Dontpad page!";

/// Severity of a status message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    Success,
    Warning,
    Error,
}

impl std::fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusLevel::Success => write!(f, "success"),
            StatusLevel::Warning => write!(f, "warning"),
            StatusLevel::Error => write!(f, "error"),
        }
    }
}

/// Message shown to the user once an update finishes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn success() -> Self {
        Self::new(StatusLevel::Success, MSG_SUCCESS)
    }

    /// Map an error to its status.
    ///
    /// Rate limiting keeps its own message; remote and transport failures
    /// share the generic one.
    pub fn for_error(error: &CiteError) -> Self {
        match error {
            CiteError::NoSelection => Self::new(StatusLevel::Warning, MSG_NO_SELECTION),
            CiteError::RateLimited => Self::new(StatusLevel::Error, MSG_RATE_LIMITED),
            CiteError::MissingPath | CiteError::InvalidPath(_) => {
                Self::new(StatusLevel::Error, MSG_MISSING_PATH)
            }
            CiteError::Remote { .. }
            | CiteError::Transport(_)
            | CiteError::InvalidResponse(_)
            | CiteError::SelectionUnavailable(_) => {
                Self::new(StatusLevel::Error, MSG_GENERIC_ERROR)
            }
        }
    }

    pub fn for_result<T>(result: &Result<T, CiteError>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(e) => Self::for_error(e),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == StatusLevel::Error
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
