//! Path Provider Port

use crate::domain::{CiteError, PagePath};

/// Yields the user-chosen Dontpad page path.
///
/// Asked once per action, after a selection has been obtained.
pub trait PathProvider: Send + Sync {
    fn page_path(&self) -> Result<PagePath, CiteError>;
}

/// Provider holding a single raw path, validated on every request
#[derive(Debug, Clone)]
pub struct FixedPath {
    raw: String,
}

impl FixedPath {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

impl PathProvider for FixedPath {
    fn page_path(&self) -> Result<PagePath, CiteError> {
        PagePath::parse(&self.raw)
    }
}
