//! PagePath - validated Dontpad page path

use serde::{Deserialize, Serialize};

use crate::domain::errors::CiteError;

/// Path of a Dontpad page, e.g. `notes/reading`.
///
/// Surrounding whitespace and slashes are trimmed and empty segments are
/// dropped. Each segment is percent-encoded when the path is put into a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PagePath {
    segments: Vec<String>,
}

impl PagePath {
    pub fn parse(raw: &str) -> Result<Self, CiteError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CiteError::MissingPath);
        }

        let segments: Vec<String> = trimmed
            .split('/')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if segments.is_empty() {
            return Err(CiteError::InvalidPath(raw.to_string()));
        }

        if let Some(bad) = segments.iter().find(|s| *s == "." || *s == "..") {
            return Err(CiteError::InvalidPath(format!(
                "segment '{}' is not allowed in {}",
                bad, raw
            )));
        }

        Ok(Self { segments })
    }

    /// Path as the user sees it
    pub fn as_string(&self) -> String {
        self.segments.join("/")
    }

    /// Percent-encoded path for use in a request URL (no leading slash)
    pub fn url_path(&self) -> String {
        self.segments
            .iter()
            .map(|s| urlencoding::encode(s).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl std::fmt::Display for PagePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl std::str::FromStr for PagePath {
    type Err = CiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PagePath {
    type Error = CiteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PagePath> for String {
    fn from(path: PagePath) -> Self {
        path.as_string()
    }
}
