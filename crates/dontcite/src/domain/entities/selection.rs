//! Selection - highlighted text plus the page it came from

use serde::{Deserialize, Serialize};

/// The user's highlighted text with page metadata at the moment of the action.
///
/// Serialises to the content-script response shape
/// `{"text": string|null, "url": string, "title": string}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Highlighted text; `None` when nothing is selected
    #[serde(default)]
    pub text: Option<String>,
    /// URL of the page the text was taken from
    #[serde(default)]
    pub url: String,
    /// Title of the page
    #[serde(default)]
    pub title: String,
}

impl Selection {
    pub fn new(text: Option<String>, url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            text,
            url: url.into(),
            title: title.into(),
        }
    }

    /// Selection with nothing highlighted
    pub fn empty(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(None, url, title)
    }

    /// The highlighted text, treating an empty string as no selection.
    pub fn highlighted_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    pub fn has_text(&self) -> bool {
        self.highlighted_text().is_some()
    }
}
