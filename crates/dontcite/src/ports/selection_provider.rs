//! Selection Provider Port

use async_trait::async_trait;

use crate::domain::{CiteError, Selection};

/// Supplies the current selection with its page title and URL.
///
/// A selection without text is a valid answer, not an error.
#[async_trait]
pub trait SelectionProvider: Send + Sync {
    async fn current_selection(&self) -> Result<Selection, CiteError>;
}

/// Provider that always answers with the same selection
#[derive(Debug, Clone)]
pub struct FixedSelection {
    selection: Selection,
}

impl FixedSelection {
    pub fn new(selection: Selection) -> Self {
        Self { selection }
    }
}

#[async_trait]
impl SelectionProvider for FixedSelection {
    async fn current_selection(&self) -> Result<Selection, CiteError> {
        Ok(self.selection.clone())
    }
}
