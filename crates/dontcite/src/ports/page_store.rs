//! Page Store Port
//!
//! Abstract interface for the remote plaintext page store.

use async_trait::async_trait;

use crate::domain::{CiteError, PagePath, RemotePage, WriteAck};

/// Read and full-overwrite access to remote pages
///
/// Implementations map HTTP 429 to [`CiteError::RateLimited`] and any other
/// non-success status to [`CiteError::Remote`]. They never retry.
///
/// # Example
///
/// ```rust,ignore
/// use dontcite::ports::PageStore;
///
/// struct InMemoryStore { pages: Mutex<HashMap<String, String>> }
///
/// #[async_trait]
/// impl PageStore for InMemoryStore {
///     async fn fetch_page(&self, path: &PagePath) -> Result<RemotePage, CiteError> {
///         // look the page up
///     }
///     async fn write_body(&self, path: &PagePath, text: &str) -> Result<WriteAck, CiteError> {
///         // replace the page body
///     }
/// }
/// ```
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Fetch the freshest version of a page
    async fn fetch_page(&self, path: &PagePath) -> Result<RemotePage, CiteError>;

    /// Replace the whole body of a page
    ///
    /// # Returns
    /// The server's acknowledgement; callers may ignore it
    async fn write_body(&self, path: &PagePath, text: &str) -> Result<WriteAck, CiteError>;

    /// Fetch only the body of a page
    async fn fetch_body(&self, path: &PagePath) -> Result<String, CiteError> {
        Ok(self.fetch_page(path).await?.body)
    }
}
