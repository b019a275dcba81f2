//! Ports (Interfaces)
//!
//! Capabilities the update flow depends on. The browser, terminal and
//! HTTP sides plug in through these traits.

mod clock;
mod page_store;
mod path_provider;
mod selection_provider;
mod status_reporter;

// Re-exports
pub use clock::*;
pub use page_store::*;
pub use path_provider::*;
pub use selection_provider::*;
pub use status_reporter::*;
