//! Dontcite Domain Library
//!
//! Captures a text selection with its page title and URL, formats it as a
//! citation entry, and appends it to a Dontpad page.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure types and logic
//!   - `entities/`: Selection, RemotePage, WriteAck
//!   - `value_objects/`: PagePath, StatusMessage
//!   - `services/`: Entry formatting
//!   - `errors/`: The `CiteError` taxonomy
//!
//! - **Ports** (`ports/`): Capabilities injected into the orchestrator
//!   (page store, selection provider, path provider, status reporter, clock)
//!
//! - **Services** (`services/`): Concrete implementations
//!   - `dontpad`: reqwest client for the Dontpad read/write endpoints
//!   - `selection_channel`: request/response channel for selections
//!   - `update`: the fetch, append and write orchestrator
//!
//! # Usage
//!
//! ```rust,ignore
//! use dontcite::{DontpadClient, FixedPath, FixedSelection, UpdateService};
//!
//! let service = UpdateService::new(
//!     Arc::new(DontpadClient::new()),
//!     Arc::new(FixedSelection::new(selection)),
//!     Arc::new(FixedPath::new("myPage")),
//!     Arc::new(reporter),
//! );
//! service.run().await?;
//! ```

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use domain::{
    format_access_date, format_entry, CiteError, PagePath, RemotePage, Selection, StatusLevel,
    StatusMessage, WriteAck,
};
pub use ports::{
    Clock, FixedClock, FixedPath, FixedSelection, PageStore, PathProvider, SelectionProvider,
    StatusReporter, SystemClock,
};
pub use services::{
    DontpadClient, SelectionChannel, SelectionRequest, SelectionResponder, UpdatePhase,
    UpdateService, DEFAULT_BASE_URL,
};
