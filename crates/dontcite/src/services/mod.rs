pub mod dontpad;
pub mod selection_channel;
pub mod update;

// Re-exports
pub use dontpad::{DontpadClient, DEFAULT_BASE_URL};
pub use selection_channel::{SelectionChannel, SelectionRequest, SelectionResponder};
pub use update::{UpdatePhase, UpdateService};
