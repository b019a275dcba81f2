//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod page_path;
mod status;

pub use page_path::*;
pub use status::*;
