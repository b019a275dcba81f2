//! Domain Entities

mod page;
mod selection;

pub use page::*;
pub use selection::*;
