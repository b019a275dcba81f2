//! Domain Services
//!
//! Pure functions over domain types.

mod entry_formatter;

pub use entry_formatter::*;
