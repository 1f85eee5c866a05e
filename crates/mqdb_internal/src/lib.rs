//! This module is separated into its own crate to enable simple dynamic linking for `mqdb-rs`, and should not be used directly.

/// `use mqdb_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export mqdb_types for convenience
pub use mqdb_types;

// Re-export commonly used types at crate root
pub use mqdb_types::file::{FfFile, FfOptions, MqdbError, PackedImage, RecordId, Section, TocEntry};
