//! Prelude module for `mqdb_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```no_run
//! use mqdb_internal::prelude::*;
//!
//! # fn main() -> Result<(), MqdbError> {
//! let ff = FfFile::open_with("Interf.ff", FfOptions::metadata_only())?;
//!
//! if let Some(entry) = ff.find_special(SpecialId::NameList) {
//!     println!("name list: {} bytes", entry.size);
//! }
//! # Ok(())
//! # }
//! ```

// Re-export everything from mqdb_types::prelude
#[doc(inline)]
pub use mqdb_types::prelude::*;

// Re-export the entire mqdb_types module for advanced usage
#[doc(inline)]
pub use mqdb_types;
