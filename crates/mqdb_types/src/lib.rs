//! This crate provides data types and decoding support for MQDB (`.ff`)
//! resource containers used by the game.
//!
//! # File Formats
//!
//! - **FF**: MQDB containers storing numbered, named records behind a table of contents
//! - **`-INDEX.OPT`**: Index record listing packed images and animation frames
//! - **`-IMAGES.OPT`**: Packed images, a palette plus tile placement data per frame
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use mqdb_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ff = FfFile::open("Interf.ff")?;
//! println!("{} named records", ff.names().len());
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use mqdb_types::file::ff::{File, Options};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ff = File::open_with("Interf.ff", Options::strict())?;
//! // ...
//! # Ok(())
//! # }
//! ```

pub mod file;

/// `use mqdb_types::prelude::*;` to import commonly used items.
pub mod prelude;
