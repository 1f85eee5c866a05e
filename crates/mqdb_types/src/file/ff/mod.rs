//! `.ff` (MQDB) container support for `mqdb-rs`.
//!
//! MQDB containers store numbered records behind a table of contents. A name
//! list record maps record names to ids, and two optional records describe
//! the game's packed images: `-INDEX.OPT` (names and locations) and
//! `-IMAGES.OPT` (palettes and tile placement data).
//!
//! # File Structure
//!
//! ```text
//! 0x00  header        "MQDB", unknown, version (9), 12 unknown bytes
//! 0x18  toc_offset    u32, absolute offset of the table of contents
//! ...
//! toc:  count         u32
//!       count × { record_id, size, size_allocated, offset: u32 }
//! ...
//! at every entry offset:
//!       "MQRC", unknown, record_id, size, size_allocated, used, unknown
//!       size bytes of payload
//! ```
//!
//! Record id 2 is the name list:
//!
//! ```text
//! count: u32
//! count × { name: [u8; 256] (NUL-padded), record_id: u32 }
//! ```
//!
//! Name list entries pointing at missing or deleted records are ignored, as
//! are repeated names after their first occurrence. Real containers carry
//! such duplicates.
//!
//! # Examples
//!
//! ## Reading a record by name
//!
//! ```no_run
//! use mqdb_types::file::ff::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ff = File::open("Interf.ff")?;
//!
//! let mut data = Vec::new();
//! if ff.record_data_by_name("DLG_HIRE_LEADER.DLG", &mut data)? {
//!     println!("Read {} bytes", data.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Listing records
//!
//! ```no_run
//! use mqdb_types::file::ff::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ff = File::open("Interf.ff")?;
//!
//! for name in ff.names() {
//!     let entry = ff.find_by_name(&name).unwrap();
//!     println!("{:<32} id {:>6}, {} bytes", name, entry.record_id, entry.size);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Skipping packed images
//!
//! ```no_run
//! use mqdb_types::file::ff::{File, Options};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ff = File::open_with("Interf.ff", Options::metadata_only())?;
//! assert!(ff.packed_images().is_empty());
//!
//! for entry in ff.index().images.iter() {
//!     println!("{} -> record {}", entry.name, entry.id);
//! }
//! # Ok(())
//! # }
//! ```

mod constants;
mod file;
mod header;
mod index;
mod options;
mod toc;

pub(crate) mod names;

pub use self::constants::*;
pub use self::file::File;
pub use self::header::{Header, RecordHeader};
pub use self::index::{
	AnimationIndexEntry, AnimationIndices, ImageIndexEntry, ImageIndices, IndexData, PackedImageInfo,
};
pub use self::names::{NameEntry, NameList, NameResolution, SkipReason};
pub use self::options::Options;
pub use self::toc::{RecordId, SpecialId, TableOfContents, TocEntry};
