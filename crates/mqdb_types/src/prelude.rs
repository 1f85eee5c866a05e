//! Prelude module for `mqdb_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use mqdb_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Now you can use all common types directly
//! let ff = FfFile::open_with("Interf.ff", FfOptions::metadata_only())?;
//! let names_list = ff.find_special(SpecialId::NameList);
//! # Ok(())
//! # }
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// FF types
	FfFile,
	FfOptions,
	IndexData,
	RecordId,
	SpecialId,
	TableOfContents,
	TocEntry,

	// Errors
	MqdbError,
	Section,
};

// Packed image types
#[doc(inline)]
pub use crate::file::pimg::{Color, ImageFrame, ImagePart, PackedImage, PackedImages, Palette};

// Index types
#[doc(inline)]
pub use crate::file::ff::{AnimationIndices, ImageIndices, PackedImageInfo};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
