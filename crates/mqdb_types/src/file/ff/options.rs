//! Decoding options for `.ff` containers.

use serde::{Deserialize, Serialize};

/// Controls which optional records are decoded when a container is opened.
///
/// The container header, table of contents, name list and `-INDEX.OPT` are
/// always read. The packed image blob can be large, so it can be skipped when
/// only record payloads are needed.
///
/// # Presets
///
/// - `default()`: decodes `-IMAGES.OPT`, frame sizes unchecked
/// - `strict()`: like `default()`, and every animation must keep one frame size
/// - `metadata_only()`: skips `-IMAGES.OPT`
///
/// # Examples
///
/// ```
/// use mqdb_types::file::ff::Options;
///
/// let options = Options::default();
/// assert!(options.read_images);
///
/// let options = Options::new(false, true);
/// assert!(!options.read_images);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
	/// Decode the `-IMAGES.OPT` record
	pub read_images: bool,
	/// Reject packed images whose frames differ in width or height
	pub check_frame_sizes: bool,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			read_images: true,
			check_frame_sizes: false,
		}
	}
}

impl Options {
	/// Creates options with explicit values
	pub fn new(read_images: bool, check_frame_sizes: bool) -> Self {
		Self {
			read_images,
			check_frame_sizes,
		}
	}

	/// Decodes everything and checks animation frame sizes
	pub fn strict() -> Self {
		Self {
			check_frame_sizes: true,
			..Self::default()
		}
	}

	/// Skips the packed image blob
	pub fn metadata_only() -> Self {
		Self {
			read_images: false,
			check_frame_sizes: false,
		}
	}
}
