//! Packed image support for `mqdb-rs`.
//!
//! The `-IMAGES.OPT` record of an `.ff` container is a blob of packed images
//! stored back to back. A packed image is addressed by its byte
//! offset inside the blob, which is the value `-INDEX.OPT` entries refer to.
//!
//! # Packed Image Layout
//!
//! ```text
//! palette:     1035 bytes (11-byte header + 256 × 4-byte colours)
//! frame_count: u32
//! frame_count × {
//!     name:       NUL-terminated string
//!     part_count: u32
//!     width:      u32
//!     height:     u32
//!     part_count × { source_x, source_y, target_x, target_y, width, height: u32 }
//! }
//! ```
//!
//! A simple image has one frame. An animation has several frames which the
//! game expects to share one width and height; use
//! [`PackedImage::check_frame_sizes`] to verify that.
//!
//! # Examples
//!
//! ```no_run
//! use mqdb_types::file::FfFile;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ff = FfFile::open("Interf.ff")?;
//!
//! for (offset, image) in ff.packed_images() {
//!     println!("{:#010X}: {} frame(s)", offset, image.frames.len());
//!     for frame in &image.frames {
//!         println!("  {}", frame);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use log::debug;

use crate::file::{
	error::{MqdbError, Result, Section},
	reader::ByteReader,
};

pub mod frame;
pub mod palette;

pub use frame::{ImageFrame, ImagePart};
pub use palette::{Color, PALETTE_SIZE, Palette};

/// Packed images keyed by their offset inside the blob
pub type PackedImages = BTreeMap<u32, PackedImage>;

/// A packed image or animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedImage {
	/// Palette shared by all frames
	pub palette: Palette,
	/// Frames in stored order
	pub frames: Vec<ImageFrame>,
}

impl PackedImage {
	/// Decodes one packed image at the reader's position
	pub fn read(reader: &mut ByteReader<'_>) -> Result<Self> {
		let palette = Palette::new(reader.read_array::<PALETTE_SIZE>()?);
		let frames_total = reader.read_u32()? as usize;

		// a frame needs at least a terminator and three u32 fields
		let mut frames = Vec::with_capacity(frames_total.min(reader.remaining() / 13));
		for _ in 0..frames_total {
			frames.push(ImageFrame::read(reader)?);
		}

		Ok(Self {
			palette,
			frames,
		})
	}

	/// Whether the packed image holds more than one frame
	pub fn is_animation(&self) -> bool {
		self.frames.len() > 1
	}

	/// Fails with [`MqdbError::FrameSizeMismatch`] unless every frame has the
	/// dimensions of the first one.
	///
	/// `offset` is only used to describe the image in the error.
	pub fn check_frame_sizes(&self, offset: u32) -> Result<()> {
		let Some(first) = self.frames.first() else {
			return Ok(());
		};

		for (index, frame) in self.frames.iter().enumerate().skip(1) {
			if frame.size() != first.size() {
				return Err(MqdbError::FrameSizeMismatch {
					offset,
					frame: index,
					width: frame.width,
					height: frame.height,
					expected_width: first.width,
					expected_height: first.height,
				});
			}
		}

		Ok(())
	}
}

/// Decodes a whole packed image blob.
///
/// Images are read back to back until the payload is consumed. Any length
/// field pointing past the end of the payload is reported as
/// [`MqdbError::TruncatedPayload`].
pub fn parse_packed_images(payload: &[u8], check_frame_sizes: bool) -> Result<PackedImages> {
	let mut reader = ByteReader::new(payload, Section::Images);
	let mut images = PackedImages::new();

	while !reader.is_at_end() {
		let offset = reader.position() as u32;
		let image = PackedImage::read(&mut reader)?;

		if check_frame_sizes {
			image.check_frame_sizes(offset)?;
		}

		images.insert(offset, image);
	}

	debug!("Decoded {} packed images from {} bytes", images.len(), payload.len());

	Ok(images)
}
