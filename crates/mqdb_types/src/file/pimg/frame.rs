//! Frames and tile parts of packed images.

use std::fmt;

use crate::file::{error::Result, ff::names::decode_name, reader::ByteReader};

/// Rectangular copy instruction of a packed frame.
///
/// Packed frames store their pixels as shuffled rectangles; each part copies
/// `width` x `height` pixels from (`source_x`, `source_y`) in the packed data
/// to (`target_x`, `target_y`) in the unpacked frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImagePart {
	/// X coordinate of the part in the packed data
	pub source_x: u32,
	/// Y coordinate of the part in the packed data
	pub source_y: u32,
	/// X coordinate of the part in the unpacked frame
	pub target_x: u32,
	/// Y coordinate of the part in the unpacked frame
	pub target_y: u32,
	/// Width of the part
	pub width: u32,
	/// Height of the part
	pub height: u32,
}

impl ImagePart {
	/// Size of a part in bytes
	pub const SIZE: usize = 24;

	pub(super) fn read(reader: &mut ByteReader<'_>) -> Result<Self> {
		Ok(Self {
			source_x: reader.read_u32()?,
			source_y: reader.read_u32()?,
			target_x: reader.read_u32()?,
			target_y: reader.read_u32()?,
			width: reader.read_u32()?,
			height: reader.read_u32()?,
		})
	}

	/// Number of pixels covered by the part
	pub fn area(&self) -> u64 {
		self.width as u64 * self.height as u64
	}
}

/// A packed image frame, or one step of a packed animation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageFrame {
	/// Frame name
	pub name: String,
	/// Width of the unpacked frame
	pub width: u32,
	/// Height of the unpacked frame
	pub height: u32,
	/// Parts to apply, in order, when unpacking
	pub parts: Vec<ImagePart>,
}

impl ImageFrame {
	/// Creates a frame without parts
	pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
		Self {
			name: name.into(),
			width,
			height,
			parts: Vec::new(),
		}
	}

	pub(super) fn read(reader: &mut ByteReader<'_>) -> Result<Self> {
		let name = decode_name(reader.read_cstr()?);
		let parts_total = reader.read_u32()? as usize;
		let width = reader.read_u32()?;
		let height = reader.read_u32()?;

		let mut frame = Self::new(name, width, height);
		frame.parts.reserve(parts_total.min(reader.remaining() / ImagePart::SIZE));
		for _ in 0..parts_total {
			frame.parts.push(ImagePart::read(reader)?);
		}

		Ok(frame)
	}

	/// Dimensions of the unpacked frame
	pub fn size(&self) -> (u32, u32) {
		(self.width, self.height)
	}

	/// Whether every part lies within the frame bounds
	pub fn parts_in_bounds(&self) -> bool {
		self.parts.iter().all(|part| {
			part.target_x as u64 + part.width as u64 <= self.width as u64
				&& part.target_y as u64 + part.height as u64 <= self.height as u64
		})
	}
}

impl fmt::Display for ImageFrame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({}x{}, {} parts)", self.name, self.width, self.height, self.parts.len())
	}
}
