//! `-INDEX.OPT` record: names and locations of packed images and animations.
//!
//! # Payload Format
//!
//! ```text
//! count: u32
//! count × {
//!     id:     u32      (u32::MAX for animations)
//!     name:   NUL-terminated string
//!     offset: u32      (offset of the packed image inside its blob)
//!     size:   u32      (size of the packed image in bytes)
//! }
//! ```
//!
//! Both groups are stored as parallel arrays: the same position in every
//! array describes the same entry.

use log::debug;

use crate::file::{
	error::{Result, Section},
	reader::ByteReader,
};

use super::{constants::ANIMATION_SENTINEL_ID, names::decode_name, toc::RecordId};

/// Location of a packed image inside its blob
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedImageInfo {
	/// Offset from the start of the blob
	pub offset: u32,
	/// Total size of the packed image in bytes
	pub size: u32,
}

impl PackedImageInfo {
	/// Creates a new packed image location
	pub const fn new(offset: u32, size: u32) -> Self {
		Self {
			offset,
			size,
		}
	}
}

/// One row of [`ImageIndices`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageIndexEntry<'a> {
	/// Id of the record holding the raw image
	pub id: RecordId,
	/// Image name
	pub name: &'a str,
	/// Location of the packed image
	pub info: PackedImageInfo,
}

/// One row of [`AnimationIndices`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationIndexEntry<'a> {
	/// Animation frame name
	pub name: &'a str,
	/// Location of the packed image
	pub info: PackedImageInfo,
}

/// Index entries describing packed images
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImageIndices {
	ids: Vec<RecordId>,
	names: Vec<String>,
	packed_info: Vec<PackedImageInfo>,
}

impl ImageIndices {
	fn push(&mut self, id: RecordId, name: String, info: PackedImageInfo) {
		self.ids.push(id);
		self.names.push(name);
		self.packed_info.push(info);
	}

	/// Ids of the records holding raw image data
	pub fn ids(&self) -> &[RecordId] {
		&self.ids
	}

	/// Image names
	pub fn names(&self) -> &[String] {
		&self.names
	}

	/// Packed image locations
	pub fn packed_info(&self) -> &[PackedImageInfo] {
		&self.packed_info
	}

	/// Number of entries
	pub fn len(&self) -> usize {
		self.ids.len()
	}

	/// Whether there are no entries
	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	/// Returns the entry at `index`
	pub fn get(&self, index: usize) -> Option<ImageIndexEntry<'_>> {
		Some(ImageIndexEntry {
			id: *self.ids.get(index)?,
			name: self.names.get(index)?,
			info: *self.packed_info.get(index)?,
		})
	}

	/// Position of the first entry with the given name
	pub fn position(&self, name: &str) -> Option<usize> {
		self.names.iter().position(|n| n == name)
	}

	/// Iterates entries in payload order
	pub fn iter(&self) -> impl Iterator<Item = ImageIndexEntry<'_>> {
		(0..self.len()).filter_map(|index| self.get(index))
	}
}

/// Index entries describing packed animation frames
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AnimationIndices {
	names: Vec<String>,
	packed_info: Vec<PackedImageInfo>,
}

impl AnimationIndices {
	fn push(&mut self, name: String, info: PackedImageInfo) {
		self.names.push(name);
		self.packed_info.push(info);
	}

	/// Animation names
	pub fn names(&self) -> &[String] {
		&self.names
	}

	/// Packed image locations
	pub fn packed_info(&self) -> &[PackedImageInfo] {
		&self.packed_info
	}

	/// Number of entries
	pub fn len(&self) -> usize {
		self.names.len()
	}

	/// Whether there are no entries
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	/// Returns the entry at `index`
	pub fn get(&self, index: usize) -> Option<AnimationIndexEntry<'_>> {
		Some(AnimationIndexEntry {
			name: self.names.get(index)?,
			info: *self.packed_info.get(index)?,
		})
	}

	/// Position of the first entry with the given name
	pub fn position(&self, name: &str) -> Option<usize> {
		self.names.iter().position(|n| n == name)
	}

	/// Iterates entries in payload order
	pub fn iter(&self) -> impl Iterator<Item = AnimationIndexEntry<'_>> {
		(0..self.len()).filter_map(|index| self.get(index))
	}
}

/// Decoded `-INDEX.OPT` contents
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IndexData {
	/// Packed image entries
	pub images: ImageIndices,
	/// Packed animation entries
	pub animations: AnimationIndices,
}

impl IndexData {
	/// Decodes an `-INDEX.OPT` payload
	pub fn from_bytes(payload: &[u8]) -> Result<Self> {
		let mut reader = ByteReader::new(payload, Section::Index);
		let total = reader.read_u32()?;

		let mut index = Self::default();
		for _ in 0..total {
			let id = reader.read_u32()?;
			let name = decode_name(reader.read_cstr()?);
			let offset = reader.read_u32()?;
			let size = reader.read_u32()?;
			let info = PackedImageInfo::new(offset, size);

			if id == ANIMATION_SENTINEL_ID {
				index.animations.push(name, info);
			} else {
				index.images.push(id, name, info);
			}
		}

		debug!(
			"Index holds {} images and {} animations",
			index.images.len(),
			index.animations.len()
		);

		Ok(index)
	}

	/// Whether the index has no entries at all
	pub fn is_empty(&self) -> bool {
		self.images.is_empty() && self.animations.is_empty()
	}
}
