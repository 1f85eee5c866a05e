//! Table of contents of `.ff` files.

use std::{
	collections::BTreeMap,
	io::{Read, Seek, SeekFrom},
};

use log::{debug, trace};

use crate::file::{
	error::{MqdbError, Result, Section},
	reader::ByteReader,
};

use super::constants::{RECORD_HEADER_SIZE, TOC_ENTRY_SIZE};

/// Record id type used by MQDB containers
pub type RecordId = u32;

/// Records with predefined ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum SpecialId {
	/// The name list record
	NameList = 2,
}

impl From<SpecialId> for RecordId {
	fn from(value: SpecialId) -> Self {
		value as RecordId
	}
}

/// Table of contents entry (16 bytes)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TocEntry {
	/// Unique record id
	pub record_id: RecordId,
	/// Size of the record payload in bytes
	pub size: u32,
	/// Space reserved for the record in the file
	pub size_allocated: u32,
	/// Absolute offset of the record's sub-header
	pub offset: u32,
}

impl TocEntry {
	/// Size of an entry in bytes
	pub const SIZE: usize = TOC_ENTRY_SIZE;

	/// Parses an entry from a byte slice of at least 16 bytes
	pub fn from_bytes(data: &[u8]) -> Result<Self> {
		let mut reader = ByteReader::new(data, Section::Toc);
		Ok(Self {
			record_id: reader.read_u32()?,
			size: reader.read_u32()?,
			size_allocated: reader.read_u32()?,
			offset: reader.read_u32()?,
		})
	}

	/// Reads an entry from any reader
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
		let mut buffer = [0u8; TOC_ENTRY_SIZE];
		reader.read_exact(&mut buffer)?;
		Self::from_bytes(&buffer)
	}

	/// Absolute offset of the record payload, just past its sub-header
	pub fn payload_offset(&self) -> u64 {
		self.offset as u64 + RECORD_HEADER_SIZE as u64
	}
}

/// Mapping from record id to its table of contents entry
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TableOfContents {
	entries: BTreeMap<RecordId, TocEntry>,
}

impl TableOfContents {
	/// Reads the table of contents.
	///
	/// The reader must be positioned just past the container header, where the
	/// absolute offset of the table is stored.
	///
	/// # Errors
	///
	/// Returns [`MqdbError::DuplicateId`] if two entries share a record id.
	pub fn from_reader<R: Read + Seek>(reader: &mut R) -> Result<Self> {
		let mut word = [0u8; 4];
		reader.read_exact(&mut word)?;
		let toc_offset = u32::from_le_bytes(word);

		reader.seek(SeekFrom::Start(toc_offset as u64))?;
		reader.read_exact(&mut word)?;
		let count = u32::from_le_bytes(word);

		debug!("Reading {} table of contents entries at offset {:#X}", count, toc_offset);

		let mut toc = Self::default();
		for _ in 0..count {
			toc.insert(TocEntry::from_reader(reader)?)?;
		}

		Ok(toc)
	}

	fn insert(&mut self, entry: TocEntry) -> Result<()> {
		if self.entries.contains_key(&entry.record_id) {
			return Err(MqdbError::DuplicateId {
				id: entry.record_id,
			});
		}
		trace!(
			"ToC entry {}: offset {:#X}, size {}, allocated {}",
			entry.record_id, entry.offset, entry.size, entry.size_allocated
		);
		self.entries.insert(entry.record_id, entry);
		Ok(())
	}

	/// Returns the entry for a record id, if present
	pub fn get(&self, id: RecordId) -> Option<&TocEntry> {
		self.entries.get(&id)
	}

	/// Whether the table has an entry for the record id
	pub fn contains(&self, id: RecordId) -> bool {
		self.entries.contains_key(&id)
	}

	/// Number of entries
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the table is empty
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates entries in ascending record id order
	pub fn iter(&self) -> impl Iterator<Item = &TocEntry> {
		self.entries.values()
	}
}

impl TryFrom<Vec<TocEntry>> for TableOfContents {
	type Error = MqdbError;

	fn try_from(value: Vec<TocEntry>) -> Result<Self> {
		let mut toc = Self::default();
		for entry in value {
			toc.insert(entry)?;
		}
		Ok(toc)
	}
}
