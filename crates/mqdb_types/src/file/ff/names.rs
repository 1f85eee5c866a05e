//! Name list record: maps record names to record ids.
//!
//! The payload is a `u32` count followed by `count` entries of a 256-byte
//! NUL-padded name slot and a `u32` record id. Every entry is classified
//! into a [`NameResolution`]; only [`NameResolution::Resolved`] entries end
//! up in the lookup table.

use std::collections::BTreeMap;

use encoding_rs::WINDOWS_1251;
use log::{trace, warn};

use crate::file::{
	error::{Result, Section},
	reader::ByteReader,
};

use super::{
	constants::{NAME_ENTRY_SIZE, NAME_SLOT_SIZE},
	header::RecordHeader,
	toc::{RecordId, TableOfContents, TocEntry},
};

/// Why a name list entry was left out of the lookup table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
	/// The record id has no table of contents entry
	MissingRecord,
	/// The record is marked as deleted
	Unused,
	/// An earlier entry already claimed the name
	DuplicateName,
}

/// Outcome of resolving one name list entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameResolution {
	/// The name was added to the lookup table
	Resolved,
	/// The entry was tolerated but ignored
	Skipped(SkipReason),
}

/// A single entry of the name list record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
	/// Decoded record name
	pub name: String,
	/// Record id the entry points at
	pub record_id: RecordId,
	/// How the entry was resolved
	pub resolution: NameResolution,
}

/// Decodes a record name using the engine code page
pub fn decode_name(raw: &[u8]) -> String {
	let (name, _, had_errors) = WINDOWS_1251.decode(raw);
	if had_errors {
		warn!("Record name {:02X?} is not valid Windows-1251", raw);
	}
	name.into_owned()
}

/// Resolved name list
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NameList {
	names: BTreeMap<String, RecordId>,
	entries: Vec<NameEntry>,
}

impl NameList {
	/// Resolves the name list payload against the table of contents.
	///
	/// `peek` reads the sub-record header of a table of contents entry. Its
	/// signature is validated here; a mismatch means the offsets cannot be
	/// trusted and aborts the whole resolution.
	///
	/// Entries pointing at unknown ids, deleted records, or names already seen
	/// are kept in [`NameList::entries`] as skipped and never fail.
	pub fn resolve<F>(payload: &[u8], toc: &TableOfContents, mut peek: F) -> Result<Self>
	where
		F: FnMut(&TocEntry) -> Result<RecordHeader>,
	{
		let mut reader = ByteReader::new(payload, Section::NameList);
		let count = reader.read_u32()? as usize;

		let mut list = Self {
			names: BTreeMap::new(),
			entries: Vec::with_capacity(count.min(reader.remaining() / NAME_ENTRY_SIZE)),
		};

		for _ in 0..count {
			let raw_name = reader.read_name_slot::<NAME_SLOT_SIZE>()?;
			let record_id = reader.read_u32()?;
			let name = decode_name(raw_name);

			let resolution = match toc.get(record_id) {
				None => NameResolution::Skipped(SkipReason::MissingRecord),
				Some(entry) => {
					let header = peek(entry)?;
					header.validate()?;

					if header.record_id != record_id {
						warn!(
							"Record header at {:#X} has id {}, table of contents says {}",
							entry.offset, header.record_id, record_id
						);
					}

					if !header.is_used() {
						NameResolution::Skipped(SkipReason::Unused)
					} else if list.names.contains_key(&name) {
						NameResolution::Skipped(SkipReason::DuplicateName)
					} else {
						list.names.insert(name.clone(), record_id);
						NameResolution::Resolved
					}
				}
			};

			trace!("Name list entry {:?} -> {}: {:?}", name, record_id, resolution);

			list.entries.push(NameEntry {
				name,
				record_id,
				resolution,
			});
		}

		Ok(list)
	}

	/// Returns the record id for a name
	pub fn get(&self, name: &str) -> Option<RecordId> {
		self.names.get(name).copied()
	}

	/// Whether the name resolves to a record
	pub fn contains(&self, name: &str) -> bool {
		self.names.contains_key(name)
	}

	/// Number of resolved names
	pub fn len(&self) -> usize {
		self.names.len()
	}

	/// Whether no name was resolved
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	/// Iterates resolved names in lexical order
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.names.keys().map(String::as_str)
	}

	/// Iterates resolved `(name, id)` pairs in lexical order
	pub fn iter(&self) -> impl Iterator<Item = (&str, RecordId)> {
		self.names.iter().map(|(name, &id)| (name.as_str(), id))
	}

	/// All name list entries in file order, including skipped ones
	pub fn entries(&self) -> &[NameEntry] {
		&self.entries
	}

	/// Iterates the entries that were skipped
	pub fn skipped(&self) -> impl Iterator<Item = &NameEntry> {
		self.entries.iter().filter(|entry| entry.resolution != NameResolution::Resolved)
	}
}
