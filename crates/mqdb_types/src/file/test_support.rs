//! Synthetic container builder shared by unit tests

use super::{
	ff::{MQDB_SIGNATURE, MQDB_VERSION, MQRC_SIGNATURE, NAME_SLOT_SIZE},
	pimg::{ImagePart, PALETTE_SIZE},
};

pub(crate) struct FrameSpec {
	pub name: String,
	pub width: u32,
	pub height: u32,
	pub parts: Vec<ImagePart>,
}

/// Builds one packed image; the first palette byte is set to `palette_tag`
pub(crate) fn packed_image_bytes(palette_tag: u8, frames: &[FrameSpec]) -> Vec<u8> {
	let mut data = vec![0u8; PALETTE_SIZE];
	data[0] = palette_tag;
	data.extend_from_slice(&(frames.len() as u32).to_le_bytes());

	for frame in frames {
		data.extend_from_slice(frame.name.as_bytes());
		data.push(0);
		data.extend_from_slice(&(frame.parts.len() as u32).to_le_bytes());
		data.extend_from_slice(&frame.width.to_le_bytes());
		data.extend_from_slice(&frame.height.to_le_bytes());
		for part in &frame.parts {
			for value in [part.source_x, part.source_y, part.target_x, part.target_y, part.width, part.height] {
				data.extend_from_slice(&value.to_le_bytes());
			}
		}
	}

	data
}

/// Builds an `-INDEX.OPT` payload from `(id, name, offset, size)` rows
pub(crate) fn index_bytes(rows: &[(u32, &str, u32, u32)]) -> Vec<u8> {
	let mut data = Vec::new();
	data.extend_from_slice(&(rows.len() as u32).to_le_bytes());
	for &(id, name, offset, size) in rows {
		data.extend_from_slice(&id.to_le_bytes());
		data.extend_from_slice(name.as_bytes());
		data.push(0);
		data.extend_from_slice(&offset.to_le_bytes());
		data.extend_from_slice(&size.to_le_bytes());
	}
	data
}

struct RecordSpec {
	id: u32,
	payload: Vec<u8>,
	used: bool,
	signature: [u8; 4],
}

pub(crate) struct ContainerBuilder {
	signature: [u8; 4],
	version: u32,
	records: Vec<RecordSpec>,
	names: Vec<(Vec<u8>, u32)>,
	name_list: bool,
	duplicate_ids: Vec<u32>,
}

impl ContainerBuilder {
	pub fn new() -> Self {
		Self {
			signature: MQDB_SIGNATURE,
			version: MQDB_VERSION,
			records: Vec::new(),
			names: Vec::new(),
			name_list: true,
			duplicate_ids: Vec::new(),
		}
	}

	pub fn signature(mut self, signature: &[u8; 4]) -> Self {
		self.signature = *signature;
		self
	}

	pub fn version(mut self, version: u32) -> Self {
		self.version = version;
		self
	}

	fn push(mut self, id: u32, payload: &[u8], used: bool, signature: [u8; 4]) -> Self {
		self.records.push(RecordSpec {
			id,
			payload: payload.to_vec(),
			used,
			signature,
		});
		self
	}

	pub fn record(self, id: u32, payload: &[u8]) -> Self {
		self.push(id, payload, true, MQRC_SIGNATURE)
	}

	pub fn unused_record(self, id: u32, payload: &[u8]) -> Self {
		self.push(id, payload, false, MQRC_SIGNATURE)
	}

	pub fn corrupt_record(self, id: u32, payload: &[u8]) -> Self {
		self.push(id, payload, true, *b"JUNK")
	}

	pub fn name(self, name: &str, id: u32) -> Self {
		self.name_raw(name.as_bytes(), id)
	}

	pub fn name_raw(mut self, raw: &[u8], id: u32) -> Self {
		self.names.push((raw.to_vec(), id));
		self
	}

	/// Adds a named record
	pub fn named(self, name: &str, id: u32, payload: &[u8]) -> Self {
		self.record(id, payload).name(name, id)
	}

	pub fn without_name_list(mut self) -> Self {
		self.name_list = false;
		self
	}

	/// Repeats the table of contents entry of `id`
	pub fn duplicate_toc_entry(mut self, id: u32) -> Self {
		self.duplicate_ids.push(id);
		self
	}

	fn name_list_payload(&self) -> Vec<u8> {
		let mut data = Vec::new();
		data.extend_from_slice(&(self.names.len() as u32).to_le_bytes());
		for (raw, id) in &self.names {
			let mut slot = [0u8; NAME_SLOT_SIZE];
			let len = raw.len().min(NAME_SLOT_SIZE);
			slot[..len].copy_from_slice(&raw[..len]);
			data.extend_from_slice(&slot);
			data.extend_from_slice(&id.to_le_bytes());
		}
		data
	}

	pub fn build(self) -> Vec<u8> {
		let mut records = Vec::new();
		if self.name_list {
			records.push(RecordSpec {
				id: 2,
				payload: self.name_list_payload(),
				used: true,
				signature: MQRC_SIGNATURE,
			});
		}
		records.extend(self.records);

		let mut data = Vec::new();
		data.extend_from_slice(&self.signature);
		data.extend_from_slice(&0u32.to_le_bytes());
		data.extend_from_slice(&self.version.to_le_bytes());
		data.extend_from_slice(&[0u8; 12]);

		// table of contents offset, patched below
		let toc_offset_pos = data.len();
		data.extend_from_slice(&0u32.to_le_bytes());

		let mut toc = Vec::new();
		for record in &records {
			let offset = data.len() as u32;
			let size = record.payload.len() as u32;
			// allocate a little slack like real containers do
			let allocated = size + 4;

			data.extend_from_slice(&record.signature);
			data.extend_from_slice(&0u32.to_le_bytes());
			for value in [record.id, size, allocated, record.used as u32, 0] {
				data.extend_from_slice(&value.to_le_bytes());
			}
			data.extend_from_slice(&record.payload);
			data.extend_from_slice(&[0xAA; 4]);

			toc.push([record.id, size, allocated, offset]);
		}

		for id in &self.duplicate_ids {
			if let Some(entry) = toc.iter().find(|entry| entry[0] == *id).copied() {
				toc.push(entry);
			}
		}

		let toc_offset = data.len() as u32;
		data[toc_offset_pos..toc_offset_pos + 4].copy_from_slice(&toc_offset.to_le_bytes());
		data.extend_from_slice(&(toc.len() as u32).to_le_bytes());
		for entry in toc {
			for value in entry {
				data.extend_from_slice(&value.to_le_bytes());
			}
		}

		data
	}
}
