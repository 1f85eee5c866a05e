//! Benchmark helper utilities for mqdb-rs
//!
//! This module provides utilities for generating synthetic `.ff` containers
//! for the benchmark suite and the integration tests. Real game containers
//! are large and not redistributable, so every workload is built in memory.

use mqdb_types::file::{
	ff::{IMAGES_RECORD_NAME, MQDB_SIGNATURE, MQDB_VERSION, MQRC_SIGNATURE, NAME_SLOT_SIZE, SpecialId},
	pimg::PALETTE_SIZE,
};

/// Writes well-formed MQDB containers.
///
/// The name list record always comes first, followed by the other records in
/// insertion order and the table of contents at the end of the file.
#[derive(Debug, Default, Clone)]
pub struct ContainerBuilder {
	records: Vec<(u32, Vec<u8>, bool)>,
	names: Vec<(String, u32)>,
}

impl ContainerBuilder {
	/// Creates an empty container
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an active record
	pub fn record(mut self, id: u32, payload: &[u8]) -> Self {
		self.records.push((id, payload.to_vec(), true));
		self
	}

	/// Adds a record marked as deleted
	pub fn deleted(mut self, id: u32, payload: &[u8]) -> Self {
		self.records.push((id, payload.to_vec(), false));
		self
	}

	/// Adds a name list entry
	pub fn name(mut self, name: &str, id: u32) -> Self {
		self.names.push((name.to_string(), id));
		self
	}

	/// Adds an active record and its name
	pub fn named(self, name: &str, id: u32, payload: &[u8]) -> Self {
		self.record(id, payload).name(name, id)
	}

	/// Serializes the container
	pub fn build(&self) -> Vec<u8> {
		// Name list payload: count, then (256-byte slot, id) pairs
		let mut name_list = Vec::with_capacity(4 + self.names.len() * (NAME_SLOT_SIZE + 4));
		name_list.extend_from_slice(&(self.names.len() as u32).to_le_bytes());
		for (name, id) in &self.names {
			let mut slot = [0u8; NAME_SLOT_SIZE];
			let len = name.len().min(NAME_SLOT_SIZE - 1);
			slot[..len].copy_from_slice(&name.as_bytes()[..len]);
			name_list.extend_from_slice(&slot);
			name_list.extend_from_slice(&id.to_le_bytes());
		}

		// Header: signature, unknown, version, 12 unknown bytes
		let mut data = Vec::new();
		data.extend_from_slice(&MQDB_SIGNATURE);
		data.extend_from_slice(&0u32.to_le_bytes());
		data.extend_from_slice(&MQDB_VERSION.to_le_bytes());
		data.extend_from_slice(&[0u8; 12]);

		// Table of contents offset (placeholder)
		let toc_offset_pos = data.len();
		data.extend_from_slice(&0u32.to_le_bytes());

		let name_list_id = u32::from(SpecialId::NameList);
		let records = std::iter::once((name_list_id, &name_list, true))
			.chain(self.records.iter().map(|(id, payload, used)| (*id, payload, *used)));

		let mut toc = Vec::with_capacity(self.records.len() + 1);
		for (id, payload, used) in records {
			let offset = data.len() as u32;
			let size = payload.len() as u32;

			data.extend_from_slice(&MQRC_SIGNATURE);
			for value in [0, id, size, size, used as u32, 0] {
				data.extend_from_slice(&value.to_le_bytes());
			}
			data.extend_from_slice(payload);

			toc.push([id, size, size, offset]);
		}

		// Patch the table of contents offset and append the table
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

/// Builds an `-INDEX.OPT` payload from `(id, name, offset, size)` rows
pub fn index_payload(rows: &[(u32, &str, u32, u32)]) -> Vec<u8> {
	let mut data = (rows.len() as u32).to_le_bytes().to_vec();
	for &(id, name, offset, size) in rows {
		data.extend_from_slice(&id.to_le_bytes());
		data.extend_from_slice(name.as_bytes());
		data.push(0);
		data.extend_from_slice(&offset.to_le_bytes());
		data.extend_from_slice(&size.to_le_bytes());
	}
	data
}

/// Builds one packed image from `(name, width, height)` frames.
///
/// Every frame gets a single part covering the whole frame.
pub fn packed_image_payload(frames: &[(&str, u32, u32)]) -> Vec<u8> {
	let mut data = vec![0u8; PALETTE_SIZE];
	data.extend_from_slice(&(frames.len() as u32).to_le_bytes());
	for &(name, width, height) in frames {
		data.extend_from_slice(name.as_bytes());
		data.push(0);
		for value in [1, width, height, 0, 0, 0, 0, width, height] {
			data.extend_from_slice(&value.to_le_bytes());
		}
	}
	data
}

/// Generates a test `.ff` container.
///
/// The container holds `record_count` records named `RECORDnnnnn.BIN`, each
/// with a `record_size`-byte payload, plus optional `-IMAGES.OPT` data.
pub fn generate_test_ff_data(record_count: u32, record_size: usize, images: Option<&[u8]>) -> Vec<u8> {
	let mut builder = ContainerBuilder::new();
	for i in 0..record_count {
		builder = builder.named(&format!("RECORD{:05}.BIN", i), 100 + i, &vec![(i & 0xFF) as u8; record_size]);
	}

	if let Some(images) = images {
		builder = builder.named(IMAGES_RECORD_NAME, 99, images);
	}

	builder.build()
}

/// Generates an `-IMAGES.OPT` blob with `image_count` images.
///
/// Every image has `frames` frames of 64x64 pixels split into 4x4 parts.
pub fn generate_test_images_data(image_count: u32, frames: u32) -> Vec<u8> {
	let mut data = Vec::new();

	for image in 0..image_count {
		// Palette (11-byte header + 256 BGRX colours)
		data.extend_from_slice(&[0u8; 11]);
		for i in 0..=255u8 {
			data.extend_from_slice(&[i.wrapping_mul(3), i.wrapping_mul(2), i, 0x00]);
		}

		data.extend_from_slice(&frames.to_le_bytes());
		for frame in 0..frames {
			data.extend_from_slice(format!("IMG{:04}_{:02}", image, frame).as_bytes());
			data.push(0);

			data.extend_from_slice(&16u32.to_le_bytes());
			data.extend_from_slice(&64u32.to_le_bytes());
			data.extend_from_slice(&64u32.to_le_bytes());
			for part in 0..16u32 {
				let (x, y) = ((part % 4) * 16, (part / 4) * 16);
				for value in [x, y, x, y, 16, 16] {
					data.extend_from_slice(&value.to_le_bytes());
				}
			}
		}
	}

	data
}
