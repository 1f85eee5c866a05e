//! Core operations for `.ff` containers.
//!
//! This module contains the main `File` structure, which decodes every
//! directory structure of a container once and then serves record payloads
//! on demand.

use std::{
	fs,
	io::{self, BufReader, Cursor, Read, Seek, SeekFrom},
	path::{Path, PathBuf},
	sync::Arc,
};

use log::{debug, info};

use crate::file::{
	error::{MqdbError, Result},
	pimg::{self, PackedImage, PackedImages},
};

use super::{
	constants::{IMAGES_RECORD_NAME, INDEX_RECORD_NAME},
	header::{Header, RecordHeader},
	index::IndexData,
	names::NameList,
	options::Options,
	toc::{RecordId, SpecialId, TableOfContents, TocEntry},
};

/// Where record payloads are read from after construction
#[derive(Debug, Clone)]
enum Source {
	Path(PathBuf),
	Memory(Arc<[u8]>),
}

/// Independent read handle over a [`Source`]
enum Handle<'a> {
	File(BufReader<fs::File>),
	Memory(Cursor<&'a [u8]>),
}

impl Source {
	fn open(&self) -> Result<Handle<'_>> {
		match self {
			Source::Path(path) => fs::File::open(path)
				.map(|file| Handle::File(BufReader::new(file)))
				.map_err(|source| MqdbError::Open {
					path: path.clone(),
					source,
				}),
			Source::Memory(data) => Ok(Handle::Memory(Cursor::new(&data[..]))),
		}
	}
}

impl Read for Handle<'_> {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		match self {
			Handle::File(reader) => reader.read(buf),
			Handle::Memory(reader) => reader.read(buf),
		}
	}
}

impl Seek for Handle<'_> {
	fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
		match self {
			Handle::File(reader) => reader.seek(pos),
			Handle::Memory(reader) => reader.seek(pos),
		}
	}
}

/// Reads exactly `entry.size` payload bytes of a record into `data`.
///
/// `data` is left empty when the read fails.
fn read_payload_into<R: Read + Seek>(reader: &mut R, entry: &TocEntry, data: &mut Vec<u8>) -> Result<()> {
	reader.seek(SeekFrom::Start(entry.payload_offset()))?;

	data.clear();
	if let Err(e) = reader.by_ref().take(entry.size as u64).read_to_end(data) {
		data.clear();
		return Err(e.into());
	}

	if data.len() != entry.size as usize {
		let read = data.len();
		data.clear();
		return Err(io::Error::new(
			io::ErrorKind::UnexpectedEof,
			format!("record {} declares {} bytes, only {} could be read", entry.record_id, entry.size, read),
		)
		.into());
	}

	Ok(())
}

fn read_payload<R: Read + Seek>(reader: &mut R, entry: &TocEntry) -> Result<Vec<u8>> {
	let mut data = Vec::new();
	read_payload_into(reader, entry, &mut data)?;
	Ok(data)
}

/// Decoded `.ff` (MQDB) container.
///
/// Construction reads the header, the table of contents, the name list,
/// `-INDEX.OPT` and (unless disabled in [`Options`]) `-IMAGES.OPT`. Any
/// structural error aborts construction. Afterwards the value is immutable;
/// every payload read opens its own handle, so a `File` can be shared between
/// threads.
#[derive(Debug, Clone)]
pub struct File {
	source: Source,
	header: Header,
	toc: TableOfContents,
	names: NameList,
	index: IndexData,
	packed_images: PackedImages,
}

impl File {
	/// Opens a container from the specified path with default [`Options`].
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - The file cannot be opened or read
	/// - The header signature or version is wrong
	/// - The table of contents holds duplicate ids
	/// - The name list record is missing or a record header is inconsistent
	/// - An index or image payload is truncated
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::open_with(path, Options::default())
	}

	/// Opens a container from the specified path
	pub fn open_with(path: impl AsRef<Path>, options: Options) -> Result<Self> {
		let path = path.as_ref();
		info!("Opening MQDB file: {}", path.display());

		let file = fs::File::open(path).map_err(|source| MqdbError::Open {
			path: path.to_path_buf(),
			source,
		})?;

		Self::decode(&mut BufReader::new(file), Source::Path(path.to_path_buf()), options)
	}

	/// Decodes a container held in memory with default [`Options`]
	pub fn from_bytes(data: &[u8]) -> Result<Self> {
		Self::from_bytes_with(data, Options::default())
	}

	/// Decodes a container held in memory
	pub fn from_bytes_with(data: &[u8], options: Options) -> Result<Self> {
		Self::from_shared(Arc::from(data), options)
	}

	fn from_shared(data: Arc<[u8]>, options: Options) -> Result<Self> {
		let source = Source::Memory(Arc::clone(&data));
		Self::decode(&mut Cursor::new(&data[..]), source, options)
	}

	fn decode<R: Read + Seek>(reader: &mut R, source: Source, options: Options) -> Result<Self> {
		let header = Header::from_reader(reader)?;
		let toc = TableOfContents::from_reader(reader)?;

		let name_list_id = RecordId::from(SpecialId::NameList);
		let name_list = *toc.get(name_list_id).ok_or(MqdbError::MissingRequiredRecord {
			id: name_list_id,
		})?;

		let payload = read_payload(reader, &name_list)?;
		let names = NameList::resolve(&payload, &toc, |entry| {
			reader.seek(SeekFrom::Start(entry.offset as u64))?;
			RecordHeader::from_reader(reader)
		})?;

		debug!(
			"Resolved {} names, skipped {}",
			names.len(),
			names.entries().len() - names.len()
		);

		let index = match Self::lookup(&toc, &names, INDEX_RECORD_NAME) {
			Some(entry) => IndexData::from_bytes(&read_payload(reader, entry)?)?,
			None => {
				debug!("No {} record, index left empty", INDEX_RECORD_NAME);
				IndexData::default()
			}
		};

		let packed_images = match Self::lookup(&toc, &names, IMAGES_RECORD_NAME) {
			Some(entry) if options.read_images => {
				pimg::parse_packed_images(&read_payload(reader, entry)?, options.check_frame_sizes)?
			}
			Some(_) => PackedImages::new(),
			None => {
				debug!("No {} record, no packed images", IMAGES_RECORD_NAME);
				PackedImages::new()
			}
		};

		Ok(Self {
			source,
			header,
			toc,
			names,
			index,
			packed_images,
		})
	}

	fn lookup<'a>(toc: &'a TableOfContents, names: &NameList, name: &str) -> Option<&'a TocEntry> {
		toc.get(names.get(name)?)
	}

	/// Returns the validated container header
	pub fn header(&self) -> &Header {
		&self.header
	}

	/// Returns the table of contents
	pub fn toc(&self) -> &TableOfContents {
		&self.toc
	}

	/// Returns the resolved name list
	pub fn name_list(&self) -> &NameList {
		&self.names
	}

	/// Returns all resolved record names in lexical order
	pub fn names(&self) -> Vec<String> {
		self.names.names().map(str::to_owned).collect()
	}

	/// Returns the table of contents entry for a record id
	pub fn find_toc_entry(&self, id: RecordId) -> Option<&TocEntry> {
		self.toc.get(id)
	}

	/// Returns the table of contents entry for a special record
	pub fn find_special(&self, id: SpecialId) -> Option<&TocEntry> {
		self.toc.get(id.into())
	}

	/// Returns the table of contents entry for a record name
	pub fn find_by_name(&self, name: &str) -> Option<&TocEntry> {
		Self::lookup(&self.toc, &self.names, name)
	}

	/// Reads the payload of a resolved record into `data`.
	///
	/// Opens an independent handle, so concurrent reads do not interfere.
	/// On error `data` is left empty, never holding a partial payload.
	pub fn read_record_into(&self, entry: &TocEntry, data: &mut Vec<u8>) -> Result<()> {
		let mut handle = self.source.open()?;
		read_payload_into(&mut handle, entry, data)
	}

	/// Reads the payload of a resolved record
	pub fn read_record(&self, entry: &TocEntry) -> Result<Vec<u8>> {
		let mut data = Vec::new();
		self.read_record_into(entry, &mut data)?;
		Ok(data)
	}

	/// Reads the payload of the record with `id` into `data`.
	///
	/// Returns `Ok(false)` and leaves `data` untouched if no such record exists.
	/// If the record exists but cannot be read in full, `data` is cleared and
	/// the error is returned.
	pub fn record_data(&self, id: RecordId, data: &mut Vec<u8>) -> Result<bool> {
		let Some(entry) = self.find_toc_entry(id) else {
			return Ok(false);
		};
		self.read_record_into(entry, data)?;
		Ok(true)
	}

	/// Reads the payload of the record called `name` into `data`.
	///
	/// Returns `Ok(false)` and leaves `data` untouched if the name is unknown.
	/// A failed read clears `data`, as in [`File::record_data`].
	pub fn record_data_by_name(&self, name: &str, data: &mut Vec<u8>) -> Result<bool> {
		let Some(entry) = self.find_by_name(name) else {
			return Ok(false);
		};
		self.read_record_into(entry, data)?;
		Ok(true)
	}

	/// Returns the decoded `-INDEX.OPT` contents
	pub fn index(&self) -> &IndexData {
		&self.index
	}

	/// Returns every packed image keyed by its offset in `-IMAGES.OPT`
	pub fn packed_images(&self) -> &PackedImages {
		&self.packed_images
	}

	/// Returns the packed image stored at `offset` in `-IMAGES.OPT`
	pub fn packed_image(&self, offset: u32) -> Option<&PackedImage> {
		self.packed_images.get(&offset)
	}

	/// Returns the packed image for an image index entry name
	pub fn image_for(&self, name: &str) -> Option<&PackedImage> {
		let images = &self.index.images;
		let info = images.get(images.position(name)?)?.info;
		self.packed_image(info.offset)
	}

	/// Returns the packed image for an animation index entry name.
	///
	/// Animation offsets are resolved against `-IMAGES.OPT` only. Some
	/// containers also carry an `-ANIMS.OPT` blob; it is not decoded, so an
	/// animation stored there is reported as `None`.
	pub fn animation_for(&self, name: &str) -> Option<&PackedImage> {
		let animations = &self.index.animations;
		let info = animations.get(animations.position(name)?)?.info;
		self.packed_image(info.offset)
	}
}

impl TryFrom<&[u8]> for File {
	type Error = MqdbError;

	fn try_from(value: &[u8]) -> Result<Self> {
		Self::from_bytes(value)
	}
}

impl TryFrom<Vec<u8>> for File {
	type Error = MqdbError;

	fn try_from(value: Vec<u8>) -> Result<Self> {
		Self::from_shared(Arc::from(value), Options::default())
	}
}
