//! Container header and sub-record header of `.ff` files.

use std::{fmt, io::Read};

use crate::file::{
	error::{MqdbError, Result, Section},
	reader::ByteReader,
};

use super::constants::{HEADER_SIZE, MQDB_SIGNATURE, MQDB_VERSION, MQRC_SIGNATURE, RECORD_HEADER_SIZE};

/// MQDB container header (24 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
	/// Signature, always `MQDB` once validated
	pub signature: [u8; 4],
	/// Unknown field
	pub unknown: u32,
	/// Container version
	pub version: u32,
	/// Unknown trailing fields
	pub unknown2: [u32; 3],
}

impl Header {
	/// Size of the header in bytes
	pub const SIZE: usize = HEADER_SIZE;

	/// Parses and validates a header from a byte slice.
	///
	/// # Errors
	///
	/// Returns [`MqdbError::BadSignature`] if the signature is not `MQDB`, and
	/// [`MqdbError::UnsupportedVersion`] if the version is not 9.
	pub fn from_bytes(data: &[u8]) -> Result<Self> {
		let mut reader = ByteReader::new(data, Section::Header);

		let signature = reader.read_array::<4>()?;
		if signature != MQDB_SIGNATURE {
			return Err(MqdbError::bad_signature(Section::Header, &MQDB_SIGNATURE, &signature));
		}

		let unknown = reader.read_u32()?;
		let version = reader.read_u32()?;
		if version != MQDB_VERSION {
			return Err(MqdbError::UnsupportedVersion {
				expected: MQDB_VERSION,
				actual: version,
			});
		}

		Ok(Self {
			signature,
			unknown,
			version,
			unknown2: [reader.read_u32()?, reader.read_u32()?, reader.read_u32()?],
		})
	}

	/// Reads and validates a header, leaving the reader just past it
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
		let mut buffer = [0u8; HEADER_SIZE];
		reader.read_exact(&mut buffer)?;
		Self::from_bytes(&buffer)
	}
}

impl fmt::Display for Header {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "MQDB {{ version: {} }}", self.version)
	}
}

/// Sub-record header (28 bytes) that precedes every record payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordHeader {
	/// Signature, `MQRC` for well-formed records
	pub signature: [u8; 4],
	/// Unknown field
	pub unknown: u32,
	/// Id of the record
	pub record_id: u32,
	/// Size of the payload in bytes
	pub size: u32,
	/// Space reserved for the record in the file
	pub size_allocated: u32,
	/// Non-zero when the record is active, zero when it was deleted
	pub used: u32,
	/// Unknown field
	pub unknown2: u32,
}

impl RecordHeader {
	/// Size of the header in bytes
	pub const SIZE: usize = RECORD_HEADER_SIZE;

	/// Parses a header from a byte slice without checking its signature
	pub fn from_bytes(data: &[u8]) -> Result<Self> {
		let mut reader = ByteReader::new(data, Section::Record);

		Ok(Self {
			signature: reader.read_array::<4>()?,
			unknown: reader.read_u32()?,
			record_id: reader.read_u32()?,
			size: reader.read_u32()?,
			size_allocated: reader.read_u32()?,
			used: reader.read_u32()?,
			unknown2: reader.read_u32()?,
		})
	}

	/// Reads a header from any reader without checking its signature
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
		let mut buffer = [0u8; RECORD_HEADER_SIZE];
		reader.read_exact(&mut buffer)?;
		Self::from_bytes(&buffer)
	}

	/// Fails with [`MqdbError::BadSignature`] unless the signature is `MQRC`
	pub fn validate(&self) -> Result<()> {
		if self.signature != MQRC_SIGNATURE {
			return Err(MqdbError::bad_signature(Section::Record, &MQRC_SIGNATURE, &self.signature));
		}
		Ok(())
	}

	/// Whether the record is active
	pub fn is_used(&self) -> bool {
		self.used != 0
	}
}
