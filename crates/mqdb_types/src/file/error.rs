//! Error types for MQDB container decoding.

use std::{fmt, path::PathBuf};

use thiserror::Error;

/// Location inside a container where a format error was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
	/// The 24-byte container header
	Header,
	/// The table of contents
	Toc,
	/// The name list record payload
	NameList,
	/// A sub-record (`MQRC`) header
	Record,
	/// The `-INDEX.OPT` record payload
	Index,
	/// The `-IMAGES.OPT` record payload
	Images,
}

impl fmt::Display for Section {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Section::Header => "container header",
			Section::Toc => "table of contents",
			Section::NameList => "name list",
			Section::Record => "record header",
			Section::Index => "-INDEX.OPT",
			Section::Images => "-IMAGES.OPT",
		};
		f.write_str(name)
	}
}

/// Errors that can occur while decoding an MQDB container
#[derive(Debug, Error)]
pub enum MqdbError {
	/// The container file could not be opened
	#[error("Cannot open {}: {source}", path.display())]
	Open {
		/// Path that was requested
		path: PathBuf,
		/// Underlying I/O error
		#[source]
		source: std::io::Error,
	},

	/// A signature did not match the expected tag
	#[error("Bad signature in {section}: expected {expected:02X?}, got {actual:02X?}")]
	BadSignature {
		/// Where the signature was read
		section: Section,
		/// Expected tag bytes
		expected: [u8; 4],
		/// Tag bytes found in the stream
		actual: [u8; 4],
	},

	/// The container version is not supported
	#[error("Unsupported MQDB version {actual}, only version {expected} is supported")]
	UnsupportedVersion {
		/// The only supported version
		expected: u32,
		/// Version found in the header
		actual: u32,
	},

	/// A record every container must carry is missing from the table of contents
	#[error("Missing required record with id {id}")]
	MissingRequiredRecord {
		/// Id of the missing record
		id: u32,
	},

	/// Two table of contents entries share the same record id
	#[error("Table of contents contains duplicate record id {id}")]
	DuplicateId {
		/// The duplicated record id
		id: u32,
	},

	/// A decode step would read past the end of a buffer
	#[error(
		"Truncated {section}: need {needed} bytes at offset {offset}, only {available} available"
	)]
	TruncatedPayload {
		/// Payload being decoded
		section: Section,
		/// Offset of the read within the payload
		offset: usize,
		/// Number of bytes the read required
		needed: usize,
		/// Number of bytes left in the payload
		available: usize,
	},

	/// A frame of a packed image does not share the dimensions of the first frame
	#[error(
		"Packed image at offset {offset}: frame {frame} is {width}x{height}, expected {expected_width}x{expected_height}"
	)]
	FrameSizeMismatch {
		/// Offset of the packed image within its blob
		offset: u32,
		/// Index of the offending frame
		frame: usize,
		/// Width of the offending frame
		width: u32,
		/// Height of the offending frame
		height: u32,
		/// Width of the first frame
		expected_width: u32,
		/// Height of the first frame
		expected_height: u32,
	},

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl MqdbError {
	/// Creates a [`MqdbError::BadSignature`] error
	pub fn bad_signature(section: Section, expected: &[u8; 4], actual: &[u8; 4]) -> Self {
		Self::BadSignature {
			section,
			expected: *expected,
			actual: *actual,
		}
	}

	/// Creates a [`MqdbError::TruncatedPayload`] error
	pub fn truncated(section: Section, offset: usize, needed: usize, available: usize) -> Self {
		Self::TruncatedPayload {
			section,
			offset,
			needed,
			available,
		}
	}

	/// Returns `true` if the error describes a malformed container rather than an I/O failure
	pub fn is_format_error(&self) -> bool {
		!matches!(self, Self::Open { .. } | Self::Io(_))
	}
}

/// Result type used throughout the MQDB decoder
pub type Result<T> = std::result::Result<T, MqdbError>;
