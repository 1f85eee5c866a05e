//! Bounded little-endian reader over an in-memory payload.
//!
//! Record payloads are read into a buffer once and then decoded through a
//! [`ByteReader`], which carries its own position. Every read checks the
//! remaining length and reports overruns as [`MqdbError::TruncatedPayload`]
//! tagged with the payload's [`Section`].

use super::error::{MqdbError, Result, Section};

/// Read cursor over a byte slice
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
	data: &'a [u8],
	pos: usize,
	section: Section,
}

impl<'a> ByteReader<'a> {
	/// Creates a reader positioned at the start of `data`
	pub fn new(data: &'a [u8], section: Section) -> Self {
		Self {
			data,
			pos: 0,
			section,
		}
	}

	/// Current byte position
	pub fn position(&self) -> usize {
		self.pos
	}

	/// Total length of the underlying data
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Whether the underlying data is empty
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Whether every byte has been consumed
	pub fn is_at_end(&self) -> bool {
		self.pos >= self.data.len()
	}

	/// Remaining bytes from the current position
	pub fn remaining(&self) -> usize {
		self.data.len().saturating_sub(self.pos)
	}

	fn ensure(&self, needed: usize) -> Result<()> {
		if self.remaining() < needed {
			return Err(MqdbError::truncated(self.section, self.pos, needed, self.remaining()));
		}
		Ok(())
	}

	/// Reads `n` bytes without copying
	pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
		self.ensure(n)?;
		let slice = &self.data[self.pos..self.pos + n];
		self.pos += n;
		Ok(slice)
	}

	/// Reads a fixed-size array
	pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let mut out = [0u8; N];
		out.copy_from_slice(self.read_bytes(N)?);
		Ok(out)
	}

	/// Reads a little-endian `u32`
	pub fn read_u32(&mut self) -> Result<u32> {
		self.read_array::<4>().map(u32::from_le_bytes)
	}

	/// Reads a NUL-terminated string, returning its bytes without the terminator.
	///
	/// The terminator is consumed. A string that runs to the end of the data
	/// without a terminator is a truncation error.
	pub fn read_cstr(&mut self) -> Result<&'a [u8]> {
		let rest = &self.data[self.pos.min(self.data.len())..];
		let Some(len) = rest.iter().position(|&b| b == 0) else {
			return Err(MqdbError::truncated(self.section, self.pos, rest.len() + 1, rest.len()));
		};
		let bytes = &rest[..len];
		self.pos += len + 1;
		Ok(bytes)
	}

	/// Reads a fixed-width, NUL-padded name slot of `N` bytes.
	///
	/// The last byte of the slot is treated as a terminator regardless of its
	/// content, so unterminated slots yield at most `N - 1` bytes.
	pub fn read_name_slot<const N: usize>(&mut self) -> Result<&'a [u8]> {
		let slot = self.read_bytes(N)?;
		let usable = &slot[..N.saturating_sub(1)];
		let len = usable.iter().position(|&b| b == 0).unwrap_or(usable.len());
		Ok(&usable[..len])
	}
}
