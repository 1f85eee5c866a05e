//! Packed image palette support.
//!
//! Every packed image starts with a 1035-byte palette block: an 11-byte header
//! followed by 256 colour entries of 4 bytes each. The block is kept verbatim;
//! [`Palette::color`] interprets an entry as blue, green, red, reserved.

use std::fmt;

/// Size of the palette header in bytes
pub const PALETTE_HEADER_SIZE: usize = 11;

/// Number of colours in a palette
pub const PALETTE_COLOR_COUNT: usize = 256;

/// Size of the whole palette block in bytes
pub const PALETTE_SIZE: usize = PALETTE_HEADER_SIZE + PALETTE_COLOR_COUNT * 4;

/// RGB colour stored in a palette entry
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
}

impl Color {
	/// Creates a new colour
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self {
			r,
			g,
			b,
		}
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
	}
}

/// Raw palette block of a packed image
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Palette {
	raw: Box<[u8; PALETTE_SIZE]>,
}

impl Palette {
	/// Wraps a raw palette block
	pub fn new(raw: [u8; PALETTE_SIZE]) -> Self {
		Self {
			raw: Box::new(raw),
		}
	}

	/// The complete palette block, exactly as stored
	pub fn as_bytes(&self) -> &[u8; PALETTE_SIZE] {
		&self.raw
	}

	/// The 11-byte palette header
	pub fn header(&self) -> &[u8] {
		&self.raw[..PALETTE_HEADER_SIZE]
	}

	/// Raw 4-byte entry for a palette index
	pub fn entry(&self, index: u8) -> [u8; 4] {
		let start = PALETTE_HEADER_SIZE + index as usize * 4;
		let mut entry = [0u8; 4];
		entry.copy_from_slice(&self.raw[start..start + 4]);
		entry
	}

	/// Colour for a palette index
	pub fn color(&self, index: u8) -> Color {
		let [b, g, r, _] = self.entry(index);
		Color::rgb(r, g, b)
	}

	/// Iterates all 256 colours in index order
	pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
		(0..=u8::MAX).map(|index| self.color(index))
	}
}

impl fmt::Debug for Palette {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Palette").field("header", &self.header()).finish_non_exhaustive()
	}
}
