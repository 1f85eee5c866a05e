//! File type support for `mqdb-rs` project.

mod error;
mod reader;

pub mod ff;
pub mod pimg;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export unified error type
pub use error::{MqdbError, Result, Section};
pub use reader::ByteReader;

// Re-export main file types
pub use ff::{
	File as FfFile, IndexData, Options as FfOptions, RecordId, SpecialId, TableOfContents, TocEntry,
};
pub use pimg::{ImageFrame, ImagePart, PackedImage, PackedImages, Palette};
