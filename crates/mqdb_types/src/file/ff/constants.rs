//! Constants used in `.ff` (MQDB) containers

/// Container signature at the start of every `.ff` file
pub const MQDB_SIGNATURE: [u8; 4] = *b"MQDB";

/// The only supported container version
pub const MQDB_VERSION: u32 = 9;

/// Signature of every sub-record header
pub const MQRC_SIGNATURE: [u8; 4] = *b"MQRC";

/// Size of the container header in bytes
pub const HEADER_SIZE: usize = 24;

/// Size of a table of contents entry in bytes
pub const TOC_ENTRY_SIZE: usize = 16;

/// Size of a sub-record header in bytes
pub const RECORD_HEADER_SIZE: usize = 28;

/// Width of a name slot in the name list record
pub const NAME_SLOT_SIZE: usize = 256;

/// Size of one name list entry (name slot + record id)
pub const NAME_ENTRY_SIZE: usize = NAME_SLOT_SIZE + 4;

/// Name of the record describing packed images and animations
pub const INDEX_RECORD_NAME: &str = "-INDEX.OPT";

/// Name of the record holding packed images
pub const IMAGES_RECORD_NAME: &str = "-IMAGES.OPT";

/// Index entry id marking an animation rather than an image
pub const ANIMATION_SENTINEL_ID: u32 = u32::MAX;
