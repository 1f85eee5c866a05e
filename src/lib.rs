#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `mqdb-rs` reads MQDB (`.ff`) resource containers and the packed images
//! stored inside them.
//!
//! ```no_run
//! use mqdb_rs::prelude::*;
//!
//! # fn main() -> Result<(), MqdbError> {
//! let ff = FfFile::open("Interf.ff")?;
//!
//! let mut data = Vec::new();
//! if ff.record_data_by_name("DLG_HIRE_LEADER.DLG", &mut data)? {
//!     println!("{} bytes", data.len());
//! }
//! # Ok(())
//! # }
//! ```
pub use mqdb_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use mqdb_dylib;
