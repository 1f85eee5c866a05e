//! Forces dynamic linking of `mqdb-rs` when the `dynamic_linking` feature is enabled.

#![allow(clippy::single_component_path_imports)]

#[allow(unused_imports)]
use mqdb_internal;
