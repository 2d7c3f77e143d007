//! Module for extracting `maxmemory` from the reply of `CONFIG GET maxmemory`.
//!
//! The reply is a flat list of alternating parameter names and values:
//! ```text
//! 1) "maxmemory"
//! 2) "104857600"
//! ```
//! `maxmemory` 0 means no limit is configured.
//!
mod structs;
mod functions;

pub use structs::*;
