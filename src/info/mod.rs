//! Module for parsing the output of the redis `INFO` command.
//!
//! `INFO` returns a bulk string with CR-LF separated lines:
//! ```text
//! # Server
//! redis_version:7.0.11
//! ...
//! # Memory
//! used_memory:1081456
//! total_system_memory:16663109632
//! ...
//! # Replication
//! role:slave
//! master_link_status:up
//! ```
//! The parser is permissive: lines that are not `key:value` are ignored,
//! and missing or unparsable fields read as empty or zero.
//!
mod structs;
mod functions;

pub use structs::*;
