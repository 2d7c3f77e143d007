//! Module for checking the replication role of a redis server.
//!
//! `INFO` reports `role:master` or `role:slave`. A replica also reports `master_link_status`,
//! which must be `up` for the replica to be considered healthy.
//!
mod structs;
mod functions;

pub use structs::*;
