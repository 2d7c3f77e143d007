//! Module for evaluating the memory usage of a redis server.
//!
//! The percentage used is `used_memory` from `INFO` against the effective limit:
//! `maxmemory` from `CONFIG GET maxmemory` if set, otherwise `total_system_memory` from `INFO`.
//! If neither is known, the percentage is 0 and memory usage can not raise the severity.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
