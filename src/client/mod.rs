//! Module for talking to a redis server.
//!
//! This is a minimal RESP2 client: it encodes commands as an array of bulk strings,
//! and decodes the five RESP2 reply types. It implements exactly the commands the check needs:
//! `AUTH`, `PING`, `INFO` and `CONFIG GET`.
//!
//! Every connect, read and write is bounded by the same timeout.
//! An error reply from the server is returned as [ClientError::Server] with the text of the server.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
