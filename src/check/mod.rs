//! Module that performs the complete check of a redis server.
//!
//! The steps are executed in order, and the first failure ends the check:
//! 1. Validate the options: an invalid option is UNKNOWN, and nothing is sent over the network.
//! 2. Connect, `AUTH` (if a password is set), `PING` (timed), `INFO`, `CONFIG GET maxmemory`:
//!    any failure is CRITICAL with the error text.
//! 3. Evaluate memory usage and role, and format the result.
//!
//! Every failure is returned as a [CheckOutcome](crate::nagios::CheckOutcome);
//! nothing in here exits the process.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
