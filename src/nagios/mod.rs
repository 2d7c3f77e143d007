//! Module for producing the Nagios plugin result.
//!
//! A Nagios plugin communicates its verdict in two ways:
//! - exactly one line on stdout: `REDIS <LABEL> - <summary>|<performance data>`
//! - the exit code: 0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN.
//!
//! The individual checks produce a [Verdict], which are merged into a [CheckOutcome].
//! [CheckOutcome::report] is the only place where the process exits with a verdict.
//!
mod structs;
mod functions;

pub use structs::*;
