//! The structs
//!
use std::time::Duration;

/// The severity of a check result.
///
/// The order of the variants is the precedence when merging verdicts:
/// `Ok < Warning < Critical`, so merging is `max()`.
/// `Unknown` is never merged; it is only produced when the check could not be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Severity {
    #[default]
    Ok,
    Warning,
    Critical,
    Unknown,
}
/// The result of a single evaluation (memory or role).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Verdict {
    pub severity: Severity,
    /// Set when the evaluation found a violation.
    pub message: Option<String>,
}
/// The final result of an invocation, consumed once by [CheckOutcome::report].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckOutcome {
    pub severity: Severity,
    /// The complete message after `REDIS <LABEL> - `, including performance data if any.
    pub message: String,
    /// PING round trip time; absent if the check failed before or during PING.
    pub response_time: Option<Duration>,
    pub percent_used: f64,
}
