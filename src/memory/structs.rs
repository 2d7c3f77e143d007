//! The structs
//!
use crate::nagios::Verdict;

/// Warning and critical threshold, as a percentage of the effective memory limit.
///
/// `warn <= crit` is not validated. Critical is evaluated first, so with inverted
/// thresholds a warning can never be raised.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdPolicy {
    pub warn: f64,
    pub crit: f64,
}
/// The evaluated memory usage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemoryUsage {
    /// Bytes, `used_memory` from `INFO`.
    pub used_memory: u64,
    /// Bytes, the effective limit. 0 means no limit is known.
    pub limit: u64,
    pub percent_used: f64,
    pub verdict: Verdict,
}
