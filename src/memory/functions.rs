//! The impls and functions
//!
use log::*;
use crate::memory::{MemoryUsage, ThresholdPolicy};
use crate::nagios::Verdict;

/// `maxmemory` if it is set (non-zero), otherwise `total_system_memory`, which is 0 if unknown.
pub fn effective_limit(
    maxmemory: u64,
    total_system_memory: u64,
) -> u64
{
    if maxmemory != 0 {
        maxmemory
    } else {
        debug!("maxmemory not set, using total_system_memory: {}", total_system_memory);
        total_system_memory
    }
}

impl MemoryUsage {
    pub fn evaluate(
        used_memory: u64,
        limit: u64,
        thresholds: &ThresholdPolicy,
    ) -> MemoryUsage
    {
        if limit == 0 {
            info!("no memory limit known, skipping memory threshold evaluation");
            return MemoryUsage { used_memory, limit, ..Default::default() };
        }

        let percent_used = used_memory as f64 / limit as f64 * 100_f64;
        debug!("used_memory: {}, limit: {}, percent used: {:.2}", used_memory, limit, percent_used);

        let verdict = if percent_used >= thresholds.crit {
            Verdict::critical(format!("Critical threshold ({:.2}%) exceeded", thresholds.crit))
        } else if percent_used >= thresholds.warn {
            Verdict::warning(format!("Warning threshold ({:.2}%) exceeded", thresholds.warn))
        } else {
            Verdict::ok()
        };

        MemoryUsage { used_memory, limit, percent_used, verdict }
    }
}
