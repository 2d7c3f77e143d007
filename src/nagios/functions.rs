//! The impls and functions
//!
use std::{fmt, process, time::Duration};
use log::*;
use crate::memory::MemoryUsage;
use crate::nagios::{CheckOutcome, Severity, Verdict};

/// The lower bound of the response time performance data.
const RESPONSE_TIME_LOWER_BOUND: f64 = 0.0;

impl Severity {
    pub fn exit_code(&self) -> i32 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
            Severity::Unknown => 3,
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Verdict {
    pub fn ok() -> Self { Default::default() }
    pub fn warning(message: String) -> Self {
        Verdict { severity: Severity::Warning, message: Some(message) }
    }
    pub fn critical(message: String) -> Self {
        Verdict { severity: Severity::Critical, message: Some(message) }
    }
    /// Merge two verdicts: the highest severity wins, and the messages of both are kept,
    /// `self` first.
    pub fn merge(self, other: Verdict) -> Verdict {
        let message = match (self.message, other.message) {
            (Some(first), Some(second)) => Some(format!("{}; {}", first, second)),
            (first, second) => first.or(second),
        };
        Verdict { severity: self.severity.max(other.severity), message }
    }
}

impl CheckOutcome {
    /// An outcome for a check that could not be performed or failed before evaluation,
    /// such as an invalid option (UNKNOWN) or a network error (CRITICAL).
    pub fn failed(severity: Severity, message: String) -> Self {
        CheckOutcome { severity, message, ..Default::default() }
    }
    /// Combine the memory and role evaluations into the final outcome.
    ///
    /// The message is the memory summary, the (possibly empty) merged violation message,
    /// and the response time performance data:
    /// ```text
    /// Memory used 1/2 MiB (50.00%) |time=0.000123s;;;0.000000;1.000000
    /// ```
    pub fn from_evaluations(
        memory: &MemoryUsage,
        role: &Verdict,
        response_time: Duration,
        timeout: f64,
    ) -> Self
    {
        let verdict = memory.verdict.clone().merge(role.clone());
        let summary = format!("Memory used {}/{} MiB ({:.2}%)",
                              memory.used_memory / 1024 / 1024,
                              memory.limit / 1024 / 1024,
                              memory.percent_used,
        );
        let performance_data = format!("time={:.6}s;;;{:.6};{:.6}",
                                       response_time.as_secs_f64(),
                                       RESPONSE_TIME_LOWER_BOUND,
                                       timeout,
        );
        debug!("severity: {}, summary: {}, performance data: {}", verdict.severity, summary, performance_data);
        CheckOutcome {
            severity: verdict.severity,
            message: format!("{} {}|{}", summary, verdict.message.unwrap_or_default(), performance_data),
            response_time: Some(response_time),
            percent_used: memory.percent_used,
        }
    }
    /// The single line a Nagios plugin prints.
    pub fn line(&self) -> String {
        format!("REDIS {} - {}", self.severity, self.message)
    }
    /// Print the result line and exit with the Nagios exit code of the severity.
    pub fn report(self) -> ! {
        info!("exit code: {}", self.severity.exit_code());
        println!("{}", self.line());
        process::exit(self.severity.exit_code())
    }
}
