//! The structs
//!
use std::time::Duration;
use thiserror::Error;
use crate::client::ClientError;
use crate::config::ExtractionError;
use crate::memory::ThresholdPolicy;
use crate::role::RolePolicy;

/// The validated settings for a single check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckSettings {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
    /// Seconds; the upper bound of the response time performance data.
    pub timeout: f64,
    /// The same timeout, applied to connect, read and write.
    pub timeout_duration: Duration,
    pub thresholds: ThresholdPolicy,
    pub role_policy: RolePolicy,
}
/// An invalid option, detected before connecting.
#[derive(Debug, Error, PartialEq)]
pub enum PolicyError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(f64),

    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Transport(#[from] ClientError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}
