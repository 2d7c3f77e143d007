//! The structs
//!
use thiserror::Error;

/// The memory limit configured on the server, in bytes. 0 means not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryLimitConfig {
    pub maxmemory: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("config reply has an odd number of elements: {0}")]
    OddLength(usize),

    #[error("config reply element {index} is not a scalar: {element}")]
    NotScalar { index: usize, element: String },

    #[error("cannot convert {name} value {value:?} to an integer")]
    NotInteger { name: String, value: String },
}
