//! The impls and functions
//!
use log::*;
use crate::client::RespValue;
use crate::config::{ExtractionError, MemoryLimitConfig};

const MAXMEMORY: &str = "maxmemory";

/// The scalar text of a reply element; `None` for a null bulk string.
fn scalar(
    index: usize,
    element: &RespValue,
) -> Result<Option<String>, ExtractionError>
{
    match element {
        RespValue::BulkString(value) => Ok(value.clone()),
        RespValue::SimpleString(value) => Ok(Some(value.clone())),
        RespValue::Integer(value) => Ok(Some(value.to_string())),
        other => Err(ExtractionError::NotScalar { index, element: format!("{:?}", other) }),
    }
}

impl MemoryLimitConfig {
    pub fn new() -> Self { Default::default() }
    /// Extract `maxmemory` from a `CONFIG GET` reply.
    ///
    /// If `maxmemory` is not in the reply, or its value is null, `maxmemory` is 0.
    /// The whole reply is validated, including pairs that are not `maxmemory`.
    pub fn extract(values: &[RespValue]) -> Result<MemoryLimitConfig, ExtractionError>
    {
        if values.len() % 2 != 0 {
            return Err(ExtractionError::OddLength(values.len()));
        }

        let mut memorylimitconfig = MemoryLimitConfig::new();
        for (pair, name_value) in values.chunks(2).enumerate() {
            let name = scalar(pair * 2, &name_value[0])?.unwrap_or_default();
            let value = scalar(pair * 2 + 1, &name_value[1])?;
            if name != MAXMEMORY {
                debug!("ignoring config parameter {}", name);
                continue;
            }
            if let Some(value) = value {
                memorylimitconfig.maxmemory = value.parse()
                    .map_err(|_e| ExtractionError::NotInteger { name: name.to_string(), value: value.to_string() })?;
            }
        }
        debug!("maxmemory: {}", memorylimitconfig.maxmemory);
        Ok(memorylimitconfig)
    }
}
