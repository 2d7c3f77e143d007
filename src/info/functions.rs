//! The impls and functions
//!
use log::*;
use crate::info::StatusReport;

impl StatusReport {
    pub fn new() -> Self { Default::default() }
    /// Parse the `INFO` text.
    ///
    /// A line is split on the first `:` only, so values may contain `:`.
    /// If a key occurs more than once, the last occurrence wins.
    pub fn parse(info: &str) -> StatusReport
    {
        let mut statusreport = StatusReport::new();
        for line in info.lines() {
            if line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once(':') {
                statusreport.fields.insert(key.to_string(), value.to_string());
            }
        }
        debug!("parsed {} fields from INFO", statusreport.fields.len());
        statusreport
    }
    fn string_field(&self, key: &str) -> String {
        self.fields.get(key).cloned().unwrap_or_default()
    }
    fn integer_field(&self, key: &str) -> u64 {
        match self.fields.get(key) {
            Some(value) => value.parse().unwrap_or_else(|e| {
                debug!("field {}: value {} is not an integer ({}), using 0", key, value, e);
                0
            }),
            None => 0,
        }
    }
    pub fn role(&self) -> String { self.string_field("role") }
    pub fn master_link_status(&self) -> String { self.string_field("master_link_status") }
    pub fn used_memory(&self) -> u64 { self.integer_field("used_memory") }
    pub fn total_system_memory(&self) -> u64 { self.integer_field("total_system_memory") }
}
