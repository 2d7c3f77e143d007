//! The structs
//!
use std::collections::BTreeMap;

/// All `key:value` fields of an `INFO` report, keyed by field name.
///
/// The fields used by the check are available via the accessor functions,
/// which return the documented defaults when a field is absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusReport {
    pub fields: BTreeMap<String, String>,
}
