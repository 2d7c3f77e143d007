//! The impls and functions
//!
use std::{fmt, str::FromStr};
use log::*;
use crate::check::PolicyError;
use crate::nagios::Verdict;
use crate::role::{Role, RolePolicy};

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Master => "master",
            Role::Slave => "slave",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = PolicyError;

    fn from_str(role: &str) -> Result<Self, Self::Err> {
        match role {
            "master" => Ok(Role::Master),
            "slave" => Ok(Role::Slave),
            other => Err(PolicyError::UnknownRole(other.to_string())),
        }
    }
}

impl RolePolicy {
    /// Build the policy from the role option. An empty role disables the check,
    /// any other value than `master` or `slave` is a [PolicyError].
    pub fn from_option(role: &str) -> Result<RolePolicy, PolicyError>
    {
        if role.is_empty() {
            info!("role check disabled");
            return Ok(RolePolicy { expected: None });
        }
        Ok(RolePolicy { expected: Some(role.parse()?) })
    }
    /// Check the reported role, and for a replica the replication link.
    pub fn validate(
        &self,
        role: &str,
        master_link_status: &str,
    ) -> Verdict
    {
        let Some(expected) = self.expected else { return Verdict::ok() };
        debug!("expected role: {}, reported role: {}, master_link_status: {}", expected, role, master_link_status);

        if role != expected.as_str() {
            Verdict::critical(format!("Unexpected role. Expected={}, Actual={}", expected, role))
        } else if expected == Role::Slave && master_link_status != "up" {
            Verdict::critical(format!("master_link_status is not up (actual: {})", master_link_status))
        } else {
            Verdict::ok()
        }
    }
}
