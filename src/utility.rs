//! Utilities
//!
//! The connection options are resolved in the following order:
//! 1. The command line option.
//! 2. The environment variable, which can be set in `.env` (read via `dotenv().ok()` in main).
//! 3. The default.
use std::env;
use log::*;
use anyhow::{Result, Context};

use crate::DEFAULT_HOST;
use crate::DEFAULT_PORT;
use crate::DEFAULT_TIMEOUT;

/// Return the option if set, otherwise the environment variable if set, otherwise the default.
pub fn option_env_or_default(
    option: &Option<String>,
    env_name: &str,
    default: &str,
) -> String
{
    match option {
        Some(value) => {
            debug!("{}: argument set: using: {}", env_name, value);
            value.to_string()
        }
        None => {
            match env::var(env_name) {
                Ok(set_var) => {
                    info!("{}: argument not set: set via environment: {}", env_name, set_var);
                    set_var
                }
                Err(_e) => {
                    debug!("{}: argument not set: and not set via environment: using default: {}", env_name, default);
                    default.to_string()
                }
            }
        }
    }
}

pub fn set_host(option: &Option<String>) -> String
{
    option_env_or_default(option, "CHECK_REDIS_HOST", DEFAULT_HOST)
}

pub fn set_port(option: &Option<String>) -> Result<u16>
{
    let port = option_env_or_default(option, "CHECK_REDIS_PORT", DEFAULT_PORT);
    port.parse::<u16>()
        .with_context(|| format!("port: {}", port))
}

pub fn set_timeout(option: &Option<String>) -> Result<f64>
{
    let timeout = option_env_or_default(option, "CHECK_REDIS_TIMEOUT", DEFAULT_TIMEOUT);
    timeout.parse::<f64>()
        .with_context(|| format!("timeout: {}", timeout))
}

/// The password can be set via the environment to keep it out of the process list.
/// The value is never logged.
pub fn set_password(option: &Option<String>) -> Option<String>
{
    match option {
        Some(password) => Some(password.to_string()),
        None => match env::var("CHECK_REDIS_PASSWORD") {
            Ok(password) => {
                info!("password not set: set via environment: CHECK_REDIS_PASSWORD");
                Some(password)
            }
            Err(_e) => None,
        },
    }
    .filter(|password| !password.is_empty())
}
