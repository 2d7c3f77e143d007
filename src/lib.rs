//! check_redis: a Nagios compatible check for a redis server.
//!
//! The check reads `INFO` and `CONFIG GET maxmemory`, evaluates the memory used
//! against a warning and critical percentage, verifies the replication role,
//! and reports a single line plus the Nagios exit code.
//!
use clap::Parser;

pub mod check;
pub mod client;
pub mod config;
pub mod info;
pub mod memory;
pub mod nagios;
pub mod role;
pub mod utility;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: &str = "6379";
pub const DEFAULT_TIMEOUT: &str = "1.0";
pub const DEFAULT_ROLE: &str = "master";
pub const DEFAULT_WARN: f64 = 90.0;
pub const DEFAULT_CRIT: f64 = 95.0;

/// Check redis memory usage and replication role.
///
/// Host, port, timeout and password can also be set via CHECK_REDIS_HOST, CHECK_REDIS_PORT,
/// CHECK_REDIS_TIMEOUT and CHECK_REDIS_PASSWORD, in the environment or in .env.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Opts {
    /// Server hostname or IP address [default: 127.0.0.1]
    #[arg(short = 'H', long, value_name = "hostname")]
    pub host: Option<String>,
    /// TCP port [default: 6379]
    #[arg(short, long, value_name = "port")]
    pub port: Option<String>,
    /// Timeout in seconds, for connect, read and write [default: 1.0]
    #[arg(short, long, value_name = "seconds")]
    pub timeout: Option<String>,
    /// Password
    #[arg(short = 'a', long, value_name = "password")]
    pub password: Option<String>,
    /// Expected role: master or slave; an empty role disables the role check
    #[arg(short, long, value_name = "role", default_value = DEFAULT_ROLE)]
    pub role: String,
    /// Warning threshold memory used %
    #[arg(short, long, value_name = "percent", default_value_t = DEFAULT_WARN)]
    pub warn: f64,
    /// Critical threshold memory used %
    #[arg(short, long, value_name = "percent", default_value_t = DEFAULT_CRIT)]
    pub crit: f64,
}
