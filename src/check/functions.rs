//! The impls and functions
//!
use std::time::{Duration, Instant};
use log::*;
use crate::client::{RedisClient, RespValue};
use crate::config::{ExtractionError, MemoryLimitConfig};
use crate::info::StatusReport;
use crate::memory::{effective_limit, MemoryUsage, ThresholdPolicy};
use crate::nagios::{CheckOutcome, Severity};
use crate::role::RolePolicy;
use crate::check::{CheckError, CheckSettings, PolicyError};
use crate::utility;
use crate::Opts;

impl CheckError {
    pub fn severity(&self) -> Severity {
        match self {
            CheckError::Policy(_) => Severity::Unknown,
            CheckError::Transport(_) | CheckError::Extraction(_) => Severity::Critical,
        }
    }
}

impl From<CheckError> for CheckOutcome {
    fn from(error: CheckError) -> Self {
        CheckOutcome::failed(error.severity(), error.to_string())
    }
}

impl CheckSettings {
    /// Validate the options, and resolve the connection options from the environment and defaults.
    pub fn from_options(options: &Opts) -> Result<CheckSettings, PolicyError>
    {
        let role_policy = RolePolicy::from_option(&options.role)?;

        let host = utility::set_host(&options.host);
        let port = utility::set_port(&options.port)
            .map_err(|e| PolicyError::InvalidOption(format!("{:#}", e)))?;
        let password = utility::set_password(&options.password);
        let timeout = utility::set_timeout(&options.timeout)
            .map_err(|e| PolicyError::InvalidOption(format!("{:#}", e)))?;

        let timeout_duration = match Duration::try_from_secs_f64(timeout) {
            Ok(duration) if !duration.is_zero() => duration,
            _ => return Err(PolicyError::InvalidTimeout(timeout)),
        };

        Ok(CheckSettings {
            host,
            port,
            password,
            timeout,
            timeout_duration,
            thresholds: ThresholdPolicy { warn: options.warn, crit: options.crit },
            role_policy,
        })
    }
}

/// Evaluate the replies of `INFO` and `CONFIG GET maxmemory`.
///
/// This performs no I/O; the only failure is a malformed config reply.
pub fn evaluate(
    info: &str,
    config: &[RespValue],
    response_time: Duration,
    settings: &CheckSettings,
) -> Result<CheckOutcome, ExtractionError>
{
    let statusreport = StatusReport::parse(info);
    let memorylimitconfig = MemoryLimitConfig::extract(config)?;

    let limit = effective_limit(memorylimitconfig.maxmemory, statusreport.total_system_memory());
    let memory = MemoryUsage::evaluate(statusreport.used_memory(), limit, &settings.thresholds);
    let role = settings.role_policy.validate(&statusreport.role(), &statusreport.master_link_status());

    Ok(CheckOutcome::from_evaluations(&memory, &role, response_time, settings.timeout))
}

async fn query_and_evaluate(settings: &CheckSettings) -> Result<CheckOutcome, CheckError>
{
    let mut client = RedisClient::connect(&settings.host, settings.port, settings.timeout_duration).await?;
    if let Some(password) = &settings.password {
        client.auth(password).await?;
    }
    let response_time = client.ping().await?;
    debug!("PING response time: {:?}", response_time);
    let info = client.info().await?;
    let config = client.config_get("maxmemory").await?;

    Ok(evaluate(&info, &config, response_time, settings)?)
}

/// Perform the check against the server in the settings.
pub async fn perform_check(settings: &CheckSettings) -> CheckOutcome
{
    info!("begin check {}:{}", settings.host, settings.port);
    let timer = Instant::now();

    let outcome = query_and_evaluate(settings)
        .await
        .unwrap_or_else(|e| {
            warn!("check {}:{} failed: {}", settings.host, settings.port, e);
            e.into()
        });

    info!("end check: {:?}", timer.elapsed());
    outcome
}

/// Validate the options and perform the check.
pub async fn check_redis(options: &Opts) -> CheckOutcome
{
    match CheckSettings::from_options(options) {
        Ok(settings) => perform_check(&settings).await,
        Err(e) => {
            warn!("invalid options: {}", e);
            CheckError::from(e).into()
        }
    }
}
