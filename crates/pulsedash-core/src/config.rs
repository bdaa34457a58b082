//! Environment-driven dashboard configuration.
//!
//! The parsing core is decoupled from the process environment through a
//! lookup closure so tests can drive it with a plain `HashMap` — no
//! `set_var`/`remove_var` needed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Runtime configuration for the dashboard client and mappers.
///
/// Every variable has a default; a bare environment yields a working config
/// pointed at the local analytics service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub api_url: String,
    pub request_timeout_secs: u64,
    /// Number of newest engagement records charted, most recent window first.
    pub engagement_window: usize,
    /// Number of top trending tags charted.
    pub trending_window: usize,
    pub log_level: String,
}

/// Load dashboard configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but invalid.
pub fn load_config() -> Result<DashboardConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load dashboard configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but invalid.
pub fn load_config_from_env() -> Result<DashboardConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
fn build_config<F>(lookup: F) -> Result<DashboardConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_window = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "window must be at least 1".to_string(),
            });
        }
        Ok(value)
    };

    let api_url = or_default("PULSEDASH_API_URL", "http://localhost:5000/api");
    let request_timeout_secs = parse_u64("PULSEDASH_REQUEST_TIMEOUT_SECS", "30")?;
    let engagement_window = parse_window("PULSEDASH_ENGAGEMENT_WINDOW", "10")?;
    let trending_window = parse_window("PULSEDASH_TRENDING_WINDOW", "8")?;
    let log_level = or_default("PULSEDASH_LOG_LEVEL", "info");

    Ok(DashboardConfig {
        api_url,
        request_timeout_secs,
        engagement_window,
        trending_window,
        log_level,
    })
}
