use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a runnable
/// development config.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    // Buffer capacities and intervals must be non-zero.
    let parse_positive = |var: &str, default: &str| -> Result<u64, ConfigError> {
        match parse_u64(var, default)? {
            0 => Err(invalid(var, "must be greater than zero".to_string())),
            n => Ok(n),
        }
    };

    let parse_cap = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let n = parse_positive(var, default)?;
        usize::try_from(n).map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("HAPPYDEX_ENV", "development"))?;

    let bind_addr = parse_addr("HAPPYDEX_BIND_ADDR", "0.0.0.0:8001")?;
    let log_level = or_default("HAPPYDEX_LOG_LEVEL", "info");

    let collection_interval_secs = parse_positive("HAPPYDEX_COLLECTION_INTERVAL_SECS", "8")?;
    let broadcast_interval_secs = parse_positive("HAPPYDEX_BROADCAST_INTERVAL_SECS", "5")?;

    let rolling_window = parse_cap("HAPPYDEX_ROLLING_WINDOW", "1000")?;
    let recent_posts_cap = parse_cap("HAPPYDEX_RECENT_POSTS_CAP", "50")?;
    let time_series_cap = parse_cap("HAPPYDEX_TIME_SERIES_CAP", "1440")?;
    let region_history_cap = parse_cap("HAPPYDEX_REGION_HISTORY_CAP", "100")?;

    let http_timeout_secs = parse_u64("HAPPYDEX_HTTP_TIMEOUT_SECS", "10")?;
    let user_agent = or_default(
        "HAPPYDEX_USER_AGENT",
        "HappinessIndex/1.0 (Educational Project)",
    );

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        collection_interval_secs,
        broadcast_interval_secs,
        rolling_window,
        recent_posts_cap,
        time_series_cap,
        region_history_cap,
        http_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "HAPPYDEX_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
