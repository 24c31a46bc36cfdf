use crate::app_config::{AppConfig, Environment, FetchStrategy};
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
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// development config. Only malformed values are rejected.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("SHOPSIGHT_ENV", "development"))?;

    let bind_addr = or_default("SHOPSIGHT_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("SHOPSIGHT_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("SHOPSIGHT_LOG_LEVEL", "info");
    let extractors_path = lookup("SHOPSIGHT_EXTRACTORS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let scraper_request_timeout_secs = parse_u64("SHOPSIGHT_SCRAPER_REQUEST_TIMEOUT_SECS", "10")?;
    if scraper_request_timeout_secs == 0 {
        return Err(invalid(
            "SHOPSIGHT_SCRAPER_REQUEST_TIMEOUT_SECS",
            "timeout must be at least 1 second".to_string(),
        ));
    }
    let scraper_connect_timeout_secs = parse_u64("SHOPSIGHT_SCRAPER_CONNECT_TIMEOUT_SECS", "10")?;
    if scraper_connect_timeout_secs == 0 {
        return Err(invalid(
            "SHOPSIGHT_SCRAPER_CONNECT_TIMEOUT_SECS",
            "timeout must be at least 1 second".to_string(),
        ));
    }
    let scraper_user_agent = or_default(
        "SHOPSIGHT_SCRAPER_USER_AGENT",
        "shopsight/0.1 (brand-insights)",
    );
    let fetch_strategy = or_default("SHOPSIGHT_FETCH_STRATEGY", "sequential")
        .parse::<FetchStrategy>()
        .map_err(|reason| invalid("SHOPSIGHT_FETCH_STRATEGY", reason))?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        extractors_path,
        scraper_request_timeout_secs,
        scraper_connect_timeout_secs,
        scraper_user_agent,
        fetch_strategy,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SHOPSIGHT_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
