use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "SHOPSIGHT_ENV"));
}

#[test]
fn build_app_config_succeeds_with_empty_environment() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.extractors_path.is_none());
    assert_eq!(cfg.scraper_request_timeout_secs, 10);
    assert_eq!(cfg.scraper_connect_timeout_secs, 10);
    assert_eq!(cfg.scraper_user_agent, "shopsight/0.1 (brand-insights)");
    assert_eq!(cfg.fetch_strategy, FetchStrategy::Sequential);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("SHOPSIGHT_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPSIGHT_BIND_ADDR"),
        "expected InvalidEnvVar(SHOPSIGHT_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn scraper_request_timeout_secs_override() {
    let mut map = HashMap::new();
    map.insert("SHOPSIGHT_SCRAPER_REQUEST_TIMEOUT_SECS", "25");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.scraper_request_timeout_secs, 25);
}

#[test]
fn scraper_request_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("SHOPSIGHT_SCRAPER_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPSIGHT_SCRAPER_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SHOPSIGHT_SCRAPER_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn scraper_request_timeout_secs_zero_rejected() {
    let mut map = HashMap::new();
    map.insert("SHOPSIGHT_SCRAPER_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPSIGHT_SCRAPER_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SHOPSIGHT_SCRAPER_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn scraper_connect_timeout_secs_zero_rejected() {
    let mut map = HashMap::new();
    map.insert("SHOPSIGHT_SCRAPER_CONNECT_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPSIGHT_SCRAPER_CONNECT_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SHOPSIGHT_SCRAPER_CONNECT_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn scraper_user_agent_override() {
    let mut map = HashMap::new();
    map.insert("SHOPSIGHT_SCRAPER_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.scraper_user_agent, "custom-agent/2.0");
}

#[test]
fn fetch_strategy_concurrent_override() {
    let mut map = HashMap::new();
    map.insert("SHOPSIGHT_FETCH_STRATEGY", "Concurrent");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.fetch_strategy, FetchStrategy::Concurrent);
}

#[test]
fn fetch_strategy_invalid() {
    let mut map = HashMap::new();
    map.insert("SHOPSIGHT_FETCH_STRATEGY", "parallel-ish");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPSIGHT_FETCH_STRATEGY"),
        "expected InvalidEnvVar(SHOPSIGHT_FETCH_STRATEGY), got: {result:?}"
    );
}

#[test]
fn extractors_path_blank_is_ignored() {
    let mut map = HashMap::new();
    map.insert("SHOPSIGHT_EXTRACTORS_PATH", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.extractors_path.is_none());
}

#[test]
fn extractors_path_override() {
    let mut map = HashMap::new();
    map.insert("SHOPSIGHT_EXTRACTORS_PATH", "./config/extractors.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.extractors_path.as_deref(),
        Some(std::path::Path::new("./config/extractors.yaml"))
    );
}
