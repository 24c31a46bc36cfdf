use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// How the insight pipeline schedules its extractors within one invocation.
///
/// Both strategies produce the same record for the same responses; the
/// concurrent strategy only overlaps the network waits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchStrategy {
    /// Run extractors one after another on the calling task.
    #[default]
    Sequential,
    /// Start every extractor at once and join them before assembling the record.
    Concurrent,
}

impl std::fmt::Display for FetchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchStrategy::Sequential => write!(f, "sequential"),
            FetchStrategy::Concurrent => write!(f, "concurrent"),
        }
    }
}

impl std::str::FromStr for FetchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(FetchStrategy::Sequential),
            "concurrent" => Ok(FetchStrategy::Concurrent),
            other => Err(format!(
                "unknown fetch strategy \"{other}\"; expected sequential or concurrent"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Optional YAML file overriding the built-in extractor candidate lists.
    pub extractors_path: Option<PathBuf>,
    /// Per-request timeout applied to every page fetch.
    pub scraper_request_timeout_secs: u64,
    pub scraper_connect_timeout_secs: u64,
    pub scraper_user_agent: String,
    pub fetch_strategy: FetchStrategy,
}
