mod app_config;
mod config;
mod extractors;
mod products;
mod record;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, FetchStrategy};
pub use config::{load_app_config, load_app_config_from_env};
pub use extractors::{load_extractor_config, ExtractorConfig};
pub use products::Product;
pub use record::{BrandRecord, ContactInfo, Faq, Policy, PolicyType, SocialHandle};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read extractor config at {path}: {source}")]
    ExtractorsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse extractor config: {0}")]
    ExtractorsFileParse(#[source] serde_yaml::Error),

    #[error("extractor config validation failed: {0}")]
    Validation(String),
}
