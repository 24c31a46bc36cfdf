use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::record::PolicyType;
use crate::ConfigError;

/// Candidate paths, keyword lists, and limits that drive the heuristic
/// extractors.
///
/// Defaults mirror the conventions of Shopify-style storefronts. Every key may
/// be overridden from YAML; keys left out keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Bulk listing endpoint, resolved against the store origin.
    pub catalog_path: String,
    /// Substring an anchor's href must contain to count as a product link.
    pub product_path_marker: String,
    pub hero_limit: usize,
    pub policy_types: Vec<PolicyType>,
    /// Tried in order; the first page yielding at least one pair wins.
    pub faq_paths: Vec<String>,
    /// Element names whose text is read as an FAQ question.
    pub faq_question_tags: Vec<String>,
    /// Tried in order; the first 200 response wins.
    pub about_paths: Vec<String>,
    pub social_platforms: Vec<String>,
    pub important_link_keywords: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            catalog_path: "/products.json".to_string(),
            product_path_marker: "/products/".to_string(),
            hero_limit: 10,
            policy_types: vec![PolicyType::Privacy, PolicyType::Refund, PolicyType::Return],
            faq_paths: strings(&["/pages/faq", "/pages/faqs", "/faq", "/faqs"]),
            faq_question_tags: strings(&["h2", "h3", "strong"]),
            about_paths: strings(&["/pages/about", "/about", "/about-us"]),
            social_platforms: strings(&[
                "instagram",
                "facebook",
                "tiktok",
                "twitter",
                "youtube",
                "linkedin",
            ]),
            important_link_keywords: strings(&["order", "track", "contact", "blog"]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Resolve the extractor configuration.
///
/// `None` yields [`ExtractorConfig::default`]. A path is read as YAML and
/// validated.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_extractor_config(path: Option<&Path>) -> Result<ExtractorConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(ExtractorConfig::default());
    };

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ExtractorsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_extractor_config(&content)
}

fn parse_extractor_config(content: &str) -> Result<ExtractorConfig, ConfigError> {
    let config: ExtractorConfig =
        serde_yaml::from_str(content).map_err(ConfigError::ExtractorsFileParse)?;

    validate_extractor_config(&config)?;

    Ok(config)
}

fn validate_extractor_config(config: &ExtractorConfig) -> Result<(), ConfigError> {
    if config.hero_limit == 0 {
        return Err(ConfigError::Validation(
            "hero_limit must be at least 1".to_string(),
        ));
    }

    for (name, list) in [
        ("faq_paths", &config.faq_paths),
        ("about_paths", &config.about_paths),
        ("faq_question_tags", &config.faq_question_tags),
    ] {
        if list.is_empty() {
            return Err(ConfigError::Validation(format!("{name} must not be empty")));
        }
    }

    for path in config
        .faq_paths
        .iter()
        .chain(&config.about_paths)
        .chain(std::iter::once(&config.catalog_path))
    {
        if !path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "candidate path '{path}' must start with '/'"
            )));
        }
    }

    if let Some(tag) = config
        .faq_question_tags
        .iter()
        .find(|t| t.is_empty() || !t.chars().all(|c| c.is_ascii_alphanumeric()))
    {
        return Err(ConfigError::Validation(format!(
            "faq question tag '{tag}' is not a plain element name"
        )));
    }

    for (name, list) in [
        ("social_platforms", &config.social_platforms),
        ("important_link_keywords", &config.important_link_keywords),
    ] {
        if list.iter().any(|entry| entry.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "{name} must not contain blank entries"
            )));
        }
    }

    if config.product_path_marker.trim().is_empty() {
        return Err(ConfigError::Validation(
            "product_path_marker must be non-empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for policy in &config.policy_types {
        if !seen.insert(*policy) {
            return Err(ConfigError::Validation(format!(
                "duplicate policy type: '{policy}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_storefront_conventions() {
        let config = ExtractorConfig::default();
        assert_eq!(config.hero_limit, 10);
        assert_eq!(
            config.faq_paths,
            vec!["/pages/faq", "/pages/faqs", "/faq", "/faqs"]
        );
        assert_eq!(config.about_paths, vec!["/pages/about", "/about", "/about-us"]);
        assert_eq!(config.social_platforms.len(), 6);
        assert!(validate_extractor_config(&config).is_ok());
    }

    #[test]
    fn missing_path_yields_defaults() {
        let config = load_extractor_config(None).expect("defaults");
        assert_eq!(config, ExtractorConfig::default());
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let yaml = "hero_limit: 4\nsocial_platforms: [instagram, pinterest]\n";
        let config = parse_extractor_config(yaml).expect("valid yaml");
        assert_eq!(config.hero_limit, 4);
        assert_eq!(config.social_platforms, vec!["instagram", "pinterest"]);
        assert_eq!(config.catalog_path, "/products.json");
        assert_eq!(config.policy_types.len(), 3);
    }

    #[test]
    fn policy_types_parse_from_lowercase_names() {
        let config = parse_extractor_config("policy_types: [refund]\n").expect("valid yaml");
        assert_eq!(config.policy_types, vec![PolicyType::Refund]);
    }

    #[test]
    fn rejects_zero_hero_limit() {
        let err = parse_extractor_config("hero_limit: 0\n").unwrap_err();
        assert!(err.to_string().contains("hero_limit"));
    }

    #[test]
    fn rejects_empty_faq_paths() {
        let err = parse_extractor_config("faq_paths: []\n").unwrap_err();
        assert!(err.to_string().contains("faq_paths must not be empty"));
    }

    #[test]
    fn rejects_relative_candidate_path() {
        let err = parse_extractor_config("about_paths: [about]\n").unwrap_err();
        assert!(err.to_string().contains("must start with '/'"));
    }

    #[test]
    fn rejects_selector_syntax_in_question_tags() {
        let err = parse_extractor_config("faq_question_tags: ['h2 > a']\n").unwrap_err();
        assert!(err.to_string().contains("not a plain element name"));
    }

    #[test]
    fn rejects_blank_social_platform() {
        let err = parse_extractor_config("social_platforms: [instagram, '']\n").unwrap_err();
        assert!(err.to_string().contains("social_platforms must not contain blank entries"));
    }

    #[test]
    fn rejects_blank_link_keyword() {
        let err = parse_extractor_config("important_link_keywords: ['  ']\n").unwrap_err();
        assert!(err
            .to_string()
            .contains("important_link_keywords must not contain blank entries"));
    }

    #[test]
    fn rejects_duplicate_policy_types() {
        let err = parse_extractor_config("policy_types: [privacy, privacy]\n").unwrap_err();
        assert!(err.to_string().contains("duplicate policy type"));
    }

    #[test]
    fn rejects_unknown_policy_type() {
        let err = parse_extractor_config("policy_types: [shipping]\n").unwrap_err();
        assert!(matches!(err, ConfigError::ExtractorsFileParse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_extractor_config(Some(Path::new("/nonexistent/extractors.yaml")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ExtractorsFileIo { ref path, .. } if path.contains("extractors.yaml")));
    }
}
