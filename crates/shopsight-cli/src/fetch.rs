//! `fetch` command: one extraction run, rendered as JSON.

use anyhow::Context;
use shopsight_core::{AppConfig, BrandRecord, ExtractorConfig, FetchStrategy};
use shopsight_scraper::InsightFetcher;

/// Runs the insight pipeline for `url` and returns the rendered record.
///
/// # Errors
///
/// Returns an error if `url` is not a valid storefront URL, the HTTP client
/// cannot be built, or nothing at all could be extracted.
pub(crate) async fn run_fetch(
    url: &str,
    config: &AppConfig,
    extractors: ExtractorConfig,
    strategy: Option<FetchStrategy>,
    compact: bool,
) -> anyhow::Result<String> {
    let mut fetcher = InsightFetcher::from_app_config(url, config, extractors)
        .with_context(|| format!("cannot fetch insights for {url}"))?;
    if let Some(strategy) = strategy {
        fetcher = fetcher.with_strategy(strategy);
    }

    tracing::info!(store = %fetcher.root(), strategy = %fetcher.strategy(), "fetching insights");
    let record = fetcher.fetch_insights().await;
    if record.is_empty() {
        anyhow::bail!(
            "no storefront data found at {}; the site is unreachable or not a recognized storefront",
            fetcher.root()
        );
    }

    render_record(&record, compact)
}

pub(crate) fn render_record(record: &BrandRecord, compact: bool) -> anyhow::Result<String> {
    let rendered = if compact {
        serde_json::to_string(record)?
    } else {
        serde_json::to_string_pretty(record)?
    };
    Ok(rendered)
}
