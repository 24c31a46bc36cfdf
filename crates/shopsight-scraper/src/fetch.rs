//! Timeout-bounded page fetching.

use std::time::{Duration, Instant};

use reqwest::Client;
use shopsight_core::AppConfig;

use crate::error::ScraperError;

/// A fetched response. Any status is returned as-is; callers decide what a
/// non-200 page means for them.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    /// `true` only for an exact `200 OK`.
    #[must_use]
    pub fn status_is_ok(&self) -> bool {
        self.status == reqwest::StatusCode::OK.as_u16()
    }

    /// Converts a non-200 page into [`ScraperError::UnexpectedStatus`].
    ///
    /// # Errors
    ///
    /// Returns the error when the status is anything but `200`.
    pub fn require_ok(self) -> Result<Self, ScraperError> {
        if self.status_is_ok() {
            Ok(self)
        } else {
            Err(ScraperError::UnexpectedStatus {
                status: self.status,
                url: self.url,
            })
        }
    }
}

/// HTTP session used for one insight extraction.
///
/// Build a fresh fetcher per top-level request rather than sharing one across
/// concurrent extractions. No retries are attempted; redirects follow the
/// transport default.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Creates a `PageFetcher` with the given per-request timeout, connect
    /// timeout, and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        connect_timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Creates a `PageFetcher` from the scraper settings in [`AppConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Self::new(
            config.scraper_request_timeout_secs,
            config.scraper_connect_timeout_secs,
            &config.scraper_user_agent,
        )
    }

    /// Issues a single GET and reads the body as text.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] on connection failure, timeout, or a body
    /// that cannot be read. A non-2xx status is not an error.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, ScraperError> {
        let started = Instant::now();
        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/json;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await
            .inspect_err(|e| {
                tracing::debug!(url, error = %e, "page fetch failed");
            })?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(
            url,
            status,
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "fetched page"
        );

        Ok(FetchedPage {
            url: url.to_owned(),
            status,
            body,
        })
    }
}
