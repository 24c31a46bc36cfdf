//! Heuristic extractors, one per [`shopsight_core::BrandRecord`] field.
//!
//! Each extractor exposes a pure `parse_*` function over fetched content and
//! an async `extract_*` entry point that fetches its page(s) and wraps the
//! outcome in an [`Extraction`](crate::extraction::Extraction).

mod about;
mod brand_name;
mod catalog;
mod contact;
mod faqs;
mod hero;
mod links;
mod policies;
mod social;

use shopsight_core::ExtractorConfig;

use crate::error::ScraperError;
use crate::fetch::{FetchedPage, PageFetcher};
use crate::root::StoreRoot;

pub use about::{extract_about, parse_about};
pub use brand_name::{extract_brand_name, parse_brand_name};
pub use catalog::{extract_product_catalog, parse_product_catalog};
pub use contact::{extract_contact_info, parse_contact_info};
pub use faqs::{extract_faqs, parse_faqs};
pub use hero::{extract_hero_products, parse_hero_products};
pub use links::{extract_important_links, parse_important_links};
pub use policies::extract_policies;
pub use social::{extract_social_handles, parse_social_handles};

/// Everything an extractor needs: the session, where the store lives, and
/// which candidate paths and keywords to use.
#[derive(Debug, Clone, Copy)]
pub struct ExtractContext<'a> {
    pub fetcher: &'a PageFetcher,
    pub root: &'a StoreRoot,
    pub config: &'a ExtractorConfig,
}

impl ExtractContext<'_> {
    /// Fetches the storefront homepage.
    async fn fetch_root(&self) -> Result<FetchedPage, ScraperError> {
        self.fetcher.fetch(self.root.as_str()).await
    }

    /// Fetches a well-known path resolved against the store.
    async fn fetch_path(&self, path: &str) -> Result<FetchedPage, ScraperError> {
        self.fetcher.fetch(&self.root.path_url(path)).await
    }

    /// Walks `paths` in order and returns the first parsed value `accept`
    /// keeps from a `200` page. Fetch failures and non-200 pages move on to
    /// the next candidate.
    async fn first_candidate<T, F>(
        &self,
        paths: &[String],
        mut parse: F,
    ) -> Result<Option<T>, ScraperError>
    where
        F: FnMut(&FetchedPage) -> Result<Option<T>, ScraperError>,
    {
        for path in paths {
            let page = match self.fetch_path(path).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::debug!(
                        store = self.root.domain(),
                        path,
                        error = %e,
                        "candidate page unavailable"
                    );
                    continue;
                }
            };
            if !page.status_is_ok() {
                tracing::debug!(
                    store = self.root.domain(),
                    path,
                    status = page.status,
                    "candidate page skipped"
                );
                continue;
            }
            if let Some(value) = parse(&page)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}
