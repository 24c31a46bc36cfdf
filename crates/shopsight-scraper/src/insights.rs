//! Insight aggregation: runs every extractor against one storefront and
//! assembles the [`BrandRecord`].

use std::collections::BTreeMap;
use std::time::Instant;

use shopsight_core::{
    AppConfig, BrandRecord, ContactInfo, ExtractorConfig, Faq, FetchStrategy, Policy, Product,
    SocialHandle,
};

use crate::error::ScraperError;
use crate::extract::{
    extract_about, extract_brand_name, extract_contact_info, extract_faqs, extract_hero_products,
    extract_important_links, extract_policies, extract_product_catalog, extract_social_handles,
    ExtractContext,
};
use crate::extraction::Extraction;
use crate::fetch::PageFetcher;
use crate::root::StoreRoot;

/// Extracts a [`BrandRecord`] from a single storefront.
///
/// Owns its [`PageFetcher`], so build one per top-level request. The
/// aggregate never fails: each extractor's failure collapses to that
/// field's default, and a store that cannot be reached at all yields an
/// empty record.
#[derive(Debug, Clone)]
pub struct InsightFetcher {
    fetcher: PageFetcher,
    root: StoreRoot,
    config: ExtractorConfig,
    strategy: FetchStrategy,
}

/// Raw per-extractor outcomes, in record field order.
struct Outcomes {
    brand_name: Extraction<Option<String>>,
    product_catalog: Extraction<Vec<Product>>,
    hero_products: Extraction<Vec<Product>>,
    policies: Extraction<Vec<Policy>>,
    faqs: Extraction<Vec<Faq>>,
    social_handles: Extraction<Vec<SocialHandle>>,
    contact_info: Extraction<ContactInfo>,
    about: Extraction<Option<String>>,
    important_links: Extraction<BTreeMap<String, String>>,
}

impl Outcomes {
    fn found_count(&self) -> usize {
        [
            self.brand_name.is_found(),
            self.product_catalog.is_found(),
            self.hero_products.is_found(),
            self.policies.is_found(),
            self.faqs.is_found(),
            self.social_handles.is_found(),
            self.contact_info.is_found(),
            self.about.is_found(),
            self.important_links.is_found(),
        ]
        .into_iter()
        .filter(|found| *found)
        .count()
    }

    fn into_record(self) -> BrandRecord {
        BrandRecord {
            brand_name: self.brand_name.into_fragment("brand_name"),
            about: self.about.into_fragment("about"),
            product_catalog: self.product_catalog.into_fragment("product_catalog"),
            hero_products: self.hero_products.into_fragment("hero_products"),
            policies: self.policies.into_fragment("policies"),
            faqs: self.faqs.into_fragment("faqs"),
            social_handles: self.social_handles.into_fragment("social_handles"),
            contact_info: self.contact_info.into_fragment("contact_info"),
            important_links: self.important_links.into_fragment("important_links"),
        }
    }
}

impl InsightFetcher {
    /// Creates a fetcher for `website_url` using the default sequential
    /// strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidStoreUrl`] if `website_url` is not an
    /// absolute `http`/`https` URL.
    pub fn new(
        website_url: &str,
        fetcher: PageFetcher,
        config: ExtractorConfig,
    ) -> Result<Self, ScraperError> {
        Ok(Self {
            fetcher,
            root: StoreRoot::parse(website_url)?,
            config,
            strategy: FetchStrategy::default(),
        })
    }

    /// Builds the [`PageFetcher`] and strategy from [`AppConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidStoreUrl`] for a bad URL, or
    /// [`ScraperError::Http`] if the HTTP client cannot be constructed.
    pub fn from_app_config(
        website_url: &str,
        app_config: &AppConfig,
        config: ExtractorConfig,
    ) -> Result<Self, ScraperError> {
        let fetcher = PageFetcher::from_config(app_config)?;
        Ok(Self::new(website_url, fetcher, config)?.with_strategy(app_config.fetch_strategy))
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn root(&self) -> &StoreRoot {
        &self.root
    }

    #[must_use]
    pub fn strategy(&self) -> FetchStrategy {
        self.strategy
    }

    /// Runs all nine extractors and merges their fragments.
    pub async fn fetch_insights(&self) -> BrandRecord {
        let ctx = ExtractContext {
            fetcher: &self.fetcher,
            root: &self.root,
            config: &self.config,
        };
        let started = Instant::now();

        let outcomes = match self.strategy {
            FetchStrategy::Sequential => run_sequential(&ctx).await,
            FetchStrategy::Concurrent => run_concurrent(&ctx).await,
        };

        let found = outcomes.found_count();
        let record = outcomes.into_record();

        tracing::info!(
            store = self.root.domain(),
            strategy = %self.strategy,
            fields_found = found,
            catalog = record.product_catalog.len(),
            hero = record.hero_products.len(),
            policies = record.policies.len(),
            faqs = record.faqs.len(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "insight extraction complete"
        );
        if record.is_empty() {
            tracing::warn!(store = self.root.domain(), "no storefront data extracted");
        }

        record
    }
}

async fn run_sequential(ctx: &ExtractContext<'_>) -> Outcomes {
    Outcomes {
        brand_name: extract_brand_name(ctx).await,
        product_catalog: extract_product_catalog(ctx).await,
        hero_products: extract_hero_products(ctx).await,
        policies: extract_policies(ctx).await,
        faqs: extract_faqs(ctx).await,
        social_handles: extract_social_handles(ctx).await,
        contact_info: extract_contact_info(ctx).await,
        about: extract_about(ctx).await,
        important_links: extract_important_links(ctx).await,
    }
}

async fn run_concurrent(ctx: &ExtractContext<'_>) -> Outcomes {
    let (
        brand_name,
        product_catalog,
        hero_products,
        policies,
        faqs,
        social_handles,
        contact_info,
        about,
        important_links,
    ) = tokio::join!(
        extract_brand_name(ctx),
        extract_product_catalog(ctx),
        extract_hero_products(ctx),
        extract_policies(ctx),
        extract_faqs(ctx),
        extract_social_handles(ctx),
        extract_contact_info(ctx),
        extract_about(ctx),
        extract_important_links(ctx),
    );
    Outcomes {
        brand_name,
        product_catalog,
        hero_products,
        policies,
        faqs,
        social_handles,
        contact_info,
        about,
        important_links,
    }
}
