//! Storefront brand-insight extraction.
//!
//! [`InsightFetcher`] fetches a fixed set of well-known storefront pages,
//! runs one heuristic extractor per [`shopsight_core::BrandRecord`] field,
//! and assembles the results.

pub mod error;
pub mod extract;
pub mod extraction;
pub mod fetch;
mod html;
pub mod insights;
pub mod root;
pub mod types;

pub use error::ScraperError;
pub use extraction::Extraction;
pub use fetch::{FetchedPage, PageFetcher};
pub use insights::InsightFetcher;
pub use root::StoreRoot;
