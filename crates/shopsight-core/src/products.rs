use serde::{Deserialize, Serialize};

/// A product surfaced by either the bulk listing endpoint or the homepage.
///
/// Catalog products carry the platform's numeric id (stringified). Hero
/// products scraped from homepage links have no real id, so the title is
/// reused as the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    /// Absolute storefront URL, e.g. `"https://shop.example.com/products/shirt"`.
    pub url: Option<String>,
    /// First gallery image's CDN URL.
    pub image: Option<String>,
    /// First variant's price exactly as the storefront reports it, e.g. `"19.99"`.
    pub price: Option<String>,
}

impl Product {
    /// Builds a homepage-derived product whose id mirrors its title.
    #[must_use]
    pub fn from_link(title: String, url: String) -> Self {
        Self {
            id: title.clone(),
            title,
            url: Some(url),
            image: None,
            price: None,
        }
    }
}
