//! Response types for the public `products.json` bulk listing endpoint.
//!
//! Only the fields the catalog extractor reads are modeled; everything else
//! in the payload is ignored.
//!
//! ### `id`
//! Numeric on every observed store, but kept as a raw JSON value and
//! stringified so that string ids pass through unchanged.
//!
//! ### `images` / `variants`
//! Arrays, occasionally `null` on stripped-down themes. Both are modeled as
//! `Option<Vec<_>>` so `null`, missing, and `[]` all mean "none".
//!
//! ### `price`
//! A decimal string such as `"19.99"`; some proxies re-encode it as a JSON
//! number. Either form is stringified as-is.
//!
//! Only the first image and the first variant are ever read, so the array
//! elements stay raw JSON and are typed on demand. A malformed entry (missing
//! `title`, a first image without `src`, a first variant without `price`)
//! fails the whole payload; later elements are never inspected.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Top-level response from `GET /products.json`.
#[derive(Debug, Deserialize)]
pub struct ListingResponse {
    #[serde(default)]
    pub products: Vec<ListingProduct>,
}

/// A single product entry.
#[derive(Debug, Deserialize)]
pub struct ListingProduct {
    #[serde(default)]
    pub id: Value,

    pub title: String,

    /// URL slug for the product page (e.g., `"linen-shirt"`).
    #[serde(default)]
    pub handle: Option<String>,

    #[serde(default)]
    pub images: Option<Vec<Value>>,

    #[serde(default)]
    pub variants: Option<Vec<Value>>,
}

impl ListingProduct {
    /// The first gallery image, typed.
    pub(crate) fn first_image(&self) -> Result<Option<ListingImage>, serde_json::Error> {
        first_as(self.images.as_deref())
    }

    /// The first variant, typed.
    pub(crate) fn first_variant(&self) -> Result<Option<ListingVariant>, serde_json::Error> {
        first_as(self.variants.as_deref())
    }
}

fn first_as<T: DeserializeOwned>(items: Option<&[Value]>) -> Result<Option<T>, serde_json::Error> {
    items
        .and_then(<[_]>::first)
        .map(T::deserialize)
        .transpose()
}

#[derive(Debug, Deserialize)]
pub struct ListingImage {
    /// Canonical CDN URL.
    pub src: String,
}

#[derive(Debug, Deserialize)]
pub struct ListingVariant {
    pub price: Value,
}

/// Renders a JSON scalar the way it reads in the payload, without quotes.
///
/// `null` has no textual form and yields `None`.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
