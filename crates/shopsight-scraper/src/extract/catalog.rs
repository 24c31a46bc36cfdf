use shopsight_core::Product;

use crate::error::ScraperError;
use crate::extraction::Extraction;
use crate::root::StoreRoot;
use crate::types::{scalar_to_string, ListingResponse};

use super::ExtractContext;

/// Product catalog from the bulk listing endpoint.
pub async fn extract_product_catalog(ctx: &ExtractContext<'_>) -> Extraction<Vec<Product>> {
    Extraction::settle(fetch_product_catalog(ctx).await)
}

async fn fetch_product_catalog(ctx: &ExtractContext<'_>) -> Result<Vec<Product>, ScraperError> {
    let page = ctx
        .fetch_path(&ctx.config.catalog_path)
        .await?
        .require_ok()?;
    parse_product_catalog(ctx.root, &page.body)
}

/// Maps a `products.json` payload to [`Product`]s in source order.
///
/// Per entry: the first image's `src` becomes `image`, the first variant's
/// price becomes `price`, and a non-empty `handle` yields
/// `<origin>/products/<handle>`. Images and variants after the first are
/// never inspected.
///
/// # Errors
///
/// Returns [`ScraperError::Deserialize`] if the body is not valid JSON, an
/// entry lacks a `title`, or a first image or first variant lacks its
/// `src`/`price`; no partial list is returned.
pub fn parse_product_catalog(root: &StoreRoot, body: &str) -> Result<Vec<Product>, ScraperError> {
    let malformed = |e: serde_json::Error| ScraperError::Deserialize {
        context: format!("product listing from {}", root.domain()),
        source: e,
    };

    let listing = serde_json::from_str::<ListingResponse>(body).map_err(malformed)?;

    listing
        .products
        .into_iter()
        .map(|p| -> Result<Product, ScraperError> {
            let image = p.first_image().map_err(malformed)?;
            let variant = p.first_variant().map_err(malformed)?;
            Ok(Product {
                id: scalar_to_string(&p.id).unwrap_or_default(),
                url: p
                    .handle
                    .filter(|h| !h.is_empty())
                    .map(|h| root.path_url(&format!("/products/{h}"))),
                image: image.map(|image| image.src),
                price: variant.and_then(|variant| scalar_to_string(&variant.price)),
                title: p.title,
            })
        })
        .collect()
}
