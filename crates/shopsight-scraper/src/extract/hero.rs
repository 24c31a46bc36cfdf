use scraper::Html;
use shopsight_core::Product;

use crate::error::ScraperError;
use crate::extraction::Extraction;
use crate::html::{element_text, parse_selector};
use crate::root::StoreRoot;

use super::ExtractContext;

/// Featured products linked from the homepage.
pub async fn extract_hero_products(ctx: &ExtractContext<'_>) -> Extraction<Vec<Product>> {
    Extraction::settle(fetch_hero_products(ctx).await)
}

async fn fetch_hero_products(ctx: &ExtractContext<'_>) -> Result<Vec<Product>, ScraperError> {
    let page = ctx.fetch_root().await?;
    parse_hero_products(
        ctx.root,
        &page.body,
        &ctx.config.product_path_marker,
        ctx.config.hero_limit,
    )
}

/// Collects up to `limit` anchors whose href contains `marker`, in document
/// order.
///
/// The display title is the anchor's `title` attribute, falling back to its
/// text. Anchors with neither are skipped. The title doubles as the product
/// id since homepage links carry no platform id.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidSelector`] only if the built-in selector
/// fails to parse.
pub fn parse_hero_products(
    root: &StoreRoot,
    html: &str,
    marker: &str,
    limit: usize,
) -> Result<Vec<Product>, ScraperError> {
    let doc = Html::parse_document(html);
    let anchors = parse_selector("a[href]")?;

    Ok(doc
        .select(&anchors)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?.trim();
            if href.is_empty() || !href.contains(marker) {
                return None;
            }
            let title = anchor
                .value()
                .attr("title")
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map_or_else(|| element_text(anchor), str::to_owned);
            if title.is_empty() {
                return None;
            }
            Some(Product::from_link(title, root.resolve(href)))
        })
        .take(limit)
        .collect())
}
