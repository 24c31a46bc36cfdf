use std::collections::BTreeMap;

use scraper::Html;

use crate::error::ScraperError;
use crate::extraction::Extraction;
use crate::html::{element_text, parse_selector};
use crate::root::StoreRoot;

use super::ExtractContext;

/// Order-tracking, contact, and blog links from the homepage.
pub async fn extract_important_links(
    ctx: &ExtractContext<'_>,
) -> Extraction<BTreeMap<String, String>> {
    Extraction::settle(fetch_important_links(ctx).await)
}

async fn fetch_important_links(
    ctx: &ExtractContext<'_>,
) -> Result<BTreeMap<String, String>, ScraperError> {
    let page = ctx.fetch_root().await?;
    parse_important_links(ctx.root, &page.body, &ctx.config.important_link_keywords)
}

/// Maps lowercased anchor text to the resolved href for every anchor whose
/// text contains one of `keywords`. A later anchor with the same text
/// replaces the earlier entry.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidSelector`] only if the built-in selector
/// fails to parse.
pub fn parse_important_links(
    root: &StoreRoot,
    html: &str,
    keywords: &[String],
) -> Result<BTreeMap<String, String>, ScraperError> {
    let doc = Html::parse_document(html);
    let anchors = parse_selector("a[href]")?;
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut links = BTreeMap::new();
    for anchor in doc.select(&anchors) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let text = element_text(anchor).to_lowercase();
        if keywords.iter().any(|k| text.contains(k.as_str())) {
            links.insert(text, root.resolve(href));
        }
    }
    Ok(links)
}
