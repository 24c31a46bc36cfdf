use scraper::Html;
use shopsight_core::SocialHandle;

use crate::error::ScraperError;
use crate::extraction::Extraction;
use crate::html::parse_selector;

use super::ExtractContext;

/// Social profile links found on the homepage.
pub async fn extract_social_handles(ctx: &ExtractContext<'_>) -> Extraction<Vec<SocialHandle>> {
    Extraction::settle(fetch_social_handles(ctx).await)
}

async fn fetch_social_handles(ctx: &ExtractContext<'_>) -> Result<Vec<SocialHandle>, ScraperError> {
    let page = ctx.fetch_root().await?;
    parse_social_handles(&page.body, &ctx.config.social_platforms)
}

/// Emits one handle per (anchor, platform) pair where the platform name
/// occurs in the href. Hrefs are kept verbatim and duplicates are kept.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidSelector`] only if the built-in selector
/// fails to parse.
pub fn parse_social_handles(
    html: &str,
    platforms: &[String],
) -> Result<Vec<SocialHandle>, ScraperError> {
    let doc = Html::parse_document(html);
    let anchors = parse_selector("a[href]")?;

    let mut handles = Vec::new();
    for href in doc.select(&anchors).filter_map(|a| a.value().attr("href")) {
        for platform in platforms {
            if href.contains(platform.as_str()) {
                handles.push(SocialHandle {
                    platform: platform.clone(),
                    url: href.to_owned(),
                });
            }
        }
    }
    Ok(handles)
}
