use crate::error::ScraperError;
use crate::extraction::Extraction;
use crate::html::document_text;

use super::ExtractContext;

/// Visible text of the first about page that answers `200`.
pub async fn extract_about(ctx: &ExtractContext<'_>) -> Extraction<Option<String>> {
    Extraction::settle(fetch_about(ctx).await)
}

async fn fetch_about(ctx: &ExtractContext<'_>) -> Result<Option<String>, ScraperError> {
    // The first 200 page ends the search even when its text is blank.
    let about = ctx
        .first_candidate(&ctx.config.about_paths, |page| {
            Ok(Some(parse_about(&page.body)))
        })
        .await?;
    Ok(about.flatten())
}

/// Whole-page visible text, or `None` when the page has none.
#[must_use]
pub fn parse_about(html: &str) -> Option<String> {
    let text = document_text(html);
    (!text.is_empty()).then_some(text)
}
