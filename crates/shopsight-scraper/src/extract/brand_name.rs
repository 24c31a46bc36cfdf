use scraper::Html;

use crate::error::ScraperError;
use crate::extraction::Extraction;
use crate::html::{element_text, parse_selector};

use super::ExtractContext;

/// Brand name from the homepage `<title>`.
pub async fn extract_brand_name(ctx: &ExtractContext<'_>) -> Extraction<Option<String>> {
    Extraction::settle(fetch_brand_name(ctx).await)
}

async fn fetch_brand_name(ctx: &ExtractContext<'_>) -> Result<Option<String>, ScraperError> {
    let page = ctx.fetch_root().await?;
    parse_brand_name(&page.body)
}

/// Text of the first `<title>` element, trimmed with inner whitespace runs
/// collapsed to single spaces, or `None` when it is missing or blank.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidSelector`] only if the built-in selector
/// fails to parse.
pub fn parse_brand_name(html: &str) -> Result<Option<String>, ScraperError> {
    let doc = Html::parse_document(html);
    let title = parse_selector("title")?;
    Ok(doc
        .select(&title)
        .next()
        .map(element_text)
        .filter(|name| !name.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_trimmed_title() {
        let html = "<html><head><title>\n  Acme Outfitters  \n</title></head></html>";
        assert_eq!(
            parse_brand_name(html).unwrap().as_deref(),
            Some("Acme Outfitters")
        );
    }

    #[test]
    fn collapses_inner_whitespace() {
        let html = "<title>Acme\n   Outfitters  |  Home</title>";
        assert_eq!(
            parse_brand_name(html).unwrap().as_deref(),
            Some("Acme Outfitters | Home")
        );
    }

    #[test]
    fn first_title_wins() {
        let html = "<title>Acme</title><svg><title>Cart icon</title></svg>";
        assert_eq!(parse_brand_name(html).unwrap().as_deref(), Some("Acme"));
    }

    #[test]
    fn missing_title_is_none() {
        assert!(parse_brand_name("<html><body><h1>Acme</h1></body></html>")
            .unwrap()
            .is_none());
    }

    #[test]
    fn blank_title_is_none() {
        assert!(parse_brand_name("<title>   </title>").unwrap().is_none());
    }
}
