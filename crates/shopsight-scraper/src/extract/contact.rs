use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use shopsight_core::ContactInfo;

use crate::error::ScraperError;
use crate::extraction::Extraction;
use crate::html::document_text;

use super::ExtractContext;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.-]+@[\w.-]+").expect("valid email regex"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d\s-]{7,}\d").expect("valid phone regex"));

/// Email addresses and phone-like numbers from the homepage text.
pub async fn extract_contact_info(ctx: &ExtractContext<'_>) -> Extraction<ContactInfo> {
    Extraction::settle(fetch_contact_info(ctx).await)
}

async fn fetch_contact_info(ctx: &ExtractContext<'_>) -> Result<ContactInfo, ScraperError> {
    let page = ctx.fetch_root().await?;
    Ok(parse_contact_info(&page.body))
}

/// Pattern-matches emails and phone numbers across the page's visible text.
///
/// Each list is deduplicated, keeping first-seen order. Matches are not
/// validated, so version strings or order numbers can show up as phones.
#[must_use]
pub fn parse_contact_info(html: &str) -> ContactInfo {
    let text = document_text(html);
    ContactInfo {
        emails: unique_matches(&EMAIL_RE, &text),
        phones: unique_matches(&PHONE_RE, &text),
    }
}

fn unique_matches(re: &Regex, text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    re.find_iter(text)
        .map(|m| m.as_str())
        .filter(|m| seen.insert(*m))
        .map(str::to_owned)
        .collect()
}
