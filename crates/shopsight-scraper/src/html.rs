//! DOM helpers shared by the extractors.
//!
//! `scraper::Html` is not `Send`, so documents are parsed and dropped inside
//! synchronous functions and never held across an `.await`.

use scraper::{ElementRef, Html, Selector};

use crate::error::ScraperError;

/// Elements whose text never renders.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

pub(crate) fn parse_selector(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::InvalidSelector {
        selector: css.to_owned(),
        reason: format!("{e:?}"),
    })
}

/// Collapses runs of whitespace to single spaces and trims the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Concatenated text of an element and its descendants, whitespace collapsed.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// All visible text of a document: one segment per text node, script and
/// style content skipped, segments joined with single spaces.
pub(crate) fn visible_text(doc: &Html) -> String {
    doc.tree
        .root()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
            });
            if hidden {
                return None;
            }
            let segment = collapse_whitespace(text);
            (!segment.is_empty()).then_some(segment)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses `html` and returns its visible text.
pub(crate) fn document_text(html: &str) -> String {
    visible_text(&Html::parse_document(html))
}
