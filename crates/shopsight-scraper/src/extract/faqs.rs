use scraper::{ElementRef, Html};
use shopsight_core::Faq;

use crate::error::ScraperError;
use crate::extraction::Extraction;
use crate::html::{element_text, parse_selector};

use super::ExtractContext;

/// Question/answer pairs from the first FAQ page that yields any.
pub async fn extract_faqs(ctx: &ExtractContext<'_>) -> Extraction<Vec<Faq>> {
    Extraction::settle(fetch_faqs(ctx).await)
}

async fn fetch_faqs(ctx: &ExtractContext<'_>) -> Result<Vec<Faq>, ScraperError> {
    let tags = &ctx.config.faq_question_tags;
    let faqs = ctx
        .first_candidate(&ctx.config.faq_paths, |page| {
            let faqs = parse_faqs(&page.body, tags)?;
            Ok((!faqs.is_empty()).then_some(faqs))
        })
        .await?;
    Ok(faqs.unwrap_or_default())
}

/// Pairs every question-tag element with its next sibling element.
///
/// Question tags are matched in document order. A pair is kept only when
/// both the question text and the answer text are non-empty.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidSelector`] if `question_tags` does not form
/// a valid selector list.
pub fn parse_faqs(html: &str, question_tags: &[String]) -> Result<Vec<Faq>, ScraperError> {
    let doc = Html::parse_document(html);
    let questions = parse_selector(&question_tags.join(", "))?;

    Ok(doc
        .select(&questions)
        .filter_map(|question| {
            let answer = question.next_siblings().find_map(ElementRef::wrap)?;
            let question = element_text(question);
            let answer = element_text(answer);
            (!question.is_empty() && !answer.is_empty()).then_some(Faq { question, answer })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use shopsight_core::ExtractorConfig;

    use super::*;

    fn tags() -> Vec<String> {
        ExtractorConfig::default().faq_question_tags
    }

    #[test]
    fn pairs_headings_with_next_sibling() {
        let html = r"
            <main>
              <h2>Do you ship abroad?</h2>
              <p>Yes, to 40 countries.</p>
              <h3>How long does delivery take?</h3>
              text between
              <div>3 to 5 <em>business</em> days.</div>
            </main>
        ";
        let faqs = parse_faqs(html, &tags()).unwrap();
        assert_eq!(
            faqs,
            vec![
                Faq {
                    question: "Do you ship abroad?".to_string(),
                    answer: "Yes, to 40 countries.".to_string(),
                },
                Faq {
                    question: "How long does delivery take?".to_string(),
                    answer: "3 to 5 business days.".to_string(),
                },
            ]
        );
    }

    #[test]
    fn drops_question_without_answer() {
        let html = r"<section><h2>Lonely question</h2></section><h2>Q</h2><p>   </p>";
        assert!(parse_faqs(html, &tags()).unwrap().is_empty());
    }

    #[test]
    fn strong_tags_count_as_questions() {
        let html = r"<div><strong>Returns?</strong><span>Within 30 days.</span></div>";
        let faqs = parse_faqs(html, &tags()).unwrap();
        assert_eq!(faqs.len(), 1);
        assert_eq!(faqs[0].question, "Returns?");
    }

    #[test]
    fn custom_tags_replace_defaults() {
        let html = r"<dl><dt>Sizing?</dt><dd>True to size.</dd></dl><h2>Ignored</h2><p>x</p>";
        let faqs = parse_faqs(html, &["dt".to_string()]).unwrap();
        assert_eq!(faqs.len(), 1);
        assert_eq!(faqs[0].answer, "True to size.");
    }
}
