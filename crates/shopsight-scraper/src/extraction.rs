use crate::error::ScraperError;

/// Outcome of one extractor run.
///
/// Extractors never propagate errors to the aggregator. A failure is carried
/// here and collapses to the field's default in [`Extraction::into_fragment`].
#[derive(Debug)]
pub enum Extraction<T> {
    /// The extractor produced a non-default fragment.
    Found(T),
    /// The extractor ran but nothing matched its heuristics.
    Empty,
    /// Fetching or parsing failed.
    Failed(ScraperError),
}

impl<T: Default + PartialEq> Extraction<T> {
    /// Classifies an extractor's raw result.
    pub(crate) fn settle(result: Result<T, ScraperError>) -> Self {
        match result {
            Ok(value) if value == T::default() => Self::Empty,
            Ok(value) => Self::Found(value),
            Err(e) => Self::Failed(e),
        }
    }
}

impl<T: Default> Extraction<T> {
    /// Returns the fragment for the record, substituting the default for
    /// `Empty` and `Failed`.
    pub fn into_fragment(self, extractor: &'static str) -> T {
        match self {
            Self::Found(value) => value,
            Self::Empty => T::default(),
            Self::Failed(e) => {
                tracing::debug!(extractor, error = %e, "extractor failed; using default");
                T::default()
            }
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_default_value_is_empty() {
        let outcome = Extraction::<Vec<u8>>::settle(Ok(Vec::new()));
        assert!(matches!(outcome, Extraction::Empty));
    }

    #[test]
    fn settle_value_is_found() {
        let outcome = Extraction::settle(Ok(Some("Acme".to_string())));
        assert!(outcome.is_found());
        assert_eq!(outcome.into_fragment("brand_name"), Some("Acme".to_string()));
    }

    #[test]
    fn failed_collapses_to_default() {
        let outcome = Extraction::<Vec<u8>>::settle(Err(ScraperError::UnexpectedStatus {
            status: 503,
            url: "https://shop.example.com/products.json".to_string(),
        }));
        assert!(matches!(outcome, Extraction::Failed(_)));
        assert!(outcome.into_fragment("product_catalog").is_empty());
    }
}
