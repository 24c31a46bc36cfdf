//! Storefront root URL handling.

use reqwest::Url;

use crate::error::ScraperError;

/// A validated storefront base URL with any trailing slash removed.
///
/// Well-known paths (`/products.json`, `/pages/faq`, ...) resolve against it
/// the way a browser resolves an absolute-path link, so a root that includes a
/// collection path still hits the store origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreRoot {
    root: String,
    url: Url,
}

impl StoreRoot {
    /// Parses a user-supplied storefront URL.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidStoreUrl`] if the input is not an
    /// absolute `http`/`https` URL with a host.
    pub fn parse(store_url: &str) -> Result<Self, ScraperError> {
        let root = store_url.trim().trim_end_matches('/');
        let invalid = |reason: String| ScraperError::InvalidStoreUrl {
            store_url: store_url.to_owned(),
            reason,
        };

        let url = Url::parse(root).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme \"{}\"", url.scheme())));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host".to_string()));
        }

        Ok(Self {
            root: root.to_owned(),
            url,
        })
    }

    /// The storefront root as given, minus the trailing slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.root
    }

    /// Host name for log fields.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.url.host_str().unwrap_or(&self.root)
    }

    /// Builds the absolute URL of a well-known path such as `"/products.json"`.
    #[must_use]
    pub fn path_url(&self, path: &str) -> String {
        self.resolve(path)
    }

    /// Resolves an href found on a storefront page to an absolute URL.
    ///
    /// `href` is an attribute value as the HTML parser returns it, with
    /// entities already decoded. Hrefs that cannot be joined are returned
    /// unchanged.
    #[must_use]
    pub fn resolve(&self, href: &str) -> String {
        let href = href.trim();
        match self.url.join(href) {
            Ok(url) => url.to_string(),
            Err(e) => {
                tracing::debug!(href, error = %e, "href could not be resolved against store root");
                href.to_owned()
            }
        }
    }
}

impl std::fmt::Display for StoreRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.root)
    }
}

#[cfg(test)]
#[path = "root_test.rs"]
mod tests;
