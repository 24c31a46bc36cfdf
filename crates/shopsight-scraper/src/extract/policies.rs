use shopsight_core::Policy;

use crate::error::ScraperError;
use crate::extraction::Extraction;
use crate::html::document_text;

use super::ExtractContext;

/// Fetches `/<type>-policy` for each configured policy type.
///
/// Types are independent: a failed or non-200 fetch drops only that type.
pub async fn extract_policies(ctx: &ExtractContext<'_>) -> Extraction<Vec<Policy>> {
    Extraction::settle(fetch_policies(ctx).await)
}

async fn fetch_policies(ctx: &ExtractContext<'_>) -> Result<Vec<Policy>, ScraperError> {
    let mut policies = Vec::with_capacity(ctx.config.policy_types.len());

    for &policy_type in &ctx.config.policy_types {
        let url = ctx.root.path_url(&format!("/{}", policy_type.path_segment()));
        match ctx.fetcher.fetch(&url).await {
            Ok(page) if page.status_is_ok() => policies.push(Policy {
                policy_type,
                content: document_text(&page.body),
                url,
            }),
            Ok(page) => {
                tracing::debug!(
                    store = ctx.root.domain(),
                    policy = %policy_type,
                    status = page.status,
                    "policy page skipped"
                );
            }
            Err(e) => {
                tracing::debug!(
                    store = ctx.root.domain(),
                    policy = %policy_type,
                    error = %e,
                    "policy page unavailable"
                );
            }
        }
    }

    Ok(policies)
}
