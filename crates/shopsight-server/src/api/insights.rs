//! `POST /fetch-insights`: run the extraction pipeline for one storefront.

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Deserialize;
use shopsight_core::BrandRecord;
use shopsight_scraper::{InsightFetcher, ScraperError};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct FetchInsightsRequest {
    pub website_url: String,
}

/// Returns the bare [`BrandRecord`] on success.
///
/// A record with nothing populated maps to `not_found`; the store may be
/// unreachable or simply not a recognizable storefront.
pub(super) async fn fetch_insights(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<FetchInsightsRequest>, JsonRejection>,
) -> Result<Json<BrandRecord>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        ApiError::new(
            req_id.0.clone(),
            "validation_error",
            rejection.body_text(),
        )
    })?;

    let fetcher = InsightFetcher::from_app_config(
        &body.website_url,
        &state.config,
        state.extractors.as_ref().clone(),
    )
    .map_err(|e| match e {
        ScraperError::InvalidStoreUrl { .. } => {
            ApiError::new(req_id.0.clone(), "validation_error", e.to_string())
        }
        other => {
            tracing::error!(error = %other, "failed to build insight fetcher");
            ApiError::new(req_id.0.clone(), "internal_error", other.to_string())
        }
    })?;

    let store = fetcher.root().to_string();
    let record = tokio::spawn(async move { fetcher.fetch_insights().await })
        .await
        .map_err(|e| {
            tracing::error!(store = %store, error = %e, "insight extraction task failed");
            ApiError::new(req_id.0.clone(), "internal_error", e.to_string())
        })?;

    if record.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("no storefront data found at {store}"),
        ));
    }

    Ok(Json(record))
}
