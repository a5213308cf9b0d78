//! Handler for `GET /analytics/stats`.

use std::sync::Arc;

use axum::{Json, extract::State};
use quarry_core::{store::TrackerStore, views::ApplicationStats};

use crate::error::ApiError;

/// `GET /analytics/stats` — summary statistics over all applications.
pub async fn handler<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<ApplicationStats>, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let stats = store
    .application_stats()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(stats))
}
