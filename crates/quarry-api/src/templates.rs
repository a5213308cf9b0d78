//! Handlers for `/templates` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/templates` | Optional `?type=resume\|cover-letter\|email` |
//! | `GET`    | `/templates/:id` | 404 if not found |
//! | `POST`   | `/templates` | Body: [`NewTemplate`]; returns 201 |
//! | `PATCH`  | `/templates/:id` | Body: [`TemplatePatch`] |
//! | `DELETE` | `/templates/:id` | 204 on removal |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use quarry_core::{
  store::TrackerStore,
  template::{NewTemplate, Template, TemplateKind, TemplatePatch},
};
use serde::Deserialize;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  #[serde(rename = "type")]
  pub kind: Option<TemplateKind>,
}

/// `GET /templates[?type=<kind>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Template>>, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let templates = store
    .list_templates(params.kind)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(templates))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /templates/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<u64>,
) -> Result<Json<Template>, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let template = store
    .get_template(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("template {id} not found")))?;
  Ok(Json(template))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /templates` — returns 201 + the stored [`Template`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(draft): Json<NewTemplate>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let template = store
    .create_template(draft)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(template)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /templates/:id` — body is a [`TemplatePatch`].
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<u64>,
  Json(patch): Json<TemplatePatch>,
) -> Result<Json<Template>, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let template = store
    .update_template(id, patch)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("template {id} not found")))?;
  Ok(Json(template))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /templates/:id`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<u64>,
) -> Result<StatusCode, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let deleted = store
    .delete_template(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if deleted {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("template {id} not found")))
  }
}
