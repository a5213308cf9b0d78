//! Handlers for `/jobs` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/jobs` | Optional filter query params, see [`ListParams`] |
//! | `GET`    | `/jobs/:id` | 404 if not found |
//! | `POST`   | `/jobs` | Body: [`NewJobListing`]; returns 201 + stored listing |
//! | `PATCH`  | `/jobs/:id` | Body: [`JobListingPatch`] |
//! | `DELETE` | `/jobs/:id` | 204 on removal |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use quarry_core::{
  job::{JobListing, JobListingPatch, NewJobListing},
  store::{JobFilter, TrackerStore},
};
use serde::Deserialize;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// Query params for `GET /jobs`; each maps onto a [`JobFilter`] field.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
  pub search:           Option<String>,
  pub location:         Option<String>,
  pub experience_level: Option<String>,
  pub job_type:         Option<String>,
  pub role_category:    Option<String>,
  pub salary_range:     Option<String>,
}

impl From<ListParams> for JobFilter {
  fn from(p: ListParams) -> Self {
    JobFilter {
      search:           p.search,
      location:         p.location,
      experience_level: p.experience_level,
      job_type:         p.job_type,
      role_category:    p.role_category,
      salary_range:     p.salary_range,
    }
  }
}

/// `GET /jobs[?search=...][&location=...][&experienceLevel=...][&jobType=...][&roleCategory=...]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<JobListing>>, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let jobs = store
    .list_jobs(&JobFilter::from(params))
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(jobs))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /jobs/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<u64>,
) -> Result<Json<JobListing>, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let job = store
    .get_job(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("job listing {id} not found")))?;
  Ok(Json(job))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /jobs` — returns 201 + the stored [`JobListing`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(draft): Json<NewJobListing>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let job = store
    .create_job(draft)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(job)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /jobs/:id` — body is a [`JobListingPatch`].
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<u64>,
  Json(patch): Json<JobListingPatch>,
) -> Result<Json<JobListing>, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let job = store
    .update_job(id, patch)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("job listing {id} not found")))?;
  Ok(Json(job))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /jobs/:id` — 204 on removal, 404 if the id was never there.
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<u64>,
) -> Result<StatusCode, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let deleted = store
    .delete_job(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if deleted {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("job listing {id} not found")))
  }
}
