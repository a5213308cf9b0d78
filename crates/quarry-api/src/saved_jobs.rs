//! Handlers for `/saved-jobs` endpoints.
//!
//! Bookmarks have no update route; they are created and deleted only.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/saved-jobs` | Joined views, newest first |
//! | `POST`   | `/saved-jobs` | Body: [`NewSavedJob`]; returns 201 |
//! | `DELETE` | `/saved-jobs/:id` | 204 on removal |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use quarry_core::{
  saved_job::{NewSavedJob, SavedJob},
  store::TrackerStore,
  views::SavedJobView,
};

use crate::error::ApiError;

/// `GET /saved-jobs`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<SavedJobView>>, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let views = store
    .list_saved_jobs()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(views))
}

/// `POST /saved-jobs` — returns 201 + the stored [`SavedJob`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(draft): Json<NewSavedJob>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let saved_job = store
    .create_saved_job(draft)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(saved_job)))
}

/// `DELETE /saved-jobs/:id`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<u64>,
) -> Result<StatusCode, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let deleted = store
    .delete_saved_job(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if deleted {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("saved job {id} not found")))
  }
}
