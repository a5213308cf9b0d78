//! Handlers for `/applications` endpoints.
//!
//! List and single-get return [`ApplicationView`]s — the application with its
//! job listing embedded. An application whose listing has been deleted is
//! absent from both.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/applications` | Joined views, newest first |
//! | `GET`    | `/applications/:id` | 404 if missing or unresolvable |
//! | `POST`   | `/applications` | Body: [`NewApplication`]; returns 201 |
//! | `PATCH`  | `/applications/:id` | Body: [`ApplicationPatch`] |
//! | `DELETE` | `/applications/:id` | 204 on removal |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use quarry_core::{
  application::{Application, ApplicationPatch, NewApplication},
  store::TrackerStore,
  views::ApplicationView,
};

use crate::error::ApiError;

/// `GET /applications`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<ApplicationView>>, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let views = store
    .list_applications()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(views))
}

/// `GET /applications/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<u64>,
) -> Result<Json<ApplicationView>, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let view = store
    .get_application(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("application {id} not found")))?;
  Ok(Json(view))
}

/// `POST /applications` — returns 201 + the stored [`Application`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(draft): Json<NewApplication>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let application = store
    .create_application(draft)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(application)))
}

/// `PATCH /applications/:id` — body is an [`ApplicationPatch`].
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<u64>,
  Json(patch): Json<ApplicationPatch>,
) -> Result<Json<Application>, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let application = store
    .update_application(id, patch)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("application {id} not found")))?;
  Ok(Json(application))
}

/// `DELETE /applications/:id`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<u64>,
) -> Result<StatusCode, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let deleted = store
    .delete_application(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if deleted {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("application {id} not found")))
  }
}
