//! Handlers for `/followups` endpoints.
//!
//! List and single-get return [`FollowUpView`]s — the follow-up with its
//! application view embedded, resolved through application and listing.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/followups` | Joined views, soonest due first |
//! | `GET`    | `/followups/:id` | 404 if missing or unresolvable |
//! | `POST`   | `/followups` | Body: [`NewFollowUp`]; returns 201 |
//! | `PATCH`  | `/followups/:id` | Body: [`FollowUpPatch`] |
//! | `DELETE` | `/followups/:id` | 204 on removal |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use quarry_core::{
  follow_up::{FollowUp, FollowUpPatch, NewFollowUp},
  store::TrackerStore,
  views::FollowUpView,
};

use crate::error::ApiError;

/// `GET /followups`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<FollowUpView>>, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let views = store
    .list_follow_ups()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(views))
}

/// `GET /followups/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<u64>,
) -> Result<Json<FollowUpView>, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let view = store
    .get_follow_up(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("follow-up {id} not found")))?;
  Ok(Json(view))
}

/// `POST /followups` — returns 201 + the stored [`FollowUp`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(draft): Json<NewFollowUp>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let follow_up = store
    .create_follow_up(draft)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(follow_up)))
}

/// `PATCH /followups/:id` — body is a [`FollowUpPatch`].
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<u64>,
  Json(patch): Json<FollowUpPatch>,
) -> Result<Json<FollowUp>, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let follow_up = store
    .update_follow_up(id, patch)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("follow-up {id} not found")))?;
  Ok(Json(follow_up))
}

/// `DELETE /followups/:id`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<u64>,
) -> Result<StatusCode, ApiError>
where
  S: TrackerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let deleted = store
    .delete_follow_up(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if deleted {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("follow-up {id} not found")))
  }
}
