//! JSON REST API for Quarry.
//!
//! Exposes an axum [`Router`] backed by any [`quarry_core::store::TrackerStore`].
//! Transport concerns (TLS, timeouts, request limits) are the caller's
//! responsibility. Malformed payloads are rejected by the extractors before
//! they reach the store; the store itself only ever sees well-typed drafts
//! and patches.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", quarry_api::api_router(store.clone()))
//! ```

pub mod applications;
pub mod error;
pub mod follow_ups;
pub mod jobs;
pub mod saved_jobs;
pub mod stats;
pub mod templates;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get},
};
use quarry_core::store::TrackerStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: TrackerStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Job listings
    .route("/jobs", get(jobs::list::<S>).post(jobs::create::<S>))
    .route(
      "/jobs/{id}",
      get(jobs::get_one::<S>)
        .patch(jobs::update::<S>)
        .delete(jobs::delete::<S>),
    )
    // Applications
    .route(
      "/applications",
      get(applications::list::<S>).post(applications::create::<S>),
    )
    .route(
      "/applications/{id}",
      get(applications::get_one::<S>)
        .patch(applications::update::<S>)
        .delete(applications::delete::<S>),
    )
    // Follow-ups
    .route(
      "/followups",
      get(follow_ups::list::<S>).post(follow_ups::create::<S>),
    )
    .route(
      "/followups/{id}",
      get(follow_ups::get_one::<S>)
        .patch(follow_ups::update::<S>)
        .delete(follow_ups::delete::<S>),
    )
    // Templates
    .route(
      "/templates",
      get(templates::list::<S>).post(templates::create::<S>),
    )
    .route(
      "/templates/{id}",
      get(templates::get_one::<S>)
        .patch(templates::update::<S>)
        .delete(templates::delete::<S>),
    )
    // Saved jobs
    .route(
      "/saved-jobs",
      get(saved_jobs::list::<S>).post(saved_jobs::create::<S>),
    )
    .route("/saved-jobs/{id}", delete(saved_jobs::delete::<S>))
    // Analytics
    .route("/analytics/stats", get(stats::handler::<S>))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
