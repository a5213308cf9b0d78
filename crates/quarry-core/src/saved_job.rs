//! Saved job — a bookmark on a job listing.
//!
//! Saved jobs have no patch type; a bookmark is created and deleted, never
//! edited.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored bookmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedJob {
  pub id:         u64,
  pub job_id:     u64,
  /// Store-assigned at insert time; never changes afterwards.
  pub saved_date: DateTime<Utc>,
}

/// Input to [`crate::store::TrackerStore::create_saved_job`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavedJob {
  pub job_id: u64,
}
