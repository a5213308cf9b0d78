//! Composed read models and aggregate statistics.
//!
//! Views are never stored, always derived: each list/get recomputes the
//! composition from the live collections. An entity whose join target is
//! missing is silently excluded from list results, and a single-entity lookup
//! for it resolves to nothing. Omission can mask dangling references, but it
//! is the established contract of this store.

use serde::Serialize;

use crate::{
  application::{Application, ApplicationStatus},
  follow_up::FollowUp,
  job::JobListing,
  saved_job::SavedJob,
};

// ─── Join views ──────────────────────────────────────────────────────────────

/// An application with its job listing embedded, resolved by `job_id`.
///
/// Serializes with the application's fields at the top level and the listing
/// under `job`.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationView {
  #[serde(flatten)]
  pub application: Application,
  pub job:         JobListing,
}

/// A follow-up with its application view embedded — resolution chains
/// through `application_id` and then `job_id`.
#[derive(Debug, Clone, Serialize)]
pub struct FollowUpView {
  #[serde(flatten)]
  pub follow_up:   FollowUp,
  pub application: ApplicationView,
}

/// A bookmark with its job listing embedded.
#[derive(Debug, Clone, Serialize)]
pub struct SavedJobView {
  #[serde(flatten)]
  pub saved_job: SavedJob,
  pub job:       JobListing,
}

// ─── Aggregate statistics ────────────────────────────────────────────────────

/// Summary statistics over the full, unfiltered application collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStats {
  pub total_applications:   usize,
  /// Applications with status `interview`.
  pub interviews_scheduled: usize,
  /// Applications still waiting on the employer (status `applied`).
  pub pending_responses:    usize,
  /// Share of applications that drew any response, as a whole percentage
  /// rounded to the nearest integer. Zero when there are no applications.
  pub response_rate:        u32,
}

impl ApplicationStats {
  /// Compute the summary for a set of application statuses.
  pub fn from_statuses<I>(statuses: I) -> Self
  where
    I: IntoIterator<Item = ApplicationStatus>,
  {
    let mut total = 0usize;
    let mut interviews = 0usize;
    let mut responded = 0usize;

    for status in statuses {
      total += 1;
      if status == ApplicationStatus::Interview {
        interviews += 1;
      }
      if status.is_response() {
        responded += 1;
      }
    }

    let response_rate = if total > 0 {
      ((responded as f64 / total as f64) * 100.0).round() as u32
    } else {
      0
    };

    Self {
      total_applications:   total,
      interviews_scheduled: interviews,
      pending_responses:    total - responded,
      response_rate,
    }
  }
}
