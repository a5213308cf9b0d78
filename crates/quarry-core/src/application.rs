//! Application — a candidate's submission against a job listing.
//!
//! `job_id` is a foreign key by convention only: the store does not check it
//! at write time. An application whose listing has since been deleted is
//! dropped from composed views at read time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::patch::double_option;

// ─── Status ──────────────────────────────────────────────────────────────────

/// Where an application stands in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
  Applied,
  Interview,
  Offer,
  Rejected,
}

impl ApplicationStatus {
  /// Anything past `Applied` counts as a response from the employer.
  pub fn is_response(self) -> bool { !matches!(self, Self::Applied) }
}

// ─── Entity ──────────────────────────────────────────────────────────────────

/// A stored application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
  pub id:                    u64,
  pub job_id:                u64,
  pub status:                ApplicationStatus,
  /// Store-assigned at insert time; never changes afterwards.
  pub applied_date:          DateTime<Utc>,
  pub last_contact_date:     Option<DateTime<Utc>>,
  pub salary_expectation:    Option<String>,
  pub personal_message:      Option<String>,
  pub resume_template:       Option<String>,
  pub cover_letter_template: Option<String>,
  pub available_start_date:  Option<DateTime<Utc>>,
  pub follow_up_enabled:     bool,
  pub notes:                 Option<String>,
}

// ─── Draft ───────────────────────────────────────────────────────────────────

fn default_follow_up_enabled() -> bool { true }

/// Input to [`crate::store::TrackerStore::create_application`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
  pub job_id:                u64,
  pub status:                ApplicationStatus,
  #[serde(default)]
  pub last_contact_date:     Option<DateTime<Utc>>,
  #[serde(default)]
  pub salary_expectation:    Option<String>,
  #[serde(default)]
  pub personal_message:      Option<String>,
  #[serde(default)]
  pub resume_template:       Option<String>,
  #[serde(default)]
  pub cover_letter_template: Option<String>,
  #[serde(default)]
  pub available_start_date:  Option<DateTime<Utc>>,
  #[serde(default = "default_follow_up_enabled")]
  pub follow_up_enabled:     bool,
  #[serde(default)]
  pub notes:                 Option<String>,
}

// ─── Patch ───────────────────────────────────────────────────────────────────

/// Partial update for an [`Application`]. The identifier and `applied_date`
/// are not patchable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPatch {
  pub job_id:                Option<u64>,
  pub status:                Option<ApplicationStatus>,
  #[serde(default, deserialize_with = "double_option")]
  pub last_contact_date:     Option<Option<DateTime<Utc>>>,
  #[serde(default, deserialize_with = "double_option")]
  pub salary_expectation:    Option<Option<String>>,
  #[serde(default, deserialize_with = "double_option")]
  pub personal_message:      Option<Option<String>>,
  #[serde(default, deserialize_with = "double_option")]
  pub resume_template:       Option<Option<String>>,
  #[serde(default, deserialize_with = "double_option")]
  pub cover_letter_template: Option<Option<String>>,
  #[serde(default, deserialize_with = "double_option")]
  pub available_start_date:  Option<Option<DateTime<Utc>>>,
  pub follow_up_enabled:     Option<bool>,
  #[serde(default, deserialize_with = "double_option")]
  pub notes:                 Option<Option<String>>,
}

impl ApplicationPatch {
  /// Merge this patch into `application`, overwriting exactly the supplied
  /// fields.
  pub fn apply(self, application: &mut Application) {
    if let Some(job_id) = self.job_id {
      application.job_id = job_id;
    }
    if let Some(status) = self.status {
      application.status = status;
    }
    if let Some(last_contact_date) = self.last_contact_date {
      application.last_contact_date = last_contact_date;
    }
    if let Some(salary_expectation) = self.salary_expectation {
      application.salary_expectation = salary_expectation;
    }
    if let Some(personal_message) = self.personal_message {
      application.personal_message = personal_message;
    }
    if let Some(resume_template) = self.resume_template {
      application.resume_template = resume_template;
    }
    if let Some(cover_letter_template) = self.cover_letter_template {
      application.cover_letter_template = cover_letter_template;
    }
    if let Some(available_start_date) = self.available_start_date {
      application.available_start_date = available_start_date;
    }
    if let Some(follow_up_enabled) = self.follow_up_enabled {
      application.follow_up_enabled = follow_up_enabled;
    }
    if let Some(notes) = self.notes {
      application.notes = notes;
    }
  }
}
