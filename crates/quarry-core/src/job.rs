//! Job listing — a posting a candidate can apply to or bookmark.
//!
//! `job_type`, `experience_level`, and `role_category` are open vocabularies
//! ("full-time", "senior", "machine-learning", …), not closed enums; the
//! query layer matches them by exact equality.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::patch::double_option;

// ─── Entity ──────────────────────────────────────────────────────────────────

/// A stored job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
  pub id:               u64,
  pub title:            String,
  pub company:          String,
  pub location:         String,
  pub salary:           Option<String>,
  pub job_type:         String,
  pub experience_level: String,
  pub role_category:    String,
  pub description:      String,
  pub requirements:     String,
  pub company_logo:     Option<String>,
  /// Store-assigned at insert time; never changes afterwards.
  pub posted_date:      DateTime<Utc>,
  pub is_remote:        bool,
  pub application_url:  Option<String>,
}

// ─── Draft ───────────────────────────────────────────────────────────────────

/// Input to [`crate::store::TrackerStore::create_job`].
/// The identifier and `posted_date` are always set by the store; they are not
/// accepted from callers.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJobListing {
  pub title:            String,
  pub company:          String,
  pub location:         String,
  #[serde(default)]
  pub salary:           Option<String>,
  pub job_type:         String,
  pub experience_level: String,
  pub role_category:    String,
  pub description:      String,
  pub requirements:     String,
  #[serde(default)]
  pub company_logo:     Option<String>,
  #[serde(default)]
  pub is_remote:        bool,
  #[serde(default)]
  pub application_url:  Option<String>,
}

// ─── Patch ───────────────────────────────────────────────────────────────────

/// Partial update for a [`JobListing`]. Every field is optional; only the
/// fields present in the patch are written. The identifier and `posted_date`
/// are not patchable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListingPatch {
  pub title:            Option<String>,
  pub company:          Option<String>,
  pub location:         Option<String>,
  #[serde(default, deserialize_with = "double_option")]
  pub salary:           Option<Option<String>>,
  pub job_type:         Option<String>,
  pub experience_level: Option<String>,
  pub role_category:    Option<String>,
  pub description:      Option<String>,
  pub requirements:     Option<String>,
  #[serde(default, deserialize_with = "double_option")]
  pub company_logo:     Option<Option<String>>,
  pub is_remote:        Option<bool>,
  #[serde(default, deserialize_with = "double_option")]
  pub application_url:  Option<Option<String>>,
}

impl JobListingPatch {
  /// Merge this patch into `job`, overwriting exactly the supplied fields.
  pub fn apply(self, job: &mut JobListing) {
    if let Some(title) = self.title {
      job.title = title;
    }
    if let Some(company) = self.company {
      job.company = company;
    }
    if let Some(location) = self.location {
      job.location = location;
    }
    if let Some(salary) = self.salary {
      job.salary = salary;
    }
    if let Some(job_type) = self.job_type {
      job.job_type = job_type;
    }
    if let Some(experience_level) = self.experience_level {
      job.experience_level = experience_level;
    }
    if let Some(role_category) = self.role_category {
      job.role_category = role_category;
    }
    if let Some(description) = self.description {
      job.description = description;
    }
    if let Some(requirements) = self.requirements {
      job.requirements = requirements;
    }
    if let Some(company_logo) = self.company_logo {
      job.company_logo = company_logo;
    }
    if let Some(is_remote) = self.is_remote {
      job.is_remote = is_remote;
    }
    if let Some(application_url) = self.application_url {
      job.application_url = application_url;
    }
  }
}
