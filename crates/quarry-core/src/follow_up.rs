//! Follow-up — a dated reminder attached to an application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::patch::double_option;

// ─── Kind ────────────────────────────────────────────────────────────────────

/// What sort of contact the reminder is for. Serialized under the wire name
/// `type` in kebab-case, matching the established JSON contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FollowUpKind {
  FollowUp,
  ThankYou,
  StatusCheck,
}

// ─── Entity ──────────────────────────────────────────────────────────────────

/// A stored follow-up reminder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUp {
  pub id:             u64,
  pub application_id: u64,
  pub title:          String,
  pub description:    Option<String>,
  /// Caller-supplied; follow-ups list soonest-due first.
  pub due_date:       DateTime<Utc>,
  pub completed:      bool,
  #[serde(rename = "type")]
  pub kind:           FollowUpKind,
  pub email_template: Option<String>,
}

// ─── Draft ───────────────────────────────────────────────────────────────────

/// Input to [`crate::store::TrackerStore::create_follow_up`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFollowUp {
  pub application_id: u64,
  pub title:          String,
  #[serde(default)]
  pub description:    Option<String>,
  pub due_date:       DateTime<Utc>,
  #[serde(default)]
  pub completed:      bool,
  #[serde(rename = "type")]
  pub kind:           FollowUpKind,
  #[serde(default)]
  pub email_template: Option<String>,
}

// ─── Patch ───────────────────────────────────────────────────────────────────

/// Partial update for a [`FollowUp`]. The identifier is not patchable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpPatch {
  pub application_id: Option<u64>,
  pub title:          Option<String>,
  #[serde(default, deserialize_with = "double_option")]
  pub description:    Option<Option<String>>,
  pub due_date:       Option<DateTime<Utc>>,
  pub completed:      Option<bool>,
  #[serde(rename = "type")]
  pub kind:           Option<FollowUpKind>,
  #[serde(default, deserialize_with = "double_option")]
  pub email_template: Option<Option<String>>,
}

impl FollowUpPatch {
  /// Merge this patch into `follow_up`, overwriting exactly the supplied
  /// fields.
  pub fn apply(self, follow_up: &mut FollowUp) {
    if let Some(application_id) = self.application_id {
      follow_up.application_id = application_id;
    }
    if let Some(title) = self.title {
      follow_up.title = title;
    }
    if let Some(description) = self.description {
      follow_up.description = description;
    }
    if let Some(due_date) = self.due_date {
      follow_up.due_date = due_date;
    }
    if let Some(completed) = self.completed {
      follow_up.completed = completed;
    }
    if let Some(kind) = self.kind {
      follow_up.kind = kind;
    }
    if let Some(email_template) = self.email_template {
      follow_up.email_template = email_template;
    }
  }
}
