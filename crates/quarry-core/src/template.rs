//! Template — a reusable document (resume, cover letter, or email body).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Kind ────────────────────────────────────────────────────────────────────

/// The document category. Serialized under the wire name `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
  Resume,
  CoverLetter,
  Email,
}

// ─── Entity ──────────────────────────────────────────────────────────────────

/// A stored document template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
  pub id:           u64,
  pub name:         String,
  #[serde(rename = "type")]
  pub kind:         TemplateKind,
  pub content:      String,
  pub is_active:    bool,
  /// Store-assigned at insert time; never changes afterwards.
  pub created_date: DateTime<Utc>,
}

// ─── Draft ───────────────────────────────────────────────────────────────────

/// Input to [`crate::store::TrackerStore::create_template`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTemplate {
  pub name:      String,
  #[serde(rename = "type")]
  pub kind:      TemplateKind,
  pub content:   String,
  #[serde(default)]
  pub is_active: bool,
}

// ─── Patch ───────────────────────────────────────────────────────────────────

/// Partial update for a [`Template`]. The identifier and `created_date` are
/// not patchable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePatch {
  pub name:      Option<String>,
  #[serde(rename = "type")]
  pub kind:      Option<TemplateKind>,
  pub content:   Option<String>,
  pub is_active: Option<bool>,
}

impl TemplatePatch {
  /// Merge this patch into `template`, overwriting exactly the supplied
  /// fields.
  pub fn apply(self, template: &mut Template) {
    if let Some(name) = self.name {
      template.name = name;
    }
    if let Some(kind) = self.kind {
      template.kind = kind;
    }
    if let Some(content) = self.content {
      template.content = content;
    }
    if let Some(is_active) = self.is_active {
      template.is_active = is_active;
    }
  }
}
