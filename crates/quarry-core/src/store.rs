//! The `TrackerStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `quarry-store-memory`).
//! Higher layers (`quarry-api`, `quarry-server`) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::{
  application::{Application, ApplicationPatch, NewApplication},
  follow_up::{FollowUp, FollowUpPatch, NewFollowUp},
  job::{JobListing, JobListingPatch, NewJobListing},
  saved_job::{NewSavedJob, SavedJob},
  template::{NewTemplate, Template, TemplateKind, TemplatePatch},
  views::{ApplicationStats, ApplicationView, FollowUpView, SavedJobView},
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`TrackerStore::list_jobs`]. Absent fields impose no
/// constraint; present fields are ANDed together.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
  /// Case-insensitive substring match against title or company.
  pub search:           Option<String>,
  /// Case-insensitive substring match against location.
  pub location:         Option<String>,
  /// Exact match.
  pub experience_level: Option<String>,
  /// Exact match.
  pub job_type:         Option<String>,
  /// Exact match.
  pub role_category:    Option<String>,
  /// Accepted but not applied; filtering by salary has never been
  /// implemented.
  pub salary_range:     Option<String>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Quarry tracker store backend.
///
/// Absence is a value, never an error: `get_*` returns `None`, `update_*`
/// returns `None` for unknown identifiers, `delete_*` reports whether a
/// removal occurred. Entity identifiers and creation timestamps are assigned
/// by the store at insert time and are immutable thereafter.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait TrackerStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Job listings ──────────────────────────────────────────────────────

  /// List job listings matching `filter`, newest first by `posted_date`.
  fn list_jobs<'a>(
    &'a self,
    filter: &'a JobFilter,
  ) -> impl Future<Output = Result<Vec<JobListing>, Self::Error>> + Send + 'a;

  /// Retrieve a listing by id. Returns `None` if not found.
  fn get_job(
    &self,
    id: u64,
  ) -> impl Future<Output = Result<Option<JobListing>, Self::Error>> + Send + '_;

  /// Create and store a new listing; the store assigns the identifier and
  /// `posted_date`.
  fn create_job(
    &self,
    draft: NewJobListing,
  ) -> impl Future<Output = Result<JobListing, Self::Error>> + Send + '_;

  /// Merge `patch` into an existing listing. Returns `None` if not found.
  fn update_job(
    &self,
    id: u64,
    patch: JobListingPatch,
  ) -> impl Future<Output = Result<Option<JobListing>, Self::Error>> + Send + '_;

  /// Remove a listing. Returns whether a removal occurred. Dependent
  /// applications and bookmarks are left in place; they drop out of composed
  /// views at read time.
  fn delete_job(
    &self,
    id: u64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Applications ──────────────────────────────────────────────────────

  /// List application views, newest first by `applied_date`. Applications
  /// whose listing no longer exists are excluded.
  fn list_applications(
    &self,
  ) -> impl Future<Output = Result<Vec<ApplicationView>, Self::Error>> + Send + '_;

  /// Retrieve a single application view. Returns `None` if the application
  /// is missing or its listing no longer exists.
  fn get_application(
    &self,
    id: u64,
  ) -> impl Future<Output = Result<Option<ApplicationView>, Self::Error>> + Send + '_;

  /// Create and store a new application; the store assigns the identifier
  /// and `applied_date`. The referenced listing is not checked.
  fn create_application(
    &self,
    draft: NewApplication,
  ) -> impl Future<Output = Result<Application, Self::Error>> + Send + '_;

  /// Merge `patch` into an existing application. Returns `None` if not
  /// found.
  fn update_application(
    &self,
    id: u64,
    patch: ApplicationPatch,
  ) -> impl Future<Output = Result<Option<Application>, Self::Error>> + Send + '_;

  /// Remove an application. Returns whether a removal occurred.
  fn delete_application(
    &self,
    id: u64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Follow-ups ────────────────────────────────────────────────────────

  /// List follow-up views, soonest due first. Follow-ups whose application
  /// (or its listing) no longer exists are excluded.
  fn list_follow_ups(
    &self,
  ) -> impl Future<Output = Result<Vec<FollowUpView>, Self::Error>> + Send + '_;

  /// Retrieve a single follow-up view. Returns `None` if the follow-up is
  /// missing or its chained resolution fails.
  fn get_follow_up(
    &self,
    id: u64,
  ) -> impl Future<Output = Result<Option<FollowUpView>, Self::Error>> + Send + '_;

  /// Create and store a new follow-up; the store assigns the identifier.
  fn create_follow_up(
    &self,
    draft: NewFollowUp,
  ) -> impl Future<Output = Result<FollowUp, Self::Error>> + Send + '_;

  /// Merge `patch` into an existing follow-up. Returns `None` if not found.
  fn update_follow_up(
    &self,
    id: u64,
    patch: FollowUpPatch,
  ) -> impl Future<Output = Result<Option<FollowUp>, Self::Error>> + Send + '_;

  /// Remove a follow-up. Returns whether a removal occurred.
  fn delete_follow_up(
    &self,
    id: u64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Templates ─────────────────────────────────────────────────────────

  /// List templates, newest first by `created_date`, optionally restricted
  /// to one kind.
  fn list_templates(
    &self,
    kind: Option<TemplateKind>,
  ) -> impl Future<Output = Result<Vec<Template>, Self::Error>> + Send + '_;

  /// Retrieve a template by id. Returns `None` if not found.
  fn get_template(
    &self,
    id: u64,
  ) -> impl Future<Output = Result<Option<Template>, Self::Error>> + Send + '_;

  /// Create and store a new template; the store assigns the identifier and
  /// `created_date`.
  fn create_template(
    &self,
    draft: NewTemplate,
  ) -> impl Future<Output = Result<Template, Self::Error>> + Send + '_;

  /// Merge `patch` into an existing template. Returns `None` if not found.
  fn update_template(
    &self,
    id: u64,
    patch: TemplatePatch,
  ) -> impl Future<Output = Result<Option<Template>, Self::Error>> + Send + '_;

  /// Remove a template. Returns whether a removal occurred.
  fn delete_template(
    &self,
    id: u64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Saved jobs ────────────────────────────────────────────────────────

  /// List bookmark views, newest first by `saved_date`. Bookmarks whose
  /// listing no longer exists are excluded.
  fn list_saved_jobs(
    &self,
  ) -> impl Future<Output = Result<Vec<SavedJobView>, Self::Error>> + Send + '_;

  /// Create and store a new bookmark; the store assigns the identifier and
  /// `saved_date`. Bookmarks have no update operation.
  fn create_saved_job(
    &self,
    draft: NewSavedJob,
  ) -> impl Future<Output = Result<SavedJob, Self::Error>> + Send + '_;

  /// Remove a bookmark. Returns whether a removal occurred.
  fn delete_saved_job(
    &self,
    id: u64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Analytics ─────────────────────────────────────────────────────────

  /// Compute summary statistics over the full application collection.
  fn application_stats(
    &self,
  ) -> impl Future<Output = Result<ApplicationStats, Self::Error>> + Send + '_;
}
