//! [`MemoryStore`] — the in-memory implementation of [`TrackerStore`].

use std::convert::Infallible;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use quarry_core::{
  application::{Application, ApplicationPatch, NewApplication},
  follow_up::{FollowUp, FollowUpPatch, NewFollowUp},
  job::{JobListing, JobListingPatch, NewJobListing},
  saved_job::{NewSavedJob, SavedJob},
  store::{JobFilter, TrackerStore},
  template::{NewTemplate, Template, TemplateKind, TemplatePatch},
  views::{ApplicationStats, ApplicationView, FollowUpView, SavedJobView},
};

use crate::{query, seed, table::Table};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A tracker store backed by in-memory tables, one lock per collection.
///
/// Writes take the collection's write guard for the whole mutation, so
/// identifier allocation and patch merging are atomic; reads take read guards
/// against a stable snapshot. When an operation needs several collections,
/// guards are taken in field declaration order.
pub struct MemoryStore {
  jobs:         RwLock<Table<JobListing>>,
  applications: RwLock<Table<Application>>,
  follow_ups:   RwLock<Table<FollowUp>>,
  templates:    RwLock<Table<Template>>,
  saved_jobs:   RwLock<Table<SavedJob>>,
}

impl MemoryStore {
  /// An empty store.
  pub fn new() -> Self {
    Self {
      jobs:         RwLock::new(Table::new()),
      applications: RwLock::new(Table::new()),
      follow_ups:   RwLock::new(Table::new()),
      templates:    RwLock::new(Table::new()),
      saved_jobs:   RwLock::new(Table::new()),
    }
  }

  /// A store pre-populated with the sample job listings and templates.
  pub fn with_sample_data() -> Self {
    let now = Utc::now();

    let mut jobs = Table::new();
    for draft in seed::sample_jobs() {
      jobs.insert_with(|id| build_job(id, now, draft));
    }

    let mut templates = Table::new();
    for draft in seed::sample_templates() {
      templates.insert_with(|id| build_template(id, now, draft));
    }

    Self {
      jobs: RwLock::new(jobs),
      applications: RwLock::new(Table::new()),
      follow_ups: RwLock::new(Table::new()),
      templates: RwLock::new(templates),
      saved_jobs: RwLock::new(Table::new()),
    }
  }
}

impl Default for MemoryStore {
  fn default() -> Self {
    Self::new()
  }
}

// ─── Entity builders ─────────────────────────────────────────────────────────

fn build_job(id: u64, posted_date: DateTime<Utc>, draft: NewJobListing) -> JobListing {
  JobListing {
    id,
    title: draft.title,
    company: draft.company,
    location: draft.location,
    salary: draft.salary,
    job_type: draft.job_type,
    experience_level: draft.experience_level,
    role_category: draft.role_category,
    description: draft.description,
    requirements: draft.requirements,
    company_logo: draft.company_logo,
    posted_date,
    is_remote: draft.is_remote,
    application_url: draft.application_url,
  }
}

fn build_application(
  id: u64,
  applied_date: DateTime<Utc>,
  draft: NewApplication,
) -> Application {
  Application {
    id,
    job_id: draft.job_id,
    status: draft.status,
    applied_date,
    last_contact_date: draft.last_contact_date,
    salary_expectation: draft.salary_expectation,
    personal_message: draft.personal_message,
    resume_template: draft.resume_template,
    cover_letter_template: draft.cover_letter_template,
    available_start_date: draft.available_start_date,
    follow_up_enabled: draft.follow_up_enabled,
    notes: draft.notes,
  }
}

fn build_template(id: u64, created_date: DateTime<Utc>, draft: NewTemplate) -> Template {
  Template {
    id,
    name: draft.name,
    kind: draft.kind,
    content: draft.content,
    is_active: draft.is_active,
    created_date,
  }
}

// ─── Join helpers ────────────────────────────────────────────────────────────

/// Resolve an application's listing. `None` means the listing has been
/// deleted; the caller drops the application from the composed result.
fn join_application(
  application: Application,
  jobs: &Table<JobListing>,
) -> Option<ApplicationView> {
  let job = jobs.get(application.job_id)?;
  Some(ApplicationView { application, job })
}

/// Chained resolution: follow-up → application → listing.
fn join_follow_up(
  follow_up: FollowUp,
  applications: &Table<Application>,
  jobs: &Table<JobListing>,
) -> Option<FollowUpView> {
  let application = applications.get(follow_up.application_id)?;
  let view = join_application(application, jobs)?;
  Some(FollowUpView { follow_up, application: view })
}

fn join_saved_job(saved_job: SavedJob, jobs: &Table<JobListing>) -> Option<SavedJobView> {
  let job = jobs.get(saved_job.job_id)?;
  Some(SavedJobView { saved_job, job })
}

// ─── TrackerStore impl ───────────────────────────────────────────────────────

impl TrackerStore for MemoryStore {
  // No in-memory operation can fail: absence is `Option`, never an error.
  type Error = Infallible;

  // ── Job listings ──────────────────────────────────────────────────────────

  async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<JobListing>, Infallible> {
    let jobs = self.jobs.read().await;
    let mut matched: Vec<JobListing> = jobs
      .iter()
      .filter(|job| query::matches(job, filter))
      .cloned()
      .collect();
    query::sort_newest_first(&mut matched);
    Ok(matched)
  }

  async fn get_job(&self, id: u64) -> Result<Option<JobListing>, Infallible> {
    Ok(self.jobs.read().await.get(id))
  }

  async fn create_job(&self, draft: NewJobListing) -> Result<JobListing, Infallible> {
    let now = Utc::now();
    let job = self
      .jobs
      .write()
      .await
      .insert_with(|id| build_job(id, now, draft));
    Ok(job)
  }

  async fn update_job(
    &self,
    id: u64,
    patch: JobListingPatch,
  ) -> Result<Option<JobListing>, Infallible> {
    Ok(self.jobs.write().await.update(id, |job| patch.apply(job)))
  }

  async fn delete_job(&self, id: u64) -> Result<bool, Infallible> {
    Ok(self.jobs.write().await.remove(id))
  }

  // ── Applications ──────────────────────────────────────────────────────────

  async fn list_applications(&self) -> Result<Vec<ApplicationView>, Infallible> {
    let jobs = self.jobs.read().await;
    let applications = self.applications.read().await;

    let mut views: Vec<ApplicationView> = applications
      .iter()
      .filter_map(|app| join_application(app.clone(), &jobs))
      .collect();
    views.sort_by(|a, b| {
      b.application
        .applied_date
        .cmp(&a.application.applied_date)
        .then_with(|| b.application.id.cmp(&a.application.id))
    });
    Ok(views)
  }

  async fn get_application(&self, id: u64) -> Result<Option<ApplicationView>, Infallible> {
    let jobs = self.jobs.read().await;
    let applications = self.applications.read().await;

    Ok(
      applications
        .get(id)
        .and_then(|app| join_application(app, &jobs)),
    )
  }

  async fn create_application(
    &self,
    draft: NewApplication,
  ) -> Result<Application, Infallible> {
    let now = Utc::now();
    let application = self
      .applications
      .write()
      .await
      .insert_with(|id| build_application(id, now, draft));
    Ok(application)
  }

  async fn update_application(
    &self,
    id: u64,
    patch: ApplicationPatch,
  ) -> Result<Option<Application>, Infallible> {
    Ok(
      self
        .applications
        .write()
        .await
        .update(id, |app| patch.apply(app)),
    )
  }

  async fn delete_application(&self, id: u64) -> Result<bool, Infallible> {
    Ok(self.applications.write().await.remove(id))
  }

  // ── Follow-ups ────────────────────────────────────────────────────────────

  async fn list_follow_ups(&self) -> Result<Vec<FollowUpView>, Infallible> {
    let jobs = self.jobs.read().await;
    let applications = self.applications.read().await;
    let follow_ups = self.follow_ups.read().await;

    let mut views: Vec<FollowUpView> = follow_ups
      .iter()
      .filter_map(|fu| join_follow_up(fu.clone(), &applications, &jobs))
      .collect();
    views.sort_by(|a, b| {
      a.follow_up
        .due_date
        .cmp(&b.follow_up.due_date)
        .then_with(|| a.follow_up.id.cmp(&b.follow_up.id))
    });
    Ok(views)
  }

  async fn get_follow_up(&self, id: u64) -> Result<Option<FollowUpView>, Infallible> {
    let jobs = self.jobs.read().await;
    let applications = self.applications.read().await;
    let follow_ups = self.follow_ups.read().await;

    Ok(
      follow_ups
        .get(id)
        .and_then(|fu| join_follow_up(fu, &applications, &jobs)),
    )
  }

  async fn create_follow_up(&self, draft: NewFollowUp) -> Result<FollowUp, Infallible> {
    let follow_up = self.follow_ups.write().await.insert_with(|id| FollowUp {
      id,
      application_id: draft.application_id,
      title: draft.title,
      description: draft.description,
      due_date: draft.due_date,
      completed: draft.completed,
      kind: draft.kind,
      email_template: draft.email_template,
    });
    Ok(follow_up)
  }

  async fn update_follow_up(
    &self,
    id: u64,
    patch: FollowUpPatch,
  ) -> Result<Option<FollowUp>, Infallible> {
    Ok(
      self
        .follow_ups
        .write()
        .await
        .update(id, |fu| patch.apply(fu)),
    )
  }

  async fn delete_follow_up(&self, id: u64) -> Result<bool, Infallible> {
    Ok(self.follow_ups.write().await.remove(id))
  }

  // ── Templates ─────────────────────────────────────────────────────────────

  async fn list_templates(
    &self,
    kind: Option<TemplateKind>,
  ) -> Result<Vec<Template>, Infallible> {
    let templates = self.templates.read().await;
    let mut matched: Vec<Template> = templates
      .iter()
      .filter(|t| kind.is_none_or(|k| t.kind == k))
      .cloned()
      .collect();
    matched.sort_by(|a, b| {
      b.created_date
        .cmp(&a.created_date)
        .then_with(|| b.id.cmp(&a.id))
    });
    Ok(matched)
  }

  async fn get_template(&self, id: u64) -> Result<Option<Template>, Infallible> {
    Ok(self.templates.read().await.get(id))
  }

  async fn create_template(&self, draft: NewTemplate) -> Result<Template, Infallible> {
    let now = Utc::now();
    let template = self
      .templates
      .write()
      .await
      .insert_with(|id| build_template(id, now, draft));
    Ok(template)
  }

  async fn update_template(
    &self,
    id: u64,
    patch: TemplatePatch,
  ) -> Result<Option<Template>, Infallible> {
    Ok(
      self
        .templates
        .write()
        .await
        .update(id, |t| patch.apply(t)),
    )
  }

  async fn delete_template(&self, id: u64) -> Result<bool, Infallible> {
    Ok(self.templates.write().await.remove(id))
  }

  // ── Saved jobs ────────────────────────────────────────────────────────────

  async fn list_saved_jobs(&self) -> Result<Vec<SavedJobView>, Infallible> {
    let jobs = self.jobs.read().await;
    let saved_jobs = self.saved_jobs.read().await;

    let mut views: Vec<SavedJobView> = saved_jobs
      .iter()
      .filter_map(|sj| join_saved_job(sj.clone(), &jobs))
      .collect();
    views.sort_by(|a, b| {
      b.saved_job
        .saved_date
        .cmp(&a.saved_job.saved_date)
        .then_with(|| b.saved_job.id.cmp(&a.saved_job.id))
    });
    Ok(views)
  }

  async fn create_saved_job(&self, draft: NewSavedJob) -> Result<SavedJob, Infallible> {
    let now = Utc::now();
    let saved_job = self.saved_jobs.write().await.insert_with(|id| SavedJob {
      id,
      job_id: draft.job_id,
      saved_date: now,
    });
    Ok(saved_job)
  }

  async fn delete_saved_job(&self, id: u64) -> Result<bool, Infallible> {
    Ok(self.saved_jobs.write().await.remove(id))
  }

  // ── Analytics ─────────────────────────────────────────────────────────────

  async fn application_stats(&self) -> Result<ApplicationStats, Infallible> {
    let applications = self.applications.read().await;
    Ok(ApplicationStats::from_statuses(
      applications.iter().map(|app| app.status),
    ))
  }
}
