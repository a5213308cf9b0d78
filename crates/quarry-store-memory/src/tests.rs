//! Tests for `MemoryStore` semantics: identity allocation, patch merging,
//! query predicates, join resolution, ordering, and analytics.

use chrono::{Duration, Utc};
use quarry_core::{
  application::{ApplicationPatch, ApplicationStatus, NewApplication},
  follow_up::{FollowUpKind, NewFollowUp},
  job::{JobListingPatch, NewJobListing},
  saved_job::NewSavedJob,
  store::{JobFilter, TrackerStore},
  template::{NewTemplate, TemplateKind, TemplatePatch},
};

use crate::MemoryStore;

// ─── Draft helpers ───────────────────────────────────────────────────────────

fn job_draft(title: &str, company: &str) -> NewJobListing {
  NewJobListing {
    title:            title.into(),
    company:          company.into(),
    location:         "San Francisco, CA".into(),
    salary:           Some("$150k".into()),
    job_type:         "full-time".into(),
    experience_level: "senior".into(),
    role_category:    "machine-learning".into(),
    description:      "Build things.".into(),
    requirements:     "Experience.".into(),
    company_logo:     None,
    is_remote:        false,
    application_url:  None,
  }
}

fn application_draft(job_id: u64, status: ApplicationStatus) -> NewApplication {
  NewApplication {
    job_id,
    status,
    last_contact_date: None,
    salary_expectation: Some("$160k".into()),
    personal_message: None,
    resume_template: None,
    cover_letter_template: None,
    available_start_date: None,
    follow_up_enabled: true,
    notes: None,
  }
}

fn follow_up_draft(
  application_id: u64,
  due_date: chrono::DateTime<Utc>,
) -> NewFollowUp {
  NewFollowUp {
    application_id,
    title: "Check in with the recruiter".into(),
    description: None,
    due_date,
    completed: false,
    kind: FollowUpKind::StatusCheck,
    email_template: None,
  }
}

fn template_draft(name: &str, kind: TemplateKind) -> NewTemplate {
  NewTemplate {
    name:      name.into(),
    kind,
    content:   "...".into(),
    is_active: false,
  }
}

// ─── Identity allocation ─────────────────────────────────────────────────────

#[tokio::test]
async fn sequential_inserts_yield_ids_one_to_n() {
  let s = MemoryStore::new();

  for expected in 1..=5u64 {
    let job = s.create_job(job_draft("Engineer", "Acme")).await.unwrap();
    assert_eq!(job.id, expected);
  }
}

#[tokio::test]
async fn ids_are_not_reused_after_deletion() {
  let s = MemoryStore::new();

  let first = s.create_job(job_draft("Engineer", "Acme")).await.unwrap();
  let second = s.create_job(job_draft("Engineer", "Acme")).await.unwrap();
  assert!(s.delete_job(second.id).await.unwrap());
  assert!(s.delete_job(first.id).await.unwrap());

  let third = s.create_job(job_draft("Engineer", "Acme")).await.unwrap();
  assert_eq!(third.id, 3);
}

#[tokio::test]
async fn counters_are_per_collection() {
  let s = MemoryStore::new();

  let job = s.create_job(job_draft("Engineer", "Acme")).await.unwrap();
  let app = s
    .create_application(application_draft(job.id, ApplicationStatus::Applied))
    .await
    .unwrap();
  let template = s
    .create_template(template_draft("Base", TemplateKind::Resume))
    .await
    .unwrap();

  // Each collection starts its own counter at 1.
  assert_eq!(job.id, 1);
  assert_eq!(app.id, 1);
  assert_eq!(template.id, 1);
}

// ─── Creation timestamps ─────────────────────────────────────────────────────

#[tokio::test]
async fn posted_date_is_store_assigned() {
  let s = MemoryStore::new();
  let before = Utc::now();
  let job = s.create_job(job_draft("Engineer", "Acme")).await.unwrap();
  let after = Utc::now();

  assert!(job.posted_date >= before && job.posted_date <= after);
}

// ─── Patch merging ───────────────────────────────────────────────────────────

#[tokio::test]
async fn update_merges_only_supplied_fields() {
  let s = MemoryStore::new();
  let job = s.create_job(job_draft("Engineer", "Acme")).await.unwrap();
  let app = s
    .create_application(application_draft(job.id, ApplicationStatus::Applied))
    .await
    .unwrap();

  let updated = s
    .update_application(
      app.id,
      ApplicationPatch {
        status: Some(ApplicationStatus::Interview),
        ..Default::default()
      },
    )
    .await
    .unwrap()
    .expect("application exists");

  assert_eq!(updated.status, ApplicationStatus::Interview);
  // Every other field keeps its pre-update value.
  assert_eq!(updated.id, app.id);
  assert_eq!(updated.job_id, app.job_id);
  assert_eq!(updated.applied_date, app.applied_date);
  assert_eq!(updated.salary_expectation, app.salary_expectation);
  assert_eq!(updated.follow_up_enabled, app.follow_up_enabled);
  assert_eq!(updated.notes, app.notes);
}

#[tokio::test]
async fn patch_can_clear_a_nullable_field() {
  let s = MemoryStore::new();
  let job = s.create_job(job_draft("Engineer", "Acme")).await.unwrap();
  assert!(job.salary.is_some());

  let cleared = s
    .update_job(
      job.id,
      JobListingPatch { salary: Some(None), ..Default::default() },
    )
    .await
    .unwrap()
    .expect("job exists");

  assert_eq!(cleared.salary, None);
  assert_eq!(cleared.title, job.title);
}

#[tokio::test]
async fn empty_patch_changes_nothing() {
  let s = MemoryStore::new();
  let template = s
    .create_template(template_draft("Base", TemplateKind::Email))
    .await
    .unwrap();

  let updated = s
    .update_template(template.id, TemplatePatch::default())
    .await
    .unwrap()
    .expect("template exists");

  assert_eq!(updated.name, template.name);
  assert_eq!(updated.kind, template.kind);
  assert_eq!(updated.created_date, template.created_date);
}

#[tokio::test]
async fn update_missing_returns_none() {
  let s = MemoryStore::new();
  let result = s.update_job(42, JobListingPatch::default()).await.unwrap();
  assert!(result.is_none());
}

// ─── Deletion ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_is_idempotent() {
  let s = MemoryStore::new();

  assert!(!s.delete_job(7).await.unwrap());
  assert!(!s.delete_job(7).await.unwrap());

  let job = s.create_job(job_draft("Engineer", "Acme")).await.unwrap();
  assert!(s.delete_job(job.id).await.unwrap());
  assert!(!s.delete_job(job.id).await.unwrap());
  assert!(s.get_job(job.id).await.unwrap().is_none());
}

// ─── Listing queries ─────────────────────────────────────────────────────────

#[tokio::test]
async fn filters_are_anded_together() {
  let s = MemoryStore::new();

  s.create_job(job_draft("ML Engineer", "Google")).await.unwrap();

  let mut other = job_draft("Sales Rep", "Google");
  other.location = "New York, NY".into();
  other.experience_level = "entry".into();
  s.create_job(other).await.unwrap();

  let results = s
    .list_jobs(&JobFilter {
      search: Some("ML".into()),
      experience_level: Some("senior".into()),
      ..Default::default()
    })
    .await
    .unwrap();

  assert_eq!(results.len(), 1);
  assert_eq!(results[0].title, "ML Engineer");
}

#[tokio::test]
async fn search_matches_title_or_company_case_insensitively() {
  let s = MemoryStore::new();
  s.create_job(job_draft("Backend Engineer", "Quarry Labs")).await.unwrap();
  s.create_job(job_draft("Data Analyst", "Initech")).await.unwrap();

  let by_title = s
    .list_jobs(&JobFilter { search: Some("backend".into()), ..Default::default() })
    .await
    .unwrap();
  assert_eq!(by_title.len(), 1);

  let by_company = s
    .list_jobs(&JobFilter { search: Some("QUARRY".into()), ..Default::default() })
    .await
    .unwrap();
  assert_eq!(by_company.len(), 1);
  assert_eq!(by_company[0].company, "Quarry Labs");
}

#[tokio::test]
async fn location_is_substring_matched() {
  let s = MemoryStore::new();
  let mut remote = job_draft("Engineer", "Acme");
  remote.location = "Remote (US)".into();
  s.create_job(remote).await.unwrap();
  s.create_job(job_draft("Engineer", "Acme")).await.unwrap();

  let results = s
    .list_jobs(&JobFilter { location: Some("remote".into()), ..Default::default() })
    .await
    .unwrap();
  assert_eq!(results.len(), 1);
  assert_eq!(results[0].location, "Remote (US)");
}

#[tokio::test]
async fn salary_range_is_accepted_but_has_no_effect() {
  let s = MemoryStore::new();
  s.create_job(job_draft("Engineer", "Acme")).await.unwrap();

  let results = s
    .list_jobs(&JobFilter {
      salary_range: Some("$0 - $1".into()),
      ..Default::default()
    })
    .await
    .unwrap();

  // Everything still comes back.
  assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn empty_filter_matches_all_newest_first() {
  let s = MemoryStore::new();
  let a = s.create_job(job_draft("First", "Acme")).await.unwrap();
  let b = s.create_job(job_draft("Second", "Acme")).await.unwrap();
  let c = s.create_job(job_draft("Third", "Acme")).await.unwrap();

  let results = s.list_jobs(&JobFilter::default()).await.unwrap();
  let ids: Vec<u64> = results.iter().map(|j| j.id).collect();
  assert_eq!(ids, vec![c.id, b.id, a.id]);
}

// ─── Join resolution ─────────────────────────────────────────────────────────

#[tokio::test]
async fn application_views_embed_the_listing() {
  let s = MemoryStore::new();
  let job = s.create_job(job_draft("Engineer", "Acme")).await.unwrap();
  let app = s
    .create_application(application_draft(job.id, ApplicationStatus::Applied))
    .await
    .unwrap();

  let view = s
    .get_application(app.id)
    .await
    .unwrap()
    .expect("view resolves");
  assert_eq!(view.application.id, app.id);
  assert_eq!(view.job.id, job.id);
  assert_eq!(view.job.company, "Acme");
}

#[tokio::test]
async fn deleting_the_listing_drops_dependent_application_views() {
  let s = MemoryStore::new();
  let job = s.create_job(job_draft("Engineer", "Acme")).await.unwrap();
  let app = s
    .create_application(application_draft(job.id, ApplicationStatus::Applied))
    .await
    .unwrap();

  assert!(s.delete_job(job.id).await.unwrap());

  let views = s.list_applications().await.unwrap();
  assert!(views.is_empty());
  assert!(s.get_application(app.id).await.unwrap().is_none());

  // The application row itself is still there: deletes do not cascade,
  // and a patch against it still succeeds.
  let patched = s
    .update_application(
      app.id,
      ApplicationPatch {
        status: Some(ApplicationStatus::Rejected),
        ..Default::default()
      },
    )
    .await
    .unwrap();
  assert!(patched.is_some());
}

#[tokio::test]
async fn dangling_job_reference_is_tolerated_at_write_time() {
  let s = MemoryStore::new();

  // No listing 99 exists; the insert still succeeds.
  let app = s
    .create_application(application_draft(99, ApplicationStatus::Applied))
    .await
    .unwrap();
  assert_eq!(app.job_id, 99);

  // It just never shows up in composed views.
  assert!(s.get_application(app.id).await.unwrap().is_none());
}

#[tokio::test]
async fn follow_up_views_chain_through_application_and_listing() {
  let s = MemoryStore::new();
  let job = s.create_job(job_draft("Engineer", "Acme")).await.unwrap();
  let app = s
    .create_application(application_draft(job.id, ApplicationStatus::Interview))
    .await
    .unwrap();
  let fu = s
    .create_follow_up(follow_up_draft(app.id, Utc::now()))
    .await
    .unwrap();

  let view = s.get_follow_up(fu.id).await.unwrap().expect("view resolves");
  assert_eq!(view.follow_up.id, fu.id);
  assert_eq!(view.application.application.id, app.id);
  assert_eq!(view.application.job.id, job.id);

  // Breaking the inner link anywhere in the chain hides the follow-up.
  assert!(s.delete_job(job.id).await.unwrap());
  assert!(s.get_follow_up(fu.id).await.unwrap().is_none());
  assert!(s.list_follow_ups().await.unwrap().is_empty());
}

#[tokio::test]
async fn saved_job_views_drop_when_the_listing_goes() {
  let s = MemoryStore::new();
  let job = s.create_job(job_draft("Engineer", "Acme")).await.unwrap();
  let saved = s
    .create_saved_job(NewSavedJob { job_id: job.id })
    .await
    .unwrap();

  let views = s.list_saved_jobs().await.unwrap();
  assert_eq!(views.len(), 1);
  assert_eq!(views[0].saved_job.id, saved.id);
  assert_eq!(views[0].job.id, job.id);

  assert!(s.delete_job(job.id).await.unwrap());
  assert!(s.list_saved_jobs().await.unwrap().is_empty());
}

// ─── Ordering ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn follow_ups_list_soonest_due_first() {
  let s = MemoryStore::new();
  let job = s.create_job(job_draft("Engineer", "Acme")).await.unwrap();
  let app = s
    .create_application(application_draft(job.id, ApplicationStatus::Applied))
    .await
    .unwrap();

  let now = Utc::now();
  let plus_one = s
    .create_follow_up(follow_up_draft(app.id, now + Duration::days(1)))
    .await
    .unwrap();
  let minus_one = s
    .create_follow_up(follow_up_draft(app.id, now - Duration::days(1)))
    .await
    .unwrap();
  let plus_three = s
    .create_follow_up(follow_up_draft(app.id, now + Duration::days(3)))
    .await
    .unwrap();

  let views = s.list_follow_ups().await.unwrap();
  let ids: Vec<u64> = views.iter().map(|v| v.follow_up.id).collect();
  assert_eq!(ids, vec![minus_one.id, plus_one.id, plus_three.id]);
}

#[tokio::test]
async fn application_views_list_newest_first() {
  let s = MemoryStore::new();
  let job = s.create_job(job_draft("Engineer", "Acme")).await.unwrap();

  let first = s
    .create_application(application_draft(job.id, ApplicationStatus::Applied))
    .await
    .unwrap();
  let second = s
    .create_application(application_draft(job.id, ApplicationStatus::Applied))
    .await
    .unwrap();

  let views = s.list_applications().await.unwrap();
  let ids: Vec<u64> = views.iter().map(|v| v.application.id).collect();
  assert_eq!(ids, vec![second.id, first.id]);
}

// ─── Templates ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn templates_filter_by_kind() {
  let s = MemoryStore::new();
  s.create_template(template_draft("Resume A", TemplateKind::Resume))
    .await
    .unwrap();
  s.create_template(template_draft("Letter", TemplateKind::CoverLetter))
    .await
    .unwrap();
  s.create_template(template_draft("Resume B", TemplateKind::Resume))
    .await
    .unwrap();

  let resumes = s
    .list_templates(Some(TemplateKind::Resume))
    .await
    .unwrap();
  assert_eq!(resumes.len(), 2);
  assert!(resumes.iter().all(|t| t.kind == TemplateKind::Resume));

  let all = s.list_templates(None).await.unwrap();
  assert_eq!(all.len(), 3);
}

// ─── Analytics ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn stats_over_mixed_statuses() {
  let s = MemoryStore::new();
  let job = s.create_job(job_draft("Engineer", "Acme")).await.unwrap();

  for status in [
    ApplicationStatus::Applied,
    ApplicationStatus::Applied,
    ApplicationStatus::Interview,
    ApplicationStatus::Offer,
  ] {
    s.create_application(application_draft(job.id, status))
      .await
      .unwrap();
  }

  let stats = s.application_stats().await.unwrap();
  assert_eq!(stats.total_applications, 4);
  assert_eq!(stats.interviews_scheduled, 1);
  assert_eq!(stats.pending_responses, 2);
  assert_eq!(stats.response_rate, 50);
}

#[tokio::test]
async fn stats_on_empty_collection_are_all_zero() {
  let s = MemoryStore::new();
  let stats = s.application_stats().await.unwrap();
  assert_eq!(stats.total_applications, 0);
  assert_eq!(stats.interviews_scheduled, 0);
  assert_eq!(stats.pending_responses, 0);
  assert_eq!(stats.response_rate, 0);
}

#[tokio::test]
async fn stats_ignore_listing_existence() {
  let s = MemoryStore::new();
  let job = s.create_job(job_draft("Engineer", "Acme")).await.unwrap();
  s.create_application(application_draft(job.id, ApplicationStatus::Rejected))
    .await
    .unwrap();
  assert!(s.delete_job(job.id).await.unwrap());

  // Stats run over the raw collection, not the joined views.
  let stats = s.application_stats().await.unwrap();
  assert_eq!(stats.total_applications, 1);
  assert_eq!(stats.response_rate, 100);
}

// ─── Sample data ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn sample_data_populates_jobs_and_templates() {
  let s = MemoryStore::with_sample_data();

  let jobs = s.list_jobs(&JobFilter::default()).await.unwrap();
  assert_eq!(jobs.len(), 3);
  let mut ids: Vec<u64> = jobs.iter().map(|j| j.id).collect();
  ids.sort_unstable();
  assert_eq!(ids, vec![1, 2, 3]);

  let templates = s.list_templates(None).await.unwrap();
  assert_eq!(templates.len(), 4);

  // Everything else starts empty.
  assert!(s.list_applications().await.unwrap().is_empty());
  assert!(s.list_saved_jobs().await.unwrap().is_empty());
  assert_eq!(s.application_stats().await.unwrap().total_applications, 0);
}
