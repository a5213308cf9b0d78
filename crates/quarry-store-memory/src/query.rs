//! Listing search: filter predicates and result ordering.

use quarry_core::{job::JobListing, store::JobFilter};

/// Whether `job` satisfies every predicate supplied in `filter`.
///
/// `search` and `location` are case-insensitive substring matches; the
/// remaining fields are exact equality. `filter.salary_range` is accepted but
/// not applied; filtering by salary has never been implemented.
pub(crate) fn matches(job: &JobListing, filter: &JobFilter) -> bool {
  if let Some(search) = &filter.search {
    let term = search.to_lowercase();
    let hit = job.title.to_lowercase().contains(&term)
      || job.company.to_lowercase().contains(&term);
    if !hit {
      return false;
    }
  }

  if let Some(location) = &filter.location {
    if !job.location.to_lowercase().contains(&location.to_lowercase()) {
      return false;
    }
  }

  if let Some(experience_level) = &filter.experience_level {
    if job.experience_level != *experience_level {
      return false;
    }
  }

  if let Some(job_type) = &filter.job_type {
    if job.job_type != *job_type {
      return false;
    }
  }

  if let Some(role_category) = &filter.role_category {
    if job.role_category != *role_category {
      return false;
    }
  }

  true
}

/// Sort listings newest first by `posted_date`, ties broken by id so the
/// order is deterministic.
pub(crate) fn sort_newest_first(jobs: &mut [JobListing]) {
  jobs.sort_by(|a, b| {
    b.posted_date
      .cmp(&a.posted_date)
      .then_with(|| b.id.cmp(&a.id))
  });
}
