//! Sample data for a freshly started store.

use quarry_core::{
  job::NewJobListing,
  template::{NewTemplate, TemplateKind},
};

pub(crate) fn sample_jobs() -> Vec<NewJobListing> {
  vec![
    NewJobListing {
      title:            "Senior ML Engineer - Computer Vision".into(),
      company:          "Google".into(),
      location:         "San Francisco, CA".into(),
      salary:           Some("$180k - $220k".into()),
      job_type:         "full-time".into(),
      experience_level: "senior".into(),
      role_category:    "machine-learning".into(),
      description:      "Join our cutting-edge computer vision team to develop \
                         next-generation AI systems. Work with large-scale data \
                         and state-of-the-art deep learning models..."
        .into(),
      requirements:     "5+ years experience in machine learning, PhD preferred, \
                         Python, TensorFlow, PyTorch"
        .into(),
      company_logo:     Some("google".into()),
      is_remote:        true,
      application_url:  Some("https://careers.google.com/jobs/123".into()),
    },
    NewJobListing {
      title:            "AI Research Scientist".into(),
      company:          "Microsoft Research".into(),
      location:         "Seattle, WA".into(),
      salary:           Some("$160k - $200k".into()),
      job_type:         "full-time".into(),
      experience_level: "senior".into(),
      role_category:    "ai-data-science".into(),
      description:      "Lead groundbreaking research in artificial intelligence \
                         and machine learning. Publish top-tier papers and \
                         develop innovative AI solutions..."
        .into(),
      requirements:     "PhD in Computer Science or related field, 3+ years \
                         research experience"
        .into(),
      company_logo:     Some("microsoft".into()),
      is_remote:        false,
      application_url:  Some("https://careers.microsoft.com/jobs/456".into()),
    },
    NewJobListing {
      title:            "Software Engineer - Machine Learning Platform".into(),
      company:          "Apple".into(),
      location:         "Cupertino, CA".into(),
      salary:           Some("$170k - $210k".into()),
      job_type:         "full-time".into(),
      experience_level: "mid".into(),
      role_category:    "software-development".into(),
      description:      "Build and scale ML infrastructure powering Apple's \
                         products used by billions. Work on distributed systems \
                         and ML deployment..."
        .into(),
      requirements:     "4+ years software engineering experience, distributed \
                         systems knowledge"
        .into(),
      company_logo:     Some("apple".into()),
      is_remote:        false,
      application_url:  Some("https://jobs.apple.com/jobs/789".into()),
    },
  ]
}

pub(crate) fn sample_templates() -> Vec<NewTemplate> {
  vec![
    NewTemplate {
      name:      "ML Engineer Resume".into(),
      kind:      TemplateKind::Resume,
      content:   "Technical resume template for ML engineering positions".into(),
      is_active: true,
    },
    NewTemplate {
      name:      "Technical Role Template".into(),
      kind:      TemplateKind::CoverLetter,
      content:   "Cover letter template for technical positions".into(),
      is_active: true,
    },
    NewTemplate {
      name:      "Follow-up Email".into(),
      kind:      TemplateKind::Email,
      content:   "Professional follow-up email template".into(),
      is_active: false,
    },
    NewTemplate {
      name:      "Thank You Note".into(),
      kind:      TemplateKind::Email,
      content:   "Thank you email template after interviews".into(),
      is_active: false,
    },
  ]
}
