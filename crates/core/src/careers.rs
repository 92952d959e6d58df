//! Job posting statuses, the application gate, and application validation.
//!
//! A job's publish `status` and its `accepting_applications` flag are
//! independent: a published job can stop taking applications, and the gate
//! is the flag alone.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::validation::validate_input;

pub const JOB_STATUS_DRAFT: &str = "DRAFT";
pub const JOB_STATUS_PUBLISHED: &str = "PUBLISHED";
pub const JOB_STATUS_CLOSED: &str = "CLOSED";

pub const VALID_JOB_STATUSES: &[&str] = &[JOB_STATUS_DRAFT, JOB_STATUS_PUBLISHED, JOB_STATUS_CLOSED];

/// Message returned to applicants when a job stopped taking applications.
pub const APPLICATIONS_CLOSED_MESSAGE: &str =
    "This position is closed and no longer accepting applications";

pub fn validate_job_status(status: &str) -> Result<(), CoreError> {
    if VALID_JOB_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid job status '{status}'. Must be one of: {}",
            VALID_JOB_STATUSES.join(", ")
        )))
    }
}

/// Whether a job with this status appears in public listings.
pub fn is_publicly_listed(status: &str) -> bool {
    status == JOB_STATUS_PUBLISHED
}

/// Reject an application when the job is not accepting applications.
pub fn ensure_accepting_applications(accepting_applications: bool) -> Result<(), CoreError> {
    if accepting_applications {
        Ok(())
    } else {
        Err(CoreError::Conflict(APPLICATIONS_CLOSED_MESSAGE.into()))
    }
}

/// Validate a job title (non-empty, <= 200 chars).
pub fn validate_job_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Job title must not be empty".into()));
    }
    if title.len() > 200 {
        return Err(CoreError::Validation(
            "Job title must be at most 200 characters".into(),
        ));
    }
    Ok(())
}

/// Public application payload for `POST /careers/{id}/applications`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSubmission {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "has_at_sign"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(max = 2000, message = "Resume URL must be at most 2000 characters"))]
    pub resume_url: Option<String>,
    #[validate(length(max = 10000, message = "Cover letter must be at most 10000 characters"))]
    pub cover_letter: Option<String>,
}

pub fn validate_application(input: &ApplicationSubmission) -> Result<(), CoreError> {
    validate_input(input)
}

fn has_at_sign(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') {
        return Err(ValidationError::new("email")
            .with_message(Cow::Borrowed("A valid email address is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn gate_depends_only_on_flag() {
        assert!(ensure_accepting_applications(true).is_ok());
        assert_matches!(
            ensure_accepting_applications(false),
            Err(CoreError::Conflict(msg)) if msg.contains("closed")
        );
    }

    #[test]
    fn job_statuses() {
        assert!(validate_job_status("PUBLISHED").is_ok());
        assert!(validate_job_status("ARCHIVED").is_err());
        assert!(is_publicly_listed("PUBLISHED"));
        assert!(!is_publicly_listed("DRAFT"));
        assert!(!is_publicly_listed("CLOSED"));
    }

    #[test]
    fn title_rules() {
        assert!(validate_job_title("Backend Engineer").is_ok());
        assert!(validate_job_title(" ").is_err());
        assert!(validate_job_title(&"x".repeat(201)).is_err());
    }

    #[test]
    fn application_requires_name_and_email() {
        let ok = ApplicationSubmission {
            name: "Ravi".into(),
            email: "ravi@example.com".into(),
            phone: None,
            resume_url: Some("https://example.com/cv.pdf".into()),
            cover_letter: None,
        };
        assert!(validate_application(&ok).is_ok());

        let bad = ApplicationSubmission {
            name: String::new(),
            email: "ravi".into(),
            ..ok
        };
        let Err(CoreError::Validation(msg)) = validate_application(&bad) else {
            panic!("expected validation error");
        };
        assert!(msg.contains("Name is required"));
        assert!(msg.contains("email"));
    }
}
