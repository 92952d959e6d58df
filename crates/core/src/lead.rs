//! Lead capture: interest and status enums plus submission validation.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::validation::validate_input;

pub const INTEREST_STUDENT: &str = "STUDENT";
pub const INTEREST_CLIENT: &str = "CLIENT";
pub const INTEREST_PARTNER: &str = "PARTNER";

pub const VALID_INTEREST_TYPES: &[&str] = &[INTEREST_STUDENT, INTEREST_CLIENT, INTEREST_PARTNER];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadInterest {
    Student,
    Client,
    Partner,
}

impl LeadInterest {
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            INTEREST_STUDENT => Ok(Self::Student),
            INTEREST_CLIENT => Ok(Self::Client),
            INTEREST_PARTNER => Ok(Self::Partner),
            _ => Err(CoreError::Validation(format!(
                "Invalid interestType '{s}'. Must be one of: {}",
                VALID_INTEREST_TYPES.join(", ")
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => INTEREST_STUDENT,
            Self::Client => INTEREST_CLIENT,
            Self::Partner => INTEREST_PARTNER,
        }
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

pub const STATUS_NEW: &str = "NEW";
pub const STATUS_CONTACTED: &str = "CONTACTED";
pub const STATUS_QUALIFIED: &str = "QUALIFIED";
pub const STATUS_CLOSED: &str = "CLOSED";

pub const VALID_LEAD_STATUSES: &[&str] =
    &[STATUS_NEW, STATUS_CONTACTED, STATUS_QUALIFIED, STATUS_CLOSED];

/// Validate an admin-supplied lead status. Any known status may follow any
/// other; the admin decides the workflow.
pub fn validate_lead_status(status: &str) -> Result<(), CoreError> {
    if VALID_LEAD_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid lead status '{status}'. Must be one of: {}",
            VALID_LEAD_STATUSES.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// Public contact-form payload.
///
/// `website` is the honeypot input: real visitors never see it. It is
/// accepted and reported by [`LeadSubmission::honeypot_filled`] but does not
/// affect validation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "has_at_sign"))]
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "known_interest"))]
    pub interest_type: String,
    pub division: Option<String>,
    pub source: Option<String>,
    #[validate(length(max = 5000, message = "Message must be at most 5000 characters"))]
    pub message: Option<String>,
    pub website: Option<String>,
}

impl LeadSubmission {
    pub fn honeypot_filled(&self) -> bool {
        self.website.as_deref().is_some_and(|w| !w.trim().is_empty())
    }
}

/// Server-side re-check of a lead: non-empty name, an `@` in the email and
/// a known interest type.
pub fn validate_lead(input: &LeadSubmission) -> Result<LeadInterest, CoreError> {
    validate_input(input)?;
    LeadInterest::parse(&input.interest_type)
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed("Name is required")));
    }
    Ok(())
}

fn has_at_sign(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') {
        return Err(ValidationError::new("email")
            .with_message(Cow::Borrowed("A valid email address is required")));
    }
    Ok(())
}

fn known_interest(value: &str) -> Result<(), ValidationError> {
    if !VALID_INTEREST_TYPES.contains(&value) {
        return Err(ValidationError::new("interest_type").with_message(Cow::Owned(format!(
            "interestType must be one of: {}",
            VALID_INTEREST_TYPES.join(", ")
        ))));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn submission(email: &str, interest: &str) -> LeadSubmission {
        LeadSubmission {
            name: "Asha".into(),
            email: email.into(),
            phone: None,
            interest_type: interest.into(),
            division: Some("training".into()),
            source: Some("contact-page".into()),
            message: Some("Hello".into()),
            website: None,
        }
    }

    #[test]
    fn student_is_accepted() {
        let result = validate_lead(&submission("asha@example.com", "STUDENT"));
        assert_matches!(result, Ok(LeadInterest::Student));
    }

    #[test]
    fn unknown_interest_is_rejected() {
        let result = validate_lead(&submission("asha@example.com", "HOBBYIST"));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("interestType"));
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let result = validate_lead(&submission("asha.example.com", "CLIENT"));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("email"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut input = submission("asha@example.com", "PARTNER");
        input.name = "   ".into();
        assert_matches!(
            validate_lead(&input),
            Err(CoreError::Validation(msg)) if msg.contains("Name is required")
        );
    }

    #[test]
    fn multiple_failures_are_all_reported() {
        let mut input = submission("nope", "HOBBYIST");
        input.name = String::new();
        let Err(CoreError::Validation(msg)) = validate_lead(&input) else {
            panic!("expected validation error");
        };
        assert!(msg.contains("Name is required"));
        assert!(msg.contains("email"));
        assert!(msg.contains("interestType"));
    }

    #[test]
    fn missing_required_fields_reach_the_validator() {
        let input: LeadSubmission =
            serde_json::from_str(r#"{ "email": "asha@example.com", "interestType": "STUDENT" }"#)
                .expect("missing name deserializes as blank");
        assert_eq!(input.name, "");
        assert_matches!(
            validate_lead(&input),
            Err(CoreError::Validation(msg)) if msg == "Name is required"
        );

        let input: LeadSubmission = serde_json::from_str("{}").expect("empty body deserializes");
        let Err(CoreError::Validation(msg)) = validate_lead(&input) else {
            panic!("expected validation error");
        };
        assert!(msg.contains("email"));
        assert!(msg.contains("interestType"));
    }

    #[test]
    fn honeypot_does_not_block_validation() {
        let mut input = submission("asha@example.com", "STUDENT");
        input.website = Some("http://spam.example".into());
        assert!(input.honeypot_filled());
        assert!(validate_lead(&input).is_ok());
    }

    #[test]
    fn lead_status_values() {
        assert!(validate_lead_status("CONTACTED").is_ok());
        assert!(validate_lead_status("contacted").is_err());
    }

    #[test]
    fn interest_round_trips_through_str() {
        for s in VALID_INTEREST_TYPES {
            assert_eq!(LeadInterest::parse(s).unwrap().as_str(), *s);
        }
    }
}
