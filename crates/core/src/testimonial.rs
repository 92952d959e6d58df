//! Testimonial status values and rating bounds.

use crate::error::CoreError;

pub const TESTIMONIAL_ACTIVE: &str = "ACTIVE";
pub const TESTIMONIAL_INACTIVE: &str = "INACTIVE";

pub const VALID_TESTIMONIAL_STATUSES: &[&str] = &[TESTIMONIAL_ACTIVE, TESTIMONIAL_INACTIVE];

pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

pub fn validate_testimonial_status(status: &str) -> Result<(), CoreError> {
    if VALID_TESTIMONIAL_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid testimonial status '{status}'. Must be one of: {}",
            VALID_TESTIMONIAL_STATUSES.join(", ")
        )))
    }
}

pub fn validate_rating(rating: i16) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

/// Name and quote must both be present.
pub fn validate_testimonial_text(name: &str, content: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Name must not be empty".into()));
    }
    if content.trim().is_empty() {
        return Err(CoreError::Validation("Content must not be empty".into()));
    }
    Ok(())
}
