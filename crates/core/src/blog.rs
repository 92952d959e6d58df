//! Blog post statuses, slug generation and publish-time bookkeeping.

use crate::error::CoreError;
use crate::types::Timestamp;

pub const BLOG_STATUS_DRAFT: &str = "DRAFT";
pub const BLOG_STATUS_PUBLISHED: &str = "PUBLISHED";

pub const VALID_BLOG_STATUSES: &[&str] = &[BLOG_STATUS_DRAFT, BLOG_STATUS_PUBLISHED];

/// Maximum slug length accepted for blog posts and pages.
pub const MAX_SLUG_LEN: usize = 120;

pub fn validate_blog_status(status: &str) -> Result<(), CoreError> {
    if VALID_BLOG_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid blog status '{status}'. Must be one of: {}",
            VALID_BLOG_STATUSES.join(", ")
        )))
    }
}

/// Generate a URL-safe slug from a title.
///
/// Lowercases, maps every non-alphanumeric character to a hyphen, collapses
/// runs of hyphens and trims them from both ends.
pub fn generate_slug(title: &str) -> String {
    let mut result = String::with_capacity(title.len());
    let mut prev_hyphen = false;
    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen {
            result.push('-');
            prev_hyphen = true;
        }
    }
    let trimmed = result.trim_matches('-');
    trimmed.chars().take(MAX_SLUG_LEN).collect::<String>().trim_end_matches('-').to_string()
}

/// Validate a slug (non-empty, lowercase alphanumerics and hyphens only).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "Slug must be at most {MAX_SLUG_LEN} characters"
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(
            "Slug must contain only lowercase alphanumeric characters and hyphens".into(),
        ));
    }
    Ok(())
}

/// Validate a post title (non-empty, <= 200 chars).
pub fn validate_post_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.len() > 200 {
        return Err(CoreError::Validation(
            "Title must be at most 200 characters".into(),
        ));
    }
    Ok(())
}

/// Compute `published_at` after a save.
///
/// The first transition to PUBLISHED stamps `now`; later edits keep the
/// original date, including when a post is moved back to DRAFT.
pub fn next_published_at(
    current: Option<Timestamp>,
    status: &str,
    now: Timestamp,
) -> Option<Timestamp> {
    match current {
        Some(ts) => Some(ts),
        None if status == BLOG_STATUS_PUBLISHED => Some(now),
        None => None,
    }
}
