//! Shared query parameter types for API handlers.

use serde::Deserialize;
use jasiq_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};

/// Generic pagination parameters (`?limit=&offset=`).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// Clamped `(limit, offset)` ready to bind.
    pub fn resolve(&self) -> (i64, i64) {
        (
            clamp_limit(self.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT),
            clamp_offset(self.offset),
        )
    }
}

/// Admin list filters: `?status=&limit=&offset=`.
#[derive(Debug, Default, Deserialize)]
pub struct StatusListParams {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl StatusListParams {
    pub fn page(&self) -> (i64, i64) {
        PaginationParams {
            limit: self.limit,
            offset: self.offset,
        }
        .resolve()
    }

    /// The status filter, treating `?status=` as absent.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }
}
