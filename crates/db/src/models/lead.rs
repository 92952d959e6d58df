//! Lead models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use jasiq_core::types::{DbId, Timestamp};

/// A row from the `leads` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub interest_type: String,
    pub division: Option<String>,
    pub source: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload, built from a validated `LeadSubmission`.
#[derive(Debug, Clone)]
pub struct CreateLead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub interest_type: String,
    pub division: Option<String>,
    pub source: Option<String>,
    pub message: Option<String>,
}

/// Body of `PATCH /admin/leads/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLeadStatus {
    pub status: String,
}
