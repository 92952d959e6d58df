//! Job postings and applications.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use jasiq_core::types::{DbId, Timestamp};

/// A row from the `jobs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub department: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub description: String,
    pub requirements: Json<Vec<String>>,
    pub status: String,
    pub accepting_applications: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `job_applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: DbId,
    pub job_id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJob {
    pub title: String,
    /// Generated from the title when omitted.
    pub slug: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub status: Option<String>,
    pub accepting_applications: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJob {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
}

/// Body of `PATCH /careers/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateJobStatus {
    pub status: String,
}

/// Body of `PATCH /careers/{id}/accepting-applications`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAcceptingApplications {
    pub accepting_applications: bool,
}
