//! Repository for the `job_applications` table.

use sqlx::PgPool;
use jasiq_core::careers::ApplicationSubmission;
use jasiq_core::types::DbId;

use crate::models::job::JobApplication;

const COLUMNS: &str = "id, job_id, name, email, phone, resume_url, cover_letter, created_at";

/// Provides data access for job applications.
pub struct JobApplicationRepo;

impl JobApplicationRepo {
    /// Store an application. The caller checks the job's application gate.
    pub async fn create(
        pool: &PgPool,
        job_id: DbId,
        input: &ApplicationSubmission,
    ) -> Result<JobApplication, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_applications \
                 (job_id, name, email, phone, resume_url, cover_letter) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(job_id)
            .bind(input.name.trim())
            .bind(input.email.trim())
            .bind(&input.phone)
            .bind(&input.resume_url)
            .bind(&input.cover_letter)
            .fetch_one(pool)
            .await
    }

    /// Applications for one job, newest first.
    pub async fn list_for_job(
        pool: &PgPool,
        job_id: DbId,
    ) -> Result<Vec<JobApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_applications WHERE job_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(job_id)
            .fetch_all(pool)
            .await
    }
}
