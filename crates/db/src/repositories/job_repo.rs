//! Repository for the `jobs` table.
//!
//! Publish status and `accepting_applications` are separate columns and
//! are changed through separate methods.

use sqlx::types::Json;
use sqlx::PgPool;
use jasiq_core::types::DbId;

use crate::models::job::{CreateJob, Job, UpdateJob};

const COLUMNS: &str = "\
    id, title, slug, department, location, employment_type, description, \
    requirements, status, accepting_applications, created_at, updated_at";

/// Provides data access for job postings.
pub struct JobRepo;

impl JobRepo {
    /// Admin listing, newest first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Job>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM jobs \
             WHERE ($1::TEXT IS NULL OR status = $1) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Public listing: PUBLISHED jobs only, newest first.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<Job>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM jobs WHERE status = 'PUBLISHED' \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Job>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs WHERE id = $1");
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A PUBLISHED job by slug; drafts and closed jobs are not exposed.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs WHERE slug = $1 AND status = 'PUBLISHED'");
        sqlx::query_as::<_, Job>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Insert a job. `slug` is the final, already-generated slug.
    pub async fn create(pool: &PgPool, slug: &str, dto: &CreateJob) -> Result<Job, sqlx::Error> {
        let query = format!(
            "INSERT INTO jobs \
                 (title, slug, department, location, employment_type, description, \
                  requirements, status, accepting_applications) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, ''), COALESCE($7, '[]'::jsonb), \
                     COALESCE($8, 'DRAFT'), COALESCE($9, TRUE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(&dto.title)
            .bind(slug)
            .bind(&dto.department)
            .bind(&dto.location)
            .bind(&dto.employment_type)
            .bind(&dto.description)
            .bind(dto.requirements.as_ref().map(Json))
            .bind(&dto.status)
            .bind(dto.accepting_applications)
            .fetch_one(pool)
            .await
    }

    /// Partially update a job's descriptive fields.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateJob,
    ) -> Result<Option<Job>, sqlx::Error> {
        let query = format!(
            "UPDATE jobs SET \
                 title = COALESCE($2, title), \
                 slug = COALESCE($3, slug), \
                 department = COALESCE($4, department), \
                 location = COALESCE($5, location), \
                 employment_type = COALESCE($6, employment_type), \
                 description = COALESCE($7, description), \
                 requirements = COALESCE($8, requirements) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.slug)
            .bind(&dto.department)
            .bind(&dto.location)
            .bind(&dto.employment_type)
            .bind(&dto.description)
            .bind(dto.requirements.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Job>, sqlx::Error> {
        let query = format!("UPDATE jobs SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Open or close the job for applications without touching its status.
    pub async fn set_accepting_applications(
        pool: &PgPool,
        id: DbId,
        accepting: bool,
    ) -> Result<Option<Job>, sqlx::Error> {
        let query = format!(
            "UPDATE jobs SET accepting_applications = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .bind(accepting)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was deleted. Applications cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
