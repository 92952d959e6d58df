//! Repository for `testimonials` and the `testimonial_settings` singleton.

use sqlx::PgPool;
use jasiq_core::types::DbId;

use crate::models::testimonial::{
    CreateTestimonial, Testimonial, TestimonialSettings, UpdateTestimonial,
    UpdateTestimonialSettings,
};

const COLUMNS: &str = "\
    id, name, role, company, content, rating, status, display_order, \
    image_url, created_at, updated_at";

/// Provides data access for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Admin listing, optionally filtered by status, in display order.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials \
             WHERE ($1::TEXT IS NULL OR status = $1) \
             ORDER BY display_order ASC, created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Public listing: ACTIVE only, `display_order` ascending, newest first
    /// within equal order.
    pub async fn list_public(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials \
             WHERE status = 'ACTIVE' \
             ORDER BY display_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        dto: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials \
                 (name, role, company, content, rating, status, display_order, image_url) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 5), COALESCE($6, 'ACTIVE'), \
                     COALESCE($7, 0), $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&dto.name)
            .bind(&dto.role)
            .bind(&dto.company)
            .bind(&dto.content)
            .bind(dto.rating)
            .bind(&dto.status)
            .bind(dto.display_order)
            .bind(&dto.image_url)
            .fetch_one(pool)
            .await
    }

    /// Partially update a testimonial. Only provided fields change.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET \
                 name = COALESCE($2, name), \
                 role = COALESCE($3, role), \
                 company = COALESCE($4, company), \
                 content = COALESCE($5, content), \
                 rating = COALESCE($6, rating), \
                 status = COALESCE($7, status), \
                 display_order = COALESCE($8, display_order), \
                 image_url = COALESCE($9, image_url) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.role)
            .bind(&dto.company)
            .bind(&dto.content)
            .bind(dto.rating)
            .bind(&dto.status)
            .bind(dto.display_order)
            .bind(&dto.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Page heading
    // -----------------------------------------------------------------------

    pub async fn get_settings(pool: &PgPool) -> Result<TestimonialSettings, sqlx::Error> {
        sqlx::query_as::<_, TestimonialSettings>(
            "SELECT page_title, page_subtitle, updated_at FROM testimonial_settings WHERE id = 1",
        )
        .fetch_one(pool)
        .await
    }

    pub async fn update_settings(
        pool: &PgPool,
        dto: &UpdateTestimonialSettings,
    ) -> Result<TestimonialSettings, sqlx::Error> {
        sqlx::query_as::<_, TestimonialSettings>(
            "UPDATE testimonial_settings SET \
                 page_title = COALESCE($1, page_title), \
                 page_subtitle = COALESCE($2, page_subtitle) \
             WHERE id = 1 \
             RETURNING page_title, page_subtitle, updated_at",
        )
        .bind(&dto.page_title)
        .bind(&dto.page_subtitle)
        .fetch_one(pool)
        .await
    }
}
