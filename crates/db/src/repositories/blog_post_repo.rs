//! Repository for the `blog_posts` table.

use sqlx::PgPool;
use jasiq_core::types::{DbId, Timestamp};

use crate::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};

const COLUMNS: &str = "\
    id, slug, title, excerpt, body, cover_image_url, author, status, \
    published_at, created_at, updated_at";

/// Provides data access for blog posts.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// Admin listing, most recently edited first.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts \
             WHERE ($1::TEXT IS NULL OR status = $1) \
             ORDER BY updated_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Published posts, newest publication first.
    pub async fn list_published(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts WHERE status = 'PUBLISHED' \
             ORDER BY published_at DESC NULLS LAST, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE id = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM blog_posts WHERE slug = $1 AND status = 'PUBLISHED'");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Insert a post with its resolved slug and publish timestamp.
    pub async fn create(
        pool: &PgPool,
        slug: &str,
        published_at: Option<Timestamp>,
        dto: &CreateBlogPost,
    ) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts \
                 (slug, title, excerpt, body, cover_image_url, author, status, published_at) \
             VALUES ($1, $2, $3, COALESCE($4, ''), $5, $6, COALESCE($7, 'DRAFT'), $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .bind(&dto.title)
            .bind(&dto.excerpt)
            .bind(&dto.body)
            .bind(&dto.cover_image_url)
            .bind(&dto.author)
            .bind(&dto.status)
            .bind(published_at)
            .fetch_one(pool)
            .await
    }

    /// Partially update a post. `published_at` is written as given.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        published_at: Option<Timestamp>,
        dto: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET \
                 slug = COALESCE($2, slug), \
                 title = COALESCE($3, title), \
                 excerpt = COALESCE($4, excerpt), \
                 body = COALESCE($5, body), \
                 cover_image_url = COALESCE($6, cover_image_url), \
                 author = COALESCE($7, author), \
                 status = COALESCE($8, status), \
                 published_at = $9 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .bind(&dto.slug)
            .bind(&dto.title)
            .bind(&dto.excerpt)
            .bind(&dto.body)
            .bind(&dto.cover_image_url)
            .bind(&dto.author)
            .bind(&dto.status)
            .bind(published_at)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
