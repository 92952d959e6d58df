//! Repository for the `pages` table.

use sqlx::PgPool;

use crate::models::page::Page;

const COLUMNS: &str = "id, slug, route_path, page_type, is_indexable, created_at, updated_at";

/// Provides data access for pages.
pub struct PageRepo;

impl PageRepo {
    /// List all pages ordered by slug.
    pub async fn list(pool: &PgPool) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages ORDER BY slug");
        sqlx::query_as::<_, Page>(&query).fetch_all(pool).await
    }

    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE slug = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Insert a page. A duplicate slug surfaces as a `uq_pages_slug`
    /// violation.
    pub async fn create(
        pool: &PgPool,
        slug: &str,
        route_path: &str,
        page_type: &str,
        is_indexable: bool,
    ) -> Result<Page, sqlx::Error> {
        let query = format!(
            "INSERT INTO pages (slug, route_path, page_type, is_indexable) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(slug)
            .bind(route_path)
            .bind(page_type)
            .bind(is_indexable)
            .fetch_one(pool)
            .await
    }
}
