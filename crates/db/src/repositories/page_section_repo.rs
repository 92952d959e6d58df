//! Repository for the `page_sections` table.
//!
//! Sections are addressed by `(page slug, section key)`. Writes create the
//! owning page on first use, so editors never have to register a page
//! before saving its content.

use sqlx::{PgExecutor, PgPool};

use jasiq_core::page::default_route_path;

use crate::models::page::{BatchSectionItem, SectionRecord};

/// Select list producing a [`SectionRecord`] from `page_sections s JOIN pages p`.
const RECORD_COLUMNS: &str = "\
    p.slug AS page_name, s.section_key, s.content_json AS content, \
    s.sort_order, s.updated_at";

/// Provides data access for page sections.
pub struct PageSectionRepo;

impl PageSectionRepo {
    /// Find one section. Returns `None` when nothing was saved yet.
    pub async fn find(
        pool: &PgPool,
        page_name: &str,
        section_key: &str,
    ) -> Result<Option<SectionRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {RECORD_COLUMNS} \
             FROM page_sections s JOIN pages p ON p.id = s.page_id \
             WHERE p.slug = $1 AND s.section_key = $2"
        );
        sqlx::query_as::<_, SectionRecord>(&query)
            .bind(page_name)
            .bind(section_key)
            .fetch_optional(pool)
            .await
    }

    /// All sections of a page, by `sort_order` then key.
    pub async fn list_for_page(
        pool: &PgPool,
        page_name: &str,
    ) -> Result<Vec<SectionRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {RECORD_COLUMNS} \
             FROM page_sections s JOIN pages p ON p.id = s.page_id \
             WHERE p.slug = $1 \
             ORDER BY s.sort_order, s.section_key"
        );
        sqlx::query_as::<_, SectionRecord>(&query)
            .bind(page_name)
            .fetch_all(pool)
            .await
    }

    /// Insert or replace one section's content. Last write wins.
    ///
    /// The page row is created when missing. `sort_order` keeps its stored
    /// value when `None`.
    pub async fn upsert<'e, E>(
        executor: E,
        page_name: &str,
        section_key: &str,
        content: &serde_json::Value,
        sort_order: Option<i32>,
    ) -> Result<SectionRecord, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = "\
            WITH page AS ( \
                INSERT INTO pages (slug, route_path) VALUES ($1, $2) \
                ON CONFLICT (slug) DO UPDATE SET slug = EXCLUDED.slug \
                RETURNING id \
            ) \
            INSERT INTO page_sections (page_id, section_key, content_json, sort_order) \
            SELECT id, $3, $4, COALESCE($5, 0) FROM page \
            ON CONFLICT (page_id, section_key) DO UPDATE SET \
                content_json = EXCLUDED.content_json, \
                sort_order = COALESCE($5, page_sections.sort_order) \
            RETURNING $1::TEXT AS page_name, section_key, content_json AS content, \
                sort_order, updated_at";
        sqlx::query_as::<_, SectionRecord>(query)
            .bind(page_name)
            .bind(default_route_path(page_name))
            .bind(section_key)
            .bind(content)
            .bind(sort_order)
            .fetch_one(executor)
            .await
    }

    /// Upsert several sections of one page in a single transaction.
    ///
    /// Either every section is saved or none is.
    pub async fn batch_upsert(
        pool: &PgPool,
        page_name: &str,
        items: &[BatchSectionItem],
    ) -> Result<Vec<SectionRecord>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut saved = Vec::with_capacity(items.len());
        for item in items {
            let record = Self::upsert(
                &mut *tx,
                page_name,
                &item.section_key,
                &item.content,
                item.sort_order,
            )
            .await?;
            saved.push(record);
        }
        tx.commit().await?;
        Ok(saved)
    }
}
