//! Repository for `seo_settings` (singleton) and `page_seo`.

use sqlx::PgPool;

use crate::models::seo::{PageSeo, SeoSettings, UpdateSeoSettings, UpsertPageSeo};

const SETTINGS_COLUMNS: &str = "\
    site_name, title_template, default_meta_description, \
    default_og_image_url, default_favicon_url, updated_at";

const PAGE_SEO_COLUMNS: &str = "\
    id, page_id, meta_title, meta_description, canonical_url, robots, \
    og_image_url, og_title, og_description, created_at, updated_at";

/// Provides data access for SEO defaults and page overrides.
pub struct SeoRepo;

impl SeoRepo {
    // -----------------------------------------------------------------------
    // Site defaults
    // -----------------------------------------------------------------------

    /// Load the defaults row. The migration seeds it, so absence is an error.
    pub async fn get_settings(pool: &PgPool) -> Result<SeoSettings, sqlx::Error> {
        let query = format!("SELECT {SETTINGS_COLUMNS} FROM seo_settings WHERE id = 1");
        sqlx::query_as::<_, SeoSettings>(&query)
            .fetch_one(pool)
            .await
    }

    /// Partially update the defaults. Only provided fields change.
    pub async fn update_settings(
        pool: &PgPool,
        dto: &UpdateSeoSettings,
    ) -> Result<SeoSettings, sqlx::Error> {
        let query = format!(
            "UPDATE seo_settings SET \
                 site_name = COALESCE($1, site_name), \
                 title_template = COALESCE($2, title_template), \
                 default_meta_description = COALESCE($3, default_meta_description), \
                 default_og_image_url = COALESCE($4, default_og_image_url), \
                 default_favicon_url = COALESCE($5, default_favicon_url) \
             WHERE id = 1 \
             RETURNING {SETTINGS_COLUMNS}"
        );
        sqlx::query_as::<_, SeoSettings>(&query)
            .bind(&dto.site_name)
            .bind(&dto.title_template)
            .bind(&dto.default_meta_description)
            .bind(&dto.default_og_image_url)
            .bind(&dto.default_favicon_url)
            .fetch_one(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Page overrides
    // -----------------------------------------------------------------------

    /// The override for a page slug, if one has been saved.
    pub async fn find_page_seo(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<PageSeo>, sqlx::Error> {
        let query = format!(
            "SELECT {PAGE_SEO_COLUMNS} FROM page_seo \
             WHERE page_id = (SELECT id FROM pages WHERE slug = $1)"
        );
        sqlx::query_as::<_, PageSeo>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Replace a page's override wholesale.
    ///
    /// Returns `None` when no page has this slug.
    pub async fn upsert_page_seo(
        pool: &PgPool,
        slug: &str,
        dto: &UpsertPageSeo,
    ) -> Result<Option<PageSeo>, sqlx::Error> {
        let query = format!(
            "INSERT INTO page_seo \
                 (page_id, meta_title, meta_description, canonical_url, robots, \
                  og_image_url, og_title, og_description) \
             SELECT id, $2, $3, $4, $5, $6, $7, $8 FROM pages WHERE slug = $1 \
             ON CONFLICT (page_id) DO UPDATE SET \
                 meta_title = EXCLUDED.meta_title, \
                 meta_description = EXCLUDED.meta_description, \
                 canonical_url = EXCLUDED.canonical_url, \
                 robots = EXCLUDED.robots, \
                 og_image_url = EXCLUDED.og_image_url, \
                 og_title = EXCLUDED.og_title, \
                 og_description = EXCLUDED.og_description \
             RETURNING {PAGE_SEO_COLUMNS}"
        );
        sqlx::query_as::<_, PageSeo>(&query)
            .bind(slug)
            .bind(&dto.meta_title)
            .bind(&dto.meta_description)
            .bind(&dto.canonical_url)
            .bind(&dto.robots)
            .bind(&dto.og_image_url)
            .bind(&dto.og_title)
            .bind(&dto.og_description)
            .fetch_optional(pool)
            .await
    }
}
