//! SEO defaults (singleton) and per-page overrides.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use jasiq_core::seo::{PageSeoOverride, SeoDefaults};
use jasiq_core::types::{DbId, Timestamp};

/// The single row of `seo_settings`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSettings {
    pub site_name: String,
    pub title_template: String,
    pub default_meta_description: Option<String>,
    pub default_og_image_url: Option<String>,
    pub default_favicon_url: Option<String>,
    pub updated_at: Timestamp,
}

impl SeoSettings {
    pub fn to_defaults(&self) -> SeoDefaults {
        SeoDefaults {
            site_name: self.site_name.clone(),
            title_template: self.title_template.clone(),
            default_meta_description: self.default_meta_description.clone(),
            default_og_image_url: self.default_og_image_url.clone(),
            default_favicon_url: self.default_favicon_url.clone(),
        }
    }
}

/// A row from the `page_seo` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSeo {
    pub id: DbId,
    pub page_id: DbId,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub canonical_url: Option<String>,
    pub robots: Option<String>,
    pub og_image_url: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PageSeo {
    pub fn to_override(&self) -> PageSeoOverride {
        PageSeoOverride {
            meta_title: self.meta_title.clone(),
            meta_description: self.meta_description.clone(),
            canonical_url: self.canonical_url.clone(),
            robots: self.robots.clone(),
            og_image_url: self.og_image_url.clone(),
            og_title: self.og_title.clone(),
            og_description: self.og_description.clone(),
        }
    }
}

/// DTO for partially updating the SEO defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSeoSettings {
    pub site_name: Option<String>,
    pub title_template: Option<String>,
    pub default_meta_description: Option<String>,
    pub default_og_image_url: Option<String>,
    pub default_favicon_url: Option<String>,
}

/// DTO for replacing a page's SEO override. Omitted fields are cleared.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertPageSeo {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub canonical_url: Option<String>,
    pub robots: Option<String>,
    pub og_image_url: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
}
