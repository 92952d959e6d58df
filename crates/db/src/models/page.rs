//! Pages and their content sections.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use jasiq_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `pages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: DbId,
    pub slug: String,
    pub route_path: String,
    pub page_type: String,
    pub is_indexable: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A section joined with its page slug.
///
/// This is the `data` payload of the section endpoints: `content` is the
/// stored JSON object, untouched.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRecord {
    pub page_name: String,
    pub section_key: String,
    pub content: serde_json::Value,
    pub sort_order: i32,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a page explicitly.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePage {
    pub slug: String,
    pub route_path: Option<String>,
    pub page_type: Option<String>,
    pub is_indexable: Option<bool>,
}

/// Body of `PUT /page-content`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSection {
    pub page_name: String,
    pub section_key: String,
    pub content: serde_json::Value,
    pub sort_order: Option<i32>,
}

/// One entry of a batch section save.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSectionItem {
    pub section_key: String,
    pub content: serde_json::Value,
    pub sort_order: Option<i32>,
}

/// Body of `PUT /page-content/batch`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpsertSections {
    pub page_name: String,
    pub sections: Vec<BatchSectionItem>,
}
