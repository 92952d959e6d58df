//! Handlers for `/page-content`: section reads (public) and writes (admin).
//!
//! Stored content is returned as saved; defaults are applied by readers.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;
use jasiq_core::error::CoreError;
use jasiq_core::page::{require_content_object, validate_page_name, validate_section_key};
use jasiq_db::models::page::{BatchSectionItem, BatchUpsertSections, UpsertSection};
use jasiq_db::repositories::PageSectionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/page-content/{page_name}/{section_key}
///
/// 404 when the section was never saved; readers fall back to defaults.
pub async fn get_section(
    State(state): State<AppState>,
    Path((page_name, section_key)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let record = PageSectionRepo::find(&state.pool, &page_name, &section_key)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Section",
                key: format!("{page_name}/{section_key}"),
            })
        })?;

    Ok(Json(DataResponse { data: record }))
}

/// GET /api/page-content/{page_name}
pub async fn list_sections(
    State(state): State<AppState>,
    Path(page_name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let records = PageSectionRepo::list_for_page(&state.pool, &page_name).await?;
    Ok(Json(DataResponse { data: records }))
}

/// PUT /api/page-content
///
/// Replace one section's content. Last write wins.
pub async fn upsert_section(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpsertSection>,
) -> AppResult<impl IntoResponse> {
    validate_page_name(&input.page_name)?;
    validate_section_key(&input.section_key)?;
    let content = Value::Object(require_content_object(input.content)?);

    let record = PageSectionRepo::upsert(
        &state.pool,
        &input.page_name,
        &input.section_key,
        &content,
        input.sort_order,
    )
    .await?;

    tracing::info!(
        page = %record.page_name,
        section = %record.section_key,
        user_id = admin.user_id,
        "Section saved",
    );

    Ok(Json(DataResponse { data: record }))
}

/// PUT /api/page-content/batch
///
/// Save several sections of one page atomically.
pub async fn batch_upsert_sections(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<BatchUpsertSections>,
) -> AppResult<impl IntoResponse> {
    validate_page_name(&input.page_name)?;
    if input.sections.is_empty() {
        return Err(AppError::BadRequest("sections must not be empty".into()));
    }

    let mut items = Vec::with_capacity(input.sections.len());
    for item in input.sections {
        validate_section_key(&item.section_key)?;
        items.push(BatchSectionItem {
            content: Value::Object(require_content_object(item.content)?),
            ..item
        });
    }

    let records = PageSectionRepo::batch_upsert(&state.pool, &input.page_name, &items).await?;

    tracing::info!(
        page = %input.page_name,
        count = records.len(),
        user_id = admin.user_id,
        "Sections saved in batch",
    );

    Ok(Json(DataResponse { data: records }))
}
