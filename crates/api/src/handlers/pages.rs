//! Admin handlers for the page registry.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use jasiq_core::page::{
    default_route_path, validate_page_name, validate_page_type, validate_route_path,
    PAGE_TYPE_PUBLIC,
};
use jasiq_db::models::page::CreatePage;
use jasiq_db::repositories::PageRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/admin/pages
pub async fn list_pages(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let pages = PageRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: pages }))
}

/// POST /api/admin/pages
pub async fn create_page(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreatePage>,
) -> AppResult<impl IntoResponse> {
    validate_page_name(&input.slug)?;
    let route_path = input
        .route_path
        .clone()
        .unwrap_or_else(|| default_route_path(&input.slug));
    validate_route_path(&route_path)?;
    let page_type = input.page_type.as_deref().unwrap_or(PAGE_TYPE_PUBLIC);
    validate_page_type(page_type)?;

    let page = PageRepo::create(
        &state.pool,
        &input.slug,
        &route_path,
        page_type,
        input.is_indexable.unwrap_or(true),
    )
    .await?;

    tracing::info!(page_id = page.id, slug = %page.slug, user_id = admin.user_id, "Page created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: page })))
}
