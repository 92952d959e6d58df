//! Handlers for SEO defaults, page overrides and the resolved head.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use jasiq_core::error::CoreError;
use jasiq_core::seo::{resolve_head, HeadState};
use jasiq_db::models::seo::{UpdateSeoSettings, UpsertPageSeo};
use jasiq_db::repositories::SeoRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query for `GET /public/pages/{slug}/head`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadParams {
    pub fallback_title: Option<String>,
}

/// Resolved head plus its rendered markup.
#[derive(Debug, Serialize)]
pub struct HeadResponse {
    #[serde(flatten)]
    pub head: HeadState,
    pub html: String,
}

/// GET /api/public/seo/defaults
pub async fn get_defaults(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = SeoRepo::get_settings(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/admin/seo/defaults
pub async fn update_defaults(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateSeoSettings>,
) -> AppResult<impl IntoResponse> {
    if input.site_name.as_deref().is_some_and(|s| s.trim().is_empty()) {
        return Err(AppError::Core(CoreError::Validation(
            "siteName must not be empty".into(),
        )));
    }
    let settings = SeoRepo::update_settings(&state.pool, &input).await?;
    tracing::info!(user_id = admin.user_id, "SEO defaults updated");
    Ok(Json(DataResponse { data: settings }))
}

/// GET /api/public/pages/{slug}/seo
///
/// `data` is `null` when the page has no override.
pub async fn get_page_seo(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let seo = SeoRepo::find_page_seo(&state.pool, &slug).await?;
    Ok(Json(DataResponse { data: seo }))
}

/// PUT /api/admin/pages/{slug}/seo
pub async fn put_page_seo(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<UpsertPageSeo>,
) -> AppResult<impl IntoResponse> {
    let seo = SeoRepo::upsert_page_seo(&state.pool, &slug, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Page",
                key: slug.clone(),
            })
        })?;

    tracing::info!(page = %slug, user_id = admin.user_id, "Page SEO saved");
    Ok(Json(DataResponse { data: seo }))
}

/// GET /api/public/pages/{slug}/head?fallbackTitle=
///
/// Server-side run of the SEO merge for a page.
pub async fn get_head(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<HeadParams>,
) -> AppResult<impl IntoResponse> {
    let defaults = SeoRepo::get_settings(&state.pool).await?.to_defaults();
    let page = SeoRepo::find_page_seo(&state.pool, &slug)
        .await?
        .map(|p| p.to_override());

    let head = resolve_head(&defaults, page.as_ref(), params.fallback_title.as_deref());
    let html = head.render_html();
    Ok(Json(DataResponse {
        data: HeadResponse { head, html },
    }))
}
