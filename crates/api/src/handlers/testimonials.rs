//! Handlers for testimonials and the testimonials page heading.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use jasiq_core::error::CoreError;
use jasiq_core::testimonial::{validate_rating, validate_testimonial_status, validate_testimonial_text};
use jasiq_core::types::DbId;
use jasiq_db::models::testimonial::{
    CreateTestimonial, UpdateTestimonial, UpdateTestimonialSettings,
};
use jasiq_db::repositories::TestimonialRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::StatusListParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Testimonial",
        id,
    })
}

fn validate_optional(rating: Option<i16>, status: Option<&str>) -> Result<(), CoreError> {
    if let Some(rating) = rating {
        validate_rating(rating)?;
    }
    if let Some(status) = status {
        validate_testimonial_status(status)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/public/testimonials
///
/// ACTIVE only, `display_order` ascending, newest first within a tie.
pub async fn list_public(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = TestimonialRepo::list_public(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/public/testimonials/settings
pub async fn get_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = TestimonialRepo::get_settings(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/admin/testimonials?status=&limit=&offset=
pub async fn list_testimonials(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<StatusListParams>,
) -> AppResult<impl IntoResponse> {
    let (limit, offset) = params.page();
    let items = TestimonialRepo::list(&state.pool, params.status(), limit, offset).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/admin/testimonials
pub async fn create_testimonial(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTestimonial>,
) -> AppResult<impl IntoResponse> {
    validate_testimonial_text(&input.name, &input.content)?;
    validate_optional(input.rating, input.status.as_deref())?;

    let item = TestimonialRepo::create(&state.pool, &input).await?;
    tracing::info!(testimonial_id = item.id, user_id = admin.user_id, "Testimonial created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// GET /api/admin/testimonials/{id}
pub async fn get_testimonial(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = TestimonialRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: item }))
}

/// PATCH /api/admin/testimonials/{id}
pub async fn update_testimonial(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTestimonial>,
) -> AppResult<impl IntoResponse> {
    validate_optional(input.rating, input.status.as_deref())?;
    if input.name.as_deref().is_some_and(|s| s.trim().is_empty())
        || input.content.as_deref().is_some_and(|s| s.trim().is_empty())
    {
        return Err(AppError::Core(CoreError::Validation(
            "Name and content must not be empty".into(),
        )));
    }

    let item = TestimonialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(testimonial_id = id, user_id = admin.user_id, "Testimonial updated");
    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/admin/testimonials/{id}
pub async fn delete_testimonial(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !TestimonialRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(testimonial_id = id, user_id = admin.user_id, "Testimonial deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/admin/testimonials/settings
pub async fn update_settings(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateTestimonialSettings>,
) -> AppResult<impl IntoResponse> {
    if input.page_title.as_deref().is_some_and(|s| s.trim().is_empty()) {
        return Err(AppError::Core(CoreError::Validation(
            "pageTitle must not be empty".into(),
        )));
    }
    let settings = TestimonialRepo::update_settings(&state.pool, &input).await?;
    tracing::info!(user_id = admin.user_id, "Testimonial settings updated");
    Ok(Json(DataResponse { data: settings }))
}
