//! Handlers for job postings and applications.
//!
//! A job's publish status and its application gate are set through
//! separate endpoints. Applying checks the gate only.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use jasiq_core::blog::{generate_slug, validate_slug};
use jasiq_core::careers::{
    ensure_accepting_applications, validate_application, validate_job_status, validate_job_title,
    ApplicationSubmission,
};
use jasiq_core::error::CoreError;
use jasiq_core::types::DbId;
use jasiq_db::models::job::{CreateJob, SetAcceptingApplications, UpdateJob, UpdateJobStatus};
use jasiq_db::repositories::{JobApplicationRepo, JobRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::StatusListParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Job", id })
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/public/careers
pub async fn list_published(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let jobs = JobRepo::list_published(&state.pool).await?;
    Ok(Json(DataResponse { data: jobs }))
}

/// GET /api/public/careers/{slug}
pub async fn get_published(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let job = JobRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFoundByKey { entity: "Job", key: slug }))?;
    Ok(Json(DataResponse { data: job }))
}

/// POST /api/careers/{id}/applications
///
/// 409 with the closed message when the job stopped taking applications,
/// whatever its status.
pub async fn apply(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ApplicationSubmission>,
) -> AppResult<impl IntoResponse> {
    let job = JobRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    ensure_accepting_applications(job.accepting_applications)?;
    validate_application(&input)?;

    let application = JobApplicationRepo::create(&state.pool, job.id, &input).await?;
    tracing::info!(job_id = job.id, application_id = application.id, "Job application received");
    Ok((StatusCode::CREATED, Json(DataResponse { data: application })))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/careers?status=&limit=&offset=
pub async fn list_jobs(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<StatusListParams>,
) -> AppResult<impl IntoResponse> {
    let (limit, offset) = params.page();
    let jobs = JobRepo::list(&state.pool, params.status(), limit, offset).await?;
    Ok(Json(DataResponse { data: jobs }))
}

/// POST /api/careers
pub async fn create_job(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateJob>,
) -> AppResult<impl IntoResponse> {
    validate_job_title(&input.title)?;
    if let Some(status) = &input.status {
        validate_job_status(status)?;
    }
    let slug = match &input.slug {
        Some(slug) => slug.clone(),
        None => generate_slug(&input.title),
    };
    validate_slug(&slug)?;

    let job = JobRepo::create(&state.pool, &slug, &input).await?;
    tracing::info!(job_id = job.id, slug = %job.slug, user_id = admin.user_id, "Job created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: job })))
}

/// GET /api/careers/{id}
pub async fn get_job(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let job = JobRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: job }))
}

/// PATCH /api/careers/{id}
pub async fn update_job(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateJob>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        validate_job_title(title)?;
    }
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }

    let job = JobRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(job_id = id, user_id = admin.user_id, "Job updated");
    Ok(Json(DataResponse { data: job }))
}

/// PATCH /api/careers/{id}/status
pub async fn update_job_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateJobStatus>,
) -> AppResult<impl IntoResponse> {
    validate_job_status(&input.status)?;
    let job = JobRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(job_id = id, status = %job.status, user_id = admin.user_id, "Job status updated");
    Ok(Json(DataResponse { data: job }))
}

/// PATCH /api/careers/{id}/accepting-applications
pub async fn set_accepting_applications(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetAcceptingApplications>,
) -> AppResult<impl IntoResponse> {
    let job = JobRepo::set_accepting_applications(&state.pool, id, input.accepting_applications)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(
        job_id = id,
        accepting_applications = job.accepting_applications,
        user_id = admin.user_id,
        "Job application gate changed",
    );
    Ok(Json(DataResponse { data: job }))
}

/// DELETE /api/careers/{id}
pub async fn delete_job(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !JobRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(job_id = id, user_id = admin.user_id, "Job deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/careers/{id}/applications
pub async fn list_applications(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if JobRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }
    let applications = JobApplicationRepo::list_for_job(&state.pool, id).await?;
    Ok(Json(DataResponse { data: applications }))
}
