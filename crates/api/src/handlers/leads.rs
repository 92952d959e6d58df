//! Handlers for lead capture (public) and lead management (admin).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use jasiq_core::error::CoreError;
use jasiq_core::lead::{validate_lead, validate_lead_status, LeadSubmission};
use jasiq_core::types::DbId;
use jasiq_db::models::lead::{CreateLead, UpdateLeadStatus};
use jasiq_db::repositories::LeadRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::StatusListParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Lead", id })
}

/// Trim an optional field, dropping it when blank.
fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// POST /api/public/leads
///
/// Validates, then stores the lead with status `NEW`. A filled honeypot is
/// logged but does not reject the submission.
pub async fn submit_lead(
    State(state): State<AppState>,
    Json(input): Json<LeadSubmission>,
) -> AppResult<impl IntoResponse> {
    let interest = validate_lead(&input)?;

    if input.honeypot_filled() {
        tracing::warn!(email = %input.email, "Lead submitted with honeypot field filled");
    }

    let lead = LeadRepo::create(
        &state.pool,
        &CreateLead {
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            phone: clean(input.phone),
            interest_type: interest.as_str().to_string(),
            division: clean(input.division),
            source: clean(input.source),
            message: clean(input.message),
        },
    )
    .await?;

    tracing::info!(lead_id = lead.id, interest_type = %lead.interest_type, "Lead captured");
    Ok((StatusCode::CREATED, Json(DataResponse { data: lead })))
}

/// GET /api/admin/leads?status=&limit=&offset=
pub async fn list_leads(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<StatusListParams>,
) -> AppResult<impl IntoResponse> {
    let (limit, offset) = params.page();
    let leads = LeadRepo::list(&state.pool, params.status(), limit, offset).await?;
    Ok(Json(DataResponse { data: leads }))
}

/// GET /api/admin/leads/{id}
pub async fn get_lead(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let lead = LeadRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: lead }))
}

/// PATCH /api/admin/leads/{id}/status
pub async fn update_lead_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLeadStatus>,
) -> AppResult<impl IntoResponse> {
    validate_lead_status(&input.status)?;
    let lead = LeadRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(lead_id = id, status = %lead.status, user_id = admin.user_id, "Lead status updated");
    Ok(Json(DataResponse { data: lead }))
}

/// DELETE /api/admin/leads/{id}
pub async fn delete_lead(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !LeadRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(lead_id = id, user_id = admin.user_id, "Lead deleted");
    Ok(StatusCode::NO_CONTENT)
}
