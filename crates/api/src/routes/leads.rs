use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::leads;
use crate::state::AppState;

/// Public lead capture mounted at `/public/leads`.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", post(leads::submit_lead))
}

/// Admin lead management mounted at `/admin/leads`.
///
/// ```text
/// GET    /              -> list_leads
/// GET    /{id}          -> get_lead
/// DELETE /{id}          -> delete_lead
/// PATCH  /{id}/status   -> update_lead_status
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(leads::list_leads))
        .route("/{id}", get(leads::get_lead).delete(leads::delete_lead))
        .route("/{id}/status", patch(leads::update_lead_status))
}
