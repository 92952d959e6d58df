use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::careers;
use crate::state::AppState;

/// Job management mounted at `/careers`.
///
/// Everything here is admin-only except `POST /{id}/applications`.
///
/// ```text
/// GET    /                               -> list_jobs
/// POST   /                               -> create_job
/// GET    /{id}                           -> get_job
/// PATCH  /{id}                           -> update_job
/// DELETE /{id}                           -> delete_job
/// PATCH  /{id}/status                    -> update_job_status
/// PATCH  /{id}/accepting-applications    -> set_accepting_applications
/// GET    /{id}/applications              -> list_applications
/// POST   /{id}/applications              -> apply
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(careers::list_jobs).post(careers::create_job))
        .route(
            "/{id}",
            get(careers::get_job)
                .patch(careers::update_job)
                .delete(careers::delete_job),
        )
        .route("/{id}/status", patch(careers::update_job_status))
        .route(
            "/{id}/accepting-applications",
            patch(careers::set_accepting_applications),
        )
        .route(
            "/{id}/applications",
            get(careers::list_applications).post(careers::apply),
        )
}

/// Public listings mounted at `/public/careers`.
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(careers::list_published))
        .route("/{slug}", get(careers::get_published))
}
