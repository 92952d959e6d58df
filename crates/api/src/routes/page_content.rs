use axum::routing::{get, put};
use axum::Router;

use crate::handlers::page_content;
use crate::state::AppState;

/// Routes mounted at `/page-content`.
///
/// ```text
/// PUT /                          -> upsert_section
/// PUT /batch                     -> batch_upsert_sections
/// GET /{page_name}               -> list_sections
/// GET /{page_name}/{section_key} -> get_section
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", put(page_content::upsert_section))
        .route("/batch", put(page_content::batch_upsert_sections))
        .route("/{page_name}", get(page_content::list_sections))
        .route("/{page_name}/{section_key}", get(page_content::get_section))
}
