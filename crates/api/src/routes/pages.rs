use axum::routing::get;
use axum::Router;

use crate::handlers::{pages, seo};
use crate::state::AppState;

/// Admin routes mounted at `/admin/pages`.
///
/// ```text
/// GET  /             -> list_pages
/// POST /             -> create_page
/// GET  /{slug}/seo   -> get_page_seo
/// PUT  /{slug}/seo   -> put_page_seo
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::list_pages).post(pages::create_page))
        .route("/{slug}/seo", get(seo::get_page_seo).put(seo::put_page_seo))
}

/// Public routes mounted at `/public/pages`.
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/{slug}/seo", get(seo::get_page_seo))
        .route("/{slug}/head", get(seo::get_head))
}
