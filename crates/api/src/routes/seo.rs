use axum::routing::get;
use axum::Router;

use crate::handlers::seo;
use crate::state::AppState;

/// Admin routes mounted at `/admin/seo`.
pub fn admin_router() -> Router<AppState> {
    Router::new().route(
        "/defaults",
        get(seo::get_defaults).put(seo::update_defaults),
    )
}

/// Public routes mounted at `/public/seo`.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/defaults", get(seo::get_defaults))
}
