use axum::routing::get;
use axum::Router;

use crate::handlers::testimonials;
use crate::state::AppState;

/// Public routes mounted at `/public/testimonials`.
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(testimonials::list_public))
        .route("/settings", get(testimonials::get_settings))
}

/// Admin routes mounted at `/admin/testimonials`.
///
/// ```text
/// GET    /           -> list_testimonials
/// POST   /           -> create_testimonial
/// GET    /settings   -> get_settings
/// PUT    /settings   -> update_settings
/// GET    /{id}       -> get_testimonial
/// PATCH  /{id}       -> update_testimonial
/// DELETE /{id}       -> delete_testimonial
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(testimonials::list_testimonials).post(testimonials::create_testimonial),
        )
        .route(
            "/settings",
            get(testimonials::get_settings).put(testimonials::update_settings),
        )
        .route(
            "/{id}",
            get(testimonials::get_testimonial)
                .patch(testimonials::update_testimonial)
                .delete(testimonials::delete_testimonial),
        )
}
