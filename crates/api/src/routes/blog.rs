use axum::routing::get;
use axum::Router;

use crate::handlers::blog;
use crate::state::AppState;

/// Public routes mounted at `/public/blog-posts`.
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::list_published))
        .route("/{slug}", get(blog::get_published))
}

/// Admin routes mounted at `/admin/blog-posts`.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::list_posts).post(blog::create_post))
        .route(
            "/{id}",
            get(blog::get_post)
                .patch(blog::update_post)
                .delete(blog::delete_post),
        )
}
