//! Handlers for blog posts.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use jasiq_core::blog::{
    generate_slug, next_published_at, validate_blog_status, validate_post_title, validate_slug,
    BLOG_STATUS_DRAFT,
};
use jasiq_core::error::CoreError;
use jasiq_core::types::DbId;
use jasiq_db::models::blog_post::{CreateBlogPost, UpdateBlogPost};
use jasiq_db::repositories::BlogPostRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::{PaginationParams, StatusListParams};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "BlogPost",
        id,
    })
}

/// GET /api/public/blog-posts?limit=&offset=
pub async fn list_published(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let (limit, offset) = params.resolve();
    let posts = BlogPostRepo::list_published(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// GET /api/public/blog-posts/{slug}
pub async fn get_published(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "BlogPost",
                key: slug,
            })
        })?;
    Ok(Json(DataResponse { data: post }))
}

/// GET /api/admin/blog-posts?status=&limit=&offset=
pub async fn list_posts(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<StatusListParams>,
) -> AppResult<impl IntoResponse> {
    let (limit, offset) = params.page();
    let posts = BlogPostRepo::list(&state.pool, params.status(), limit, offset).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// POST /api/admin/blog-posts
pub async fn create_post(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateBlogPost>,
) -> AppResult<impl IntoResponse> {
    validate_post_title(&input.title)?;
    let status = input.status.as_deref().unwrap_or(BLOG_STATUS_DRAFT);
    validate_blog_status(status)?;
    let slug = match &input.slug {
        Some(slug) => slug.clone(),
        None => generate_slug(&input.title),
    };
    validate_slug(&slug)?;

    let published_at = next_published_at(None, status, Utc::now());
    let post = BlogPostRepo::create(&state.pool, &slug, published_at, &input).await?;

    tracing::info!(post_id = post.id, slug = %post.slug, user_id = admin.user_id, "Blog post created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// GET /api/admin/blog-posts/{id}
pub async fn get_post(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: post }))
}

/// PATCH /api/admin/blog-posts/{id}
///
/// The first move to PUBLISHED stamps `publishedAt`; it is kept afterwards.
pub async fn update_post(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBlogPost>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        validate_post_title(title)?;
    }
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }
    if let Some(status) = &input.status {
        validate_blog_status(status)?;
    }

    let existing = BlogPostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let status = input.status.as_deref().unwrap_or(&existing.status);
    let published_at = next_published_at(existing.published_at, status, Utc::now());

    let post = BlogPostRepo::update(&state.pool, id, published_at, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(post_id = id, status = %post.status, user_id = admin.user_id, "Blog post updated");
    Ok(Json(DataResponse { data: post }))
}

/// DELETE /api/admin/blog-posts/{id}
pub async fn delete_post(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !BlogPostRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(post_id = id, user_id = admin.user_id, "Blog post deleted");
    Ok(StatusCode::NO_CONTENT)
}
