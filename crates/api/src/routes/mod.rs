pub mod auth;
pub mod blog;
pub mod careers;
pub mod health;
pub mod leads;
pub mod page_content;
pub mod pages;
pub mod seo;
pub mod testimonials;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/login                                    login (public)
/// /auth/me                                       current admin
///
/// /page-content                                  upsert section (PUT, admin)
/// /page-content/batch                            upsert sections atomically (PUT, admin)
/// /page-content/{page}                           list sections
/// /page-content/{page}/{section}                 get section
///
/// /careers                                       list, create (admin)
/// /careers/{id}                                  get, update, delete (admin)
/// /careers/{id}/status                           set status (PATCH, admin)
/// /careers/{id}/accepting-applications           open/close applications (PATCH, admin)
/// /careers/{id}/applications                     list (GET, admin), apply (POST, public)
///
/// /admin/leads                                   list
/// /admin/leads/{id}                              get, delete
/// /admin/leads/{id}/status                       set status (PATCH)
/// /admin/testimonials                            list, create
/// /admin/testimonials/settings                   get, update page heading
/// /admin/testimonials/{id}                       get, update, delete
/// /admin/blog-posts                              list, create
/// /admin/blog-posts/{id}                         get, update, delete
/// /admin/pages                                   list, create
/// /admin/pages/{slug}/seo                        get, replace page SEO
/// /admin/seo/defaults                            get, update site SEO defaults
///
/// /public/leads                                  submit lead (POST)
/// /public/testimonials                           active testimonials
/// /public/testimonials/settings                  page heading
/// /public/careers                                published jobs
/// /public/careers/{slug}                         published job
/// /public/blog-posts                             published posts
/// /public/blog-posts/{slug}                      published post
/// /public/seo/defaults                           site SEO defaults
/// /public/pages/{slug}/seo                       page SEO override (data may be null)
/// /public/pages/{slug}/head                      resolved head tags
/// ```
pub fn api_routes() -> Router<AppState> {
    let admin = Router::new()
        .nest("/leads", leads::admin_router())
        .nest("/testimonials", testimonials::admin_router())
        .nest("/blog-posts", blog::admin_router())
        .nest("/pages", pages::admin_router())
        .nest("/seo", seo::admin_router());

    let public = Router::new()
        .nest("/leads", leads::public_router())
        .nest("/testimonials", testimonials::public_router())
        .nest("/careers", careers::public_router())
        .nest("/blog-posts", blog::public_router())
        .nest("/seo", seo::public_router())
        .nest("/pages", pages::public_router());

    Router::new()
        .nest("/auth", auth::router())
        .nest("/page-content", page_content::router())
        .nest("/careers", careers::router())
        .nest("/admin", admin)
        .nest("/public", public)
}
