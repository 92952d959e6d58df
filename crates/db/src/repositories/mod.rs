//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_user_repo;
pub mod blog_post_repo;
pub mod job_application_repo;
pub mod job_repo;
pub mod lead_repo;
pub mod page_repo;
pub mod page_section_repo;
pub mod seo_repo;
pub mod testimonial_repo;

pub use admin_user_repo::AdminUserRepo;
pub use blog_post_repo::BlogPostRepo;
pub use job_application_repo::JobApplicationRepo;
pub use job_repo::JobRepo;
pub use lead_repo::LeadRepo;
pub use page_repo::PageRepo;
pub use page_section_repo::PageSectionRepo;
pub use seo_repo::SeoRepo;
pub use testimonial_repo::TestimonialRepo;
