pub mod auth;
pub mod blog;
pub mod careers;
pub mod leads;
pub mod page_content;
pub mod pages;
pub mod seo;
pub mod testimonials;
