//! Domain logic for the JASIQ Labs site: content merge, SEO head
//! resolution and the validation rules shared by the API and client.
//!
//! Nothing in this crate performs I/O.

pub mod blog;
pub mod careers;
pub mod content;
pub mod error;
pub mod lead;
pub mod page;
pub mod pagination;
pub mod roles;
pub mod sections;
pub mod seo;
pub mod testimonial;
pub mod types;
pub mod validation;
