//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! JSON field names are camelCase on the wire.

pub mod admin_user;
pub mod blog_post;
pub mod job;
pub mod lead;
pub mod page;
pub mod seo;
pub mod testimonial;
