//! HTTP client for the JASIQ Labs content API.
//!
//! [`ContentClient`] is what renderers and editors use to read section
//! content, save edits and build the document head. Reads never fail from
//! the caller's point of view: errors are logged and hardcoded defaults are
//! returned instead.

pub mod client;
pub mod error;

pub use client::{BatchSaveReport, ContentClient, LeadReceipt, SectionFailure};
pub use error::ClientError;
