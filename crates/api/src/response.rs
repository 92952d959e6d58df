//! Shared response envelope types for API handlers.
//!
//! Every successful API response uses a `{ "data": ... }` envelope. Use
//! [`DataResponse`] instead of ad-hoc `serde_json::json!({ "data": ... })`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// `data` may be `null` (an `Option` payload) when a lookup legitimately
/// has nothing to return, such as a page without SEO overrides.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
