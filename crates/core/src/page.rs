//! Page identity rules: page types, names, section keys and content shape.

use serde_json::Value;

use crate::blog::validate_slug;
use crate::content::ContentMap;
use crate::error::CoreError;

pub const PAGE_TYPE_PUBLIC: &str = "PUBLIC";
pub const PAGE_TYPE_ADMIN: &str = "ADMIN";

pub const VALID_PAGE_TYPES: &[&str] = &[PAGE_TYPE_PUBLIC, PAGE_TYPE_ADMIN];

/// Maximum length of a section key.
pub const MAX_SECTION_KEY_LEN: usize = 64;

pub fn validate_page_type(page_type: &str) -> Result<(), CoreError> {
    if VALID_PAGE_TYPES.contains(&page_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid page type '{page_type}'. Must be one of: {}",
            VALID_PAGE_TYPES.join(", ")
        )))
    }
}

/// Page names double as slugs.
pub fn validate_page_name(name: &str) -> Result<(), CoreError> {
    validate_slug(name)
}

/// Section keys: non-empty ASCII letters, digits, `-` and `_`.
pub fn validate_section_key(key: &str) -> Result<(), CoreError> {
    if key.is_empty() || key.len() > MAX_SECTION_KEY_LEN {
        return Err(CoreError::Validation(format!(
            "Section key must be 1 to {MAX_SECTION_KEY_LEN} characters"
        )));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CoreError::Validation(
            "Section key must contain only letters, digits, '-' and '_'".into(),
        ));
    }
    Ok(())
}

/// Route path for a page created implicitly on first content write.
pub fn default_route_path(page_name: &str) -> String {
    if page_name == "home" {
        "/".to_string()
    } else {
        format!("/{page_name}")
    }
}

/// Route paths must be absolute.
pub fn validate_route_path(path: &str) -> Result<(), CoreError> {
    if !path.starts_with('/') {
        return Err(CoreError::Validation("Route path must start with '/'".into()));
    }
    if path.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(
            "Route path must not contain whitespace".into(),
        ));
    }
    Ok(())
}

/// Section content must be a JSON object; its fields are not checked.
pub fn require_content_object(value: Value) -> Result<ContentMap, CoreError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(CoreError::Validation(format!(
            "Section content must be a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn page_types() {
        assert!(validate_page_type("PUBLIC").is_ok());
        assert!(validate_page_type("ADMIN").is_ok());
        assert!(validate_page_type("PRIVATE").is_err());
    }

    #[test]
    fn section_keys() {
        assert!(validate_section_key("hero").is_ok());
        assert!(validate_section_key("legal_terms-v2").is_ok());
        assert!(validate_section_key("").is_err());
        assert!(validate_section_key("has space").is_err());
    }

    #[test]
    fn route_paths() {
        assert_eq!(default_route_path("home"), "/");
        assert_eq!(default_route_path("about"), "/about");
        assert!(validate_route_path("/careers").is_ok());
        assert!(validate_route_path("careers").is_err());
        assert!(validate_route_path("/a b").is_err());
    }

    #[test]
    fn content_must_be_object() {
        assert!(require_content_object(json!({ "a": 1 })).is_ok());
        let err = require_content_object(json!(["a"])).unwrap_err();
        assert!(err.to_string().contains("an array"));
    }
}
