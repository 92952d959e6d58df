//! Section content resolution: response envelope normalisation and the
//! key-by-key merge of untyped section JSON with hardcoded defaults.
//!
//! Stored section content has no schema. Every reader goes through
//! [`SectionContent`], which treats each field as optionally absent, and
//! typed section shapes implement [`SectionSchema`] so the fallback values
//! live in one place per `(page, section)` pair.

use serde::Serialize;
use serde_json::{Map, Value};

/// A JSON object as stored in `page_sections.content_json`.
pub type ContentMap = Map<String, Value>;

// ---------------------------------------------------------------------------
// Envelope normalisation
// ---------------------------------------------------------------------------

/// Extract the section content object from an API response body.
///
/// Accepted shapes, in order of precedence:
///
/// ```text
/// { "data": { "content": { .. } } }    canonical
/// { "data": { .. } }                   data is the content itself
/// { "content": { .. } }                bare content wrapper
/// ```
///
/// `data: null`, non-object payloads and bodies without either key yield
/// `None`, which callers treat the same as "nothing saved yet".
pub fn normalize_envelope(body: &Value) -> Option<ContentMap> {
    let outer = body.as_object()?;

    if let Some(data) = outer.get("data") {
        let data = data.as_object()?;
        return match data.get("content") {
            Some(Value::Object(content)) => Some(content.clone()),
            _ => Some(data.clone()),
        };
    }

    match outer.get("content") {
        Some(Value::Object(content)) => Some(content.clone()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// List padding
// ---------------------------------------------------------------------------

/// Pad or truncate `items` to exactly `size` entries.
///
/// Editors bind fixed-size lists to indexed inputs; missing slots are
/// filled with empty strings and surplus entries are dropped.
pub fn safe_list<S: AsRef<str>>(items: &[S], size: usize) -> Vec<String> {
    let mut out: Vec<String> = items
        .iter()
        .take(size)
        .map(|s| s.as_ref().to_string())
        .collect();
    out.resize(size, String::new());
    out
}

// ---------------------------------------------------------------------------
// Field access with defaults
// ---------------------------------------------------------------------------

/// Read-only view over stored section content with defaulting accessors.
///
/// An override wins only when it is "truthy": non-empty strings, non-zero
/// numbers, `true`, non-empty arrays. Anything else (missing, `null`, `""`,
/// `0`, `false`, objects) falls back to the supplied default.
#[derive(Debug, Clone, Copy)]
pub struct SectionContent<'a> {
    map: Option<&'a ContentMap>,
}

impl<'a> SectionContent<'a> {
    pub fn new(map: &'a ContentMap) -> Self {
        Self { map: Some(map) }
    }

    /// A view with no saved content; every accessor returns its default.
    pub fn empty() -> Self {
        Self { map: None }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.and_then(|m| m.get(key))
    }

    /// The override string for `key`, if it is truthy.
    pub fn opt_text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(truthy_text)
    }

    pub fn text(&self, key: &str, default: &str) -> String {
        self.opt_text(key).unwrap_or_else(|| default.to_string())
    }

    /// Override list for `key`, used only when it is a non-empty array.
    ///
    /// Elements are not merged with the default list. Non-string and empty
    /// elements are skipped; if nothing usable remains the default is kept.
    pub fn list<S: AsRef<str>>(&self, key: &str, default: &[S]) -> Vec<String> {
        let items: Vec<String> = match self.get(key) {
            Some(Value::Array(arr)) => arr
                .iter()
                .filter_map(|v| v.as_str().filter(|s| !s.is_empty()).map(str::to_string))
                .collect(),
            _ => Vec::new(),
        };
        if items.is_empty() {
            default.iter().map(|s| s.as_ref().to_string()).collect()
        } else {
            items
        }
    }

    /// Boolean flag. Only an explicit JSON boolean overrides the default.
    pub fn flag(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            _ => default,
        }
    }

    /// A nested object as its own view (empty view when absent).
    pub fn nested(&self, key: &str) -> SectionContent<'a> {
        match self.get(key) {
            Some(Value::Object(obj)) => SectionContent::new(obj),
            _ => SectionContent::empty(),
        }
    }

    /// Views over an array of objects.
    ///
    /// Returns `None` unless `key` holds a non-empty array with at least one
    /// object, so callers can keep their default list.
    pub fn records(&self, key: &str) -> Option<Vec<SectionContent<'a>>> {
        let Some(Value::Array(arr)) = self.get(key) else {
            return None;
        };
        let views: Vec<_> = arr
            .iter()
            .filter_map(|v| v.as_object().map(SectionContent::new))
            .collect();
        (!views.is_empty()).then_some(views)
    }

    pub fn is_empty(&self) -> bool {
        self.map.map_or(true, |m| m.is_empty())
    }
}

fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Typed sections
// ---------------------------------------------------------------------------

/// A typed `(page, section)` content shape with baked-in defaults.
pub trait SectionSchema: Serialize + Sized {
    /// Page name the section belongs to (e.g. `"about"`).
    const PAGE: &'static str;
    /// Section key within the page (e.g. `"story"`).
    const KEY: &'static str;

    /// The hardcoded copy rendered when nothing has been saved.
    fn defaults() -> Self;

    /// Merge stored content over [`Self::defaults`], field by field.
    fn merge(content: &SectionContent<'_>) -> Self;

    /// Serialise back into a content object, as editors submit it.
    ///
    /// Schemas whose editors bind fixed-size lists override this to pad
    /// them with [`safe_list`].
    fn to_content(&self) -> ContentMap {
        to_content_map(self)
    }
}

/// Serialise a value into a content object; non-objects yield an empty map.
pub fn to_content_map<T: Serialize>(value: &T) -> ContentMap {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => ContentMap::new(),
    }
}

/// Resolve a section from optional stored content.
pub fn resolve_section<S: SectionSchema>(content: Option<&ContentMap>) -> S {
    match content {
        Some(map) => S::merge(&SectionContent::new(map)),
        None => S::defaults(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> ContentMap {
        v.as_object().cloned().expect("test value must be an object")
    }

    #[test]
    fn envelope_canonical_shape() {
        let body = json!({ "data": { "content": { "title": "Hi" }, "pageName": "about" } });
        assert_eq!(normalize_envelope(&body), Some(obj(json!({ "title": "Hi" }))));
    }

    #[test]
    fn envelope_data_is_content() {
        let body = json!({ "data": { "title": "Hi" } });
        assert_eq!(normalize_envelope(&body), Some(obj(json!({ "title": "Hi" }))));
    }

    #[test]
    fn envelope_bare_content() {
        let body = json!({ "content": { "title": "Hi" } });
        assert_eq!(normalize_envelope(&body), Some(obj(json!({ "title": "Hi" }))));
    }

    #[test]
    fn envelope_string_content_field_is_kept_as_data() {
        // A legal section may legitimately carry a `content` text field.
        let body = json!({ "data": { "content": "plain text" } });
        assert_eq!(
            normalize_envelope(&body),
            Some(obj(json!({ "content": "plain text" })))
        );
    }

    #[test]
    fn envelope_null_and_garbage() {
        assert_eq!(normalize_envelope(&json!({ "data": null })), None);
        assert_eq!(normalize_envelope(&json!([1, 2])), None);
        assert_eq!(normalize_envelope(&json!({ "other": 1 })), None);
    }

    #[test]
    fn safe_list_is_exact_length_for_all_small_inputs() {
        for len in 0..=10 {
            let input: Vec<String> = (0..len).map(|i| format!("item {i}")).collect();
            for size in [0, 1, 3, 5, 10] {
                let out = safe_list(&input, size);
                assert_eq!(out.len(), size, "input len {len}, size {size}");
                for (i, item) in out.iter().enumerate() {
                    if i < len {
                        assert_eq!(item, &input[i]);
                    } else {
                        assert_eq!(item, "");
                    }
                }
            }
        }
    }

    #[test]
    fn text_prefers_truthy_override() {
        let map = obj(json!({
            "a": "saved", "b": "", "c": null, "d": 42, "e": 0, "f": true, "g": false, "h": {}
        }));
        let c = SectionContent::new(&map);
        assert_eq!(c.text("a", "dflt"), "saved");
        assert_eq!(c.text("b", "dflt"), "dflt");
        assert_eq!(c.text("c", "dflt"), "dflt");
        assert_eq!(c.text("d", "dflt"), "42");
        assert_eq!(c.text("e", "dflt"), "dflt");
        assert_eq!(c.text("f", "dflt"), "true");
        assert_eq!(c.text("g", "dflt"), "dflt");
        assert_eq!(c.text("h", "dflt"), "dflt");
        assert_eq!(c.text("missing", "dflt"), "dflt");
    }

    #[test]
    fn list_uses_override_only_when_non_empty() {
        let map = obj(json!({
            "full": ["x", "y"], "empty": [], "junk": [1, null, "", true], "mixed": [2, "kept"]
        }));
        let c = SectionContent::new(&map);
        let default = ["a", "b", "c"];
        assert_eq!(c.list("full", &default), vec!["x", "y"]);
        assert_eq!(c.list("empty", &default), vec!["a", "b", "c"]);
        assert_eq!(c.list("junk", &default), vec!["a", "b", "c"]);
        assert_eq!(c.list("mixed", &default), vec!["kept"]);
        assert_eq!(c.list("missing", &default), vec!["a", "b", "c"]);
    }

    #[test]
    fn flag_only_accepts_booleans() {
        let map = obj(json!({ "on": false, "str": "false" }));
        let c = SectionContent::new(&map);
        assert!(!c.flag("on", true));
        assert!(c.flag("str", true));
    }

    #[test]
    fn records_require_objects() {
        let map = obj(json!({ "people": [{ "name": "A" }, "skip"], "none": [1, 2] }));
        let c = SectionContent::new(&map);
        let people = c.records("people").expect("one object present");
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].text("name", ""), "A");
        assert!(c.records("none").is_none());
        assert!(c.records("missing").is_none());
    }

    #[test]
    fn empty_view_reports_empty() {
        assert!(SectionContent::empty().is_empty());
        let map = ContentMap::new();
        assert!(SectionContent::new(&map).is_empty());
    }
}
