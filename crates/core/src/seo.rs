//! SEO metadata merge.
//!
//! Combines site-wide defaults, an optional per-page override and the
//! route's fallback title into a [`HeadState`]: a declarative description
//! of the document head (title, `<meta>` and `<link>` tags) that renderers
//! apply wholesale on every navigation.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Description used when neither the page nor the site defaults provide one.
pub const DEFAULT_DESCRIPTION: &str =
    "JASIQ Labs trains students, builds software for clients and partners with organisations.";

/// Robots directive used when the page does not override it.
pub const DEFAULT_ROBOTS: &str = "index,follow";

/// Matches `{{title}}` / `{{siteName}}` with optional inner whitespace.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(title|siteName)\s*\}\}").expect("valid regex"));

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Site-wide SEO defaults (the `seo_settings` singleton).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoDefaults {
    pub site_name: String,
    pub title_template: String,
    pub default_meta_description: Option<String>,
    pub default_og_image_url: Option<String>,
    pub default_favicon_url: Option<String>,
}

impl SeoDefaults {
    /// Hardcoded defaults used silently when the settings cannot be loaded.
    pub fn fallback() -> Self {
        Self {
            site_name: "JASIQ Labs".into(),
            title_template: "{{title}} | {{siteName}}".into(),
            default_meta_description: Some(DEFAULT_DESCRIPTION.into()),
            default_og_image_url: None,
            default_favicon_url: Some("/favicon.ico".into()),
        }
    }
}

/// Per-page SEO override. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSeoOverride {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub canonical_url: Option<String>,
    pub robots: Option<String>,
    pub og_image_url: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// A `<meta>` tag, keyed by either `name` or `property`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTag {
    pub key_attr: MetaKey,
    pub key: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaKey {
    Name,
    Property,
}

impl MetaKey {
    pub fn as_str(self) -> &'static str {
        match self {
            MetaKey::Name => "name",
            MetaKey::Property => "property",
        }
    }
}

/// A `<link>` tag, keyed by `rel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTag {
    pub rel: String,
    pub href: String,
}

/// Declarative document head.
///
/// Tags are upserted: adding a tag whose key already exists overwrites its
/// value in place, otherwise the tag is appended. Insertion order is kept so
/// rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeadState {
    pub title: String,
    pub metas: Vec<MetaTag>,
    pub links: Vec<LinkTag>,
}

impl HeadState {
    pub fn upsert_meta(&mut self, key_attr: MetaKey, key: &str, content: impl Into<String>) {
        let content = content.into();
        match self
            .metas
            .iter_mut()
            .find(|m| m.key_attr == key_attr && m.key == key)
        {
            Some(existing) => existing.content = content,
            None => self.metas.push(MetaTag {
                key_attr,
                key: key.to_string(),
                content,
            }),
        }
    }

    pub fn upsert_link(&mut self, rel: &str, href: impl Into<String>) {
        let href = href.into();
        match self.links.iter_mut().find(|l| l.rel == rel) {
            Some(existing) => existing.href = href,
            None => self.links.push(LinkTag {
                rel: rel.to_string(),
                href,
            }),
        }
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metas
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.content.as_str())
    }

    pub fn link(&self, rel: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.rel == rel)
            .map(|l| l.href.as_str())
    }

    /// Render as HTML head markup, one tag per line.
    pub fn render_html(&self) -> String {
        let mut out = format!("<title>{}</title>\n", escape_html(&self.title));
        for m in &self.metas {
            out.push_str(&format!(
                "<meta {}=\"{}\" content=\"{}\">\n",
                m.key_attr.as_str(),
                escape_html(&m.key),
                escape_html(&m.content)
            ));
        }
        for l in &self.links {
            out.push_str(&format!(
                "<link rel=\"{}\" href=\"{}\">\n",
                escape_html(&l.rel),
                escape_html(&l.href)
            ));
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Merge
// ---------------------------------------------------------------------------

/// Substitute `{{title}}` and `{{siteName}}` in a title template.
///
/// A blank template renders as the bare title.
pub fn render_title_template(template: &str, title: &str, site_name: &str) -> String {
    if template.trim().is_empty() {
        return title.to_string();
    }
    PLACEHOLDER_RE
        .replace_all(template, |caps: &regex::Captures| match &caps[1] {
            "title" => title.to_string(),
            _ => site_name.to_string(),
        })
        .into_owned()
}

/// Merge defaults, page override and fallback title into the final head.
pub fn resolve_head(
    defaults: &SeoDefaults,
    page: Option<&PageSeoOverride>,
    fallback_title: Option<&str>,
) -> HeadState {
    let page_field = |f: fn(&PageSeoOverride) -> &Option<String>| {
        page.and_then(|p| non_blank(f(p).as_deref()))
    };

    let title = page_field(|p| &p.meta_title)
        .or_else(|| non_blank(fallback_title))
        .unwrap_or(&defaults.site_name);
    let rendered_title = render_title_template(&defaults.title_template, title, &defaults.site_name);

    let description = page_field(|p| &p.meta_description)
        .or_else(|| non_blank(defaults.default_meta_description.as_deref()))
        .unwrap_or(DEFAULT_DESCRIPTION);

    let robots = page_field(|p| &p.robots).unwrap_or(DEFAULT_ROBOTS);

    let og_title = page_field(|p| &p.og_title).unwrap_or(&rendered_title);
    let og_description = page_field(|p| &p.og_description).unwrap_or(description);
    let og_image = page_field(|p| &p.og_image_url)
        .or_else(|| non_blank(defaults.default_og_image_url.as_deref()));

    let mut head = HeadState::default();
    head.upsert_meta(MetaKey::Name, "description", description);
    head.upsert_meta(MetaKey::Name, "robots", robots);
    head.upsert_meta(MetaKey::Property, "og:title", og_title);
    head.upsert_meta(MetaKey::Property, "og:description", og_description);
    head.upsert_meta(MetaKey::Property, "og:site_name", defaults.site_name.as_str());
    if let Some(image) = og_image {
        head.upsert_meta(MetaKey::Property, "og:image", image);
    }
    if let Some(canonical) = page_field(|p| &p.canonical_url) {
        head.upsert_link("canonical", canonical);
    }
    if let Some(icon) = non_blank(defaults.default_favicon_url.as_deref()) {
        head.upsert_link("icon", icon);
    }
    head.title = rendered_title;
    head
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
