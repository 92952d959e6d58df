//! REST client for the page content, SEO and lead endpoints.

use futures::future::join_all;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use jasiq_core::content::{normalize_envelope, resolve_section, ContentMap, SectionSchema};
use jasiq_core::lead::LeadSubmission;
use jasiq_core::seo::{resolve_head, HeadState, PageSeoOverride, SeoDefaults};
use jasiq_core::types::DbId;

use crate::error::ClientError;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// HTTP client for one JASIQ Labs API deployment.
#[derive(Debug, Clone)]
pub struct ContentClient {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

/// The `{ "data": .. }` envelope every API success body uses.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// The subset of a created lead callers care about.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadReceipt {
    pub id: DbId,
    pub status: String,
}

/// A section that could not be saved by [`ContentClient::update_many`].
#[derive(Debug)]
pub struct SectionFailure {
    pub section_key: String,
    pub error: ClientError,
}

/// Outcome of a non-atomic multi-section save.
///
/// Sections are saved independently, so any subset may have succeeded.
#[derive(Debug, Default)]
pub struct BatchSaveReport {
    pub saved: Vec<String>,
    pub failed: Vec<SectionFailure>,
}

impl BatchSaveReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SectionBody<'a> {
    page_name: &'a str,
    section_key: &'a str,
    content: &'a ContentMap,
}

impl ContentClient {
    /// Create a client for the API at `base_url`.
    ///
    /// Both `https://host` and `https://host/api` are accepted.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            api_url: normalize_base_url(base_url),
            token: None,
        }
    }

    /// Read the base URL from `API_BASE_URL`, defaulting to the local server.
    pub fn from_env() -> Self {
        let base = std::env::var("API_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(&base)
    }

    /// Attach an admin bearer token, required by the write operations.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// The normalised API root, always ending in `/api`.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    // ---- sections ----

    /// Fetch the stored content of one section.
    ///
    /// `Ok(None)` when nothing was ever saved for it.
    pub async fn get(
        &self,
        page_name: &str,
        section_key: &str,
    ) -> Result<Option<ContentMap>, ClientError> {
        let response = self
            .request(Method::GET, &format!("/page-content/{page_name}/{section_key}"))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body: Value = Self::parse_response(response).await?;
        Ok(normalize_envelope(&body))
    }

    /// Fetch a typed section merged over its defaults.
    ///
    /// Never fails: any error is logged and the defaults are returned.
    pub async fn resolve<S: SectionSchema>(&self) -> S {
        match self.get(S::PAGE, S::KEY).await {
            Ok(content) => resolve_section::<S>(content.as_ref()),
            Err(err) => {
                tracing::warn!(
                    page = S::PAGE,
                    section = S::KEY,
                    error = %err,
                    "Section fetch failed, using defaults",
                );
                S::defaults()
            }
        }
    }

    /// Replace one section's content.
    pub async fn update(
        &self,
        page_name: &str,
        section_key: &str,
        content: &ContentMap,
    ) -> Result<(), ClientError> {
        let body = SectionBody {
            page_name,
            section_key,
            content,
        };
        let response = self
            .request(Method::PUT, "/page-content")
            .json(&body)
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// Save several sections of a page concurrently, one request each.
    ///
    /// Not atomic; see [`BatchSaveReport`]. Use [`Self::update_atomic`]
    /// when all sections must land together.
    pub async fn update_many(
        &self,
        page_name: &str,
        sections: &[(String, ContentMap)],
    ) -> BatchSaveReport {
        let saves = sections.iter().map(|(key, content)| async move {
            (key, self.update(page_name, key, content).await)
        });

        let mut report = BatchSaveReport::default();
        for (key, result) in join_all(saves).await {
            match result {
                Ok(()) => report.saved.push(key.clone()),
                Err(error) => {
                    tracing::warn!(page = page_name, section = %key, error = %error, "Section save failed");
                    report.failed.push(SectionFailure {
                        section_key: key.clone(),
                        error,
                    });
                }
            }
        }
        report
    }

    /// Save several sections of a page in one server-side transaction.
    pub async fn update_atomic(
        &self,
        page_name: &str,
        sections: &[(String, ContentMap)],
    ) -> Result<(), ClientError> {
        let items: Vec<Value> = sections
            .iter()
            .map(|(key, content)| json!({ "sectionKey": key, "content": content }))
            .collect();
        let body = json!({ "pageName": page_name, "sections": items });

        let response = self
            .request(Method::PUT, "/page-content/batch")
            .json(&body)
            .send()
            .await?;
        Self::check_status(response).await
    }

    // ---- SEO ----

    pub async fn get_seo_defaults(&self) -> Result<SeoDefaults, ClientError> {
        let response = self
            .request(Method::GET, "/public/seo/defaults")
            .send()
            .await?;
        let envelope: Envelope<SeoDefaults> = Self::parse_response(response).await?;
        Ok(envelope.data)
    }

    /// The page's SEO override, `None` when it has none.
    pub async fn get_page_seo(&self, slug: &str) -> Result<Option<PageSeoOverride>, ClientError> {
        let response = self
            .request(Method::GET, &format!("/public/pages/{slug}/seo"))
            .send()
            .await?;
        let envelope: Envelope<Option<PageSeoOverride>> = Self::parse_response(response).await?;
        Ok(envelope.data)
    }

    /// Build the document head for a page.
    ///
    /// Defaults and the page override are fetched concurrently. A failed
    /// defaults fetch falls back to [`SeoDefaults::fallback`]; a failed
    /// override fetch is treated as no override.
    pub async fn load_head(&self, slug: &str, fallback_title: Option<&str>) -> HeadState {
        let (defaults, page) = tokio::join!(self.get_seo_defaults(), self.get_page_seo(slug));

        let defaults = defaults.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "SEO defaults fetch failed, using fallback");
            SeoDefaults::fallback()
        });
        let page = page.unwrap_or_else(|err| {
            tracing::warn!(page = slug, error = %err, "Page SEO fetch failed");
            None
        });

        resolve_head(&defaults, page.as_ref(), fallback_title)
    }

    // ---- leads ----

    pub async fn submit_lead(&self, lead: &LeadSubmission) -> Result<LeadReceipt, ClientError> {
        let response = self
            .request(Method::POST, "/public/leads")
            .json(lead)
            .send()
            .await?;
        let envelope: Envelope<LeadReceipt> = Self::parse_response(response).await?;
        Ok(envelope.data)
    }

    // ---- private helpers ----

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, format!("{}{path}", self.api_url));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Turn a non-2xx response into [`ClientError::Api`], preferring the
    /// `error` field of a JSON body over the raw text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
                .unwrap_or(body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

/// Trim trailing slashes and make sure the URL ends in `/api`.
fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.ends_with("/api") {
        trimmed.to_string()
    } else {
        format!("{trimmed}/api")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_api_suffix_once() {
        assert_eq!(normalize_base_url("http://localhost:3000"), "http://localhost:3000/api");
        assert_eq!(normalize_base_url("http://localhost:3000/"), "http://localhost:3000/api");
        assert_eq!(normalize_base_url("https://jasiqlabs.com/api"), "https://jasiqlabs.com/api");
        assert_eq!(normalize_base_url("https://jasiqlabs.com/api//"), "https://jasiqlabs.com/api");
    }

    #[test]
    fn report_is_incomplete_with_any_failure() {
        let mut report = BatchSaveReport::default();
        report.saved.push("hero".into());
        assert!(report.is_complete());
        report.failed.push(SectionFailure {
            section_key: "cta".into(),
            error: ClientError::Api {
                status: 500,
                message: "boom".into(),
            },
        });
        assert!(!report.is_complete());
    }
}
