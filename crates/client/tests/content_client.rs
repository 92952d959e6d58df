//! `ContentClient` against an in-process stub of the API.

use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Map, Value};

use jasiq_client::{ClientError, ContentClient};
use jasiq_core::content::SectionSchema;
use jasiq_core::lead::LeadSubmission;
use jasiq_core::sections::CareersHero;

#[derive(Clone, Default)]
struct Saved(Arc<Mutex<Vec<String>>>);

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn section(Path((page, key)): Path<(String, String)>) -> (StatusCode, Json<Value>) {
    match (page.as_str(), key.as_str()) {
        ("careers", "hero") => (
            StatusCode::OK,
            Json(json!({
                "data": {
                    "pageName": "careers",
                    "sectionKey": "hero",
                    "content": { "title": "Work with us", "subtitle": "", "perks": [] }
                }
            })),
        ),
        ("legacy", "bare") => (StatusCode::OK, Json(json!({ "content": { "title": "Old" } }))),
        ("broken", _) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "An internal error occurred", "code": "INTERNAL_ERROR" })),
        ),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Section not found", "code": "NOT_FOUND" })),
        ),
    }
}

async fn save_section(
    State(saved): State<Saved>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if headers.get("authorization").is_none() {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Missing Authorization header", "code": "UNAUTHORIZED" })),
        );
    }
    let key = body["sectionKey"].as_str().unwrap_or_default().to_string();
    if key == "broken" {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "An internal error occurred", "code": "INTERNAL_ERROR" })),
        );
    }
    saved.0.lock().unwrap().push(key);
    (StatusCode::OK, Json(json!({ "data": body })))
}

async fn save_batch(State(saved): State<Saved>, Json(body): Json<Value>) -> Json<Value> {
    let mut saved = saved.0.lock().unwrap();
    for item in body["sections"].as_array().unwrap() {
        saved.push(item["sectionKey"].as_str().unwrap().to_string());
    }
    Json(json!({ "data": body["sections"] }))
}

async fn seo_defaults() -> Json<Value> {
    Json(json!({
        "data": {
            "siteName": "Stub Site",
            "titleTemplate": "{{siteName}} :: {{title}}",
            "defaultMetaDescription": null,
            "defaultOgImageUrl": null,
            "defaultFaviconUrl": null,
            "updatedAt": "2024-01-01T00:00:00Z"
        }
    }))
}

async fn page_seo(Path(slug): Path<String>) -> Json<Value> {
    if slug == "about" {
        Json(json!({ "data": { "id": 1, "pageId": 2, "metaTitle": "About us" } }))
    } else {
        Json(json!({ "data": null }))
    }
}

async fn submit_lead(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["interestType"] == "STUDENT" {
        (
            StatusCode::CREATED,
            Json(json!({ "data": { "id": 7, "status": "NEW", "name": body["name"] } })),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "interestType must be one of: STUDENT, CLIENT, PARTNER", "code": "VALIDATION_ERROR" })),
        )
    }
}

async fn stub(saved: Saved) -> ContentClient {
    let router = Router::new()
        .route("/api/page-content", put(save_section))
        .route("/api/page-content/batch", put(save_batch))
        .route("/api/page-content/{page}/{key}", get(section))
        .route("/api/public/seo/defaults", get(seo_defaults))
        .route("/api/public/pages/{slug}/seo", get(page_seo))
        .route("/api/public/leads", post(submit_lead))
        .with_state(saved);
    ContentClient::new(&spawn(router).await)
}

/// A base URL nothing is listening on.
async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn content(v: Value) -> Map<String, Value> {
    v.as_object().cloned().unwrap()
}

#[tokio::test]
async fn missing_section_is_none() {
    let client = stub(Saved::default()).await;
    assert_eq!(client.get("about", "story").await.unwrap(), None);
}

#[tokio::test]
async fn envelopes_are_normalised() {
    let client = stub(Saved::default()).await;
    let canonical = client.get("careers", "hero").await.unwrap().unwrap();
    assert_eq!(canonical["title"], "Work with us");
    let bare = client.get("legacy", "bare").await.unwrap().unwrap();
    assert_eq!(bare, content(json!({ "title": "Old" })));
}

#[tokio::test]
async fn resolve_merges_saved_fields_over_defaults() {
    let client = stub(Saved::default()).await;
    let hero: CareersHero = client.resolve().await;
    let defaults = CareersHero::defaults();
    assert_eq!(hero.title, "Work with us");
    assert_eq!(hero.subtitle, defaults.subtitle);
    assert_eq!(hero.perks, defaults.perks);
}

#[tokio::test]
async fn server_error_surfaces_from_get() {
    let client = stub(Saved::default()).await;
    assert_matches!(
        client.get("broken", "hero").await,
        Err(ClientError::Api { status: 500, .. })
    );
}

#[tokio::test]
async fn unreachable_server_resolves_to_defaults() {
    let client = ContentClient::new(&dead_url().await);
    let hero: CareersHero = client.resolve().await;
    assert_eq!(hero, CareersHero::defaults());
}

#[tokio::test]
async fn writes_without_token_are_rejected() {
    let client = stub(Saved::default()).await;
    let result = client
        .update("about", "story", &content(json!({ "title": "x" })))
        .await;
    assert_matches!(
        result,
        Err(ClientError::Api { status: 401, message }) if message == "Missing Authorization header"
    );
}

#[tokio::test]
async fn update_many_reports_partial_failure() {
    let saved = Saved::default();
    let client = stub(saved.clone()).await.with_token("token");

    let sections: Vec<(String, Map<String, Value>)> = ["hero", "story", "broken", "cta"]
        .iter()
        .map(|k| (k.to_string(), content(json!({ "title": k }))))
        .collect();
    let report = client.update_many("about", &sections).await;

    assert!(!report.is_complete());
    assert_eq!(report.saved.len(), 3);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].section_key, "broken");
    assert_eq!(report.failed[0].error.status(), Some(500));

    let mut stored = saved.0.lock().unwrap().clone();
    stored.sort();
    assert_eq!(stored, vec!["cta", "hero", "story"]);
}

#[tokio::test]
async fn update_atomic_sends_one_batch() {
    let saved = Saved::default();
    let client = stub(saved.clone()).await.with_token("token");
    let sections = vec![
        ("hero".to_string(), content(json!({ "title": "a" }))),
        ("cta".to_string(), content(json!({ "label": "b" }))),
    ];
    client.update_atomic("about", &sections).await.unwrap();
    assert_eq!(*saved.0.lock().unwrap(), vec!["hero", "cta"]);
}

#[tokio::test]
async fn head_uses_remote_defaults_and_override() {
    let client = stub(Saved::default()).await;
    let head = client.load_head("about", Some("About")).await;
    assert_eq!(head.title, "Stub Site :: About us");

    let head = client.load_head("careers", Some("Careers")).await;
    assert_eq!(head.title, "Stub Site :: Careers");
}

#[tokio::test]
async fn head_falls_back_silently_when_api_is_down() {
    let client = ContentClient::new(&dead_url().await);
    let head = client.load_head("careers", Some("Careers")).await;
    assert_eq!(head.title, "Careers | JASIQ Labs");
    assert_eq!(head.link("icon"), Some("/favicon.ico"));
}

#[tokio::test]
async fn lead_submission_round_trips_status_and_errors() {
    let client = stub(Saved::default()).await;
    let mut lead = LeadSubmission {
        name: "Asha".into(),
        email: "asha@example.com".into(),
        phone: None,
        interest_type: "STUDENT".into(),
        division: None,
        source: Some("contact-page".into()),
        message: None,
        website: None,
    };

    let receipt = client.submit_lead(&lead).await.unwrap();
    assert_eq!(receipt.id, 7);
    assert_eq!(receipt.status, "NEW");

    lead.interest_type = "HOBBYIST".into();
    assert_matches!(
        client.submit_lead(&lead).await,
        Err(ClientError::Api { status: 400, message }) if message.contains("interestType")
    );
}
