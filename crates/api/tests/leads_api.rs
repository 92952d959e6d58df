//! Lead capture and admin lead management.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, delete, get, get_auth, patch_json, post_json};
use serde_json::{json, Value};
use sqlx::PgPool;

fn lead(email: &str, interest: &str) -> Value {
    json!({
        "name": "  Asha Rao ",
        "email": email,
        "interestType": interest,
        "division": "training",
        "source": "contact-page",
        "message": "   ",
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn student_lead_is_stored_as_new(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/public/leads", lead("asha@example.com", "STUDENT"), None).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Asha Rao");
    assert_eq!(json["data"]["interestType"], "STUDENT");
    assert_eq!(json["data"]["status"], "NEW");
    assert!(json["data"]["message"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_interest_type_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/public/leads", lead("asha@example.com", "HOBBYIST"), None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("interestType"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn email_without_at_sign_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/public/leads", lead("asha.example.com", "CLIENT"), None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_name_is_a_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/public/leads",
        json!({ "email": "asha@example.com", "interestType": "STUDENT" }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Name is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn honeypot_does_not_block_submission(pool: PgPool) {
    let app = common::build_test_app(pool);
    let mut body = lead("bot@example.com", "PARTNER");
    body["website"] = json!("http://spam.example");
    let response = post_json(app, "/api/public/leads", body, None).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_lead_lifecycle(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let created = body_json(
        post_json(app.clone(), "/api/public/leads", lead("asha@example.com", "CLIENT"), None).await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    assert_eq!(get(app.clone(), "/api/admin/leads").await.status(), StatusCode::UNAUTHORIZED);

    let response = patch_json(
        app.clone(),
        &format!("/api/admin/leads/{id}/status"),
        json!({ "status": "CONTACTED" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "CONTACTED");

    let response = patch_json(
        app.clone(),
        &format!("/api/admin/leads/{id}/status"),
        json!({ "status": "LOST" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(get_auth(app.clone(), "/api/admin/leads?status=NEW", &token).await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
    let json = body_json(get_auth(app.clone(), "/api/admin/leads?status=CONTACTED", &token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let response = delete(app.clone(), &format!("/api/admin/leads/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = get_auth(app, &format!("/api/admin/leads/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
