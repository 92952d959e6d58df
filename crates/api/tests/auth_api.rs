//! Login, token checks and admin bootstrap.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json};
use serde_json::json;
use sqlx::PgPool;

use jasiq_api::auth::password::hash_password;
use jasiq_api::bootstrap::{ensure_admin, AdminSeed};
use jasiq_db::models::admin_user::CreateAdminUser;
use jasiq_db::repositories::AdminUserRepo;

const PASSWORD: &str = "correct-horse-battery";

async fn seed_admin(pool: &PgPool) -> i64 {
    let user = AdminUserRepo::create(
        pool,
        &CreateAdminUser {
            username: "editor".into(),
            email: "editor@jasiqlabs.com".into(),
            password_hash: hash_password(PASSWORD).unwrap(),
        },
    )
    .await
    .unwrap();
    user.id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_token_usable_for_me(pool: PgPool) {
    let id = seed_admin(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/auth/login",
        json!({ "username": "editor", "password": PASSWORD }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["expiresIn"], 3600);
    assert_eq!(json["data"]["user"]["username"], "editor");
    assert!(json["data"]["user"].get("passwordHash").is_none());

    let token = json["data"]["accessToken"].as_str().unwrap().to_string();
    let response = get_auth(app, "/api/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], id);
    assert!(json["data"]["lastLoginAt"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_password_and_unknown_user_look_the_same(pool: PgPool) {
    seed_admin(&pool).await;
    let app = common::build_test_app(pool);

    let wrong = post_json(
        app.clone(),
        "/api/auth/login",
        json!({ "username": "editor", "password": "nope-nope-nope" }),
        None,
    )
    .await;
    let unknown = post_json(
        app,
        "/api/auth/login",
        json!({ "username": "ghost", "password": PASSWORD }),
        None,
    )
    .await;

    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(wrong).await, body_json(unknown).await);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app.clone(), "/api/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app, "/api/auth/me", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_admin_role_is_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/admin/leads", &common::non_admin_token()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bootstrap_creates_admin_once(pool: PgPool) {
    let seed = AdminSeed {
        username: "root".into(),
        email: "root@jasiqlabs.com".into(),
        password: "a-long-enough-password".into(),
    };

    let created = ensure_admin(&pool, &seed).await.unwrap();
    assert!(created.is_some());

    let rotated = AdminSeed {
        password: "another-long-password".into(),
        ..seed
    };
    assert!(ensure_admin(&pool, &rotated).await.unwrap().is_none());

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/login",
        json!({ "username": "root", "password": "a-long-enough-password" }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bootstrap_rejects_weak_password(pool: PgPool) {
    let seed = AdminSeed {
        username: "root".into(),
        email: "root@jasiqlabs.com".into(),
        password: "short".into(),
    };
    assert!(ensure_admin(&pool, &seed).await.is_err());
    assert!(AdminUserRepo::find_by_username(&pool, "root")
        .await
        .unwrap()
        .is_none());
}
