//! Integration tests for section storage and page SEO.

use serde_json::json;
use sqlx::PgPool;
use jasiq_db::models::page::BatchSectionItem;
use jasiq_db::models::seo::{UpdateSeoSettings, UpsertPageSeo};
use jasiq_db::repositories::{PageRepo, PageSectionRepo, SeoRepo};

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_section_is_none(pool: PgPool) {
    let found = PageSectionRepo::find(&pool, "about", "story").await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upsert_then_find(pool: PgPool) {
    let content = json!({ "title": "Our story", "paragraphs": ["One", "Two"] });
    let saved = PageSectionRepo::upsert(&pool, "about", "story", &content, None)
        .await
        .unwrap();
    assert_eq!(saved.page_name, "about");
    assert_eq!(saved.section_key, "story");
    assert_eq!(saved.content, content);
    assert_eq!(saved.sort_order, 0);

    let found = PageSectionRepo::find(&pool, "about", "story")
        .await
        .unwrap()
        .expect("section should exist");
    assert_eq!(found.content, content);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_last_write_wins(pool: PgPool) {
    PageSectionRepo::upsert(&pool, "home", "hero", &json!({ "title": "First" }), Some(3))
        .await
        .unwrap();
    let second =
        PageSectionRepo::upsert(&pool, "home", "hero", &json!({ "subtitle": "Second" }), None)
            .await
            .unwrap();

    // Whole-object replace, no field merge; sort order kept when omitted.
    assert_eq!(second.content, json!({ "subtitle": "Second" }));
    assert_eq!(second.sort_order, 3);

    let all = PageSectionRepo::list_for_page(&pool, "home").await.unwrap();
    assert_eq!(all.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_first_write_creates_page(pool: PgPool) {
    assert!(PageRepo::find_by_slug(&pool, "partners").await.unwrap().is_none());

    PageSectionRepo::upsert(&pool, "partners", "hero", &json!({}), None)
        .await
        .unwrap();

    let page = PageRepo::find_by_slug(&pool, "partners")
        .await
        .unwrap()
        .expect("page should be created");
    assert_eq!(page.route_path, "/partners");
    assert_eq!(page.page_type, "PUBLIC");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_batch_upsert_orders_sections(pool: PgPool) {
    let items = vec![
        BatchSectionItem {
            section_key: "team".into(),
            content: json!({ "title": "Team" }),
            sort_order: Some(2),
        },
        BatchSectionItem {
            section_key: "hero".into(),
            content: json!({ "title": "About" }),
            sort_order: Some(0),
        },
        BatchSectionItem {
            section_key: "story".into(),
            content: json!({ "title": "Story" }),
            sort_order: Some(1),
        },
    ];
    let saved = PageSectionRepo::batch_upsert(&pool, "about", &items).await.unwrap();
    assert_eq!(saved.len(), 3);

    let listed = PageSectionRepo::list_for_page(&pool, "about").await.unwrap();
    let keys: Vec<&str> = listed.iter().map(|s| s.section_key.as_str()).collect();
    assert_eq!(keys, vec!["hero", "story", "team"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_page_slug_violates_constraint(pool: PgPool) {
    let err = PageRepo::create(&pool, "home", "/again", "PUBLIC", true)
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.constraint(), Some("uq_pages_slug"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seo_defaults_update_is_partial(pool: PgPool) {
    let before = SeoRepo::get_settings(&pool).await.unwrap();
    assert_eq!(before.site_name, "JASIQ Labs");

    let updated = SeoRepo::update_settings(
        &pool,
        &UpdateSeoSettings {
            default_og_image_url: Some("https://cdn.example.com/og.png".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.site_name, before.site_name);
    assert_eq!(updated.title_template, before.title_template);
    assert_eq!(
        updated.default_og_image_url.as_deref(),
        Some("https://cdn.example.com/og.png")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_page_seo_upsert(pool: PgPool) {
    assert!(SeoRepo::find_page_seo(&pool, "careers").await.unwrap().is_none());

    let dto = UpsertPageSeo {
        meta_title: Some("Careers".into()),
        canonical_url: Some("https://jasiqlabs.com/careers".into()),
        ..Default::default()
    };
    let saved = SeoRepo::upsert_page_seo(&pool, "careers", &dto)
        .await
        .unwrap()
        .expect("careers page is seeded");
    assert_eq!(saved.meta_title.as_deref(), Some("Careers"));

    let replaced = SeoRepo::upsert_page_seo(&pool, "careers", &UpsertPageSeo::default())
        .await
        .unwrap()
        .expect("careers page is seeded");
    assert_eq!(replaced.id, saved.id);
    assert!(replaced.meta_title.is_none());

    let missing = SeoRepo::upsert_page_seo(&pool, "no-such-page", &dto).await.unwrap();
    assert!(missing.is_none());
}
