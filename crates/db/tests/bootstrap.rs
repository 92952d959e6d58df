use sqlx::PgPool;

/// Connect, migrate, verify seed data.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    jasiq_db::health_check(&pool).await.unwrap();

    for table in ["seo_settings", "testimonial_settings"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 1, "{table} must hold exactly one row");
    }

    let pages = jasiq_db::repositories::PageRepo::list(&pool).await.unwrap();
    let slugs: Vec<&str> = pages.iter().map(|p| p.slug.as_str()).collect();
    for expected in ["home", "about", "careers", "legal", "blog", "testimonials"] {
        assert!(slugs.contains(&expected), "missing seeded page {expected}");
    }
}

/// The singleton tables refuse a second row.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seo_settings_is_singleton(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO seo_settings (id, site_name, title_template) VALUES (2, 'x', 'y')",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err());
}
