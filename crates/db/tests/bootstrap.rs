//! Schema bootstrap against a live database.

#![cfg(feature = "postgres-tests")]

use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    fertiflow_db::health_check(&pool).await.unwrap();

    let tables = [
        "users",
        "user_sessions",
        "demand_requests",
        "production_plans",
        "production_data",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_amount_columns_precision_and_scale(pool: PgPool) {
    let columns: Vec<(String, String, i32, i32)> = sqlx::query_as(
        "SELECT table_name::text, column_name::text,
                numeric_precision::int4, numeric_scale::int4
         FROM information_schema.columns
         WHERE table_schema = 'public' AND data_type = 'numeric'
         ORDER BY table_name, column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let expected = vec![
        ("demand_requests".to_string(), "quantity".to_string(), 10, 2),
        ("production_data".to_string(), "daily_production".to_string(), 10, 2),
        ("production_data".to_string(), "efficiency_rate".to_string(), 5, 2),
        ("production_data".to_string(), "target_production".to_string(), 10, 2),
    ];
    assert_eq!(columns, expected);
}
