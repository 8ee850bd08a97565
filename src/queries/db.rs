use anyhow::Result;
use sqlx::SqlitePool;

use super::types::QueryRow;

pub async fn recent_queries(pool: &SqlitePool, limit: i64) -> Result<Vec<QueryRow>> {
    let rows = sqlx::query_as::<_, QueryRow>(
        r#"
        SELECT id, case_type, case_number, filing_year,
               parties, filing_date, next_hearing, order_link, queried_at
        FROM query_log
        ORDER BY id DESC
        LIMIT ?1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
