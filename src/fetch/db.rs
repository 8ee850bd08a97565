use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

use super::types::CaseQuery;
use crate::output::summary::BasicInfo;

/// Append one audit row for a completed lookup. `order_link` is a
/// placeholder column kept for parity with the historic schema.
pub async fn log_query(pool: &SqlitePool, query: &CaseQuery, info: &BasicInfo) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO query_log
            (case_type, case_number, filing_year, parties, filing_date, next_hearing, order_link, queried_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        "#,
    )
    .bind(&query.case_type)
    .bind(&query.case_number)
    .bind(&query.filing_year)
    .bind(&info.parties)
    .bind(&info.filing_date)
    .bind(&info.next_hearing)
    .bind(Option::<String>::None)
    .bind(Utc::now())
    .execute(pool)
    .await?;
    Ok(())
}
