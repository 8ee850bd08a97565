use anyhow::Result;
use clap::Args;
use sqlx::SqlitePool;

mod db;
pub mod types;

use crate::telemetry::ops::queries::Phase as QueriesPhase;
use crate::telemetry::{self, config};

/// `court queries` — audit log of past lookups, newest first.
#[derive(Args)]
pub struct QueriesCmd {
    #[arg(long, default_value_t = 20)]
    pub limit: i64,
}

pub async fn run(pool: &SqlitePool, args: QueriesCmd) -> Result<()> {
    let log = telemetry::queries();
    let _g = log.root_span_kv([("limit", args.limit.to_string())]).entered();
    let _s = log.span(&QueriesPhase::List).entered();

    let rows = db::recent_queries(pool, args.limit).await?;
    log.info(format!("🗂 {} logged queries:", rows.len()));
    for row in &rows {
        log.info(format!(
            "[{}] {} {}/{} filing={} next={} at={}",
            row.id,
            row.case_type,
            row.case_number,
            row.filing_year,
            row.filing_date.as_deref().unwrap_or("-"),
            row.next_hearing.as_deref().unwrap_or("-"),
            row.queried_at
        ));
    }

    if config::json_mode() {
        log.result(&types::QueryList { queries: rows }, None)?;
    }
    Ok(())
}
