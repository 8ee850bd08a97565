use anyhow::Result;
use clap::Args;
use sqlx::SqlitePool;

use crate::telemetry::{self};
use crate::telemetry::ops::init::Phase as InitPhase;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS query_log (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    case_type    TEXT NOT NULL,
    case_number  TEXT NOT NULL,
    filing_year  TEXT NOT NULL,
    parties      TEXT,
    filing_date  TEXT,
    next_hearing TEXT,
    order_link   TEXT,
    queried_at   TEXT NOT NULL
)
"#;

/// `court init` — create the query audit log schema (idempotent).
#[derive(Args)]
pub struct InitCmd {}

pub async fn run(pool: &SqlitePool, _args: InitCmd) -> Result<()> {
    let log = telemetry::init();
    let _g = log.root_span().entered();
    {
        let _s = log.span(&InitPhase::Migrate).entered();
        sqlx::query(SCHEMA).execute(pool).await?;
    }
    log.info("✅ Query log schema ready");
    Ok(())
}
