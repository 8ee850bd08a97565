use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use clap::Args;
use sqlx::SqlitePool;
use url::Url;

mod db;
pub mod session;
pub mod signal;
pub mod types;

use crate::extract;
use crate::output::summary;
use crate::report::{self, RenderConfig};
use crate::telemetry::emit::Meta;
use crate::telemetry::ops::fetch::Phase as FetchPhase;
use crate::telemetry::{self, config};
use session::PortalSession;
use signal::StdinSignal;
use types::{CaseQuery, FetchResult};

const DEFAULT_PORTAL: &str = "https://services.ecourts.gov.in/ecourtindia_v6/";

/// `court fetch` — one interactive case lookup.
#[derive(Args)]
pub struct FetchCmd {
    pub case_type: String,
    pub case_number: String,
    pub filing_year: String,
    /// Portal landing page
    #[arg(long, env = "COURT_PORTAL_URL", default_value = DEFAULT_PORTAL)]
    pub portal_url: String,
    /// Upper bound (seconds) on waiting for the case page after the operator confirms
    #[arg(long, default_value_t = 30)]
    pub wait_secs: u64,
    /// Directory reports are written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
    /// Directory holding the report font family (.ttf files)
    #[arg(long, env = "COURT_FONT_DIR", default_value = "fonts")]
    pub font_dir: PathBuf,
    #[arg(long, default_value = "LiberationSans")]
    pub font_family: String,
    /// Where to drop a page screenshot when the lookup fails
    #[arg(long, default_value = "error.png")]
    pub screenshot: PathBuf,
}

pub async fn run(pool: &SqlitePool, args: FetchCmd) -> Result<()> {
    let query = CaseQuery::new(&args.case_type, &args.case_number, &args.filing_year);
    query.validate()?;
    if Url::parse(&args.portal_url).is_err() {
        bail!("Invalid portal URL: {}", args.portal_url);
    }

    let log = telemetry::fetch();
    let _g = log
        .root_span_kv([
            ("case_type", query.case_type.clone()),
            ("case_number", query.case_number.clone()),
            ("filing_year", query.filing_year.clone()),
        ])
        .entered();
    let t0 = Instant::now();

    let session = {
        let _s = log
            .span_kv(&FetchPhase::Navigate, [("portal", args.portal_url.clone())])
            .entered();
        PortalSession::launch(&args.portal_url).await?
    };

    log.info(operator_instructions(&query));

    let resolved = session::resolve_case_page(
        &session,
        &mut StdinSignal,
        Duration::from_secs(args.wait_secs),
        &log,
    )
    .await;

    let html = match resolved {
        Ok(html) => {
            session.close().await;
            html
        }
        Err(e) => {
            log.error(format!("Lookup failed: {e}"));
            if session.save_screenshot(&args.screenshot).await.is_ok() {
                log.warn(format!("Saved failure screenshot to {}", args.screenshot.display()));
            }
            session.close().await;
            return Err(e);
        }
    };

    let record = {
        let _s = log.span(&FetchPhase::Extract).entered();
        extract::extract_record(&html)
    };
    log.section_counts(
        record.case_metadata.len(),
        record.parties.len(),
        record.acts_sections.len(),
        record.case_status.len(),
        record.case_history.rows.len(),
        record.interim_orders.rows.len(),
    );

    let info = summary::basic_info(&record);

    let cfg = RenderConfig {
        out_dir: args.out_dir.clone(),
        font_dir: args.font_dir.clone(),
        font_family: args.font_family.clone(),
    };
    let pdf_path = {
        let _s = log.span(&FetchPhase::Render).entered();
        report::render_report(&record, &query.case_number, &query.filing_year, &cfg)?
    };

    {
        let _s = log.span(&FetchPhase::LogQuery).entered();
        db::log_query(pool, &query, &info).await?;
    }

    log.info(format!("📄 Report written to {}", pdf_path.display()));
    log.info(format!("🏛 {}", info.court_info));
    log.info(format!(
        "Filing date: {} | Next hearing: {} | Stage: {}",
        info.filing_date, info.next_hearing, info.case_stage
    ));
    for line in info.parties.lines() {
        log.info(line);
    }

    if config::json_mode() {
        let result = FetchResult {
            basic_info: info,
            pdf_path: pdf_path.display().to_string(),
        };
        log.result(
            &result,
            Some(Meta { duration_ms: Some(t0.elapsed().as_millis()) }),
        )?;
    }
    Ok(())
}

fn operator_instructions(query: &CaseQuery) -> String {
    format!(
        "MANUAL STEPS REQUIRED:\n\
         1. Select State/District/Court from the dropdowns\n\
         2. Enter case type {}, case number {} and year {}\n\
         3. Solve the CAPTCHA and submit the search\n\
         4. Return here and press ENTER",
        query.case_type, query.case_number, query.filing_year
    )
}
