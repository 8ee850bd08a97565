use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::extract::{self, types::CaseRecord};
use crate::output::summary::{self, BasicInfo};
use crate::report::{self, RenderConfig};
use crate::telemetry::ops::parse::Phase as ParsePhase;
use crate::telemetry::{self, config};

/// `court parse` — run the extractors over a saved case page, no browser.
#[derive(Args)]
pub struct ParseCmd {
    /// HTML file captured from the portal
    pub html_path: PathBuf,
    /// Also render the PDF report
    #[arg(long, default_value_t = false)]
    pub report: bool,
    /// Case number used for the report filename
    #[arg(long, default_value = "parsed")]
    pub case_number: String,
    /// Filing year used for the report filename
    #[arg(long, default_value = "0000")]
    pub filing_year: String,
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
    #[arg(long, env = "COURT_FONT_DIR", default_value = "fonts")]
    pub font_dir: PathBuf,
    #[arg(long, default_value = "LiberationSans")]
    pub font_family: String,
}

// Result envelope
#[derive(Serialize)]
struct ParseResult {
    basic_info: BasicInfo,
    record: CaseRecord,
    pdf_path: Option<String>,
}

pub async fn run(args: ParseCmd) -> Result<()> {
    let log = telemetry::parse();
    let _g = log
        .root_span_kv([("path", args.html_path.display().to_string())])
        .entered();

    let html = {
        let _s = log.span(&ParsePhase::ReadFile).entered();
        std::fs::read_to_string(&args.html_path)
            .with_context(|| format!("reading {}", args.html_path.display()))?
    };

    let record = {
        let _s = log.span(&ParsePhase::Extract).entered();
        extract::extract_record(&html)
    };
    let info = summary::basic_info(&record);

    let pdf_path = if args.report {
        let _s = log.span(&ParsePhase::Render).entered();
        let cfg = RenderConfig {
            out_dir: args.out_dir.clone(),
            font_dir: args.font_dir.clone(),
            font_family: args.font_family.clone(),
        };
        let path = report::render_report(&record, &args.case_number, &args.filing_year, &cfg)?;
        Some(path.display().to_string())
    } else {
        None
    };

    log.info(format!("🏛 {}", info.court_info));
    log.info(format!(
        "Filing date: {} | Next hearing: {} | Stage: {}",
        info.filing_date, info.next_hearing, info.case_stage
    ));
    if let Some(p) = &pdf_path {
        log.info(format!("📄 Report written to {p}"));
    }

    if config::json_mode() {
        log.result(&ParseResult { basic_info: info, record, pdf_path }, None)?;
    }
    Ok(())
}
