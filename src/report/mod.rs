mod pdf;

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::extract::types::CaseRecord;

/// Where reports land and which fonts the renderer loads.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub out_dir: PathBuf,
    pub font_dir: PathBuf,
    pub font_family: String,
}

/// Report filename for a lookup. Keyed by number and year only, so two case
/// types sharing both silently overwrite each other's report.
pub fn report_filename(case_number: &str, filing_year: &str) -> String {
    format!("case_{case_number}_{filing_year}.pdf")
}

/// Render the full case report and write it under `cfg.out_dir`.
pub fn render_report(
    record: &CaseRecord,
    case_number: &str,
    filing_year: &str,
    cfg: &RenderConfig,
) -> Result<PathBuf> {
    let doc = pdf::build_document(record, cfg)?;
    let path = cfg.out_dir.join(report_filename(case_number, filing_year));
    doc.render_to_file(&path)
        .with_context(|| format!("writing report to {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_ignores_case_type() {
        assert_eq!(report_filename("123", "2021"), "case_123_2021.pdf");
    }

    #[test]
    fn refetch_maps_to_the_same_file() {
        assert_eq!(report_filename("123", "2021"), report_filename("123", "2021"));
    }
}
