use anyhow::{Context, Result, anyhow};
use genpdf::{Alignment, Document, Element as _, elements, style};

use super::RenderConfig;
use crate::extract::types::CaseRecord;
use crate::output::parties::format_parties;

const TITLE: &str = "eCourts Case Details Report";
const BODY_SIZE: u8 = 12;
const TABLE_SIZE: u8 = 10;

/// Fixed section order: title, court information, case details, parties,
/// acts, status, history, interim orders. Sections with no data are left out
/// entirely; the title and court information always render.
pub fn build_document(record: &CaseRecord, cfg: &RenderConfig) -> Result<Document> {
    let family = genpdf::fonts::from_files(&cfg.font_dir, &cfg.font_family, None)
        .with_context(|| {
            format!(
                "loading font family {} from {}",
                cfg.font_family,
                cfg.font_dir.display()
            )
        })?;
    let mut doc = Document::new(family);
    doc.set_title(TITLE);
    doc.set_font_size(BODY_SIZE);
    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(10);
    doc.set_page_decorator(decorator);

    doc.push(
        elements::Paragraph::new(TITLE)
            .aligned(Alignment::Center)
            .styled(style::Style::new().bold().with_font_size(16)),
    );
    doc.push(elements::Break::new(1));

    section_heading(&mut doc, "Court Information");
    push_lines(&mut doc, &record.court_info);
    doc.push(elements::Break::new(1));

    if !record.case_metadata.is_empty() {
        section_heading(&mut doc, "Case Details");
        for (key, val) in &record.case_metadata {
            doc.push(elements::Paragraph::new(format!("{key}: {val}")));
        }
        doc.push(elements::Break::new(1));
    }

    if !record.parties.is_empty() {
        section_heading(&mut doc, "Parties and Advocates");
        push_lines(&mut doc, &format_parties(&record.parties));
        doc.push(elements::Break::new(1));
    }

    if !record.acts_sections.is_empty() {
        section_heading(&mut doc, "Acts and Sections");
        for (act, section) in &record.acts_sections {
            doc.push(elements::Paragraph::new(format!("{act} - {section}")));
        }
        doc.push(elements::Break::new(1));
    }

    if !record.case_status.is_empty() {
        section_heading(&mut doc, "Case Status");
        for (key, val) in &record.case_status {
            doc.push(elements::Paragraph::new(format!("{key}: {val}")));
        }
        doc.push(elements::Break::new(1));
    }

    if !record.case_history.is_empty() {
        section_heading(&mut doc, "Case History");
        doc.push(data_table(
            &record.case_history.headers,
            record.case_history.rows.iter().map(|r| r.as_slice()),
        )?);
        doc.push(elements::Break::new(1));
    }

    if !record.interim_orders.is_empty() {
        section_heading(&mut doc, "Interim Orders");
        // pdf_link is captured data, not a display column
        doc.push(data_table(
            &record.interim_orders.headers,
            record.interim_orders.rows.iter().map(|r| r.cells.as_slice()),
        )?);
    }

    Ok(doc)
}

fn section_heading(doc: &mut Document, text: &str) {
    doc.push(
        elements::Paragraph::new(text).styled(style::Style::new().bold().with_font_size(14)),
    );
}

fn push_lines(doc: &mut Document, text: &str) {
    for line in text.lines() {
        if line.is_empty() {
            doc.push(elements::Break::new(1));
        } else {
            doc.push(elements::Paragraph::new(line));
        }
    }
}

/// Equal column weights split the page width evenly across headers.
fn data_table<'a>(
    headers: &[String],
    rows: impl Iterator<Item = &'a [String]>,
) -> Result<elements::TableLayout> {
    let mut table = elements::TableLayout::new(vec![1; headers.len()]);
    table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

    let mut header_row = table.row();
    for h in headers {
        header_row.push_element(
            elements::Paragraph::new(h.clone())
                .styled(style::Style::new().bold().with_font_size(TABLE_SIZE))
                .padded(1),
        );
    }
    header_row.push().map_err(|e| anyhow!("table header row: {e}"))?;

    for cells in rows {
        let mut row = table.row();
        for cell in cells {
            row.push_element(
                elements::Paragraph::new(cell.clone())
                    .styled(style::Style::new().with_font_size(TABLE_SIZE))
                    .padded(1),
            );
        }
        row.push().map_err(|e| anyhow!("table row: {e}"))?;
    }
    Ok(table)
}
