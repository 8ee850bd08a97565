use scraper::{ElementRef, Html, Selector};

use super::strategy::{self, first_match};
use super::types::{OrderRow, OrderTable, Table};

/// Case history: business on each hearing date.
pub fn case_history(doc: &Html) -> Table {
    first_match(
        doc,
        &[
            &|d: &Html| strategy::select_first(d, "table.case-history"),
            &|d: &Html| {
                strategy::heading_containing(d, "Case History")
                    .and_then(|h| strategy::next_sibling_named(h, "table"))
            },
        ],
    )
    .map(read_table)
    .unwrap_or_default()
}

/// Interim orders, each row carrying the target of its first hyperlink.
pub fn interim_orders(doc: &Html) -> OrderTable {
    let table = first_match(
        doc,
        &[
            &|d: &Html| strategy::select_first(d, "table.interim-orders"),
            &|d: &Html| {
                strategy::heading_containing(d, "Interim Orders")
                    .and_then(|h| strategy::next_sibling_named(h, "table"))
            },
        ],
    );
    let Some(table) = table else {
        return OrderTable::default();
    };

    let headers = header_texts(table);
    if headers.is_empty() {
        return OrderTable::default();
    }
    let Ok(link_sel) = Selector::parse("a") else {
        return OrderTable::default();
    };

    let mut rows = Vec::new();
    for row in strategy::rows(table).into_iter().skip(1) {
        let cells = strategy::cells(row);
        if cells.len() != headers.len() {
            continue;
        }
        let pdf_link = row
            .select(&link_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string);
        rows.push(OrderRow { cells, pdf_link });
    }
    OrderTable { headers, rows }
}

/// One record per body row whose cell count matches the header exactly;
/// anything else is dropped, not padded or truncated.
fn read_table(table: ElementRef<'_>) -> Table {
    let headers = header_texts(table);
    if headers.is_empty() {
        return Table::default();
    }
    let mut rows = Vec::new();
    for row in strategy::rows(table).into_iter().skip(1) {
        let cells = strategy::cells(row);
        if cells.len() == headers.len() {
            rows.push(cells);
        }
    }
    Table { headers, rows }
}

fn header_texts(table: ElementRef<'_>) -> Vec<String> {
    let Ok(sel) = Selector::parse("th") else { return Vec::new() };
    table.select(&sel).map(strategy::cell_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HISTORY_PAGE: &str = "<h3>Case History</h3><table>\
        <tr><th>Judge</th><th>Business Date</th><th>Purpose</th></tr>\
        <tr><td>Shri A. B. Patil</td><td>02-02-2021</td><td>Hearing</td></tr>\
        <tr><td>short</td><td>row</td></tr>\
        <tr><td>Shri A. B. Patil</td><td>17-03-2021</td><td>Arguments</td></tr>\
        </table>";

    #[test]
    fn history_zips_headers_and_drops_mismatched_rows() {
        let doc = Html::parse_document(HISTORY_PAGE);
        let history = case_history(&doc);
        assert_eq!(history.headers, vec!["Judge", "Business Date", "Purpose"]);
        assert_eq!(history.rows.len(), 2);
        assert_eq!(history.rows[0], vec!["Shri A. B. Patil", "02-02-2021", "Hearing"]);
        assert_eq!(history.rows[1][2], "Arguments");
    }

    #[test]
    fn history_empty_without_table_or_headers() {
        assert!(case_history(&Html::parse_document("<p>none</p>")).is_empty());
        let headerless = Html::parse_document(
            "<table class=\"case-history\"><tr><td>a</td><td>b</td></tr></table>",
        );
        assert!(case_history(&headerless).is_empty());
    }

    #[test]
    fn orders_capture_first_link_or_explicit_none() {
        let doc = Html::parse_document(
            "<h3>Interim Orders</h3><table>\
             <tr><th>Order Date</th><th>Order</th></tr>\
             <tr><td>03-03-2021</td><td><a href=\"http://court/order1.pdf\">View</a></td></tr>\
             <tr><td>04-04-2021</td><td>Sealed</td></tr>\
             </table>",
        );
        let orders = interim_orders(&doc);
        assert_eq!(orders.headers, vec!["Order Date", "Order"]);
        assert_eq!(orders.rows.len(), 2);
        assert_eq!(orders.rows[0].pdf_link.as_deref(), Some("http://court/order1.pdf"));
        assert_eq!(orders.rows[0].cells, vec!["03-03-2021", "View"]);
        assert_eq!(orders.rows[1].pdf_link, None);
    }

    #[test]
    fn orders_drop_rows_with_wrong_cell_count() {
        let doc = Html::parse_document(
            "<table class=\"interim-orders\">\
             <tr><th>Order Date</th><th>Order</th></tr>\
             <tr><td>only-one</td></tr>\
             </table>",
        );
        assert!(interim_orders(&doc).is_empty());
    }
}
