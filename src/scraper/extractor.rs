// extractor.rs
use super::{parse_currency, ScraperError};
use crate::domain::{County, ListingRecord};
use ::scraper::{ElementRef, Html, Selector};
use std::sync::{Arc, LazyLock};
use tracing::debug;

// Result page layout, one listing:
//
// td.repTblCell                      <- row marker
//  └── table
//       ├── td.repText
//       │    ├── span "Account Number"
//       │    └── "12345"
//       ├── td.repText
//       │    ├── span "Adjudged Value"
//       │    └── "$150,000.00"
//       └── td.repText
//            ├── span "Estimated Minimum Bid"
//            └── "$9,876.54"

static ROW_MARKER: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"td[class="repTblCell"]"#).expect("invalid selector: row marker")
});

static LABEL_SPAN: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"td[class="repText"] > span"#).expect("invalid selector: label span")
});

const ACCOUNT_NUMBER: &str = "Account Number";
const ADJUDGED_VALUE: &str = "Adjudged Value";
const MINIMUM_BID: &str = "Estimated Minimum Bid";

/// Listings found in one result page, plus everything that went wrong on
/// the way. Diagnostics never stop a row from being emitted.
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<ListingRecord>,
    pub diagnostics: Vec<ScraperError>,
}

/// Turns one county's result page into listing records, in document order.
///
/// Every row marker yields a record, complete or not. Field lookups are
/// scoped to the row's own subtree.
pub fn extract(html: &str, county: &Arc<County>) -> Extraction {
    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        debug!(
            county = county.name(),
            parse_errors = document.errors.len(),
            "lenient HTML parse reported errors"
        );
    }

    let mut out = Extraction::default();
    for (idx, row) in document.select(&ROW_MARKER).enumerate() {
        let record = extract_row(row, idx + 1, county, &mut out.diagnostics);
        out.records.push(record);
    }

    for diagnostic in &out.diagnostics {
        debug!(county = county.name(), %diagnostic, "extraction issue");
    }
    out
}

fn extract_row(
    row: ElementRef<'_>,
    row_no: usize,
    county: &Arc<County>,
    diagnostics: &mut Vec<ScraperError>,
) -> ListingRecord {
    let account_number = field_text(row, row_no, ACCOUNT_NUMBER, diagnostics);
    let adjudged_value = field_amount(row, row_no, ADJUDGED_VALUE, diagnostics);
    let minimum_bid = field_amount(row, row_no, MINIMUM_BID, diagnostics);

    ListingRecord::new(county.clone(), account_number, adjudged_value, minimum_bid)
}

/// Monetary field; unset or unparseable amounts come out as zero.
fn field_amount(
    row: ElementRef<'_>,
    row_no: usize,
    label: &'static str,
    diagnostics: &mut Vec<ScraperError>,
) -> f64 {
    let Some(text) = field_text(row, row_no, label, diagnostics) else {
        return 0.0;
    };
    match parse_currency(&text) {
        Ok(value) => value,
        Err(e) => {
            diagnostics.push(e);
            0.0
        }
    }
}

fn field_text(
    row: ElementRef<'_>,
    row_no: usize,
    label: &'static str,
    diagnostics: &mut Vec<ScraperError>,
) -> Option<String> {
    let mut cells: Vec<ElementRef<'_>> = Vec::new();
    for span in row.select(&LABEL_SPAN) {
        if !span.text().collect::<String>().contains(label) {
            continue;
        }
        let Some(cell) = span.parent().and_then(ElementRef::wrap) else {
            continue;
        };
        // Two labelled spans in one cell still count as one cell.
        if !cells.iter().any(|c| c.id() == cell.id()) {
            cells.push(cell);
        }
    }

    match cells.as_slice() {
        [cell] => Some(cell_text(*cell)),
        [] => {
            diagnostics.push(ScraperError::FieldNotFound { row: row_no, label });
            None
        }
        many => {
            diagnostics.push(ScraperError::DuplicateField {
                row: row_no,
                label,
                count: many.len(),
            });
            None
        }
    }
}

/// The cell's own text, without the label span.
fn cell_text(cell: ElementRef<'_>) -> String {
    let text: String = cell
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|t| &**t)
        .collect();
    text.replace('\u{a0}', " ").trim().to_string()
}
