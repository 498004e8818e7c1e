use crate::domain::ListingRecord;
use std::io::{self, Write};

/// `county,account,adjudged,bid,url` per listing. No header and no quoting;
/// county names are assumed to be comma-free.
pub fn render(records: &[ListingRecord]) -> Vec<String> {
    records.iter().map(render_line).collect()
}

fn render_line(record: &ListingRecord) -> String {
    format!(
        "{},{},{:.2},{:.2},{}",
        record.county().name(),
        record.account_number().unwrap_or_default(),
        record.adjudged_value(),
        record.minimum_bid(),
        record.detail_url().unwrap_or_default(),
    )
}

pub fn write_report<W: Write>(records: &[ListingRecord], mut out: W) -> io::Result<()> {
    for line in render(records) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
