use crate::domain::County;
use crate::scraper::{ListingSource, ScraperError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory stand-in for the tax-sale service. Counties without a canned
/// page fail with a transport error.
#[derive(Default)]
pub struct CannedSource {
    pages: HashMap<String, String>,
    pub calls: RefCell<Vec<String>>,
}

impl CannedSource {
    pub fn with_page(mut self, county_id: &str, html: impl Into<String>) -> Self {
        self.pages.insert(county_id.to_string(), html.into());
        self
    }
}

impl ListingSource for CannedSource {
    fn fetch(&self, county: &County) -> Result<String, ScraperError> {
        self.calls.borrow_mut().push(county.id().to_string());
        self.pages
            .get(county.id())
            .cloned()
            .ok_or_else(|| ScraperError::Transport {
                county_id: county.id().to_string(),
                reason: "connection refused".into(),
            })
    }
}

/// A result page with one listing row per `(account, adjudged, bid)`.
pub fn results_page(rows: &[(&str, &str, &str)]) -> String {
    let rows: String = rows
        .iter()
        .map(|(account, adjudged, bid)| {
            format!(
                r#"<tr><td class="repTblCell"><table>
                <tr><td class="repText"><span>Account Number:</span>&nbsp;{account}</td></tr>
                <tr><td class="repText"><span>Adjudged Value:</span>&nbsp;{adjudged}</td></tr>
                <tr><td class="repText"><span>Estimated Minimum Bid:</span>&nbsp;{bid}</td></tr>
                </table></td></tr>"#
            )
        })
        .collect();
    format!("<html><body><table>{rows}</table></body></html>")
}

pub const EMPTY_PAGE: &str =
    "<html><body><p>No properties matched your search criteria.</p></body></html>";
