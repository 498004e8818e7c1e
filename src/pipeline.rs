//! The search run: every county in the registry, one after another.

use crate::domain::ListingRecord;
use crate::registry::CountyRegistry;
use crate::report::ResultAggregator;
use crate::scraper::{extract, ListingSource};
use std::time::Duration;
use tracing::{info, warn};

/// What happened during a run, plus the ordered listings.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub counties_queried: usize,
    pub counties_failed: usize,
    pub counties_with_listings: usize,
    pub records: Vec<ListingRecord>,
}

/// Queries each county in registry order and collects its ranked listings.
///
/// A county that fails to fetch is logged and skipped. Consecutive requests
/// are separated by `pause`.
pub fn run<S: ListingSource>(
    registry: &CountyRegistry,
    source: &S,
    pause: Duration,
) -> RunSummary {
    run_with_sleep(registry, source, pause, std::thread::sleep)
}

/// `run` with the sleep between requests supplied by the caller.
pub fn run_with_sleep<S, F>(
    registry: &CountyRegistry,
    source: &S,
    pause: Duration,
    mut sleep: F,
) -> RunSummary
where
    S: ListingSource,
    F: FnMut(Duration),
{
    let mut aggregator = ResultAggregator::new();
    let mut summary = RunSummary::default();

    for (i, county) in registry.iter().enumerate() {
        // Every request after the first waits, even when the previous county
        // failed or came back empty.
        if i > 0 && !pause.is_zero() {
            sleep(pause);
        }

        summary.counties_queried += 1;
        let html = match source.fetch(county) {
            Ok(html) => html,
            Err(error) => {
                summary.counties_failed += 1;
                warn!(county = county.name(), county_id = county.id(), %error, "skipping county");
                continue;
            }
        };

        let extraction = extract(&html, county);
        let found = extraction.records.len();
        let kept = aggregator.push_batch(extraction.records);

        if kept == 0 {
            info!(county = county.name(), found, "no listings");
            continue;
        }

        summary.counties_with_listings += 1;
        info!(
            county = county.name(),
            listings = kept,
            issues = extraction.diagnostics.len(),
            "collected listings"
        );
    }

    summary.records = aggregator.into_records();
    info!(
        counties = summary.counties_queried,
        failed = summary.counties_failed,
        with_listings = summary.counties_with_listings,
        listings = summary.records.len(),
        "search finished"
    );
    summary
}
