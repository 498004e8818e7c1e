// src/report/aggregator.rs

use crate::domain::ListingRecord;
use tracing::warn;

/// Collects ranked per-county batches for a single run.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    records: Vec<ListingRecord>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes and ranks one county's records, then appends them.
    /// Returns how many records were kept.
    pub fn push_batch(&mut self, batch: Vec<ListingRecord>) -> usize {
        let ranked = rank(normalize(batch));
        let kept = ranked.len();
        self.records.extend(ranked);
        kept
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<ListingRecord> {
        self.records
    }
}

/// Drops records whose amounts are negative or not finite.
pub fn normalize(records: Vec<ListingRecord>) -> Vec<ListingRecord> {
    records
        .into_iter()
        .filter(|r| {
            let ok = r.is_valid();
            if !ok {
                warn!(
                    county = r.county().name(),
                    account = r.account_number().unwrap_or_default(),
                    adjudged_value = r.adjudged_value(),
                    minimum_bid = r.minimum_bid(),
                    "dropping listing with invalid amounts"
                );
            }
            ok
        })
        .collect()
}

/// Highest adjudged value first. Stable, so equal values keep input order.
pub fn rank(mut records: Vec<ListingRecord>) -> Vec<ListingRecord> {
    records.sort_by(|a, b| b.adjudged_value().total_cmp(&a.adjudged_value()));
    records
}

/// Ranks each batch and concatenates them in the order given. Empty batches
/// contribute nothing.
pub fn aggregate<I>(batches: I) -> Vec<ListingRecord>
where
    I: IntoIterator<Item = Vec<ListingRecord>>,
{
    let mut aggregator = ResultAggregator::new();
    for batch in batches {
        aggregator.push_batch(batch);
    }
    aggregator.into_records()
}
