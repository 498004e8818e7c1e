// src/domain/listing.rs

use super::county::County;
use std::sync::Arc;

/// One property-tax auction listing, as extracted and normalized.
///
/// Built in one go from the parsed row; there are no setters.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRecord {
    county: Arc<County>,
    account_number: Option<String>,
    adjudged_value: f64,
    minimum_bid: f64,
}

impl ListingRecord {
    pub fn new(
        county: Arc<County>,
        account_number: Option<String>,
        adjudged_value: f64,
        minimum_bid: f64,
    ) -> Self {
        Self {
            county,
            account_number: account_number.filter(|a| !a.is_empty()),
            adjudged_value,
            minimum_bid,
        }
    }

    pub fn county(&self) -> &County {
        &self.county
    }

    pub fn account_number(&self) -> Option<&str> {
        self.account_number.as_deref()
    }

    /// Assessed market value; the ranking key.
    pub fn adjudged_value(&self) -> f64 {
        self.adjudged_value
    }

    pub fn minimum_bid(&self) -> f64 {
        self.minimum_bid
    }

    pub fn detail_url(&self) -> Option<String> {
        self.account_number
            .as_deref()
            .and_then(|account| self.county.detail_url(account))
    }

    /// Both monetary amounts are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.adjudged_value, self.minimum_bid]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}
