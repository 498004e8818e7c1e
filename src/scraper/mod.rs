mod currency;
mod extractor;
mod query;
mod scraper_error;

pub use currency::parse_currency;
pub use extractor::{extract, Extraction};
pub use query::{form_body, ListingQuery, ListingSource};
pub use scraper_error::ScraperError;
