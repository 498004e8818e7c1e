pub mod config;
pub mod deadline;
pub mod domain;
pub mod errors;
pub mod logger;
pub mod pipeline;
pub mod registry;
pub mod report;
pub mod scraper;

pub use config::{SaleType, SearchConfig};
pub use domain::{County, ListingRecord};
pub use errors::ConfigError;
pub use registry::CountyRegistry;
pub use scraper::{ListingQuery, ListingSource, ScraperError};

#[cfg(test)]
mod tests;
