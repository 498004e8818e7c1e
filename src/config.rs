// config.rs
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str =
    "http://actweb.acttax.com/pls/sales/property_taxsales_pkg.results_page";
pub const DEFAULT_REGISTRY_PATH: &str = "counties/searchable_counties";
pub const DEFAULT_MIN_ADJUDGED_VALUE: u64 = 90_000;
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(1);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Only Texas counties are searched.
pub const STATE_CODE: &str = "TX";

/// Sale category filter understood by the tax-sale service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SaleType {
    /// Regular upcoming sale.
    #[default]
    #[value(name = "sa")]
    Sale,
    /// Struck-off property held by a taxing entity after a failed sale.
    #[value(name = "so")]
    StruckOff,
}

impl SaleType {
    pub fn code(self) -> &'static str {
        match self {
            SaleType::Sale => "SA",
            SaleType::StruckOff => "SO",
        }
    }
}

/// Settings for one search run.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub registry_path: PathBuf,
    pub endpoint: String,
    pub sale_type: SaleType,
    pub min_adjudged_value: u64,
    /// Sleep between consecutive county requests.
    pub pause: Duration,
    pub timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            registry_path: PathBuf::from(DEFAULT_REGISTRY_PATH),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            sale_type: SaleType::default(),
            min_adjudged_value: DEFAULT_MIN_ADJUDGED_VALUE,
            pause: DEFAULT_PAUSE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
