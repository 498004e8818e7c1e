use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP client setup failed: {0}")]
    Client(String),

    #[error("request for county {county_id} failed: {reason}")]
    Transport { county_id: String, reason: String },

    #[error("row {row}: no \"{label}\" cell")]
    FieldNotFound { row: usize, label: &'static str },

    #[error("row {row}: {count} cells labelled \"{label}\"")]
    DuplicateField {
        row: usize,
        label: &'static str,
        count: usize,
    },

    #[error("not a currency amount: {text:?}")]
    Normalization { text: String },
}
