use super::ScraperError;
use regex::Regex;
use std::sync::LazyLock;

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("invalid regex: leading number")
});

/// Parses a dollar amount such as `$1,234.50`.
///
/// Dollar signs and thousands separators are dropped, then the longest
/// leading number is taken, so `150000.00 (est.)` reads as `150000`. No
/// leading number, or one that is not finite, is a `Normalization` error;
/// callers decide whether to fall back to zero.
pub fn parse_currency(text: &str) -> Result<f64, ScraperError> {
    let cleaned: String = text.chars().filter(|c| !matches!(c, '$' | ',')).collect();

    LEADING_NUMBER
        .find(cleaned.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or_else(|| ScraperError::Normalization {
            text: text.to_string(),
        })
}
