// query.rs
use super::ScraperError;
use crate::config::{SaleType, SearchConfig, STATE_CODE};
use crate::domain::County;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Where the driver gets a county's result page from.
pub trait ListingSource {
    fn fetch(&self, county: &County) -> Result<String, ScraperError>;
}

/// Blocking search against the tax-sale results page. One POST per county,
/// no retries and no caching.
pub struct ListingQuery {
    client: Client,
    endpoint: String,
    sale_type: SaleType,
    min_adjudged_value: u64,
}

impl ListingQuery {
    pub fn new(config: &SearchConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ScraperError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            sale_type: config.sale_type,
            min_adjudged_value: config.min_adjudged_value,
        })
    }

    pub fn fetch(&self, county_id: &str) -> Result<String, ScraperError> {
        let transport = |reason: String| ScraperError::Transport {
            county_id: county_id.to_string(),
            reason,
        };

        let body = form_body(county_id, self.sale_type, self.min_adjudged_value);
        debug!(county_id, endpoint = %self.endpoint, %body, "posting listing search");

        let resp = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .map_err(|e| transport(e.to_string()))?;

        let status = resp.status();
        let text = resp.text().map_err(|e| transport(e.to_string()))?;

        if !status.is_success() {
            return Err(transport(format!("HTTP {status}")));
        }
        if text.trim().is_empty() {
            return Err(transport("empty response body".into()));
        }

        Ok(text)
    }
}

impl ListingSource for ListingQuery {
    fn fetch(&self, county: &County) -> Result<String, ScraperError> {
        ListingQuery::fetch(self, county.id())
    }
}

/// Form fields for one county search, `application/x-www-form-urlencoded`.
pub fn form_body(county_id: &str, sale_type: SaleType, min_adjudged_value: u64) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("pi_state", STATE_CODE)
        .append_pair("pi_sale_type", sale_type.code())
        .append_pair("pi_venue_group_id", county_id)
        .append_pair("pi_adjudged_from", &min_adjudged_value.to_string())
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_body_has_fixed_field_order_and_defaults() {
        let body = form_body("57", SaleType::default(), 90_000);
        assert_eq!(
            body,
            "pi_state=TX&pi_sale_type=SA&pi_venue_group_id=57&pi_adjudged_from=90000"
        );
    }

    #[test]
    fn form_body_struck_off_and_custom_threshold() {
        let body = form_body("220", SaleType::StruckOff, 250_000);
        assert!(body.contains("pi_sale_type=SO"));
        assert!(body.contains("pi_adjudged_from=250000"));
    }

    #[test]
    fn form_body_encodes_county_id() {
        let body = form_body("a b&c", SaleType::Sale, 1);
        assert!(body.contains("pi_venue_group_id=a+b%26c"));
    }

    #[test]
    fn unreachable_endpoint_is_a_transport_error() {
        // Grab a free loopback port, then release it so nothing is listening.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .and_then(|l| l.local_addr())
            .unwrap()
            .port();
        let config = SearchConfig {
            endpoint: format!("http://127.0.0.1:{port}/results_page"),
            timeout: std::time::Duration::from_secs(2),
            ..SearchConfig::default()
        };
        let query = ListingQuery::new(&config).unwrap();

        let err = query.fetch("57").unwrap_err();
        assert!(matches!(err, ScraperError::Transport { ref county_id, .. } if county_id == "57"));
    }
}
