// src/domain/county.rs

/// A Texas county as known to the tax-sale web service.
///
/// `id` is the service's venue identifier, not anything the appraisal
/// district uses. `url_prefix`, when present, is the appraisal district's
/// property page URL minus the trailing account number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct County {
    id: String,
    name: String,
    url_prefix: Option<String>,
}

impl County {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        url_prefix: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url_prefix: url_prefix.filter(|p| !p.is_empty()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url_prefix(&self) -> Option<&str> {
        self.url_prefix.as_deref()
    }

    /// Appraisal district page for one account, if this county publishes one.
    pub fn detail_url(&self, account_number: &str) -> Option<String> {
        if account_number.is_empty() {
            return None;
        }
        self.url_prefix
            .as_deref()
            .map(|prefix| format!("{prefix}{account_number}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prefix_is_treated_as_absent() {
        let county = County::new("2", "CountyB", Some(String::new()));
        assert_eq!(county.url_prefix(), None);
        assert_eq!(county.detail_url("123"), None);
    }

    #[test]
    fn detail_url_appends_account_number() {
        let county = County::new("1", "CountyA", Some("http://a.example/".into()));
        assert_eq!(
            county.detail_url("123").as_deref(),
            Some("http://a.example/123")
        );
        assert_eq!(county.detail_url(""), None);
    }
}
