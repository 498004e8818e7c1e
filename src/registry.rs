//! County registry: the counties a run will search, loaded from a small CSV
//! file of `name,id,url_prefix` rows with no header.

use crate::domain::County;
use crate::errors::ConfigError;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Counties keyed by service id, iterated in file order.
#[derive(Debug, Default)]
pub struct CountyRegistry {
    counties: Vec<Arc<County>>,
    index: HashMap<String, usize>,
}

impl CountyRegistry {
    /// Reads the whole registry file up front.
    ///
    /// Only an unreadable file is an error. Bad rows are logged and skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ConfigError::Configuration {
            path: path.to_path_buf(),
            source,
        })?;

        let registry = Self::from_reader(bytes.as_slice());
        info!(path = %path.display(), counties = registry.len(), "loaded county registry");
        Ok(registry)
    }

    pub fn from_reader<R: Read>(reader: R) -> Self {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut registry = Self::default();
        for (idx, result) in rdr.records().enumerate() {
            let fallback_line = idx as u64 + 1;
            match result
                .map_err(|e| ConfigError::MalformedRow {
                    line: e.position().map_or(fallback_line, |p| p.line()),
                    reason: e.to_string(),
                })
                .and_then(|row| parse_row(&row, fallback_line))
            {
                Ok(county) => registry.insert(county),
                Err(error) => warn!(%error, "skipping county registry row"),
            }
        }
        registry
    }

    /// Last write wins; a replaced county keeps its original position.
    fn insert(&mut self, county: County) {
        let county = Arc::new(county);
        match self.index.get(county.id()) {
            Some(&pos) => self.counties[pos] = county,
            None => {
                self.index.insert(county.id().to_string(), self.counties.len());
                self.counties.push(county);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Arc<County>> {
        self.index.get(id).map(|&pos| &self.counties[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<County>> {
        self.counties.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.counties.iter().map(|c| c.id())
    }

    pub fn len(&self) -> usize {
        self.counties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counties.is_empty()
    }
}

fn parse_row(row: &csv::StringRecord, fallback_line: u64) -> Result<County, ConfigError> {
    let line = row.position().map_or(fallback_line, |p| p.line());
    let name = row.get(0).unwrap_or_default();
    let id = row
        .get(1)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ConfigError::MalformedRow {
            line,
            reason: format!("county {name:?} has no id"),
        })?;
    let url_prefix = row.get(2).map(str::to_string);

    Ok(County::new(id, name, url_prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_rows_with_and_without_prefix() {
        let data = "Dallas,57,https://www.dallascad.org/AcctDetailRes.aspx?ID=\nCollin,43\n";
        let registry = CountyRegistry::from_reader(data.as_bytes());

        assert_eq!(registry.len(), 2);
        let dallas = registry.get("57").unwrap();
        assert_eq!(dallas.name(), "Dallas");
        assert_eq!(
            dallas.url_prefix(),
            Some("https://www.dallascad.org/AcctDetailRes.aspx?ID=")
        );
        assert_eq!(registry.get("43").unwrap().url_prefix(), None);
    }

    #[test]
    fn rows_without_id_are_skipped_not_fatal() {
        let data = "Good,1\nNoId\nBlankId, ,http://x/\nAlsoGood,2,http://y/\n";
        let registry = CountyRegistry::from_reader(data.as_bytes());

        let ids: Vec<&str> = registry.ids().collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn duplicate_id_last_write_wins_in_first_position() {
        let data = "First,1\nOther,2\nSecond,1,http://second/\n";
        let registry = CountyRegistry::from_reader(data.as_bytes());

        assert_eq!(registry.len(), 2);
        let names: Vec<&str> = registry.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Second", "Other"]);
        assert_eq!(registry.get("1").unwrap().url_prefix(), Some("http://second/"));
    }

    #[test]
    fn trims_fields_and_ignores_blank_lines() {
        let data = "  Tarrant , 220 , http://t/ \n\n";
        let registry = CountyRegistry::from_reader(data.as_bytes());

        let tarrant = registry.get("220").unwrap();
        assert_eq!(tarrant.name(), "Tarrant");
        assert_eq!(tarrant.url_prefix(), Some("http://t/"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let path = std::env::temp_dir().join("taxsale_search_no_such_registry.csv");
        let err = CountyRegistry::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Configuration { .. }));
    }
}
