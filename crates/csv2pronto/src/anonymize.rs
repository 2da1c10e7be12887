//! Replace identifying fields of a row before it is converted.

use std::collections::BTreeMap;

use crate::config::ConversionOptions;
use crate::error::{ConvertError, Result};
use crate::row::{Field, Row};

/// Maps site names to codes, strips listing id prefixes and drops URLs.
#[derive(Debug, Clone)]
pub struct Anonymizer {
    sites: BTreeMap<String, String>,
    listing_id_prefix: String,
}

impl Anonymizer {
    /// `sites` keys are matched case-insensitively.
    pub fn new(sites: BTreeMap<String, String>, listing_id_prefix: impl Into<String>) -> Self {
        let sites = sites
            .into_iter()
            .map(|(name, code)| (name.to_lowercase(), code))
            .collect();
        Self {
            sites,
            listing_id_prefix: listing_id_prefix.into(),
        }
    }

    pub fn from_options(options: &ConversionOptions) -> Self {
        Self::new(options.sites.clone(), options.listing_id_prefix.clone())
    }

    /// Return an anonymised copy of `row`.
    ///
    /// A row without a site is passed through without a site; a site with no
    /// mapping is an error because every identifier depends on it.
    pub fn anonymize(&self, row: &Row) -> Result<Row> {
        let mut out = row.clone();

        if let Some(site) = row.get(Field::Site) {
            out.set(Field::Site, self.site(site)?);
        }
        if let Some(id) = row.get(Field::ListingId) {
            out.set(Field::ListingId, self.listing_id(id));
        }
        out.remove(Field::Url);

        Ok(out)
    }

    pub fn site(&self, site: &str) -> Result<&str> {
        self.sites
            .get(&site.to_lowercase())
            .map(String::as_str)
            .ok_or_else(|| ConvertError::UnrecognizedSite(site.to_string()))
    }

    pub fn listing_id<'a>(&self, id: &'a str) -> &'a str {
        if self.listing_id_prefix.is_empty() {
            return id;
        }
        id.strip_prefix(self.listing_id_prefix.as_str()).unwrap_or(id)
    }
}

impl Default for Anonymizer {
    fn default() -> Self {
        Self::from_options(&ConversionOptions::default())
    }
}
