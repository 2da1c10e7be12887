//! Conversion options and their TOML file form.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```toml
//! base_uri = "http://example.org/pronto#"
//! anonymize = true
//!
//! [sites]
//! argenprop = "site1"
//!
//! [fallback]
//! neighborhood = "anonymous"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identity::{EntityKind, FallbackPolicy};
use crate::model::ontology::pr;

/// Errors loading or validating options.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Fallback policy for each identified entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    pub listing: FallbackPolicy,
    pub site: FallbackPolicy,
    pub agent: FallbackPolicy,
    pub account: FallbackPolicy,
    pub real_estate: FallbackPolicy,
    pub space: FallbackPolicy,
    pub province: FallbackPolicy,
    pub district: FallbackPolicy,
    pub neighborhood: FallbackPolicy,
}

impl FallbackConfig {
    pub fn policy(&self, kind: EntityKind) -> FallbackPolicy {
        match kind {
            EntityKind::Listing => self.listing,
            EntityKind::Site => self.site,
            EntityKind::Agent => self.agent,
            EntityKind::Account => self.account,
            EntityKind::RealEstate => self.real_estate,
            EntityKind::Space => self.space,
            EntityKind::Province => self.province,
            EntityKind::District => self.district,
            EntityKind::Neighborhood => self.neighborhood,
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            listing: FallbackPolicy::Incremental,
            site: FallbackPolicy::Sentinel,
            agent: FallbackPolicy::Sentinel,
            account: FallbackPolicy::Sentinel,
            real_estate: FallbackPolicy::Incremental,
            space: FallbackPolicy::Incremental,
            province: FallbackPolicy::Sentinel,
            district: FallbackPolicy::Sentinel,
            neighborhood: FallbackPolicy::Sentinel,
        }
    }
}

/// Options controlling how rows are converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Namespace under which instance IRIs are minted.
    pub base_uri: String,
    /// Replace site names, strip listing id prefixes and drop URLs.
    pub anonymize: bool,
    /// Site name (lowercase) to anonymous site code.
    pub sites: BTreeMap<String, String>,
    /// Prefix removed from listing ids during anonymisation.
    pub listing_id_prefix: String,
    pub fallback: FallbackConfig,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        let sites = [
            ("argenprop", "site1"),
            ("mercadolibre", "site2"),
            ("zonaprop", "site3"),
        ]
        .into_iter()
        .map(|(name, code)| (name.to_string(), code.to_string()))
        .collect();

        Self {
            base_uri: pr::NS.to_string(),
            anonymize: true,
            sites,
            listing_id_prefix: "ML".to_string(),
            fallback: FallbackConfig::default(),
        }
    }
}

impl ConversionOptions {
    /// Load options from a TOML file; missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_uri.trim().is_empty() {
            return Err(ConfigError::Invalid("base_uri must not be empty".into()));
        }
        if self.anonymize && self.sites.is_empty() {
            return Err(ConfigError::Invalid(
                "anonymize is enabled but no sites are mapped".into(),
            ));
        }
        Ok(())
    }
}
