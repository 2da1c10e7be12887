//! Identifier strategy: deterministic IRIs with per-kind fallbacks.
//!
//! [`IdentifierStrategy::attempt`] is a pure function of the row's qualifying
//! fields and returns a [`Resolution`]. [`IdentifierStrategy::identify`]
//! turns a [`Resolution::MissingField`] into a node according to the
//! [`FallbackPolicy`] configured for the entity kind.

mod counters;

pub use counters::CounterRegistry;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::FallbackConfig;
use crate::model::{IriMinter, Node};
use crate::row::{Field, MissingField, Row};

/// Entities whose identifier is derived from row fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Listing,
    Site,
    Agent,
    Account,
    RealEstate,
    Space,
    Province,
    District,
    Neighborhood,
}

impl EntityKind {
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Listing,
        EntityKind::Site,
        EntityKind::Agent,
        EntityKind::Account,
        EntityKind::RealEstate,
        EntityKind::Space,
        EntityKind::Province,
        EntityKind::District,
        EntityKind::Neighborhood,
    ];

    /// Lowercase name, also the prefix of incremental identifiers.
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Listing => "listing",
            EntityKind::Site => "site",
            EntityKind::Agent => "agent",
            EntityKind::Account => "account",
            EntityKind::RealEstate => "real_estate",
            EntityKind::Space => "space",
            EntityKind::Province => "province",
            EntityKind::District => "district",
            EntityKind::Neighborhood => "neighborhood",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// What to mint when a qualifying field is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// A fresh blank node, unrelated to any other.
    Anonymous,
    /// [`Node::Null`]: every triple that mentions it is dropped.
    Sentinel,
    /// `{kind}_{timestamp}_{n}` from the kind's counter.
    Incremental,
}

/// Outcome of building an identifier from row fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(Node),
    MissingField(Field),
}

impl From<Result<String, MissingField>> for Resolution {
    fn from(result: Result<String, MissingField>) -> Self {
        match result {
            Ok(iri) => Resolution::Resolved(Node::Iri(iri)),
            Err(MissingField(field)) => Resolution::MissingField(field),
        }
    }
}

/// Mints identifiers for every [`EntityKind`].
#[derive(Debug)]
pub struct IdentifierStrategy {
    minter: IriMinter,
    fallbacks: FallbackConfig,
    counters: CounterRegistry,
}

impl IdentifierStrategy {
    pub fn new(minter: IriMinter, fallbacks: FallbackConfig) -> Self {
        Self {
            minter,
            fallbacks,
            counters: CounterRegistry::new(),
        }
    }

    pub fn minter(&self) -> &IriMinter {
        &self.minter
    }

    pub fn counters(&self) -> &CounterRegistry {
        &self.counters
    }

    /// Build the deterministic IRI for `kind`, or name the missing field.
    pub fn attempt(&self, kind: EntityKind, row: &Row) -> Resolution {
        self.template(kind, row).into()
    }

    fn template(&self, kind: EntityKind, row: &Row) -> Result<String, MissingField> {
        let m = &self.minter;
        Ok(match kind {
            EntityKind::Listing => {
                m.listing_iri(row.require(Field::Site)?, row.require(Field::ListingId)?)
            }
            EntityKind::Site => m.site_iri(row.require(Field::Site)?),
            EntityKind::Agent => m.agent_iri(row.require(Field::AdvertiserName)?),
            EntityKind::Account => {
                m.account_iri(row.require(Field::Site)?, row.require(Field::AdvertiserId)?)
            }
            EntityKind::RealEstate => {
                m.real_estate_iri(row.require(Field::Site)?, row.require(Field::ListingId)?)
            }
            EntityKind::Space => {
                m.space_iri(row.require(Field::Site)?, row.require(Field::ListingId)?)
            }
            EntityKind::Province => m.province_iri(row.require(Field::Province)?),
            EntityKind::District => {
                m.district_iri(row.require(Field::Province)?, row.require(Field::District)?)
            }
            EntityKind::Neighborhood => m.neighborhood_iri(
                row.require(Field::Province)?,
                row.require(Field::District)?,
                row.require(Field::Neighborhood)?,
            ),
        })
    }

    /// Resolve `kind` for `row`, applying the configured fallback if needed.
    pub fn identify(&self, kind: EntityKind, row: &Row) -> Node {
        match self.attempt(kind, row) {
            Resolution::Resolved(node) => node,
            Resolution::MissingField(field) => {
                let policy = self.fallbacks.policy(kind);
                debug!(
                    entity = kind.name(),
                    %field,
                    ?policy,
                    "identity field missing, using fallback"
                );
                self.fallback(kind, policy)
            }
        }
    }

    pub fn fallback(&self, kind: EntityKind, policy: FallbackPolicy) -> Node {
        match policy {
            FallbackPolicy::Anonymous => Self::anonymous(),
            FallbackPolicy::Sentinel => Node::Null,
            FallbackPolicy::Incremental => {
                let n = self.counters.next(kind);
                Node::Iri(self.minter.incremental_iri(kind.name(), &timestamp(), n))
            }
        }
    }

    /// A fresh blank node.
    pub fn anonymous() -> Node {
        Node::Blank(format!("b{}", Uuid::new_v4().simple()))
    }
}

/// Current time as a run of digits (microseconds since the epoch).
fn timestamp() -> String {
    chrono::Utc::now().timestamp_micros().to_string()
}
