//! Row orchestration: one CSV row in, one graph fragment out.
//!
//! The [`Converter`] normalises a row, runs the entity builders in
//! dependency order and links what they return. It holds no per-row state,
//! so one instance can be shared by any number of worker threads.

use std::io;

use tracing::trace;

use crate::anonymize::Anonymizer;
use crate::builders::{add_agent, add_listing, add_real_estate, AgentNodes};
use crate::config::ConversionOptions;
use crate::emitter::TriplesEmitter;
use crate::error::{Result, RowError};
use crate::graph::{Fragment, SafeGraph};
use crate::identity::IdentifierStrategy;
use crate::model::ontology::{foaf, pr, sioc, PREFIXES};
use crate::model::IriMinter;
use crate::row::{Field, Row};

/// Converts rows into Pronto fragments.
#[derive(Debug)]
pub struct Converter {
    options: ConversionOptions,
    ids: IdentifierStrategy,
    anonymizer: Option<Anonymizer>,
}

impl Converter {
    pub fn new(options: ConversionOptions) -> Self {
        let ids = IdentifierStrategy::new(
            IriMinter::new(&options.base_uri),
            options.fallback.clone(),
        );
        let anonymizer = options.anonymize.then(|| Anonymizer::from_options(&options));
        Self {
            options,
            ids,
            anonymizer,
        }
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    pub fn identifiers(&self) -> &IdentifierStrategy {
        &self.ids
    }

    /// Apply anonymisation when it is enabled.
    pub fn normalize(&self, row: &Row) -> Result<Row> {
        match &self.anonymizer {
            Some(anonymizer) => anonymizer.anonymize(row),
            None => Ok(row.clone()),
        }
    }

    /// Convert one row. On error nothing of the row is returned.
    pub fn convert(&self, row: &Row) -> std::result::Result<Fragment, RowError> {
        self.normalize(row)
            .and_then(|row| self.build(&row))
            .map_err(|source| RowError {
                site: row.get(Field::Site).map(str::to_string),
                listing_id: row.get(Field::ListingId).map(str::to_string),
                source,
            })
    }

    fn build(&self, row: &Row) -> Result<Fragment> {
        let mut g = SafeGraph::new();

        let listing = add_listing(&mut g, row, &self.ids)?;
        let AgentNodes { agent, account } = add_agent(&mut g, row, &self.ids);
        let real_estate = add_real_estate(&mut g, row, &self.ids)?;

        g.add(&listing, sioc::HAS_CREATOR, &account);
        g.add(&account, sioc::CREATOR_OF, &listing);
        g.add(&listing, foaf::MAKER, &agent);
        g.add(&agent, foaf::MADE, &listing);

        g.add(&listing, sioc::ABOUT, &real_estate);

        g.add(&real_estate, pr::MANAGED_BY, &agent);
        g.add(&agent, pr::MANAGES, &real_estate);

        trace!(triples = g.len(), dropped = g.dropped(), "row converted");
        Ok(g)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConversionOptions::default())
    }
}

/// Register every namespace the converter writes with `emitter`.
pub fn register_prefixes<E: TriplesEmitter + ?Sized>(emitter: &mut E) -> io::Result<()> {
    for (prefix, ns) in PREFIXES {
        emitter.add_prefix(prefix, ns)?;
    }
    Ok(())
}
