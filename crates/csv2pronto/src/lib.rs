//! Convert real-estate listing CSV rows into RDF following the Pronto ontology.
//!
//! Each row becomes a self-contained [`Fragment`](graph::Fragment) built by
//! [`Converter::convert`](converter::Converter::convert). Identifiers are pure
//! functions of the row, so fragments from different rows (or threads) merge
//! by IRI without coordination.

pub mod anonymize;
pub mod batch;
pub mod builders;
pub mod config;
pub mod converter;
pub mod emitter;
pub mod error;
pub mod features;
pub mod graph;
pub mod identity;
pub mod import;
pub mod model;
pub mod row;

pub use config::ConversionOptions;
pub use converter::Converter;
pub use error::{ConvertError, RowError};
pub use graph::{Fragment, SafeGraph};
pub use row::{Field, Row};
