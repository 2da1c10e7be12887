//! Drive a [`Converter`] over a CSV stream and write the fragments.

use std::collections::HashMap;
use std::io::Read;

use thiserror::Error;
use tracing::{debug, warn};

use crate::converter::Converter;
use crate::emitter::TriplesEmitter;
use crate::error::RowError;
use crate::row::Row;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("failed to read CSV record {record}: {source}")]
    Csv {
        record: u64,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write triples: {0}")]
    Io(#[from] std::io::Error),

    #[error("record {record}: {source}")]
    Rejected {
        record: u64,
        #[source]
        source: RowError,
    },
}

/// What happened to each row of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: u64,
    pub converted: u64,
    pub rejected: u64,
    pub triples: u64,
}

/// How the batch reacts to a rejected row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnReject {
    /// Log the row and keep going.
    #[default]
    Skip,
    /// Stop at the first rejected row.
    Halt,
}

/// Convert every record of `input` and write the fragments to `emitter`
/// in input order. Fragments are written whole or not at all.
pub fn convert_csv<R: Read, E: TriplesEmitter + ?Sized>(
    converter: &Converter,
    input: R,
    emitter: &mut E,
    on_reject: OnReject,
) -> Result<BatchSummary, BatchError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(input);
    let mut summary = BatchSummary::default();

    for (index, record) in reader.deserialize::<HashMap<String, String>>().enumerate() {
        let record_no = index as u64 + 1;
        let row = Row::from(record.map_err(|source| BatchError::Csv {
            record: record_no,
            source,
        })?);
        summary.rows += 1;

        match converter.convert(&row) {
            Ok(fragment) => {
                fragment.emit(emitter)?;
                summary.converted += 1;
                summary.triples += fragment.len() as u64;
                debug!(record = record_no, triples = fragment.len(), "record converted");
            }
            Err(err) => {
                summary.rejected += 1;
                if on_reject == OnReject::Halt {
                    return Err(BatchError::Rejected {
                        record: record_no,
                        source: err,
                    });
                }
                warn!(
                    record = record_no,
                    site = err.site.as_deref().unwrap_or("-"),
                    listing_id = err.listing_id.as_deref().unwrap_or("-"),
                    field = err.source.field().map(|f| f.as_str()).unwrap_or("-"),
                    "skipping record: {}",
                    err.source
                );
            }
        }
    }

    Ok(summary)
}
