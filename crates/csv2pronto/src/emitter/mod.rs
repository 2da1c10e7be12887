pub mod ntriples;
pub mod turtle;

use std::io;

use crate::model::Triple;

/// Trait for emitting RDF triples in different serialization formats.
pub trait TriplesEmitter {
    /// Emit one triple. Null terms are rejected with `InvalidInput`.
    fn emit(&mut self, triple: &Triple) -> io::Result<()>;
    /// Register a namespace prefix (used by Turtle format).
    fn add_prefix(&mut self, prefix: &str, iri: &str) -> io::Result<()>;
    /// Flush any buffered output.
    fn flush(&mut self) -> io::Result<()>;
    /// Return the number of triples emitted so far.
    fn triple_count(&self) -> u64;
}

pub(crate) fn null_term() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, "cannot serialize a null term")
}
