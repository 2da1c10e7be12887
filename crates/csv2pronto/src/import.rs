//! Merging an existing RDF document (usually the Pronto ontology) into the
//! output stream.
//!
//! The document is parsed with `oxrdfio` in whatever syntax its file
//! extension names and re-serialized through the selected
//! [`TriplesEmitter`], so an RDF/XML `.owl` file can lead an N-Triples or
//! Turtle dump. Quads from named graphs are flattened into the default graph.
//! Blank node labels are renamed so they never collide with the ones the
//! converter mints.

use std::io::{self, Read};
use std::path::Path;

use oxrdf::{Subject, Term};
use oxrdfio::{RdfFormat, RdfParseError, RdfParser};
use thiserror::Error;
use tracing::debug;

use crate::emitter::TriplesEmitter;
use crate::model::{Literal, Node, Object, Triple};

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("cannot tell the RDF syntax of {0} from its extension")]
    UnknownFormat(String),

    #[error("invalid RDF document: {0}")]
    Parse(#[from] RdfParseError),

    #[error("unsupported term {0}")]
    UnsupportedTerm(String),

    #[error("failed to write imported triple: {0}")]
    Io(#[from] io::Error),
}

/// Guess the syntax of an RDF file from its extension.
///
/// `.owl` is read as RDF/XML; everything else follows `oxrdfio`
/// (`.ttl`, `.nt`, `.nq`, `.trig`, `.n3`, `.rdf`, `.xml`).
pub fn format_from_path(path: &Path) -> Result<RdfFormat, ImportError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    if extension.eq_ignore_ascii_case("owl") {
        return Ok(RdfFormat::RdfXml);
    }
    RdfFormat::from_extension(extension)
        .ok_or_else(|| ImportError::UnknownFormat(path.display().to_string()))
}

/// Parse `reader` as `format` and write every statement to `emitter`.
///
/// Returns the number of triples written.
pub fn import_rdf<R: Read, E: TriplesEmitter + ?Sized>(
    reader: R,
    format: RdfFormat,
    emitter: &mut E,
) -> Result<u64, ImportError> {
    let mut written = 0;
    for quad in RdfParser::from_format(format)
        .rename_blank_nodes()
        .for_reader(reader)
    {
        let quad = quad?;
        let triple = Triple::new(
            subject(quad.subject)?,
            quad.predicate.into_string(),
            object(quad.object)?,
        );
        emitter.emit(&triple)?;
        written += 1;
    }
    debug!(triples = written, format = format.name(), "imported RDF document");
    Ok(written)
}

fn subject(subject: Subject) -> Result<Node, ImportError> {
    match subject {
        Subject::NamedNode(node) => Ok(Node::Iri(node.into_string())),
        Subject::BlankNode(node) => Ok(Node::Blank(node.as_str().to_owned())),
        #[allow(unreachable_patterns)]
        other => Err(ImportError::UnsupportedTerm(other.to_string())),
    }
}

fn object(term: Term) -> Result<Object, ImportError> {
    match term {
        Term::NamedNode(node) => Ok(Object::Node(Node::Iri(node.into_string()))),
        Term::BlankNode(node) => Ok(Object::Node(Node::Blank(node.as_str().to_owned()))),
        Term::Literal(literal) => Ok(Object::Literal(match literal.language() {
            Some(language) => Literal::with_language(literal.value(), language),
            None => Literal::with_datatype(literal.value(), literal.datatype().as_str()),
        })),
        #[allow(unreachable_patterns)]
        other => Err(ImportError::UnsupportedTerm(other.to_string())),
    }
}
