//! The triple sink every entity builder writes through.

use std::collections::HashSet;
use std::io;

use crate::emitter::TriplesEmitter;
use crate::model::{Node, Object, Triple};

/// Triples produced from one row.
pub type Fragment = SafeGraph;

/// A set of triples that refuses statements about unknown things.
///
/// [`add`](Self::add) silently drops a triple when its subject, predicate or
/// object is not present (the null node, a null literal, an empty string).
/// Duplicates are ignored; insertion order is kept so output is stable.
#[derive(Debug, Clone, Default)]
pub struct SafeGraph {
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
    dropped: usize,
}

impl SafeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `(subject, predicate, object)` unless any part is missing.
    /// Returns whether the triple is now in the graph.
    pub fn add(&mut self, subject: &Node, predicate: &str, object: impl Into<Object>) -> bool {
        let object = object.into();
        if !subject.is_present() || predicate.is_empty() || !object.is_present() {
            self.dropped += 1;
            return false;
        }

        let triple = Triple::new(subject.clone(), predicate, object);
        if self.seen.insert(triple.clone()) {
            self.triples.push(triple);
        }
        true
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Number of statements refused because a term was missing.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.seen.contains(triple)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Triples with the given subject and predicate.
    pub fn objects<'a>(
        &'a self,
        subject: &'a Node,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Object> + 'a {
        self.triples
            .iter()
            .filter(move |t| &t.subject == subject && t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// Subjects typed as `class` via `rdf:type`.
    pub fn instances_of<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.triples
            .iter()
            .filter(move |t| {
                t.predicate == crate::model::ontology::standard::RDF_TYPE
                    && t.object.as_node().and_then(Node::as_iri) == Some(class)
            })
            .map(|t| &t.subject)
    }

    /// Write every triple to `emitter`, in insertion order.
    pub fn emit<E: TriplesEmitter + ?Sized>(&self, emitter: &mut E) -> io::Result<()> {
        for triple in &self.triples {
            emitter.emit(triple)?;
        }
        Ok(())
    }

    pub fn into_triples(self) -> Vec<Triple> {
        self.triples
    }
}

impl<'a> IntoIterator for &'a SafeGraph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}
