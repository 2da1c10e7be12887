use std::io::{self, Write};

use super::{null_term, TriplesEmitter};
use crate::model::ontology::standard;
use crate::model::{Literal, Node, Object, Triple};

/// N-Triples format emitter. Streams triples as `<s> <p> <o> .` lines.
pub struct NTriplesEmitter<W: Write> {
    writer: W,
    count: u64,
}

impl<W: Write> NTriplesEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, count: 0 }
    }

    /// Escape a string for N-Triples literal (per RDF 1.1 N-Triples spec).
    fn escape_literal(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if (c as u32) < 0x20 => {
                    // Control chars: \uXXXX
                    out.push_str(&format!("\\u{:04X}", c as u32));
                }
                _ => out.push(c),
            }
        }
        out
    }

    fn node(node: &Node) -> io::Result<String> {
        match node {
            Node::Iri(iri) => Ok(format!("<{iri}>")),
            Node::Blank(label) => Ok(format!("_:{label}")),
            Node::Null => Err(null_term()),
        }
    }

    fn literal(literal: &Literal) -> String {
        let escaped = Self::escape_literal(literal.lexical());
        if let Some(language) = literal.language() {
            format!("\"{escaped}\"@{language}")
        } else if literal.datatype() == standard::XSD_STRING {
            format!("\"{escaped}\"")
        } else {
            format!("\"{escaped}\"^^<{}>", literal.datatype())
        }
    }
}

impl<W: Write> TriplesEmitter for NTriplesEmitter<W> {
    fn emit(&mut self, triple: &Triple) -> io::Result<()> {
        let s = Self::node(&triple.subject)?;
        let o = match &triple.object {
            Object::Node(node) => Self::node(node)?,
            Object::Literal(literal) => Self::literal(literal),
        };
        writeln!(self.writer, "{s} <{}> {o} .", triple.predicate)?;
        self.count += 1;
        Ok(())
    }

    fn add_prefix(&mut self, prefix: &str, iri: &str) -> io::Result<()> {
        // N-Triples doesn't use prefixes, but emit as comment for readability
        writeln!(self.writer, "# @prefix {prefix}: <{iri}> .")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn triple_count(&self) -> u64 {
        self.count
    }
}
