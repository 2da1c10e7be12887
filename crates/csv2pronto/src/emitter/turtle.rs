use std::collections::HashMap;
use std::io::{self, Write};

use super::{null_term, TriplesEmitter};
use crate::model::ontology::standard;
use crate::model::{Literal, Node, Object, Triple};

/// Turtle format emitter with prefix support.
pub struct TurtleEmitter<W: Write> {
    writer: W,
    count: u64,
    prefixes: HashMap<String, String>,
    prefix_written: bool,
}

impl<W: Write> TurtleEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            count: 0,
            prefixes: HashMap::new(),
            prefix_written: false,
        }
    }

    /// Write all registered prefixes (called before first triple).
    fn write_prefixes(&mut self) -> io::Result<()> {
        if self.prefix_written {
            return Ok(());
        }
        self.prefix_written = true;
        // Sort for deterministic output
        let mut prefixes: Vec<_> = self.prefixes.iter().collect();
        prefixes.sort_by_key(|(k, _)| (*k).clone());
        for (prefix, iri) in prefixes {
            writeln!(self.writer, "@prefix {prefix}: <{iri}> .")?;
        }
        if !self.prefixes.is_empty() {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    /// Try to compact an IRI using registered prefixes.
    fn compact_iri(&self, iri: &str) -> String {
        // Find longest matching prefix
        let mut best: Option<(&str, &str)> = None;
        for (prefix, ns) in &self.prefixes {
            if iri.starts_with(ns.as_str())
                && best.is_none_or(|(_, prev_ns)| ns.len() > prev_ns.len())
            {
                best = Some((prefix.as_str(), ns.as_str()));
            }
        }
        if let Some((prefix, ns)) = best {
            let local = &iri[ns.len()..];
            // Only compact if local name is valid (alphanumeric + _)
            if !local.is_empty() && local.chars().all(|c| c.is_alphanumeric() || c == '_') {
                return format!("{prefix}:{local}");
            }
        }
        format!("<{iri}>")
    }

    fn node(&self, node: &Node) -> io::Result<String> {
        match node {
            Node::Iri(iri) => Ok(self.compact_iri(iri)),
            Node::Blank(label) => Ok(format!("_:{label}")),
            Node::Null => Err(null_term()),
        }
    }

    fn literal(&self, literal: &Literal) -> String {
        let escaped = Self::escape_literal(literal.lexical());
        if let Some(language) = literal.language() {
            format!("\"{escaped}\"@{language}")
        } else if literal.datatype() == standard::XSD_STRING {
            format!("\"{escaped}\"")
        } else {
            format!("\"{escaped}\"^^{}", self.compact_iri(literal.datatype()))
        }
    }

    fn escape_literal(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04X}", c as u32)),
                _ => out.push(c),
            }
        }
        out
    }
}

impl<W: Write> TriplesEmitter for TurtleEmitter<W> {
    fn emit(&mut self, triple: &Triple) -> io::Result<()> {
        self.write_prefixes()?;
        let s = self.node(&triple.subject)?;
        let p = self.compact_iri(&triple.predicate);
        let o = match &triple.object {
            Object::Node(node) => self.node(node)?,
            Object::Literal(literal) => self.literal(literal),
        };
        writeln!(self.writer, "{s} {p} {o} .")?;
        self.count += 1;
        Ok(())
    }

    fn add_prefix(&mut self, prefix: &str, iri: &str) -> io::Result<()> {
        self.prefixes.insert(prefix.to_string(), iri.to_string());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn triple_count(&self) -> u64 {
        self.count
    }
}
