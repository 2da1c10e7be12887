//! RDF terms produced by the converter.
//!
//! Absence of knowledge is an explicit variant ([`Node::Null`], a literal
//! without a lexical form) rather than a value that merely looks empty.
//! [`SafeGraph`](crate::graph::SafeGraph) checks [`is_present`](Node::is_present)
//! before accepting a triple.

use std::borrow::Cow;
use std::fmt;

use super::ontology::standard;

/// A resource in subject or object position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// An absolute IRI.
    Iri(String),
    /// A blank node label, unique for the whole run.
    Blank(String),
    /// The "unknown" sentinel; triples mentioning it are never written.
    Null,
}

impl Node {
    pub fn iri(value: impl Into<String>) -> Self {
        Node::Iri(value.into())
    }

    pub fn is_present(&self) -> bool {
        match self {
            Node::Iri(iri) => !iri.is_empty(),
            Node::Blank(label) => !label.is_empty(),
            Node::Null => false,
        }
    }

    /// The IRI string, if this node is one.
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => write!(f, "<{iri}>"),
            Node::Blank(label) => write!(f, "_:{label}"),
            Node::Null => f.write_str("(null)"),
        }
    }
}

/// A typed literal. `lexical == None` is the null literal.
///
/// Literals minted from row values carry one of the static XSD datatypes;
/// literals read from an ontology file may carry any datatype and a
/// language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    lexical: Option<String>,
    datatype: Cow<'static, str>,
    language: Option<String>,
}

impl Literal {
    pub(crate) fn new(lexical: String, datatype: &'static str) -> Self {
        Self {
            lexical: Some(lexical),
            datatype: Cow::Borrowed(datatype),
            language: None,
        }
    }

    pub(crate) fn null(datatype: &'static str) -> Self {
        Self {
            lexical: None,
            datatype: Cow::Borrowed(datatype),
            language: None,
        }
    }

    /// A literal with an arbitrary datatype IRI.
    pub fn with_datatype(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            lexical: Some(lexical.into()),
            datatype: Cow::Owned(datatype.into()),
            language: None,
        }
    }

    /// An `rdf:langString` literal.
    pub fn with_language(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: Some(lexical.into()),
            datatype: Cow::Borrowed(standard::RDF_LANG_STRING),
            language: Some(language.into()),
        }
    }

    pub fn is_present(&self) -> bool {
        self.lexical.as_deref().is_some_and(|l| !l.is_empty())
    }

    /// Lexical form; empty for the null literal.
    pub fn lexical(&self) -> &str {
        self.lexical.as_deref().unwrap_or("")
    }

    pub fn datatype(&self) -> &str {
        &self.datatype
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

/// Object position: a resource or a literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Object {
    Node(Node),
    Literal(Literal),
}

impl Object {
    pub fn is_present(&self) -> bool {
        match self {
            Object::Node(node) => node.is_present(),
            Object::Literal(literal) => literal.is_present(),
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Object::Node(node) => Some(node),
            Object::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Object::Literal(literal) => Some(literal),
            Object::Node(_) => None,
        }
    }
}

impl From<Node> for Object {
    fn from(node: Node) -> Self {
        Object::Node(node)
    }
}

impl From<&Node> for Object {
    fn from(node: &Node) -> Self {
        Object::Node(node.clone())
    }
}

impl From<Literal> for Object {
    fn from(literal: Literal) -> Self {
        Object::Literal(literal)
    }
}

/// Vocabulary IRIs (`&'static str`) in object position, e.g. `rdf:type` targets.
impl From<&'static str> for Object {
    fn from(iri: &'static str) -> Self {
        Object::Node(Node::Iri(iri.to_string()))
    }
}

/// A single `(subject, predicate, object)` statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: Node,
    pub predicate: String,
    pub object: Object,
}

impl Triple {
    pub fn new(subject: Node, predicate: impl Into<String>, object: impl Into<Object>) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}
