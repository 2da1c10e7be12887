use csv2pronto::emitter::ntriples::NTriplesEmitter;
use csv2pronto::emitter::turtle::TurtleEmitter;
use csv2pronto::emitter::TriplesEmitter;
use csv2pronto::model::literal::{string, typed, LiteralKind};
use csv2pronto::model::ontology::standard;
use csv2pronto::model::{Literal, Node, Object, Triple};

const S: &str = "http://example.org/s";
const P: &str = "http://example.org/p";

fn triple(object: impl Into<Object>) -> Triple {
    Triple::new(Node::iri(S), P, object)
}

fn nt(triples: &[Triple]) -> String {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    for t in triples {
        em.emit(t).unwrap();
    }
    String::from_utf8(buf).unwrap()
}

fn ttl(prefixes: &[(&str, &str)], triples: &[Triple]) -> String {
    let mut buf = Vec::new();
    let mut em = TurtleEmitter::new(&mut buf);
    for (prefix, ns) in prefixes {
        em.add_prefix(prefix, ns).unwrap();
    }
    for t in triples {
        em.emit(t).unwrap();
    }
    String::from_utf8(buf).unwrap()
}

// ---------------------------------------------------------------------------
// NTriples tests
// ---------------------------------------------------------------------------

#[test]
fn nt_basic_iri_triple() {
    let out = nt(&[triple(Node::iri("http://example.org/o"))]);
    assert_eq!(
        out,
        "<http://example.org/s> <http://example.org/p> <http://example.org/o> .\n"
    );
}

#[test]
fn nt_string_literal_is_plain() {
    let out = nt(&[triple(string(Some("hello world")))]);
    assert_eq!(
        out,
        "<http://example.org/s> <http://example.org/p> \"hello world\" .\n"
    );
}

#[test]
fn nt_typed_literal() {
    let out = nt(&[triple(typed(LiteralKind::Integer, Some("42")).unwrap())]);
    assert_eq!(
        out,
        "<http://example.org/s> <http://example.org/p> \"42\"^^<http://www.w3.org/2001/XMLSchema#integer> .\n"
    );
}

#[test]
fn nt_bool_literal() {
    let out = nt(&[triple(typed(LiteralKind::Boolean, Some("True")).unwrap())]);
    assert!(out.contains("\"true\"^^<http://www.w3.org/2001/XMLSchema#boolean>"));
}

#[test]
fn nt_blank_nodes() {
    let out = nt(&[Triple::new(
        Node::Blank("b1".into()),
        P,
        Node::Blank("b2".into()),
    )]);
    assert_eq!(out, "_:b1 <http://example.org/p> _:b2 .\n");
}

#[test]
fn nt_escape_special_chars() {
    let out = nt(&[triple(string(Some("line1\nline2\ttab\\slash\"quote")))]);
    assert!(out.contains("\\n"));
    assert!(out.contains("\\t"));
    assert!(out.contains("\\\\"));
    assert!(out.contains("\\\""));
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn nt_escape_control_chars() {
    let out = nt(&[triple(string(Some("a\x01b")))]);
    assert!(out.contains("\\u0001"), "Expected \\u0001 in: {out}");
}

#[test]
fn nt_unicode_passthrough() {
    let out = nt(&[triple(string(Some("Año 2021, m²")))]);
    assert!(out.contains("\"Año 2021, m²\""));
}

#[test]
fn nt_rejects_null_terms() {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    let err = em.emit(&Triple::new(Node::Null, P, string(Some("x")))).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    assert!(em.emit(&triple(Node::Null)).is_err());
    assert_eq!(em.triple_count(), 0);
}

#[test]
fn nt_prefixes_are_comments() {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    em.add_prefix("ex", "http://example.org/").unwrap();
    em.emit(&triple(Node::iri("http://example.org/o"))).unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.starts_with("# @prefix ex: <http://example.org/> .\n"));
}

#[test]
fn nt_triple_count() {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    assert_eq!(em.triple_count(), 0);
    em.emit(&triple(Node::iri("http://example.org/a"))).unwrap();
    em.emit(&triple(Node::iri("http://example.org/b"))).unwrap();
    assert_eq!(em.triple_count(), 2);
}

// ---------------------------------------------------------------------------
// Turtle tests
// ---------------------------------------------------------------------------

#[test]
fn ttl_prefixes_written_sorted_before_first_triple() {
    let out = ttl(
        &[("rdf", standard::RDF), ("ex", "http://example.org/")],
        &[triple(Node::iri("http://example.org/o"))],
    );
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("@prefix ex: <http://example.org/> ."));
    assert_eq!(
        lines.next(),
        Some("@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .")
    );
    assert_eq!(lines.next(), Some(""));
    assert_eq!(lines.next(), Some("ex:s ex:p ex:o ."));
}

#[test]
fn ttl_compacts_with_longest_namespace() {
    let out = ttl(
        &[("ex", "http://example.org/"), ("deep", "http://example.org/deep/")],
        &[Triple::new(
            Node::iri("http://example.org/deep/thing"),
            P,
            Node::iri("http://example.org/o"),
        )],
    );
    assert!(out.contains("deep:thing ex:p ex:o ."), "got: {out}");
}

#[test]
fn ttl_keeps_full_iri_when_local_name_is_not_simple() {
    let out = ttl(
        &[("ex", "http://example.org/")],
        &[triple(Node::iri("http://example.org/agent_Inmobiliaria%20Sur"))],
    );
    assert!(out.contains("<http://example.org/agent_Inmobiliaria%20Sur>"));
}

#[test]
fn ttl_typed_literal_uses_prefixed_datatype() {
    let out = ttl(
        &[("xsd", standard::XSD)],
        &[triple(typed(LiteralKind::Double, Some("-34.92")).unwrap())],
    );
    assert!(out.contains("\"-34.92\"^^xsd:double"), "got: {out}");
}

#[test]
fn ttl_string_literal_is_plain() {
    let out = ttl(&[("xsd", standard::XSD)], &[triple(string(Some("Centro")))]);
    assert!(out.contains(" \"Centro\" ."));
    assert!(!out.contains("xsd:string"));
}

#[test]
fn language_tagged_literals() {
    let label = triple(Literal::with_language("Casa \"chica\"", "es"));
    assert_eq!(
        nt(std::slice::from_ref(&label)),
        format!("<{S}> <{P}> \"Casa \\\"chica\\\"\"@es .\n")
    );
    let out = ttl(&[("xsd", standard::XSD)], &[label]);
    assert!(out.contains(" \"Casa \\\"chica\\\"\"@es ."), "got: {out}");
}

#[test]
fn foreign_datatypes_are_kept() {
    let literal = Literal::with_datatype(
        "POINT(1 2)",
        "http://www.opengis.net/ont/geosparql#wktLiteral",
    );
    let out = nt(&[triple(literal)]);
    assert!(out.contains("\"POINT(1 2)\"^^<http://www.opengis.net/ont/geosparql#wktLiteral> ."));
}

#[test]
fn ttl_rejects_null_terms() {
    let mut buf = Vec::new();
    let mut em = TurtleEmitter::new(&mut buf);
    assert!(em.emit(&triple(Node::Null)).is_err());
    assert_eq!(em.triple_count(), 0);
}
