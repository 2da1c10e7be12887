//! CLI integration tests.
//!
//! These tests invoke the `csv2pronto` binary via `std::process::Command`
//! against a small CSV written to a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const CSV: &str = "\
site,listing_id,title,transaction,advertiser_id,advertiser_name,price,currency,province,district,neighborhood,bath_amnt
zonaprop,ML100,Casa con jardín,Venta,9,Inmobiliaria Sur,150000,USD,Buenos Aires,La Plata,Centro,2
argenprop,200,Depto,Alquiler,10,,85000,ARS,Buenos Aires,La Plata,,1
";

const BAD_ROW: &str = "craigslist,1,Nope,Venta,1,X,1,USD,Buenos Aires,La Plata,Centro,0\n";

fn binary() -> &'static str {
    env!("CARGO_BIN_EXE_csv2pronto")
}

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(binary())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute binary")
}

fn run_ok(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        output.status.success(),
        "csv2pronto failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("invalid UTF-8")
}

fn triple_lines(out: &str) -> Vec<&str> {
    out.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#') && !l.starts_with("@prefix"))
        .collect()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn ntriples_output_is_valid() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "listings.csv", CSV);
    let stdout = run_ok(&[path_str(&input), "-q"]);

    let lines = triple_lines(&stdout);
    assert!(lines.len() > 20, "Expected more than 20 triples, got {}", lines.len());
    for line in lines {
        assert!(line.ends_with(" ."), "N-Triples line does not end with ' .': {line}");
        assert!(
            line.starts_with('<') || line.starts_with("_:"),
            "N-Triples line does not start with a node: {line}"
        );
    }
    assert!(stdout.contains("pronto.owl#listing_site3_100>"));
    assert!(stdout.contains("pronto.owl#listing_site1_200>"));
}

#[test]
fn turtle_output_has_prefixes() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "listings.csv", CSV);
    let stdout = run_ok(&[path_str(&input), "--format", "turtle", "-q"]);

    assert!(stdout.contains("@prefix rdf:"), "Turtle output should contain rdf prefix");
    assert!(stdout.contains("@prefix pr:"), "Turtle output should contain pr prefix");
    assert!(stdout.contains("pr:listing_site3_100 rdf:type pr:RealEstateListing ."));
}

#[test]
fn output_file_receives_triples() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "listings.csv", CSV);
    let output = dir.path().join("out.nt");
    let stdout = run_ok(&[path_str(&input), "-o", path_str(&output), "-q"]);

    assert!(stdout.is_empty());
    let written = fs::read_to_string(&output).unwrap();
    assert!(!triple_lines(&written).is_empty());
}

#[test]
fn base_uri_changes_output_iris() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "listings.csv", CSV);
    let stdout = run_ok(&[
        path_str(&input),
        "--base-uri",
        "http://custom.example/data#",
        "-q",
    ]);

    assert!(stdout.contains("<http://custom.example/data#listing_site3_100>"));
    // The vocabulary keeps its own namespace; only subjects move.
    let default_subject = triple_lines(&stdout).into_iter().any(|l| {
        l.starts_with("<https://raw.githubusercontent.com/fdioguardi/pronto/main/ontology/pronto.owl#")
    });
    assert!(!default_subject, "Subject IRIs should use the custom base URI");
}

#[test]
fn config_file_is_applied() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "listings.csv", CSV);
    let config = write_fixture(
        &dir,
        "csv2pronto.toml",
        "base_uri = \"http://config.example/\"\nanonymize = false\n",
    );
    let stdout = run_ok(&[path_str(&input), "-c", path_str(&config), "-q"]);
    assert!(stdout.contains("<http://config.example/listing_zonaprop_ML100>"));
}

#[test]
fn no_anonymize_keeps_site_names() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "listings.csv", CSV);
    let stdout = run_ok(&[path_str(&input), "--no-anonymize", "-q"]);
    assert!(stdout.contains("listing_argenprop_200>"));
    assert!(!stdout.contains("listing_site1_200>"));
}

const ONTOLOGY_TRIPLE: &str = "<http://example.org/Onto> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2002/07/owl#Ontology> .";

const ONTOLOGY_RDF_XML: &str = r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
         xmlns:owl="http://www.w3.org/2002/07/owl#">
  <owl:Ontology rdf:about="http://example.org/Onto"/>
  <owl:Class rdf:about="http://example.org/Casa">
    <rdfs:label xml:lang="es">Casa</rdfs:label>
  </owl:Class>
</rdf:RDF>
"#;

#[test]
fn ontology_is_written_first() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "listings.csv", CSV);
    let ontology = write_fixture(&dir, "pronto.nt", &format!("{ONTOLOGY_TRIPLE}\n"));
    let stdout = run_ok(&[path_str(&input), "--ontology", path_str(&ontology), "-q"]);

    let lines = triple_lines(&stdout);
    assert_eq!(lines[0], ONTOLOGY_TRIPLE);
    assert_eq!(lines.iter().filter(|l| **l == ONTOLOGY_TRIPLE).count(), 1);
}

#[test]
fn rdf_xml_ontology_is_reserialized() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "listings.csv", CSV);
    let ontology = write_fixture(&dir, "pronto.owl", ONTOLOGY_RDF_XML);
    let stdout = run_ok(&[path_str(&input), "--ontology", path_str(&ontology), "-q"]);

    assert!(!stdout.contains("<?xml"), "RDF/XML must not be copied verbatim");
    assert!(!stdout.contains("rdf:RDF"));
    let lines = triple_lines(&stdout);
    assert_eq!(lines[0], ONTOLOGY_TRIPLE);
    assert!(lines.contains(
        &"<http://example.org/Casa> <http://www.w3.org/2000/01/rdf-schema#label> \"Casa\"@es ."
    ));
    for line in lines {
        assert!(line.ends_with(" ."), "N-Triples line does not end with ' .': {line}");
    }
}

#[test]
fn ontology_is_reserialized_as_turtle() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "listings.csv", CSV);
    let ontology = write_fixture(&dir, "pronto.owl", ONTOLOGY_RDF_XML);
    let stdout = run_ok(&[
        path_str(&input),
        "--ontology",
        path_str(&ontology),
        "--format",
        "turtle",
        "-q",
    ]);

    assert!(stdout.starts_with("@prefix"), "got: {stdout}");
    assert!(stdout.contains(
        "<http://example.org/Onto> rdf:type <http://www.w3.org/2002/07/owl#Ontology> ."
    ));
    assert!(stdout.contains("<http://example.org/Casa> rdfs:label \"Casa\"@es ."));
}

#[test]
fn malformed_ontology_is_an_error() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "listings.csv", CSV);
    let ontology = write_fixture(&dir, "pronto.ttl", "<http://example.org/a> .\n");
    let output = run(&[path_str(&input), "--ontology", path_str(&ontology), "-q"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to merge ontology"), "got: {stderr}");
}

#[test]
fn ontology_with_unknown_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "listings.csv", CSV);
    let ontology = write_fixture(&dir, "pronto.csv", ONTOLOGY_TRIPLE);
    let output = run(&[path_str(&input), "--ontology", path_str(&ontology), "-q"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("from its extension"), "got: {stderr}");
}

#[test]
fn rejected_rows_are_skipped_by_default() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "listings.csv", &format!("{CSV}{BAD_ROW}"));
    let output = run(&[path_str(&input)]);

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("skipping record"), "got: {stderr}");
    assert!(stderr.contains("craigslist"), "got: {stderr}");
    assert!(stderr.contains("Converted 2 of 3 rows"), "got: {stderr}");
}

#[test]
fn fail_fast_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "listings.csv", &format!("{CSV}{BAD_ROW}"));
    let output = run(&[path_str(&input), "--fail-fast", "-q"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error:"), "got: {stderr}");
    assert!(stderr.contains("unrecognized site"), "got: {stderr}");
}

#[test]
fn quiet_suppresses_stderr() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "listings.csv", &format!("{CSV}{BAD_ROW}"));
    let output = run(&[path_str(&input), "-q"]);

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.is_empty(), "Quiet mode should produce no stderr output, got: {stderr}");
}

#[test]
fn unknown_format_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "listings.csv", CSV);
    let output = run(&[path_str(&input), "--format", "rdfxml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown format"));
}

#[test]
fn missing_input_reports_path() {
    let output = run(&["/nonexistent/listings.csv", "-q"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to open input file"), "got: {stderr}");
}
