use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use csv2pronto::batch::{convert_csv, BatchSummary, OnReject};
use csv2pronto::converter::register_prefixes;
use csv2pronto::emitter::ntriples::NTriplesEmitter;
use csv2pronto::emitter::turtle::TurtleEmitter;
use csv2pronto::emitter::TriplesEmitter;
use csv2pronto::import::{format_from_path, import_rdf};
use csv2pronto::{ConversionOptions, Converter};

/// Convert a CSV file of real-estate listings to RDF following the Pronto ontology.
#[derive(Parser)]
#[command(name = "csv2pronto", version, about)]
struct Cli {
    /// CSV file to convert.
    input: PathBuf,

    /// Output file path [default: stdout].
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format: ntriples, turtle.
    #[arg(short, long, value_name = "FORMAT", default_value = "ntriples")]
    format: String,

    /// RDF file (e.g. the Pronto ontology) whose triples are written ahead of
    /// the generated ones. Its syntax is guessed from the extension.
    #[arg(long, value_name = "FILE")]
    ontology: Option<PathBuf>,

    /// Namespace for minted IRIs (overrides the config file).
    #[arg(short, long, value_name = "URI")]
    base_uri: Option<String>,

    /// TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Keep site names, listing ids and URLs as they are.
    #[arg(long)]
    no_anonymize: bool,

    /// Stop at the first rejected row instead of skipping it.
    #[arg(long)]
    fail_fast: bool,

    /// Verbose output.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Quiet output.
    #[arg(short, long)]
    quiet: bool,

    /// Log format: text, json.
    #[arg(long, default_value = "text")]
    log_format: String,
}

#[derive(Clone, Copy)]
enum Format {
    NTriples,
    Turtle,
}

impl Format {
    fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "ntriples" | "nt" => Ok(Format::NTriples),
            "turtle" | "ttl" => Ok(Format::Turtle),
            other => bail!("Unknown format: {other}. Use 'ntriples' or 'turtle'."),
        }
    }
}

fn load_options(cli: &Cli) -> Result<ConversionOptions> {
    let mut options = match &cli.config {
        Some(path) => ConversionOptions::from_file(path)?,
        None => ConversionOptions::default(),
    };
    if let Some(base_uri) = &cli.base_uri {
        options.base_uri = base_uri.clone();
    }
    if cli.no_anonymize {
        options.anonymize = false;
    }
    options.validate()?;
    Ok(options)
}

fn write_all<E: TriplesEmitter>(
    mut emitter: E,
    converter: &Converter,
    input: File,
    ontology: Option<&Path>,
    on_reject: OnReject,
) -> Result<BatchSummary> {
    register_prefixes(&mut emitter)?;
    if let Some(path) = ontology {
        let format = format_from_path(path)?;
        let file = File::open(path)
            .with_context(|| format!("Failed to open ontology file: {}", path.display()))?;
        let triples = import_rdf(BufReader::new(file), format, &mut emitter)
            .with_context(|| format!("Failed to merge ontology: {}", path.display()))?;
        info!(ontology = %path.display(), triples, "merged ontology");
    }
    let summary = convert_csv(converter, input, &mut emitter, on_reject)?;
    emitter.flush()?;
    Ok(summary)
}

fn run(cli: Cli) -> Result<()> {
    let format = Format::parse(&cli.format)?;
    let options = load_options(&cli)?;

    info!(input = %cli.input.display(), "loading input");
    let input = File::open(&cli.input)
        .with_context(|| format!("Failed to open input file: {}", cli.input.display()))?;

    // Determine output writer
    let output_writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let on_reject = if cli.fail_fast {
        OnReject::Halt
    } else {
        OnReject::Skip
    };
    let converter = Converter::new(options);

    let summary = match format {
        Format::NTriples => write_all(
            NTriplesEmitter::new(output_writer),
            &converter,
            input,
            cli.ontology.as_deref(),
            on_reject,
        )?,
        Format::Turtle => write_all(
            TurtleEmitter::new(output_writer),
            &converter,
            input,
            cli.ontology.as_deref(),
            on_reject,
        )?,
    };

    info!(
        rows = summary.rows,
        converted = summary.converted,
        rejected = summary.rejected,
        triples = summary.triples,
        "Converted {} of {} rows into {} triples",
        summary.converted,
        summary.rows,
        summary.triples
    );

    Ok(())
}

fn setup_tracing(format: &str, verbose: bool, quiet: bool) {
    let default = if verbose {
        "csv2pronto=debug,info"
    } else if quiet {
        "error"
    } else {
        "csv2pronto=info,warn"
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(io::stderr().is_terminal())
                        .with_writer(io::stderr),
                )
                .init();
        }
    }
}

fn main() {
    let cli = Cli::parse();
    setup_tracing(&cli.log_format, cli.verbose, cli.quiet);
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
