//! bookgraph CLI: converts Stanford GraphBase .dat files to D3 JSON.
//!
//! Usage:
//!   bookgraph --input anna.dat --output anna.json
//!   bookgraph --input - --output - --numeric-ids < anna.dat

use bookgraph::{export_json_with, BookGraph, JsonOptions};
use bookgraph_dat::Parser as DatParser;
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bookgraph",
    version,
    about = "Convert a Stanford GraphBase .dat file to a D3 JSON graph"
)]
struct Cli {
    /// Stanford GraphBase .dat file to read ("-" for stdin)
    #[arg(long)]
    input: PathBuf,

    /// JSON file to store the result ("-" for stdout)
    #[arg(long)]
    output: PathBuf,

    /// Replace character ids with 0-based node indexes
    #[arg(long)]
    numeric_ids: bool,

    /// Pretty-print the JSON document
    #[arg(long)]
    pretty: bool,
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let parser = DatParser::new();
    let mut graph = BookGraph::new();

    if cli.input.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| format!("Failed to read stdin: {e}"))?;
        parser
            .parse_source(&source, &mut graph)
            .map_err(|e| e.to_string())?;
    } else {
        parser
            .parse_file(&cli.input, &mut graph)
            .map_err(|e| e.to_string())?;
    }

    debug!(
        characters = graph.character_count(),
        encounters = graph.encounter_count(),
        numeric_ids = cli.numeric_ids,
        "Converting graph"
    );

    let options = JsonOptions {
        numeric_ids: cli.numeric_ids,
        pretty: cli.pretty,
    };
    let json = export_json_with(&graph, options).map_err(|e| e.to_string())?;

    write_output(&cli.output, &json)
}

/// Write the finished document to the output target.
///
/// File output is staged in a temporary file beside the destination and
/// renamed into place only after the full document is written, so a failed
/// run never leaves a truncated file behind.
fn write_output(path: &Path, json: &str) -> Result<(), String> {
    if path.as_os_str() == "-" {
        let mut stdout = io::stdout().lock();
        return stdout
            .write_all(json.as_bytes())
            .and_then(|()| stdout.write_all(b"\n"))
            .map_err(|e| format!("Failed to write stdout: {e}"));
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)
        .map_err(|e| format!("Failed to create temporary file in {}: {e}", dir.display()))?;
    staged
        .write_all(json.as_bytes())
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
    staged
        .persist(path)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e.error))?;

    Ok(())
}

/// Route log output to stderr so `--output -` stays clean JSON.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
