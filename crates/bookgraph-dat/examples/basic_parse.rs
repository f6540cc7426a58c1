/// Basic example of parsing GraphBase encounter data
///
/// This example demonstrates:
/// - Creating a graph
/// - Parsing a dataset (from a file if a path is given, else a built-in sample)
/// - Reporting parse statistics and the exported JSON
use bookgraph::{export_json_with, BookGraph, JsonOptions};
use bookgraph_dat::{ParseError, Parser};
use std::path::Path;

const SAMPLE: &str = "\
* Built-in sample in Stanford GraphBase layout
AA Anna, sister of Stiva
VV Vronsky, cavalry officer
KI Kitty, Dolly's sister
1.1:AA,VV
1.2:AA,VV;KI
2.10:KI,AA,VV
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut graph = BookGraph::new();
    let parser = Parser::new();

    let path_arg = std::env::args().nth(1);

    let result = match &path_arg {
        Some(path) => {
            println!("Parsing {path}...");
            parser.parse_file(Path::new(path), &mut graph)
        }
        None => {
            println!("Parsing built-in sample...");
            parser.parse_source(SAMPLE, &mut graph)
        }
    };

    match result {
        Ok(stats) => {
            println!("✓ Successfully parsed!");
            println!();
            println!("Results:");
            println!("  Lines:           {}", stats.lines);
            println!("  Definitions:     {}", stats.definitions);
            println!("  Encounter lines: {}", stats.encounter_lines);
            println!("  Ignored lines:   {}", stats.ignored);
            println!("  Parse time:      {:?}", stats.parse_time);
            println!();
            println!("Characters found:");
            for character in graph.characters() {
                println!(
                    "  - {} {} (chapters: {})",
                    character.id,
                    character.name,
                    character.chapters.len()
                );
            }
        }
        Err(e) => {
            println!("✗ Failed to parse!");
            println!();
            let error_msg = match &e {
                ParseError::UndefinedCharacter { id, chapter, line } => {
                    format!("Undefined character '{id}' in chapter {chapter} at line {line}")
                }
                ParseError::IoError { path, source } => {
                    format!("I/O error reading {path:?}: {source}")
                }
                other => {
                    format!("Error: {other}")
                }
            };
            println!("{error_msg}");
            return Err(Box::new(e));
        }
    }

    println!();
    println!("Graph now contains {} characters", graph.character_count());

    let options = JsonOptions {
        pretty: true,
        ..JsonOptions::default()
    };
    println!("\n{}", export_json_with(&graph, options)?);

    Ok(())
}
