//! Basic usage example for bookgraph
//!
//! This example demonstrates:
//! - Building a graph by hand
//! - Recording appearances and encounters
//! - Exporting the D3 JSON document

use bookgraph::{export_json_with, BookGraph, JsonOptions};

fn main() -> bookgraph::Result<()> {
    let mut graph = BookGraph::new();

    println!("Building a small encounter graph...\n");

    // Define the cast
    graph.define_character("AB", "Alice");
    graph.define_character("CD", "Carl");
    graph.define_character("EF", "Edda");
    println!("✓ Defined {} characters", graph.character_count());

    // Chapter 1.1: Alice meets Carl
    graph.record_appearance("AB", "1.1")?;
    graph.record_appearance("CD", "1.1")?;
    graph.record_encounter("AB", "CD", "1.1")?;
    println!("✓ Recorded encounter AB-CD in chapter 1.1");

    // Chapter 2.1: all three meet
    for id in ["AB", "CD", "EF"] {
        graph.record_appearance(id, "2.1")?;
    }
    graph.record_encounter("AB", "CD", "2.1")?;
    graph.record_encounter("AB", "EF", "2.1")?;
    graph.record_encounter("CD", "EF", "2.1")?;
    println!("✓ Recorded three-way encounter in chapter 2.1");

    // Query the graph
    println!("\n--- Querying the graph ---\n");

    if let Some(edge) = graph.encounter_between("EF", "AB") {
        println!(
            "{} and {} met in {} chapter(s)",
            edge.source,
            edge.target,
            edge.chapters.len()
        );
    }

    println!("Total characters: {}", graph.character_count());
    println!("Total encounters: {}", graph.encounter_count());

    // Export for D3
    let options = JsonOptions {
        pretty: true,
        ..JsonOptions::default()
    };
    let json = export_json_with(&graph, options)?;
    println!("\n--- D3 document ---\n\n{json}");

    Ok(())
}
