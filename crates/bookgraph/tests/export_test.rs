//! Unit tests for JSON export: D3 document shape, ordering, integer-ID mode.

use bookgraph::{export_json, export_json_with, BookGraph, JsonOptions};
use serde_json::{json, Value};

// Helper to create the two-character example graph
fn alice_and_carl() -> BookGraph {
    let mut graph = BookGraph::new();
    graph.define_character("AB", "Alice");
    graph.define_character("CD", "Carl");
    graph.record_appearance("AB", "1.1").unwrap();
    graph.record_appearance("CD", "1.1").unwrap();
    graph.record_encounter("AB", "CD", "1.1").unwrap();
    graph
}

#[test]
fn test_export_document_shape() {
    let graph = alice_and_carl();
    let json = export_json(&graph).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert!(value["nodes"].is_array());
    assert!(value["links"].is_array());

    for node in value["nodes"].as_array().unwrap() {
        assert!(node["id"].is_string());
        assert!(node["name"].is_string());
        assert!(node["chapters"].is_array());
    }

    for link in value["links"].as_array().unwrap() {
        assert!(link["source"].is_string());
        assert!(link["target"].is_string());
        assert!(link["chapters"].is_array());
    }
}

#[test]
fn test_export_two_character_example() {
    let graph = alice_and_carl();
    let json = export_json(&graph).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    let expected = json!({
        "nodes": [
            { "id": "AB", "name": "Alice", "chapters": ["1.1"] },
            { "id": "CD", "name": "Carl", "chapters": ["1.1"] },
        ],
        "links": [
            { "source": "AB", "target": "CD", "chapters": ["1.1"] },
        ],
    });
    assert_eq!(value, expected);
}

#[test]
fn test_export_preserves_insertion_order() {
    let mut graph = BookGraph::new();
    graph.define_character("ZZ", "Zed");
    graph.define_character("AA", "Ana");
    graph.define_character("MM", "Mia");
    graph.record_encounter("ZZ", "MM", "1.1").unwrap();
    graph.record_encounter("AA", "ZZ", "1.2").unwrap();

    let json = export_json(&graph).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    let ids: Vec<&str> = value["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["ZZ", "AA", "MM"]);

    // Edges in creation order, each endpoint pair canonicalized
    let links = value["links"].as_array().unwrap();
    assert_eq!(links[0]["source"], "MM");
    assert_eq!(links[0]["target"], "ZZ");
    assert_eq!(links[1]["source"], "AA");
    assert_eq!(links[1]["target"], "ZZ");
}

#[test]
fn test_numeric_ids_index_into_nodes() {
    let mut graph = BookGraph::new();
    graph.define_character("EF", "Edda");
    graph.define_character("AB", "Alice");
    graph.define_character("CD", "Carl");
    graph.record_encounter("CD", "EF", "2.1").unwrap();
    graph.record_encounter("AB", "EF", "2.2").unwrap();

    let options = JsonOptions {
        numeric_ids: true,
        ..JsonOptions::default()
    };
    let json = export_json_with(&graph, options).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    let nodes = value["nodes"].as_array().unwrap();
    let links = value["links"].as_array().unwrap();

    // Node ids are their own positions
    for (position, node) in nodes.iter().enumerate() {
        assert_eq!(node["id"].as_u64().unwrap() as usize, position);
    }

    // Every endpoint is a valid index and maps back to the textual pair
    for link in links {
        let source = link["source"].as_u64().unwrap() as usize;
        let target = link["target"].as_u64().unwrap() as usize;
        assert!(source < nodes.len());
        assert!(target < nodes.len());

        let source_id = &graph.characters()[source].id;
        let target_id = &graph.characters()[target].id;
        assert!(graph.encounter_between(source_id, target_id).is_some());
    }

    // Names and chapters are untouched by the remapping
    assert_eq!(nodes[0]["name"], "Edda");
    assert_eq!(links[0]["chapters"], json!(["2.1"]));
}

#[test]
fn test_export_is_deterministic() {
    let graph = alice_and_carl();
    let first = export_json(&graph).unwrap();
    let second = export_json(&graph).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_export_escapes_names() {
    let mut graph = BookGraph::new();
    graph.define_character("JO", r#"Joe "Ragged" Harper"#);
    graph.record_appearance("JO", "1.1").unwrap();

    let json = export_json(&graph).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["nodes"][0]["name"], r#"Joe "Ragged" Harper"#);
}
