//! JSON format export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js
//! force-directed layouts.

use crate::error::GraphError;
use crate::{BookGraph, Result};
use serde_json::{json, Value};

/// Options for shaping JSON export
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOptions {
    /// Replace textual character ids with 0-based node-list positions,
    /// rewriting link endpoints through the same mapping
    pub numeric_ids: bool,
    /// Indent the document for human readers; compact otherwise
    pub pretty: bool,
}

/// Export graph to D3.js-compatible JSON format with default options.
///
/// Output is compact and keyed by textual character ids.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if the document cannot be
/// rendered.
pub fn export_json(graph: &BookGraph) -> Result<String> {
    export_json_with(graph, JsonOptions::default())
}

/// Export graph to D3.js-compatible JSON format with custom options.
///
/// Nodes and links appear in insertion order. In integer-ID mode every
/// node's `id` becomes its 0-based position in the nodes array and every
/// link's `source`/`target` is rewritten through the id-to-position
/// mapping, so links index directly into the nodes array.
///
/// # Errors
///
/// Returns [`GraphError::CharacterNotFound`] if a link endpoint has no
/// position mapping, and [`GraphError::Serialization`] if the document
/// cannot be rendered.
pub fn export_json_with(graph: &BookGraph, options: JsonOptions) -> Result<String> {
    let mut nodes_array = Vec::new();
    let mut links_array = Vec::new();

    // Export all nodes
    for (position, character) in graph.characters().iter().enumerate() {
        let id = if options.numeric_ids {
            json!(position)
        } else {
            json!(character.id)
        };
        nodes_array.push(json!({
            "id": id,
            "name": character.name,
            "chapters": character.chapters,
        }));
    }

    // Export all edges
    for encounter in graph.encounters() {
        let (source, target) = if options.numeric_ids {
            (
                position_value(graph, &encounter.source)?,
                position_value(graph, &encounter.target)?,
            )
        } else {
            (json!(encounter.source), json!(encounter.target))
        };
        links_array.push(json!({
            "source": source,
            "target": target,
            "chapters": encounter.chapters,
        }));
    }

    let document = json!({
        "nodes": nodes_array,
        "links": links_array,
    });

    render(&document, options.pretty)
}

/// Look up a link endpoint's 0-based node position.
fn position_value(graph: &BookGraph, id: &str) -> Result<Value> {
    let position = graph
        .character_position(id)
        .ok_or_else(|| GraphError::character_not_found(id))?;
    Ok(json!(position))
}

/// Render the document, compact or indented.
fn render(document: &Value, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };
    rendered.map_err(|e| GraphError::serialization("Failed to render export document", Some(e)))
}
