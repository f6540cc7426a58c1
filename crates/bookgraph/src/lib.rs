//! # bookgraph
//!
//! A character co-occurrence graph model for literary datasets, with JSON
//! export shaped for D3.js force-directed layouts.
//!
//! ## Core Principles
//!
//! - **Format Agnostic**: Bring your own parser, we handle the graph
//! - **Deterministic**: Insertion-ordered collections, reproducible output
//! - **Fail Loud**: Undefined character references are errors, never guesses
//! - **Zero Magic**: Explicit over implicit, always
//!
//! ## Architecture
//!
//! bookgraph is organized in layers:
//!
//! ```text
//! Dataset parsers (bookgraph-dat, ...)
//!     ↓
//! Core Graph (characters, encounters, chapter sets)
//!     ↓
//! Export (D3 nodes/links JSON)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bookgraph::{export_json, BookGraph};
//!
//! let mut graph = BookGraph::new();
//! graph.define_character("AB", "Alice");
//! graph.define_character("CD", "Carl");
//! graph.record_appearance("AB", "1.1").unwrap();
//! graph.record_appearance("CD", "1.1").unwrap();
//! graph.record_encounter("AB", "CD", "1.1").unwrap();
//!
//! let json = export_json(&graph).unwrap();
//! assert!(json.contains("\"links\""));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;

// Re-export main types
pub use error::{GraphError, Result};
pub use export::{export_json, export_json_with, JsonOptions};
pub use graph::{BookGraph, ChapterSet, Character, Encounter};
