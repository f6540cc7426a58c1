//! Export module for visualizing graphs in external tools.
//!
//! Generates the `{ "nodes": [...], "links": [...] }` document shape that
//! D3.js force-directed layouts consume.

pub mod json;

pub use json::{export_json, export_json_with, JsonOptions};
