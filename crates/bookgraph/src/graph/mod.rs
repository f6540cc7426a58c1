//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Character`]: Graph nodes representing literary characters
//! - [`Encounter`]: Undirected co-occurrence edges between character pairs
//! - [`ChapterSet`]: Insertion-ordered sets of chapter labels
//! - [`BookGraph`]: The accumulating graph built by a dataset parser

mod bookgraph;
mod chapters;
mod types;

pub use bookgraph::BookGraph;
pub use chapters::ChapterSet;
pub use types::{canonical_pair, pair_key, Character, Encounter};
