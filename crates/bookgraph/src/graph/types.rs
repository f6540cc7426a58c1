//! Core graph types: characters, encounters, and pair canonicalization.

use super::chapters::ChapterSet;
use serde::{Deserialize, Serialize};

/// Sort two character ids into canonical (lexicographic) order.
///
/// The same unordered pair always yields the same tuple regardless of the
/// order the ids were mentioned in.
pub fn canonical_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Build the deduplication key for an unordered character pair.
///
/// The key is the canonical pair joined with `-`, e.g. `"AB-CD"`.
pub fn pair_key(a: &str, b: &str) -> String {
    let (source, target) = canonical_pair(a, b);
    format!("{source}-{target}")
}

/// A node in the book graph.
///
/// Characters are identified by the two-letter code from their defining
/// line in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Two-letter character code, unique key
    pub id: String,
    /// Display name from the defining line
    pub name: String,
    /// Chapters in which this character had an encounter
    pub chapters: ChapterSet,
}

impl Character {
    /// Create a new character with an empty chapter set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            chapters: ChapterSet::new(),
        }
    }
}

/// An undirected co-occurrence edge in the book graph.
///
/// Endpoints are stored in canonical order (`source <= target`) so one
/// unordered pair always maps to one edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    /// Lexicographically smaller character id of the pair
    pub source: String,
    /// Lexicographically larger character id of the pair
    pub target: String,
    /// Chapters in which the pair co-occurred
    pub chapters: ChapterSet,
}

impl Encounter {
    /// Create a new encounter edge, canonicalizing the pair order.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let a = a.into();
        let b = b.into();
        let (source, target) = if a <= b { (a, b) } else { (b, a) };
        Self {
            source,
            target,
            chapters: ChapterSet::new(),
        }
    }

    /// The deduplication key for this edge's pair.
    pub fn pair_key(&self) -> String {
        pair_key(&self.source, &self.target)
    }

    /// Check whether this edge connects the given pair, in either order.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        let (source, target) = canonical_pair(a, b);
        self.source == source && self.target == target
    }
}
