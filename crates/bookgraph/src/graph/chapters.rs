//! Insertion-ordered chapter label sets.
//!
//! Chapter lists in the output must be deduplicated but keep first-seen
//! order so repeated runs over the same dataset produce identical documents.

use serde::{Deserialize, Serialize};

/// An insertion-order-preserving set of chapter labels.
///
/// Labels are short dotted-numeric strings ("1.2.3") and sets stay small,
/// bounded by a literary work's chapter count, so membership checks scan
/// the backing vector directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChapterSet {
    labels: Vec<String>,
}

impl ChapterSet {
    /// Create a new empty chapter set.
    pub fn new() -> Self {
        Self { labels: Vec::new() }
    }

    /// Insert a chapter label, keeping first-seen order.
    ///
    /// Returns `true` if the label was newly added, `false` if it was
    /// already present.
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.contains(&label) {
            return false;
        }
        self.labels.push(label);
        true
    }

    /// Check whether a label is present.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Get the number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over labels in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// View the labels as a slice, in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }
}

impl<S: Into<String>> FromIterator<S> for ChapterSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = Self::new();
        for label in iter {
            set.insert(label);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ChapterSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}
