//! Main BookGraph interface for graph operations.

use super::chapters::ChapterSet;
use super::types::{pair_key, Character, Encounter};
use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::collections::HashMap;

/// The accumulating character co-occurrence graph.
///
/// `BookGraph` owns two insertion-ordered collections, characters and
/// encounters, each backed by a vector plus a key index. Iteration order is
/// always the order of first creation, which keeps exports deterministic.
/// All operations are explicit with no hidden behavior.
#[derive(Debug, Default)]
pub struct BookGraph {
    characters: Vec<Character>,
    encounters: Vec<Encounter>,
    // Key indexes for O(1) lookups; positions double as export order
    character_index: HashMap<String, usize>,
    encounter_index: HashMap<String, usize>,
}

impl BookGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a character, or redefine one that already exists.
    ///
    /// A repeated definition overwrites the name and resets the chapter set
    /// while keeping the character's original list position, mirroring a
    /// keyed insert into an insertion-ordered map.
    pub fn define_character(&mut self, id: impl Into<String>, name: impl Into<String>) {
        let id = id.into();
        let name = name.into();
        debug!("Defining character: id={id}, name={name}");

        match self.character_index.get(&id) {
            Some(&position) => {
                self.characters[position] = Character::new(id, name);
            }
            None => {
                self.character_index.insert(id.clone(), self.characters.len());
                self.characters.push(Character::new(id, name));
            }
        }
    }

    /// Record that a character appears in a chapter.
    ///
    /// Returns `true` if the chapter was newly added to the character's
    /// set, `false` if it was already present.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CharacterNotFound`] if `id` has no defining
    /// entry; references to undefined characters are data-integrity
    /// failures, never silently tolerated.
    pub fn record_appearance(&mut self, id: &str, chapter: &str) -> Result<bool> {
        let position = *self
            .character_index
            .get(id)
            .ok_or_else(|| GraphError::character_not_found(id))?;

        trace!("Recording appearance: id={id}, chapter={chapter}");
        Ok(self.characters[position].chapters.insert(chapter))
    }

    /// Record a pairwise encounter between two characters in a chapter.
    ///
    /// The pair is canonicalized, so `("AB", "CD")` and `("CD", "AB")`
    /// update the same edge. The first sighting of a pair creates the edge;
    /// later sightings only extend its chapter set.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CharacterNotFound`] if either endpoint has no
    /// defining entry.
    pub fn record_encounter(&mut self, a: &str, b: &str, chapter: &str) -> Result<&Encounter> {
        // Verify both endpoints exist before touching the edge collection
        if !self.character_index.contains_key(a) {
            return Err(GraphError::character_not_found(a));
        }
        if !self.character_index.contains_key(b) {
            return Err(GraphError::character_not_found(b));
        }

        let key = pair_key(a, b);
        trace!("Recording encounter: key={key}, chapter={chapter}");

        let position = match self.encounter_index.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.encounters.len();
                self.encounter_index.insert(key, position);
                self.encounters.push(Encounter::new(a, b));
                position
            }
        };

        self.encounters[position].chapters.insert(chapter);
        Ok(&self.encounters[position])
    }

    /// Get a character by id.
    pub fn character(&self, id: &str) -> Option<&Character> {
        self.character_index
            .get(id)
            .map(|&position| &self.characters[position])
    }

    /// Check whether a character id has been defined.
    pub fn contains_character(&self, id: &str) -> bool {
        self.character_index.contains_key(id)
    }

    /// Get a character's 0-based position in export order.
    ///
    /// This is the integer id the exporter assigns in integer-ID mode.
    pub fn character_position(&self, id: &str) -> Option<usize> {
        self.character_index.get(id).copied()
    }

    /// Get the encounter edge between two characters, in either order.
    pub fn encounter_between(&self, a: &str, b: &str) -> Option<&Encounter> {
        self.encounter_index
            .get(&pair_key(a, b))
            .map(|&position| &self.encounters[position])
    }

    /// All characters, in insertion order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// All encounter edges, in insertion order.
    pub fn encounters(&self) -> &[Encounter] {
        &self.encounters
    }

    /// Chapters recorded for a character, if the character exists.
    pub fn chapters_of(&self, id: &str) -> Option<&ChapterSet> {
        self.character(id).map(|c| &c.chapters)
    }

    /// Get the number of characters.
    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    /// Get the number of encounter edges.
    pub fn encounter_count(&self) -> usize {
        self.encounters.len()
    }

    /// Check if the graph has no characters and no encounters.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty() && self.encounters.is_empty()
    }
}
