//! The `.dat` parser: a single linear scan feeding a caller-owned graph.

use crate::error::{ParseError, Result};
use crate::line::{classify, encounter_groups, Line};
use bookgraph::{BookGraph, GraphError};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Statistics about one parsed dataset
#[derive(Debug, Clone, Default)]
pub struct ParseStats {
    /// Total lines scanned
    pub lines: usize,

    /// Character-definition lines applied
    pub definitions: usize,

    /// Chapter-encounter lines applied
    pub encounter_lines: usize,

    /// Lines the grammar ignored (blank, commentary, chapter headers)
    pub ignored: usize,

    /// Time taken to parse
    pub parse_time: Duration,
}

impl ParseStats {
    /// Lines that contributed to the graph
    pub fn applied_lines(&self) -> usize {
        self.definitions + self.encounter_lines
    }
}

/// Main parser for GraphBase encounter data
///
/// The parser is stateless; every call reduces one dataset into the graph
/// passed by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser;

impl Parser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse encounter data from a string
    ///
    /// # Arguments
    ///
    /// * `source` - Dataset contents as a string
    /// * `graph` - Mutable reference to the graph being built
    ///
    /// # Returns
    ///
    /// `ParseStats` describing how the lines were classified
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UndefinedCharacter`] when an encounter line
    /// references a character id with no prior defining line. The graph may
    /// hold partial data after a failure; callers must not export it.
    pub fn parse_source(&self, source: &str, graph: &mut BookGraph) -> Result<ParseStats> {
        let start = Instant::now();
        let mut stats = ParseStats::default();

        for (index, raw_line) in source.lines().enumerate() {
            let number = index + 1;
            stats.lines += 1;

            match classify(raw_line.trim()) {
                Line::CharacterDef { id, name } => {
                    graph.define_character(id, name);
                    stats.definitions += 1;
                }
                Line::Encounter {
                    chapter,
                    encounters,
                } => {
                    self.apply_encounter_line(graph, chapter, encounters, number)?;
                    stats.encounter_lines += 1;
                }
                Line::Ignored => {
                    stats.ignored += 1;
                }
            }
        }

        stats.parse_time = start.elapsed();
        Ok(stats)
    }

    /// Parse a dataset file
    ///
    /// Reads the whole file into memory, then scans it once.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the `.dat` file
    /// * `graph` - Mutable reference to the graph being built
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::IoError`] if the file cannot be read, plus
    /// everything [`Parser::parse_source`] can return.
    #[instrument(skip(self, graph), fields(file = %path.display()))]
    pub fn parse_file(&self, path: &Path, graph: &mut BookGraph) -> Result<ParseStats> {
        debug!("Starting dataset parse");

        let source = fs::read_to_string(path).map_err(|e| ParseError::io_error(path, e))?;
        let stats = self.parse_source(&source, graph)?;

        info!(
            characters = graph.character_count(),
            encounters = graph.encounter_count(),
            lines = stats.lines,
            time_ms = stats.parse_time.as_millis(),
            "Dataset parsed successfully"
        );

        Ok(stats)
    }

    /// Apply one chapter-encounter line to the graph.
    fn apply_encounter_line(
        &self,
        graph: &mut BookGraph,
        chapter: &str,
        encounters: &str,
        number: usize,
    ) -> Result<()> {
        let groups = encounter_groups(encounters);

        // Every character mentioned anywhere on the line appears in this
        // chapter, members of single-participant groups included
        let mut seen = HashSet::new();
        for &token in groups.iter().flatten() {
            if !seen.insert(token) {
                continue;
            }
            graph
                .record_appearance(token, chapter)
                .map_err(|e| integrity_error(e, chapter, number))?;
        }

        // Pairwise edges within each group: N participants yield all
        // C(N,2) unordered pairs, not just adjacent ones
        for participants in &groups {
            if participants.len() < 2 {
                continue;
            }
            for i in 0..participants.len() {
                for j in (i + 1)..participants.len() {
                    graph
                        .record_encounter(participants[i], participants[j], chapter)
                        .map_err(|e| integrity_error(e, chapter, number))?;
                }
            }
        }

        Ok(())
    }
}

/// Attach line context to a graph-level integrity failure.
fn integrity_error(err: GraphError, chapter: &str, line: usize) -> ParseError {
    match err {
        GraphError::CharacterNotFound { id } => {
            ParseError::undefined_character(id, chapter, line)
        }
        other => ParseError::from(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> (BookGraph, ParseStats) {
        let mut graph = BookGraph::new();
        let stats = Parser::new().parse_source(source, &mut graph).unwrap();
        (graph, stats)
    }

    #[test]
    fn test_parse_definitions_and_encounter() {
        let (graph, stats) = parse("AB Alice, protagonist\nCD Carl, sidekick\n1.1: AB,CD\n");

        assert_eq!(stats.definitions, 2);
        assert_eq!(stats.encounter_lines, 1);
        assert_eq!(graph.character_count(), 2);
        assert_eq!(graph.encounter_count(), 1);

        let edge = graph.encounter_between("AB", "CD").unwrap();
        assert!(edge.chapters.contains("1.1"));
    }

    #[test]
    fn test_parse_counts_ignored_lines() {
        let source = "* header commentary\n\nAB Alice, protagonist\n3.0\n";
        let (_, stats) = parse(source);

        assert_eq!(stats.lines, 4);
        assert_eq!(stats.definitions, 1);
        assert_eq!(stats.encounter_lines, 0);
        assert_eq!(stats.ignored, 3);
        assert_eq!(stats.applied_lines(), 1);
    }

    #[test]
    fn test_parse_single_participant_updates_chapters_only() {
        let (graph, _) = parse("AB Alice, protagonist\n1.1: AB\n");

        assert_eq!(graph.encounter_count(), 0);
        let chapters: Vec<&str> = graph.chapters_of("AB").unwrap().iter().collect();
        assert_eq!(chapters, vec!["1.1"]);
    }

    #[test]
    fn test_parse_undefined_reference_fails_with_context() {
        let mut graph = BookGraph::new();
        let err = Parser::new()
            .parse_source("AB Alice, protagonist\n2.4: AB,ZZ\n", &mut graph)
            .unwrap_err();

        match err {
            ParseError::UndefinedCharacter { id, chapter, line } => {
                assert_eq!(id, "ZZ");
                assert_eq!(chapter, "2.4");
                assert_eq!(line, 2);
            }
            other => panic!("Expected UndefinedCharacter, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_whitespace_lines_are_trimmed() {
        let (graph, stats) = parse("  AB Alice, protagonist  \n\t1.1: AB\n");

        assert_eq!(stats.definitions, 1);
        assert_eq!(stats.encounter_lines, 1);
        assert!(graph.chapters_of("AB").unwrap().contains("1.1"));
    }
}
