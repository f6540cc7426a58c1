//! Error types for `.dat` parsing.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing encounter data
#[derive(Error, Debug)]
pub enum ParseError {
    /// I/O error reading a dataset file
    #[error("Failed to read file {path}: {source}", path = .path.display())]
    IoError { path: PathBuf, source: io::Error },

    /// An encounter line referenced a character with no defining line
    #[error("Undefined character '{id}' referenced in chapter {chapter} (line {line})")]
    UndefinedCharacter {
        id: String,
        chapter: String,
        line: usize,
    },

    /// Error from graph operations
    #[error("Graph operation failed: {0}")]
    GraphError(#[from] bookgraph::GraphError),
}

impl ParseError {
    /// Create an IoError from a path and io::Error
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ParseError::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create an UndefinedCharacter error
    pub fn undefined_character(
        id: impl Into<String>,
        chapter: impl Into<String>,
        line: usize,
    ) -> Self {
        ParseError::UndefinedCharacter {
            id: id.into(),
            chapter: chapter.into(),
            line,
        }
    }
}
