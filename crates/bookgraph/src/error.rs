//! Error types for bookgraph operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.

use thiserror::Error;

/// Result type alias for bookgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for all graph operations.
///
/// Errors are designed to fail fast and provide clear context about what went wrong.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A character id was referenced before its defining line created it
    #[error("Character not found: {id}")]
    CharacterNotFound {
        /// The undefined character id
        id: String,
    },

    /// Serialization error while rendering the export document
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create a character-not-found error.
    pub fn character_not_found(id: impl Into<String>) -> Self {
        Self::CharacterNotFound { id: id.into() }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_not_found_error() {
        let err = GraphError::character_not_found("ZZ");
        assert_eq!(err.to_string(), "Character not found: ZZ");
    }

    #[test]
    fn test_serialization_error() {
        let err = GraphError::serialization("Failed to render document", None::<std::io::Error>);
        assert_eq!(err.to_string(), "Serialization error: Failed to render document");
    }
}
