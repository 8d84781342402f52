//! Unified error types for mood-quotes.
//!
//! The selection core cannot fail; these errors cover catalog construction,
//! configuration and the I/O done by the command handlers.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mood-quotes operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MoodQuotesError {
    /// A catalog broke one of the quote invariants
    #[error("Invalid quote catalog: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific catalog error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("Quote id {id} is used more than once")]
    DuplicateId { id: u32 },

    #[error("Quote {id} has empty text")]
    EmptyText { id: u32 },

    #[error("Quote {id} has an empty author")]
    EmptyAuthor { id: u32 },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for mood-quotes operations
pub type Result<T> = std::result::Result<T, MoodQuotesError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl MoodQuotesError {
    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_catalog_error_display_and_source() {
        let err = MoodQuotesError::catalog(
            "quote #2 under 'happy'",
            CatalogErrorKind::DuplicateId { id: 2 },
        );
        assert_eq!(err.to_string(), "Invalid quote catalog: quote #2 under 'happy'");
        let source = err.source().expect("catalog errors carry a source");
        assert_eq!(source.to_string(), "Quote id 2 is used more than once");
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = MoodQuotesError::io("/tmp/x.yaml", io);
        match err {
            MoodQuotesError::Io { path, message, .. } => {
                assert_eq!(path, Some(PathBuf::from("/tmp/x.yaml")));
                assert_eq!(message, "denied");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
