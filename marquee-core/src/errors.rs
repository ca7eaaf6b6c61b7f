//! Error types for catalog loading and query evaluation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while evaluating a search request.
///
/// Only failures in query-supplied values surface here. Malformed catalog rows
/// and unrecognized query tokens are recovered from and reported elsewhere.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A range criterion did not parse as the requested numeric type.
    #[error("Malformed range '{input}': {reason}")]
    MalformedRange {
        /// The offending range text
        input: String,
        /// Why the component was rejected
        reason: String,
    },

    /// A duration value had no unit marker or a non-integer numeral.
    #[error("Malformed duration '{input}'")]
    MalformedDuration {
        /// The offending duration text
        input: String,
    },

    /// A vote count had a non-numeric remainder after suffix handling.
    #[error("Malformed vote count '{input}'")]
    MalformedVotes {
        /// The offending vote text
        input: String,
    },

    /// The query opened a quote that was never closed.
    #[error("Unterminated quote starting at byte {position}")]
    UnterminatedQuote {
        /// Byte offset of the opening quote
        position: usize,
    },

    /// The catalog could not be read.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl SearchError {
    /// Checks if this error was caused by the user's query text.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, SearchError::Catalog(_))
    }
}

/// Errors raised while reading catalog storage.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the catalog file failed.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        /// Catalog location
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}
