//! Marquee Core - Movie catalog query language, filtering and fuzzy ranking
//!
//! Queries mix hard numeric criteria (`year`, `duration`, `rating`, `votes`)
//! that filter the catalog with soft text criteria (`title`, `actor`) that
//! rank the survivors by fuzzy similarity.

#![warn(clippy::too_many_lines)]

pub mod catalog;
pub mod config;
pub mod errors;
pub mod filter;
pub mod parsing;
pub mod query;
pub mod ranking;
pub mod search;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use catalog::{Catalog, CatalogCache, CatalogSource, FileCatalog, InMemoryCatalog, MovieRecord};
pub use config::MarqueeConfig;
pub use errors::{CatalogError, SearchError};
pub use parsing::VotesMode;
pub use query::{Diagnostic, ParsedQuery, Query, QueryField, parse_query};
pub use ranking::{RankedMovie, RankingMode};
pub use search::{MovieSearch, SearchOutcome};

/// Convenience type alias for Results with SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;
