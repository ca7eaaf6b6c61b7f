//! End-to-end query evaluation: parse, filter, rank.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::errors::SearchError;
use crate::filter::filter_movies;
use crate::query::{Diagnostic, Query, parse_query};
use crate::ranking::{RankedMovie, RankingMode, rank_movies};

/// Result of one search request, borrowing records from the catalog snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome<'a> {
    /// Parsed request
    pub query: Query,
    /// Canonical `key:value` restatement of the recognized parameters
    pub echo: String,
    pub diagnostics: Vec<Diagnostic>,
    pub ranking: RankingMode,
    /// Records surviving the hard criteria, before truncation
    pub matched: usize,
    pub results: Vec<RankedMovie<'a>>,
}

/// Stateless search pipeline over a catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct MovieSearch {
    config: SearchConfig,
}

impl MovieSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Parses `raw_query` and evaluates it against `catalog`.
    ///
    /// # Errors
    /// - `SearchError::UnterminatedQuote` - The query has an unclosed quote
    /// - `SearchError::MalformedRange` - A year, duration or rating range is malformed
    /// - `SearchError::MalformedVotes` - A vote range is malformed
    pub fn search<'a>(
        &self,
        catalog: &'a Catalog,
        raw_query: &str,
    ) -> Result<SearchOutcome<'a>, SearchError> {
        let parsed = parse_query(raw_query)?;
        for diagnostic in &parsed.diagnostics {
            tracing::debug!("Query diagnostic: {}", diagnostic);
        }

        let mut outcome = self.run(catalog, parsed.query)?;
        outcome.diagnostics = parsed.diagnostics;
        Ok(outcome)
    }

    /// Evaluates an already parsed query against `catalog`.
    ///
    /// # Errors
    /// - `SearchError::MalformedRange` - A year, duration or rating range is malformed
    /// - `SearchError::MalformedVotes` - A vote range is malformed
    pub fn run<'a>(
        &self,
        catalog: &'a Catalog,
        query: Query,
    ) -> Result<SearchOutcome<'a>, SearchError> {
        let matching = filter_movies(catalog.records(), &query, self.config.votes_mode)?;
        let matched = matching.len();
        let results = rank_movies(matching, &query, self.config.result_limit);

        tracing::debug!(
            "Query '{}' matched {} records, returning {}",
            query.canonical_echo(),
            matched,
            results.len()
        );

        Ok(SearchOutcome {
            echo: query.canonical_echo(),
            ranking: RankingMode::for_query(&query),
            diagnostics: Vec::new(),
            matched,
            results,
            query,
        })
    }
}
