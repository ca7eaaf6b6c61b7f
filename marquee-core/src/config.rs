//! Centralized configuration for Marquee.
//!
//! All tunable parameters live here to avoid hard-coded values scattered
//! through the search pipeline.

use std::path::PathBuf;

use crate::parsing::VotesMode;
use crate::ranking::DEFAULT_RESULT_LIMIT;

/// Central configuration for all Marquee components.
///
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct MarqueeConfig {
    pub catalog: CatalogConfig,
    pub search: SearchConfig,
}

/// Catalog storage configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Path to the flat catalog file
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("movies_database.txt"),
        }
    }
}

/// Query evaluation configuration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of results returned per query
    pub result_limit: usize,
    /// Interpretation of fractional vote counts
    pub votes_mode: VotesMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            votes_mode: VotesMode::Exact,
        }
    }
}

impl MarqueeConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Recognized variables: `MARQUEE_CATALOG_PATH`, `MARQUEE_RESULT_LIMIT`
    /// and `MARQUEE_LEGACY_VOTES`. Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("MARQUEE_CATALOG_PATH") {
            if !path.is_empty() {
                config.catalog.path = PathBuf::from(path);
            }
        }

        if let Some(limit) = lookup("MARQUEE_RESULT_LIMIT") {
            match limit.parse::<usize>() {
                Ok(count) if count > 0 => config.search.result_limit = count,
                _ => tracing::warn!("Ignoring invalid MARQUEE_RESULT_LIMIT '{}'", limit),
            }
        }

        if let Some(legacy) = lookup("MARQUEE_LEGACY_VOTES") {
            match legacy.parse::<bool>() {
                Ok(true) => config.search.votes_mode = VotesMode::Legacy,
                Ok(false) => config.search.votes_mode = VotesMode::Exact,
                Err(_) => tracing::warn!("Ignoring invalid MARQUEE_LEGACY_VOTES '{}'", legacy),
            }
        }

        config
    }

    /// Creates a configuration for tests against a given catalog file.
    pub fn for_testing(catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog: CatalogConfig {
                path: catalog_path.into(),
            },
            search: SearchConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_values() {
        let config = MarqueeConfig::default();

        assert_eq!(config.catalog.path, PathBuf::from("movies_database.txt"));
        assert_eq!(config.search.result_limit, 5);
        assert_eq!(config.search.votes_mode, VotesMode::Exact);
    }

    #[test]
    fn test_env_override() {
        let config = MarqueeConfig::from_lookup(lookup_from(&[
            ("MARQUEE_CATALOG_PATH", "/srv/movies.txt"),
            ("MARQUEE_RESULT_LIMIT", "10"),
            ("MARQUEE_LEGACY_VOTES", "true"),
        ]));

        assert_eq!(config.catalog.path, PathBuf::from("/srv/movies.txt"));
        assert_eq!(config.search.result_limit, 10);
        assert_eq!(config.search.votes_mode, VotesMode::Legacy);
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let config = MarqueeConfig::from_lookup(lookup_from(&[
            ("MARQUEE_CATALOG_PATH", ""),
            ("MARQUEE_RESULT_LIMIT", "0"),
            ("MARQUEE_LEGACY_VOTES", "sometimes"),
        ]));

        assert_eq!(config.catalog.path, PathBuf::from("movies_database.txt"));
        assert_eq!(config.search.result_limit, 5);
        assert_eq!(config.search.votes_mode, VotesMode::Exact);
    }

    #[test]
    fn test_testing_preset() {
        let config = MarqueeConfig::for_testing("fixtures/movies.txt");
        assert_eq!(config.catalog.path, PathBuf::from("fixtures/movies.txt"));
        assert_eq!(config.search.result_limit, 5);
    }
}
