//! Fuzzy ranking of filtered records.
//!
//! Similarity is normalized Levenshtein distance scaled to `[0, 100]` and
//! computed on lowercased text. Sorting is stable, so records with equal scores
//! keep their catalog order.

use std::cmp::Ordering;

use serde::Serialize;
use strsim::normalized_levenshtein;

use crate::catalog::MovieRecord;
use crate::query::Query;

/// Number of results returned when not configured otherwise.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Record selected for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMovie<'a> {
    pub record: &'a MovieRecord,
    /// Similarity to the soft criterion (0-100), `None` without one
    pub score: Option<f64>,
}

/// Soft criterion that decided the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RankingMode {
    Title,
    Actor,
    /// No soft criterion: first records in catalog order.
    CatalogOrder,
}

impl RankingMode {
    /// Selects the mode for `query`; `title` takes precedence over `actor`.
    pub fn for_query(query: &Query) -> Self {
        if query.title.is_some() {
            RankingMode::Title
        } else if query.actor.is_some() {
            RankingMode::Actor
        } else {
            RankingMode::CatalogOrder
        }
    }
}

/// Case-insensitive similarity between two strings, from 0 to 100.
///
/// 100 means the strings are equal after lowercasing.
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase()) * 100.0
}

/// Best similarity between `actor` and any name in the record's credits.
pub fn actor_score(actor: &str, record: &MovieRecord) -> f64 {
    record
        .actor_names()
        .iter()
        .map(|name| similarity(actor, name))
        .fold(0.0, f64::max)
}

/// Orders `records` for presentation and keeps at most `limit` of them.
pub fn rank_movies<'a>(
    records: Vec<&'a MovieRecord>,
    query: &Query,
    limit: usize,
) -> Vec<RankedMovie<'a>> {
    let scorer: Box<dyn Fn(&MovieRecord) -> f64 + '_> = match (&query.title, &query.actor) {
        (Some(title), _) => Box::new(move |record: &MovieRecord| similarity(title, &record.title)),
        (None, Some(actor)) => Box::new(move |record: &MovieRecord| actor_score(actor, record)),
        (None, None) => {
            return records
                .into_iter()
                .take(limit)
                .map(|record| RankedMovie {
                    record,
                    score: None,
                })
                .collect();
        }
    };

    let mut scored: Vec<RankedMovie<'a>> = records
        .into_iter()
        .map(|record| RankedMovie {
            record,
            score: Some(scorer(record)),
        })
        .collect();

    // `sort_by` is stable; equal scores keep their filtered order.
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
    });
    scored.truncate(limit);
    scored
}
