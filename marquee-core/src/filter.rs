//! Hard-criterion filtering.
//!
//! Every query-supplied range is parsed before any record is examined, so a
//! malformed criterion fails the request instead of silently matching
//! everything. Record-side values that cannot be parsed only exclude that
//! record.

use serde::Serialize;

use crate::catalog::MovieRecord;
use crate::errors::SearchError;
use crate::parsing::{Interval, VotesMode, parse_range, parse_vote_range};
use crate::query::Query;

/// Parsed hard criteria of a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Criteria {
    /// Release year range
    pub year: Option<Interval<i64>>,
    /// Runtime range in minutes
    pub duration: Option<Interval<i64>>,
    pub rating: Option<Interval<f64>>,
    pub votes: Option<Interval<u64>>,
    pub votes_mode: VotesMode,
}

impl Criteria {
    /// Parses the hard criteria present in `query`.
    ///
    /// # Errors
    /// - `SearchError::MalformedRange` - A year, duration or rating range is malformed
    /// - `SearchError::MalformedVotes` - A vote range is malformed
    pub fn from_query(query: &Query, votes_mode: VotesMode) -> Result<Self, SearchError> {
        Ok(Self {
            year: query.year.as_deref().map(parse_range::<i64>).transpose()?,
            duration: query
                .duration
                .as_deref()
                .map(parse_range::<i64>)
                .transpose()?,
            rating: query.rating.as_deref().map(parse_range::<f64>).transpose()?,
            votes: query
                .votes
                .as_deref()
                .map(|votes| parse_vote_range(votes, votes_mode))
                .transpose()?,
            votes_mode,
        })
    }

    /// Checks whether no criterion is set.
    pub fn is_unconstrained(&self) -> bool {
        self.year.is_none()
            && self.duration.is_none()
            && self.rating.is_none()
            && self.votes.is_none()
    }

    /// Checks whether `record` satisfies every present criterion.
    pub fn matches(&self, record: &MovieRecord) -> bool {
        if let Some(range) = &self.year {
            match record.release_year() {
                Some(year) if range.contains(&year) => {}
                Some(_) => return false,
                None => return self.reject_unreadable(record, "year", &record.year),
            }
        }

        if let Some(range) = &self.duration {
            match record.duration_minutes() {
                Ok(minutes) if range.contains(&minutes) => {}
                Ok(_) => return false,
                Err(_) => return self.reject_unreadable(record, "duration", &record.duration),
            }
        }

        if let Some(range) = &self.rating {
            match record.rating_value() {
                Some(rating) if range.contains(&rating) => {}
                Some(_) => return false,
                None => return self.reject_unreadable(record, "rating", &record.rating),
            }
        }

        if let Some(range) = &self.votes {
            match record.vote_count(self.votes_mode) {
                Ok(votes) if range.contains(&votes) => {}
                Ok(_) => return false,
                Err(_) => return self.reject_unreadable(record, "votes", &record.votes),
            }
        }

        true
    }

    fn reject_unreadable(&self, record: &MovieRecord, attribute: &str, raw: &str) -> bool {
        tracing::trace!(
            "Excluding '{}': unreadable {} '{}'",
            record.title,
            attribute,
            raw
        );
        false
    }
}

/// Returns the records matching every hard criterion of `query`, in catalog
/// order.
///
/// # Errors
/// - `SearchError::MalformedRange` - A query range is malformed
/// - `SearchError::MalformedVotes` - A query vote range is malformed
pub fn filter_movies<'a>(
    records: &'a [MovieRecord],
    query: &Query,
    votes_mode: VotesMode,
) -> Result<Vec<&'a MovieRecord>, SearchError> {
    let criteria = Criteria::from_query(query, votes_mode)?;
    if criteria.is_unconstrained() {
        return Ok(records.iter().collect());
    }

    let matching: Vec<&MovieRecord> = records
        .iter()
        .filter(|record| criteria.matches(record))
        .collect();

    tracing::debug!(
        "Filter kept {} of {} records",
        matching.len(),
        records.len()
    );

    Ok(matching)
}
