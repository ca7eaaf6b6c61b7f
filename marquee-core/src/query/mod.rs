//! Query language parsing.
//!
//! A query is a list of `key:value` words such as
//! `title:"The Matrix" year:1995-2005 rating:8-10`. Values are kept verbatim
//! and only interpreted when filtering.

pub mod tokenizer;

use std::fmt;

use serde::Serialize;

use crate::errors::SearchError;

pub use tokenizer::split_words;

/// Recognized query parameter.
///
/// Declaration order is the canonical echo order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QueryField {
    Title,
    Actor,
    Year,
    Duration,
    Rating,
    Votes,
}

impl QueryField {
    pub const ALL: [QueryField; 6] = [
        QueryField::Title,
        QueryField::Actor,
        QueryField::Year,
        QueryField::Duration,
        QueryField::Rating,
        QueryField::Votes,
    ];

    /// Matches a parameter name case-insensitively.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(key))
    }

    /// Canonical lowercase parameter name.
    pub fn key(self) -> &'static str {
        match self {
            QueryField::Title => "title",
            QueryField::Actor => "actor",
            QueryField::Year => "year",
            QueryField::Duration => "duration",
            QueryField::Rating => "rating",
            QueryField::Votes => "votes",
        }
    }

    /// Checks whether this parameter filters (as opposed to ranks).
    pub fn is_hard(self) -> bool {
        !matches!(self, QueryField::Title | QueryField::Actor)
    }
}

impl fmt::Display for QueryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Structured search request.
///
/// `title` and `actor` are soft criteria used only for ranking; when both are
/// set, `title` decides the ranking and `actor` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Query {
    pub title: Option<String>,
    pub actor: Option<String>,
    pub year: Option<String>,
    pub duration: Option<String>,
    pub rating: Option<String>,
    pub votes: Option<String>,
}

impl Query {
    /// Raw value for `field`, if present.
    pub fn get(&self, field: QueryField) -> Option<&str> {
        let value = match field {
            QueryField::Title => &self.title,
            QueryField::Actor => &self.actor,
            QueryField::Year => &self.year,
            QueryField::Duration => &self.duration,
            QueryField::Rating => &self.rating,
            QueryField::Votes => &self.votes,
        };
        value.as_deref()
    }

    /// Stores `value` for `field`. An empty value clears the field.
    pub fn set(&mut self, field: QueryField, value: &str) {
        let slot = match field {
            QueryField::Title => &mut self.title,
            QueryField::Actor => &mut self.actor,
            QueryField::Year => &mut self.year,
            QueryField::Duration => &mut self.duration,
            QueryField::Rating => &mut self.rating,
            QueryField::Votes => &mut self.votes,
        };
        *slot = (!value.is_empty()).then(|| value.to_string());
    }

    /// Checks whether no recognized parameter is set.
    pub fn is_empty(&self) -> bool {
        QueryField::ALL.iter().all(|field| self.get(*field).is_none())
    }

    /// Checks whether any hard (filtering) criterion is set.
    pub fn has_hard_criteria(&self) -> bool {
        QueryField::ALL
            .iter()
            .any(|field| field.is_hard() && self.get(*field).is_some())
    }

    /// Set parameters as `(field, value)` pairs in canonical order.
    pub fn parameters(&self) -> impl Iterator<Item = (QueryField, &str)> {
        QueryField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    /// Canonical `key:value` restatement of the set parameters.
    ///
    /// Empty when nothing is set.
    pub fn canonical_echo(&self) -> String {
        self.parameters()
            .map(|(field, value)| format!("{field}:{value}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Non-fatal problem found while parsing a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Diagnostic {
    /// Word without a `key:value` shape.
    InvalidFormat { token: String },
    /// `key:value` word whose key is not a recognized parameter.
    UnknownKey { key: String, value: String },
    /// Both soft criteria were given; `title` ranks and `actor` is ignored.
    ActorIgnored { actor: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidFormat { token } => {
                write!(f, "Invalid parameter format: {token}")
            }
            Diagnostic::UnknownKey { key, value } => {
                write!(f, "Unknown parameter '{key}' (value '{value}')")
            }
            Diagnostic::ActorIgnored { actor } => {
                write!(f, "Ignoring actor '{actor}' because a title was given")
            }
        }
    }
}

/// Query together with the diagnostics produced while parsing it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedQuery {
    pub query: Query,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses a raw query string.
///
/// Unrecognized or malformed words produce diagnostics and never stop the
/// remaining words from being read. A repeated key keeps its last value.
///
/// # Errors
/// - `SearchError::UnterminatedQuote` - A quote is never closed
pub fn parse_query(input: &str) -> Result<ParsedQuery, SearchError> {
    let mut parsed = ParsedQuery::default();

    for word in split_words(input)? {
        let Some((key, value)) = word.split_once(':') else {
            tracing::debug!("Invalid parameter format: {}", word);
            parsed.diagnostics.push(Diagnostic::InvalidFormat { token: word });
            continue;
        };

        match QueryField::from_key(key) {
            Some(field) => parsed.query.set(field, value),
            None => {
                tracing::debug!("Unknown query parameter: {}", key);
                parsed.diagnostics.push(Diagnostic::UnknownKey {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }
    }

    if let (Some(_), Some(actor)) = (&parsed.query.title, &parsed.query.actor) {
        parsed.diagnostics.push(Diagnostic::ActorIgnored {
            actor: actor.clone(),
        });
    }

    Ok(parsed)
}
