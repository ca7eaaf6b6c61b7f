//! Scalar-or-range tokens such as `2010` or `7.5-9.0`.
//!
//! The first `-` always separates the bounds, so negative values cannot be
//! written. No catalog attribute is negative, so this is accepted as a
//! limitation of the query language.

use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::SearchError;

/// Inclusive `[low, high]` interval.
///
/// A reversed interval (`low > high`) is kept as written and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval<T> {
    pub low: T,
    pub high: T,
}

impl<T: PartialOrd> Interval<T> {
    /// Creates interval from explicit bounds.
    pub fn new(low: T, high: T) -> Self {
        Self { low, high }
    }

    /// Checks whether `value` lies within both bounds.
    pub fn contains(&self, value: &T) -> bool {
        self.low <= *value && *value <= self.high
    }
}

impl<T: Copy> Interval<T> {
    /// Interval containing a single value.
    pub fn single(value: T) -> Self {
        Self {
            low: value,
            high: value,
        }
    }
}

/// Parses a scalar or `low-high` token into an inclusive interval.
///
/// The numeric type is selected by `T`: `i64` for years and minutes, `f64`
/// for ratings. Surrounding whitespace on each bound is ignored.
///
/// # Errors
/// - `SearchError::MalformedRange` - A bound does not parse as `T`
pub fn parse_range<T>(input: &str) -> Result<Interval<T>, SearchError>
where
    T: FromStr + Copy,
    T::Err: Display,
{
    match input.split_once('-') {
        Some((low, high)) => Ok(Interval {
            low: parse_bound(input, low)?,
            high: parse_bound(input, high)?,
        }),
        None => parse_bound(input, input).map(Interval::single),
    }
}

fn parse_bound<T>(input: &str, bound: &str) -> Result<T, SearchError>
where
    T: FromStr,
    T::Err: Display,
{
    bound
        .trim()
        .parse::<T>()
        .map_err(|e| SearchError::MalformedRange {
            input: input.to_string(),
            reason: format!("'{}': {e}", bound.trim()),
        })
}
