//! Vote counts with magnitude suffixes such as `500K` or `1.2M`.
//!
//! Two interpretations exist. `Exact` scales the written number by its suffix.
//! `Legacy` reproduces the historical parser, which replaces the suffix with
//! zero digits before looking at the decimal point. That makes `1.5K` come out
//! as 1 500 000 instead of 1 500; it is kept so old query results can be
//! reproduced.

use serde::Serialize;

use super::range::{Interval, parse_range};
use crate::errors::SearchError;

/// How vote counts with a decimal point and suffix are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
pub enum VotesMode {
    /// `value × suffix`, truncated toward zero.
    #[default]
    Exact,
    /// Textual suffix substitution followed by the six-digit fraction rule.
    Legacy,
}

/// Parses a vote count in the given mode.
///
/// # Errors
/// - `SearchError::MalformedVotes` - Input is not a number with an optional
///   `K`/`M` suffix
pub fn parse_votes(input: &str, mode: VotesMode) -> Result<u64, SearchError> {
    let parsed = match mode {
        VotesMode::Exact => parse_exact(input),
        VotesMode::Legacy => parse_legacy(input),
    };
    parsed.ok_or_else(|| SearchError::MalformedVotes {
        input: input.to_string(),
    })
}

/// Parses a query-side vote criterion such as `100K-1M`.
///
/// In `Legacy` mode the suffixes are substituted over the whole text and the
/// result is read as an integer range, so fractional bounds are rejected.
///
/// # Errors
/// - `SearchError::MalformedVotes` - A bound is not a valid vote count (`Exact`)
/// - `SearchError::MalformedRange` - A substituted bound is not an integer (`Legacy`)
pub fn parse_vote_range(input: &str, mode: VotesMode) -> Result<Interval<u64>, SearchError> {
    match mode {
        VotesMode::Legacy => parse_range::<u64>(&substitute_suffixes(input)),
        VotesMode::Exact => match input.split_once('-') {
            Some((low, high)) => Ok(Interval::new(
                parse_bound(input, low)?,
                parse_bound(input, high)?,
            )),
            None => parse_bound(input, input).map(Interval::single),
        },
    }
}

fn parse_bound(input: &str, bound: &str) -> Result<u64, SearchError> {
    parse_exact(bound).ok_or_else(|| SearchError::MalformedVotes {
        input: input.to_string(),
    })
}

fn parse_exact(input: &str) -> Option<u64> {
    let text = input.trim();
    let (number, zeros) = match text.chars().last()?.to_ascii_uppercase() {
        'K' => (&text[..text.len() - 1], 3),
        'M' => (&text[..text.len() - 1], 6),
        _ => (text, 0),
    };

    let (whole, fraction) = number.trim().split_once('.').unwrap_or((number.trim(), ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    // Keep only as many fractional digits as the suffix can represent.
    let mut scaled_fraction: String = fraction.chars().take(zeros).collect();
    while scaled_fraction.len() < zeros {
        scaled_fraction.push('0');
    }

    let whole: u64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let fraction: u64 = if scaled_fraction.is_empty() {
        0
    } else {
        scaled_fraction.parse().ok()?
    };

    whole.checked_mul(10u64.pow(zeros as u32))?.checked_add(fraction)
}

fn substitute_suffixes(input: &str) -> String {
    input
        .to_uppercase()
        .replace('M', "000000")
        .replace('K', "000")
}

fn parse_legacy(input: &str) -> Option<u64> {
    let substituted = substitute_suffixes(input);
    if !substituted.contains('.') {
        return substituted.trim().parse().ok();
    }

    let mut parts = substituted.split('.');
    let whole = parts.next()?;
    let fraction = parts.next()?;
    let digits: u64 = format!("{whole}{fraction}").trim().parse().ok()?;

    let exponent = 6 - fraction.len() as i64;
    if exponent >= 0 {
        digits.checked_mul(10u64.checked_pow(exponent as u32)?)
    } else {
        Some(
            10u64
                .checked_pow((-exponent) as u32)
                .map_or(0, |divisor| digits / divisor),
        )
    }
}
