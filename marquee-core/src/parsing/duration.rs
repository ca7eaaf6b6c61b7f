//! Runtime strings such as `2h 15m`.

use crate::errors::SearchError;

const MINUTES_PER_HOUR: i64 = 60;

/// Parses an hours/minutes runtime into total minutes.
///
/// Accepts `<N>h`, `<N>h <M>m` and `<M>m`. A missing component counts as zero.
///
/// # Errors
/// - `SearchError::MalformedDuration` - Neither `h` nor `m` is present, or a
///   numeral next to a unit marker is not an integer
pub fn parse_duration(input: &str) -> Result<i64, SearchError> {
    let malformed = || SearchError::MalformedDuration {
        input: input.to_string(),
    };

    let (hours, minutes) = if let Some((hours, remainder)) = input.split_once('h') {
        let hours = parse_numeral(hours).ok_or_else(malformed)?;
        let minutes = match remainder.split_once('m') {
            Some((minutes, _)) => parse_numeral(minutes).ok_or_else(malformed)?,
            None => 0,
        };
        (hours, minutes)
    } else if let Some((minutes, _)) = input.split_once('m') {
        (0, parse_numeral(minutes).ok_or_else(malformed)?)
    } else {
        return Err(malformed());
    };

    Ok(hours * MINUTES_PER_HOUR + minutes)
}

fn parse_numeral(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}
