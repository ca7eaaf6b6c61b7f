//! Human-readable rendering of search outcomes.

use std::fmt::Write;

use marquee_core::{RankingMode, SearchOutcome};

pub const FOOTER: &str =
    "Use `marquee usage` for search specifics and make a ticket to request a movie";

/// Usage text describing the query language.
pub const USAGE: &str = "\
Search Command
Usage: marquee search <query>

Search for movies based on various criteria. Any combination of the following
parameters may be used; quote values that contain spaces:
- title: Search by movie title (e.g. title:Inception). Accounts for minor spelling mistakes.
- actor: Search by actor name (e.g. actor:\"Leonardo DiCaprio\"). Accounts for minor spelling errors.
- year: Filter by release year or range (e.g. year:2010 or year:2000-2010).
- duration: Filter by movie duration in minutes (e.g. duration:90-120).
- rating: Filter by movie rating (e.g. rating:8.5 or rating:7.5-9.0).
- votes: Filter by the number of votes (e.g. votes:100K-1M).

When title or actor is included, the 5 closest matches within the set of movies
meeting the hard conditions (year, duration, rating, votes) are returned. If both
are given, title is used and the response notes that actor was ignored. If only
hard conditions are supplied, the first five matching movies in catalog order
are returned.

Example: marquee search year:2010 duration:90-120 rating:8.5-9.0";

/// Renders the full response for one search.
pub fn render_response(outcome: &SearchOutcome<'_>) -> String {
    let mut response = String::new();

    if !outcome.echo.is_empty() {
        let _ = writeln!(response, "> search {}", outcome.echo);
    }

    let _ = writeln!(
        response,
        "{} in the set of movies{}",
        headline(outcome),
        criteria_clause(outcome)
    );

    if outcome.results.is_empty() {
        let _ = writeln!(response, "No movies matched.");
    }
    for (index, ranked) in outcome.results.iter().enumerate() {
        let _ = writeln!(
            response,
            "{}. {} [more info]({})",
            index + 1,
            ranked.record.title,
            ranked.record.link
        );
    }

    response.push_str(FOOTER);
    response
}

fn headline(outcome: &SearchOutcome<'_>) -> String {
    let query = &outcome.query;
    match (outcome.ranking, &query.title, &query.actor) {
        (RankingMode::Title, Some(title), Some(actor)) => {
            format!("Returning the closest matches for {title} (actor {actor} ignored)")
        }
        (RankingMode::Title, Some(value), _) | (RankingMode::Actor, _, Some(value)) => {
            format!("Returning the closest matches for {value}")
        }
        _ => "Returning the first five matches".to_string(),
    }
}

fn criteria_clause(outcome: &SearchOutcome<'_>) -> String {
    let query = &outcome.query;
    if !query.has_hard_criteria() {
        return String::new();
    }

    let parts: Vec<String> = [
        query.year.as_ref().map(|v| format!("made in the year {v}")),
        query.duration.as_ref().map(|v| format!("lasting between {v} minutes")),
        query.rating.as_ref().map(|v| format!("with a rating of {v}")),
        query.votes.as_ref().map(|v| format!("having between {v} votes")),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!(" {}", parts.join(", "))
    }
}
