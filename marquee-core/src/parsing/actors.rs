//! Actor credit lines such as `Tom Hanks, Tim Allen and Don Rickles in Toy Story`.

/// Splits a credits line into individual actor names.
///
/// Everything after the first ` in ` is treated as the movie title and dropped.
/// Names keep their original order and duplicates are not removed.
pub fn parse_actors(credits: &str) -> Vec<String> {
    let names = credits.split(" in ").next().unwrap_or_default();
    names
        .replace(" and ", ", ")
        .split(", ")
        .map(|name| name.trim().to_string())
        .collect()
}
