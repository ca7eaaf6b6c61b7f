//! End-to-end search scenarios over a small catalog file.

use marquee_core::{
    Catalog, CatalogCache, FileCatalog, MovieSearch, RankingMode, SearchError, VotesMode,
    config::SearchConfig,
};

const CATALOG: &str = r#""Inception", "https://example.org/inception", "2010", "2h 28m", "PG-13", "8.6", "2.4M", "74", "A thief steals secrets through dreams.", "https://example.org/inception.jpg", "Leonardo DiCaprio, Joseph Gordon-Levitt and Elliot Page in Inception"
"Little Fockers", "https://example.org/fockers", "2010", "1h 38m", "PG-13", "7.0", "96K", "27", "More family chaos.", "https://example.org/fockers.jpg", "Ben Stiller, Robert De Niro and Owen Wilson in Little Fockers"
"broken row with too few fields", "x"
"Batman Begins", "https://example.org/batman", "2005", "2h 20m", "PG-13", "9.0", "1.5M", "70", "A billionaire becomes a vigilante.", "https://example.org/batman.jpg", "Christian Bale, Michael Caine and Liam Neeson in Batman Begins"
"The Departed", "https://example.org/departed", "2006", "2h 31m", "R", "8.5", "1.4M", "85", "An undercover cop and a mole.", "https://example.org/departed.jpg", "Leonardo DiCaprio, Matt Damon and Jack Nicholson in The Departed"
"Toy Story", "https://example.org/toystory", "1995", "1h 21m", "G", "8.3", "1.1M", "95", "Toys come alive.", "https://example.org/toystory.jpg", "Tom Hanks, Tim Allen and Don Rickles in Toy Story"
"Toy Story 2", "https://example.org/toystory2", "1999", "1h 32m", "G", "7.9", "620K", "88", "Woody is stolen.", "https://example.org/toystory2.jpg", "Tom Hanks, Tim Allen and Joan Cusack in Toy Story 2"
"Cast Away", "https://example.org/castaway", "2000", "2h 23m", "PG-13", "7.8", "620K", "73", "Stranded on an island.", "https://example.org/castaway.jpg", "Tom Hanks, Helen Hunt and Paul Sanchez in Cast Away""#;

fn catalog() -> Catalog {
    Catalog::from_lines(CATALOG.lines())
}

fn titles(outcome: &marquee_core::SearchOutcome<'_>) -> Vec<String> {
    outcome
        .results
        .iter()
        .map(|ranked| ranked.record.title.clone())
        .collect()
}

#[test]
fn test_malformed_rows_never_become_entries() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 7);
    assert_eq!(catalog.skipped_rows(), 1);
}

#[test]
fn test_hard_criterion_keeps_file_order() {
    let catalog = catalog();
    let outcome = MovieSearch::default().search(&catalog, "year:2010").unwrap();

    assert_eq!(titles(&outcome), vec!["Inception", "Little Fockers"]);
    assert_eq!(outcome.ranking, RankingMode::CatalogOrder);
    assert!(outcome.results.iter().all(|r| r.score.is_none()));
}

#[test]
fn test_empty_query_returns_first_five() {
    let catalog = catalog();
    let outcome = MovieSearch::default().search(&catalog, "").unwrap();

    assert_eq!(
        titles(&outcome),
        vec![
            "Inception",
            "Little Fockers",
            "Batman Begins",
            "The Departed",
            "Toy Story"
        ]
    );
    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.echo, "");
    assert_eq!(outcome.matched, 7);
}

#[test]
fn test_misspelled_title_ranks_intended_movie_first() {
    let catalog = catalog();
    let outcome = MovieSearch::default()
        .search(&catalog, "title:Inceptoin")
        .unwrap();

    assert_eq!(outcome.results[0].record.title, "Inception");
    assert_eq!(outcome.results.len(), 5);
    assert_eq!(outcome.ranking, RankingMode::Title);
}

#[test]
fn test_title_with_filters() {
    let catalog = catalog();
    let outcome = MovieSearch::default()
        .search(&catalog, r#"title:"toy story" year:1990-2005 duration:80-100"#)
        .unwrap();

    assert_eq!(titles(&outcome), vec!["Toy Story", "Toy Story 2"]);
    assert_eq!(outcome.results[0].score, Some(100.0));
    assert_eq!(outcome.echo, "title:toy story year:1990-2005 duration:80-100");
}

#[test]
fn test_actor_search_matches_any_credit() {
    let catalog = catalog();
    let outcome = MovieSearch::default()
        .search(&catalog, "actor:'Leonardo DiCapro' rating:8-10")
        .unwrap();

    let top: Vec<String> = titles(&outcome).into_iter().take(2).collect();
    assert_eq!(top, vec!["Inception", "The Departed"]);
    assert_eq!(outcome.ranking, RankingMode::Actor);
}

#[test]
fn test_votes_range_with_suffixes() {
    let catalog = catalog();
    let outcome = MovieSearch::default()
        .search(&catalog, "votes:1M-2M")
        .unwrap();

    assert_eq!(
        titles(&outcome),
        vec!["Batman Begins", "The Departed", "Toy Story"]
    );
}

#[test]
fn test_legacy_votes_mode_is_selectable() {
    let catalog = catalog();
    let search = MovieSearch::new(SearchConfig {
        votes_mode: VotesMode::Legacy,
        ..SearchConfig::default()
    });

    let outcome = search.search(&catalog, "votes:1000000-2000000").unwrap();
    assert_eq!(
        titles(&outcome),
        vec!["Batman Begins", "The Departed", "Toy Story"]
    );
    assert!(matches!(
        search.search(&catalog, "votes:1.5M"),
        Err(SearchError::MalformedRange { .. })
    ));
}

#[test]
fn test_bad_tokens_do_not_abort() {
    let catalog = catalog();
    let outcome = MovieSearch::default()
        .search(&catalog, "please genre:drama year:2006")
        .unwrap();

    assert_eq!(titles(&outcome), vec!["The Departed"]);
    assert_eq!(outcome.diagnostics.len(), 2);
}

#[test]
fn test_malformed_criterion_is_request_failure() {
    let catalog = catalog();
    let search = MovieSearch::default();

    assert!(matches!(
        search.search(&catalog, "rating:good"),
        Err(SearchError::MalformedRange { .. })
    ));
    assert!(matches!(
        search.search(&catalog, "votes:lots"),
        Err(SearchError::MalformedVotes { .. })
    ));
}

#[test]
fn test_repeated_search_is_deterministic() {
    let catalog = catalog();
    let search = MovieSearch::default();

    for query in ["title:toy", "actor:hanks", "year:1990-2010", ""] {
        let first = search.search(&catalog, query).unwrap();
        let second = search.search(&catalog, query).unwrap();
        assert_eq!(first, second, "query '{query}' should be deterministic");
    }
}

#[test]
fn test_search_through_file_cache() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movies_database.txt");
    std::fs::write(&path, CATALOG).unwrap();

    let cache = CatalogCache::new(FileCatalog::new(&path));
    let snapshot = cache.snapshot().unwrap();
    let outcome = MovieSearch::default()
        .search(&snapshot, "title:'cast away'")
        .unwrap();

    assert_eq!(outcome.results[0].record.title, "Cast Away");
    assert_eq!(
        outcome.results[0].record.link,
        "https://example.org/castaway"
    );
}
