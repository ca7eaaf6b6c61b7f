//! Movie catalog loading.
//!
//! The catalog is a flat text file with one movie per line, each line holding
//! eleven double-quoted fields separated by `", "`. Lines with any other field
//! count are skipped without failing the load.

pub mod cache;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::{CatalogError, SearchError};
use crate::parsing::{VotesMode, parse_actors, parse_duration, parse_votes};

pub use cache::CatalogCache;

const FIELD_DELIMITER: &str = "\", \"";
const FIELD_COUNT: usize = 11;

/// Single catalog entry.
///
/// Numeric attributes are stored as written and parsed when a filter needs
/// them, so a row with an unreadable value is still listed but never matches a
/// criterion on that value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRecord {
    pub title: String,
    /// Opaque reference URL
    pub link: String,
    pub year: String,
    /// Runtime such as `2h 15m`
    pub duration: String,
    pub age_requirement: String,
    pub rating: String,
    /// Vote count such as `1.2M`
    pub votes: String,
    pub metascore: String,
    pub plot: String,
    pub image_url: String,
    /// Free-text credits line
    pub actors: String,
}

impl MovieRecord {
    /// Builds a record from one catalog line.
    ///
    /// Returns `None` unless the line splits into exactly eleven fields.
    pub fn from_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.trim().split(FIELD_DELIMITER).collect();
        if fields.len() != FIELD_COUNT {
            return None;
        }

        Some(Self {
            title: fields[0].trim_matches('"').to_string(),
            link: fields[1].to_string(),
            year: fields[2].to_string(),
            duration: fields[3].to_string(),
            age_requirement: fields[4].to_string(),
            rating: fields[5].to_string(),
            votes: fields[6].to_string(),
            metascore: fields[7].to_string(),
            plot: fields[8].to_string(),
            image_url: fields[9].to_string(),
            actors: fields[10].trim_matches('"').to_string(),
        })
    }

    /// Release year as an integer, if readable.
    pub fn release_year(&self) -> Option<i64> {
        self.year.trim().parse().ok()
    }

    /// Runtime in minutes.
    ///
    /// # Errors
    /// - `SearchError::MalformedDuration` - Runtime text has no `h`/`m` component
    pub fn duration_minutes(&self) -> Result<i64, SearchError> {
        parse_duration(&self.duration)
    }

    /// Rating as a real number, if readable.
    pub fn rating_value(&self) -> Option<f64> {
        self.rating.trim().parse().ok()
    }

    /// Vote count interpreted in `mode`.
    ///
    /// # Errors
    /// - `SearchError::MalformedVotes` - Vote text is not a number with optional suffix
    pub fn vote_count(&self, mode: VotesMode) -> Result<u64, SearchError> {
        parse_votes(&self.votes, mode)
    }

    /// Individual names from the credits line.
    pub fn actor_names(&self) -> Vec<String> {
        parse_actors(&self.actors)
    }
}

/// Ordered, read-only collection of catalog records.
///
/// File order is preserved and acts as the tie-break and fallback order when
/// ranking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<MovieRecord>,
    skipped_rows: usize,
}

impl Catalog {
    /// Parses catalog lines, dropping rows that are not well-formed.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut records = Vec::new();
        let mut skipped_rows = 0;

        for (index, line) in lines.into_iter().enumerate() {
            match MovieRecord::from_line(line.as_ref()) {
                Some(record) => records.push(record),
                None => {
                    skipped_rows += 1;
                    tracing::trace!("Skipping malformed catalog row {}", index + 1);
                }
            }
        }

        tracing::debug!(
            "Loaded {} catalog records ({} malformed rows skipped)",
            records.len(),
            skipped_rows
        );

        Self {
            records,
            skipped_rows,
        }
    }

    /// Reads and parses every line provided by `source`.
    ///
    /// # Errors
    /// - `CatalogError::Io` - The source could not be read
    pub fn load(source: &dyn CatalogSource) -> Result<Self, CatalogError> {
        let lines = source.read_lines()?;
        Ok(Self::from_lines(lines))
    }

    /// Records in file order.
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Number of well-formed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of rows dropped for having the wrong field count.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}

/// Supplier of raw catalog lines.
pub trait CatalogSource: Send + Sync + std::fmt::Debug {
    /// Returns every line of the catalog in storage order.
    ///
    /// # Errors
    /// - `CatalogError::Io` - Underlying storage could not be read
    fn read_lines(&self) -> Result<Vec<String>, CatalogError>;
}

/// Catalog stored as a UTF-8 text file.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalog {
    fn read_lines(&self) -> Result<Vec<String>, CatalogError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(contents.lines().map(str::to_string).collect())
    }
}

/// Catalog held in memory, mainly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    lines: Vec<String>,
}

impl InMemoryCatalog {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl CatalogSource for InMemoryCatalog {
    fn read_lines(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.lines.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOY_STORY: &str = r#""Toy Story", "https://example.org/tt0114709", "1995", "1h 21m", "G", "8.3", "1.1M", "95", "A cowboy doll is threatened by a new spaceman action figure.", "https://example.org/toy.jpg", "Tom Hanks, Tim Allen and Don Rickles in Toy Story""#;

    #[test]
    fn test_well_formed_row() {
        let record = MovieRecord::from_line(TOY_STORY).unwrap();

        assert_eq!(record.title, "Toy Story");
        assert_eq!(record.link, "https://example.org/tt0114709");
        assert_eq!(record.release_year(), Some(1995));
        assert_eq!(record.duration_minutes().unwrap(), 81);
        assert_eq!(record.age_requirement, "G");
        assert_eq!(record.rating_value(), Some(8.3));
        assert_eq!(record.vote_count(VotesMode::Exact).unwrap(), 1_100_000);
        assert_eq!(record.metascore, "95");
        assert_eq!(record.image_url, "https://example.org/toy.jpg");
        assert_eq!(
            record.actor_names(),
            vec!["Tom Hanks", "Tim Allen", "Don Rickles"]
        );
    }

    #[test]
    fn test_wrong_field_count_rejected() {
        assert!(MovieRecord::from_line(r#""Only", "three", "fields""#).is_none());
        assert!(MovieRecord::from_line("").is_none());

        let twelve = format!(r#"{TOY_STORY}, "extra""#);
        assert!(MovieRecord::from_line(&twelve).is_none());
    }

    #[test]
    fn test_unreadable_year_still_loads() {
        let line = TOY_STORY.replace("\"1995\"", "\"unknown\"");
        let record = MovieRecord::from_line(&line).unwrap();
        assert_eq!(record.release_year(), None);
    }

    #[test]
    fn test_catalog_skips_malformed_rows_in_order() {
        let second = TOY_STORY.replace("Toy Story\"", "Toy Story 2\"");
        let catalog = Catalog::from_lines([TOY_STORY, "garbage", second.as_str()]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.skipped_rows(), 1);
        assert_eq!(catalog.records()[0].title, "Toy Story");
        assert_eq!(catalog.records()[1].title, "Toy Story 2");
    }

    #[test]
    fn test_file_catalog_reads_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies_database.txt");
        std::fs::write(&path, format!("{TOY_STORY}\n\n{TOY_STORY}\n")).unwrap();

        let catalog = Catalog::load(&FileCatalog::new(&path)).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.skipped_rows(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = FileCatalog::new("/definitely/not/here/movies.txt");
        assert!(matches!(
            Catalog::load(&source),
            Err(CatalogError::Io { .. })
        ));
    }

    #[test]
    fn test_in_memory_source() {
        let source = InMemoryCatalog::new(vec![TOY_STORY.to_string()]);
        let catalog = Catalog::load(&source).unwrap();
        assert_eq!(catalog.records()[0].title, "Toy Story");
    }
}
