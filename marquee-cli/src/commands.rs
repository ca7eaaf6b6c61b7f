//! CLI command implementations

use anyhow::Context;
use clap::Subcommand;
use marquee_core::query::split_words;
use marquee_core::{CatalogCache, FileCatalog, MarqueeConfig, MovieSearch, SearchError};

use crate::present::{USAGE, render_response};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog, e.g. `search title:Inception year:2010`
    Search {
        /// Query words; a word the shell already unquoted is quoted again
        #[arg(required = true)]
        query: Vec<String>,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Explain the query language
    Usage,
}

/// Handle the CLI command
///
/// # Errors
/// - Catalog could not be read
/// - Query contained a malformed criterion or unclosed quote
pub fn handle_command(command: Commands, config: MarqueeConfig) -> anyhow::Result<()> {
    match command {
        Commands::Search { query, json } => search(&join_query_words(&query), json, config),
        Commands::Usage => {
            println!("{USAGE}");
            Ok(())
        }
    }
}

/// Rebuilds a single query string from shell arguments.
///
/// `marquee search title:"Schindler's List"` arrives as the one argument
/// `title:Schindler's List`. Such an argument is escaped so it reparses as the
/// same single word. An argument that already reads as one word, or whose later
/// words carry their own `key:`, is already query text and passes through.
pub fn join_query_words(words: &[String]) -> String {
    words
        .iter()
        .map(|word| {
            let is_query = word.split_whitespace().skip(1).any(|piece| piece.contains(':'));
            let is_single_word = split_words(word).is_ok_and(|parsed| parsed.len() == 1);
            if is_query || is_single_word {
                word.clone()
            } else {
                escape_word(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_word(word: &str) -> String {
    let mut escaped = String::with_capacity(word.len());
    for ch in word.chars() {
        if ch.is_whitespace() || matches!(ch, '\'' | '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Wraps a failed search, pointing at the usage text when the query is at fault.
fn search_failure(raw_query: &str, error: SearchError) -> anyhow::Error {
    if error.is_user_error() {
        anyhow::anyhow!("{error}\nSee `marquee usage` for the query syntax")
    } else {
        anyhow::Error::new(error).context(format!("search '{raw_query}' failed"))
    }
}

/// Run one query against the configured catalog
///
/// # Errors
/// - Catalog could not be read
/// - Query contained a malformed criterion or unclosed quote
pub fn search(raw_query: &str, json: bool, config: MarqueeConfig) -> anyhow::Result<()> {
    let cache = CatalogCache::new(FileCatalog::new(&config.catalog.path));
    let catalog = cache.snapshot().with_context(|| {
        format!(
            "could not load catalog from {}",
            config.catalog.path.display()
        )
    })?;

    tracing::debug!(
        "Searching {} records for '{}'",
        catalog.len(),
        raw_query
    );

    let search = MovieSearch::new(config.search);
    let outcome = search
        .search(&catalog, raw_query)
        .map_err(|error| search_failure(raw_query, error))?;

    if outcome.query.is_empty() {
        eprintln!("No recognized parameters; see `marquee usage`.");
    }
    for diagnostic in &outcome.diagnostics {
        eprintln!("Warning: {diagnostic}");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", render_response(&outcome));
    }

    Ok(())
}
