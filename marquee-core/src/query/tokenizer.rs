//! Shell-style word splitting for query strings.
//!
//! Words are separated by whitespace. Single quotes keep their contents
//! verbatim, double quotes allow `\"` and `\\` escapes, and a backslash outside
//! quotes escapes the following character. Quotes may start mid-word, so
//! `title:"The Matrix"` yields the single word `title:The Matrix`.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::errors::SearchError;

/// Splits `input` into words.
///
/// # Errors
/// - `SearchError::UnterminatedQuote` - A quote is opened but never closed
pub fn split_words(input: &str) -> Result<Vec<String>, SearchError> {
    Tokenizer::new(input).run()
}

struct Tokenizer<'a> {
    chars: Peekable<CharIndices<'a>>,
    words: Vec<String>,
    current: String,
    // A word exists even when empty, e.g. after `""`.
    in_word: bool,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            words: Vec::new(),
            current: String::new(),
            in_word: false,
        }
    }

    fn run(mut self) -> Result<Vec<String>, SearchError> {
        while let Some((position, ch)) = self.chars.next() {
            match ch {
                c if c.is_whitespace() => self.finish_word(),
                '\'' => {
                    self.in_word = true;
                    self.read_single_quoted(position)?;
                }
                '"' => {
                    self.in_word = true;
                    self.read_double_quoted(position)?;
                }
                '\\' => {
                    self.in_word = true;
                    // A trailing backslash has nothing to escape and stays literal.
                    let escaped = self.chars.next().map_or('\\', |(_, next)| next);
                    self.current.push(escaped);
                }
                c => {
                    self.in_word = true;
                    self.current.push(c);
                }
            }
        }
        self.finish_word();
        Ok(self.words)
    }

    fn read_single_quoted(&mut self, opened_at: usize) -> Result<(), SearchError> {
        for (_, ch) in self.chars.by_ref() {
            if ch == '\'' {
                return Ok(());
            }
            self.current.push(ch);
        }
        Err(SearchError::UnterminatedQuote {
            position: opened_at,
        })
    }

    fn read_double_quoted(&mut self, opened_at: usize) -> Result<(), SearchError> {
        while let Some((_, ch)) = self.chars.next() {
            match ch {
                '"' => return Ok(()),
                '\\' => match self.chars.peek() {
                    Some(&(_, next @ ('"' | '\\'))) => {
                        self.chars.next();
                        self.current.push(next);
                    }
                    _ => self.current.push('\\'),
                },
                c => self.current.push(c),
            }
        }
        Err(SearchError::UnterminatedQuote {
            position: opened_at,
        })
    }

    fn finish_word(&mut self) {
        if self.in_word {
            self.words.push(std::mem::take(&mut self.current));
            self.in_word = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &str) -> Vec<String> {
        split_words(input).unwrap()
    }

    #[test]
    fn test_whitespace_separated_words() {
        assert_eq!(words("year:2010  rating:8.5"), vec!["year:2010", "rating:8.5"]);
        assert_eq!(words("   "), Vec::<String>::new());
        assert_eq!(words(""), Vec::<String>::new());
    }

    #[test]
    fn test_quoted_values_keep_spaces() {
        assert_eq!(
            words(r#"title:"The Dark Knight" year:2008"#),
            vec!["title:The Dark Knight", "year:2008"]
        );
        assert_eq!(
            words("actor:'Leonardo DiCaprio'"),
            vec!["actor:Leonardo DiCaprio"]
        );
        assert_eq!(words(r#""title:Up" x"#), vec!["title:Up", "x"]);
    }

    #[test]
    fn test_escapes() {
        assert_eq!(words(r#"title:"Say \"Hi\"""#), vec![r#"title:Say "Hi""#]);
        assert_eq!(words(r"title:Wall\ E"), vec!["title:Wall E"]);
        assert_eq!(words(r"'a\b'"), vec![r"a\b"]);
        assert_eq!(words(r#""a\b""#), vec![r"a\b"]);
    }

    #[test]
    fn test_empty_quotes_produce_empty_word() {
        assert_eq!(words(r#"'' title:x"#), vec!["", "title:x"]);
    }

    #[test]
    fn test_unterminated_quote_reports_position() {
        assert!(matches!(
            split_words(r#"year:2010 title:"Inception"#),
            Err(SearchError::UnterminatedQuote { position: 16 })
        ));
        assert!(split_words("actor:'Tom").is_err());
    }
}
