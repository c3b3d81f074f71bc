//! Word list loading utilities
//!
//! Reads newline-separated word files or converts the embedded constant.

use super::Vocabulary;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load a vocabulary from a newline-separated file
///
/// Blank lines are ignored; entries that are not five ASCII letters are
/// skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_nine::wordlists::loader::load_from_file;
///
/// let vocabulary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", vocabulary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vocabulary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let vocabulary = Vocabulary::new(parse_lines(&content));

    debug!(path = %path.display(), words = vocabulary.len(), "loaded word list");
    Ok(vocabulary)
}

/// Parse words from text, one per line
fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!(entry = line, error = %e, "skipping word list entry");
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_nine::wordlists::loader::words_from_slice;
/// use wordle_nine::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_lines_handles_blanks_and_case() {
        let words = parse_lines("Crane\n\n  slate  \nno\nirate\r\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir()
            .join(format!("wordle_nine_loader_{}.txt", std::process::id()));
        fs::write(&path, "crane\nslate\ncrane\nbad!!\n").unwrap();

        let vocabulary = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(vocabulary.len(), 2);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }
}
