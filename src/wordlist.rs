use std::fs;
use std::path::Path;

use im::OrdSet;
use tracing::warn;

use crate::error::{Error, Result};

/// A candidate word. Words are stored upper-cased and restricted to `A..Z`,
/// so the solver can compare letters bytewise.
pub type Word = String;

/// The dictionary every slot's domain starts from.
///
/// Backed by a persistent ordered set: seeding a domain per slot is a cheap
/// structural-sharing clone, and iteration order is stable across runs.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: OrdSet<Word>,
}

impl WordList {
    /// Builds a word list from string-like items.
    ///
    /// Entries are trimmed and upper-cased; blank entries are dropped, and
    /// entries containing characters outside `A..Z` are skipped with a
    /// warning. Duplicates collapse.
    pub fn from_words<I, S>(words: I) -> WordList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = OrdSet::new();
        for raw in words {
            if let Some(word) = normalize(raw.as_ref()) {
                set.insert(word);
            }
        }
        WordList { words: set }
    }

    /// Reads a word list file, one candidate per line.
    pub fn from_path(path: impl AsRef<Path>) -> Result<WordList> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(WordList::from_words(text.lines()))
    }

    pub fn words(&self) -> &OrdSet<Word> {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize(raw: &str) -> Option<Word> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let word = trimmed.to_ascii_uppercase();
    if !word.bytes().all(|b| b.is_ascii_uppercase()) {
        warn!("skipping word list entry {:?}: not A..Z", trimmed);
        return None;
    }
    Some(word)
}

#[cfg(test)]
mod tests {
    use super::WordList;

    #[test]
    fn entries_are_trimmed_and_upper_cased() {
        let words = WordList::from_words(["  cat ", "Dog", "TIE"]);
        assert_eq!(3, words.len());
        assert!(words.contains("CAT"));
        assert!(words.contains("DOG"));
        assert!(words.contains("TIE"));
        assert!(!words.contains("cat"));
    }

    #[test]
    fn blank_and_non_alphabetic_entries_are_skipped() {
        let words = WordList::from_words(["", "   ", "don't", "route66", "café", "OK"]);
        assert_eq!(1, words.len());
        assert!(words.contains("OK"));
    }

    #[test]
    fn duplicates_collapse() {
        let words = WordList::from_words(["cat", "CAT", " Cat "]);
        assert_eq!(1, words.len());
    }

    #[test]
    fn iteration_is_sorted() {
        let words = WordList::from_words(["dog", "ant", "cat"]);
        let collected: Vec<&str> = words.iter().map(String::as_str).collect();
        assert_eq!(vec!["ANT", "CAT", "DOG"], collected);
    }
}
