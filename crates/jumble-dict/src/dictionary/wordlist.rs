// Word-list backed dictionary.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use hashbrown::HashSet;
use jumble_core::character::simple_lower;

use crate::dictionary::Dictionary;

/// Error type for word-list loading.
#[derive(Debug, thiserror::Error)]
pub enum WordlistError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("word list contains no words")]
    Empty,
}

/// Dictionary backed by a plain-text word list, one word per line.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
/// Every word is lowercased at load time, so lookups expect lowercase
/// input. Suitable for the common system word lists
/// (`/usr/share/dict/words` and friends).
#[derive(Debug)]
pub struct WordlistDictionary {
    words: HashSet<String>,
}

impl WordlistDictionary {
    /// Load a word list from a reader.
    ///
    /// Returns [`WordlistError::Empty`] if no usable line was found; an
    /// empty dictionary would silently reject every candidate.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, WordlistError> {
        let mut words = HashSet::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.insert(word.chars().map(simple_lower).collect());
        }
        if words.is_empty() {
            return Err(WordlistError::Empty);
        }
        Ok(Self { words })
    }

    /// Load a word list from a file path.
    pub fn from_path(path: &Path) -> Result<Self, WordlistError> {
        Self::from_reader(std::fs::File::open(path)?)
    }

    /// Build a dictionary from an in-memory sequence of words.
    ///
    /// Mainly for tests and benchmarks. Words are lowercased like lines
    /// read from a file; an empty sequence yields [`WordlistError::Empty`].
    pub fn from_words<'a, I>(words: I) -> Result<Self, WordlistError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| w.chars().map(simple_lower).collect())
            .collect();
        if words.is_empty() {
            return Err(WordlistError::Empty);
        }
        Ok(Self { words })
    }

    /// Number of distinct words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordlistDictionary {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_and_normalizes_lines() {
        let input = "Cat\n\n# comment line\n  dog  \nBIRD\n";
        let dict = WordlistDictionary::from_reader(input.as_bytes()).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
        assert!(dict.contains("bird"));
        assert!(!dict.contains("Cat"));
        assert!(!dict.contains("fish"));
    }

    #[test]
    fn rejects_empty_input() {
        let err = WordlistDictionary::from_reader("# only comments\n\n".as_bytes()).unwrap_err();
        assert!(matches!(err, WordlistError::Empty));
    }

    #[test]
    fn from_words_deduplicates() {
        let dict = WordlistDictionary::from_words(["cat", "CAT", "dog"]).unwrap();
        assert_eq!(dict.len(), 2);
    }
}
