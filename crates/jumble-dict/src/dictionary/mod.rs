// Word validity oracle.

pub mod wordlist;

pub use wordlist::{WordlistDictionary, WordlistError};

/// Trait for word validity oracles.
///
/// The finder consults the oracle once per distinct candidate, after
/// deduplication. Implementations answer exact-match membership queries;
/// any case normalization happens before the query (word lists are
/// lowercased at load time, and the finder folds candidates to match).
pub trait Dictionary {
    /// Returns `true` if `word` is a known word.
    fn contains(&self, word: &str) -> bool;
}
