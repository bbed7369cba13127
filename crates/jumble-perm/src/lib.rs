//! Permutation enumeration engine for the jumble word finder.
//!
//! Given a borrowed letter sequence of length N, this crate lazily produces
//! every candidate letter arrangement: all orderings of the indices `0..N`
//! in lexicographic order, expanded into prefix substrings. The full N!
//! permutation space is never materialized; enumeration advances one
//! candidate per pull over a single in-place index buffer.
//!
//! # Architecture
//!
//! - [`indices`] -- in-place lexicographic index permutation driver
//! - [`config`] -- enumeration state (index buffer, emit position, done flag)
//! - [`subword`] -- traversal yielding every prefix length 2..=N
//! - [`anagram`] -- traversal yielding full-length arrangements only
//! - [`iter`] -- `Iterator` adapter over a permuter and its configuration

pub mod anagram;
pub mod config;
pub mod indices;
pub mod iter;
pub mod subword;

/// Trait for candidate enumeration, abstracting over traversal variants.
///
/// The `prepare` + `next` pattern is a coroutine-like pull interface:
/// `prepare` initializes a configuration for a fresh enumeration session,
/// and each `next` call yields one candidate string. State lives entirely
/// in the configuration; the permuter itself is immutable and only borrows
/// the letter sequence.
pub trait Permuter {
    type Config;

    /// Create a configuration sized for this permuter's letter sequence.
    fn new_config(&self) -> Self::Config;

    /// Initialize the configuration for a fresh enumeration session.
    ///
    /// A configuration that has been partially or fully consumed can be
    /// prepared again; doing so starts the session over from the identity
    /// ordering. There is no way to resume a discarded session mid-stream.
    fn prepare(&self, config: &mut Self::Config);

    /// Write the next candidate into `output`.
    ///
    /// Returns `true` if a candidate was produced, `false` once the
    /// enumeration is exhausted. After exhaustion every further call
    /// returns `false` without touching `output` or the configuration.
    fn next(&self, config: &mut Self::Config, output: &mut String) -> bool;
}
