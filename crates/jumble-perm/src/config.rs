// Enumeration state shared by the traversal variants.

use crate::indices::IndexPermutation;

/// Minimum candidate length. Shorter prefixes are never emitted; a single
/// letter is not a candidate word.
pub const MIN_CANDIDATE_LEN: usize = 2;

/// State of one enumeration session.
///
/// Holds the index permutation buffer, the prefix length of the next
/// candidate to emit, and the exhaustion flag. All mutation during a
/// session happens here; the permuter that drives it stays immutable.
/// Buffers are sized at [`reset`] time and do not grow during a session.
///
/// [`reset`]: PermConfig::reset
pub struct PermConfig {
    /// Index permutation over the letter positions.
    pub indices: IndexPermutation,
    /// Prefix length of the next candidate to emit.
    pub emit_len: usize,
    /// Set once every ordering has been visited. Further pulls are no-ops.
    pub done: bool,
}

impl PermConfig {
    /// Create a configuration for a letter sequence of length `len`.
    pub fn new(len: usize) -> Self {
        Self {
            indices: IndexPermutation::new(len),
            emit_len: MIN_CANDIDATE_LEN,
            done: len < MIN_CANDIDATE_LEN,
        }
    }

    /// Reset to the start of a fresh session over `len` letters.
    ///
    /// Sequences shorter than [`MIN_CANDIDATE_LEN`] are exhausted from the
    /// start: they have one trivial ordering but no candidate to emit.
    pub fn reset(&mut self, len: usize) {
        self.indices.reset(len);
        self.emit_len = MIN_CANDIDATE_LEN;
        self.done = len < MIN_CANDIDATE_LEN;
    }
}
