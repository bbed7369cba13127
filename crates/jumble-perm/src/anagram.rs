// Anagram traversal: full-length arrangements only.

use crate::Permuter;
use crate::config::{MIN_CANDIDATE_LEN, PermConfig};

/// Traversal yielding only full-length arrangements of a letter sequence.
///
/// One candidate per index ordering, N! in total, in the driver's
/// lexicographic order. Shorter substrings are skipped entirely, so this
/// variant finds proper anagrams rather than subwords. Sequences shorter
/// than two letters yield nothing, matching the subword traversal's
/// minimum candidate length.
pub struct AnagramPermuter<'a> {
    letters: &'a [char],
}

impl<'a> AnagramPermuter<'a> {
    /// Create a permuter over the given letter sequence.
    pub fn new(letters: &'a [char]) -> Self {
        Self { letters }
    }
}

impl Permuter for AnagramPermuter<'_> {
    type Config = PermConfig;

    fn new_config(&self) -> PermConfig {
        PermConfig::new(self.letters.len())
    }

    fn prepare(&self, config: &mut PermConfig) {
        config.reset(self.letters.len());
        // emit_len is pinned to the full length for this traversal.
        config.emit_len = self.letters.len().max(MIN_CANDIDATE_LEN);
    }

    fn next(&self, config: &mut PermConfig, output: &mut String) -> bool {
        if config.done {
            return false;
        }

        output.clear();
        for &position in config.indices.as_slice() {
            output.push(self.letters[position]);
        }

        if !config.indices.advance() {
            config.done = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_all(input: &str) -> Vec<String> {
        let letters: Vec<char> = input.chars().collect();
        let permuter = AnagramPermuter::new(&letters);
        let mut config = permuter.new_config();
        permuter.prepare(&mut config);

        let mut candidates = Vec::new();
        let mut candidate = String::new();
        while permuter.next(&mut config, &mut candidate) {
            candidates.push(candidate.clone());
        }
        candidates
    }

    #[test]
    fn cat_yields_six_arrangements() {
        assert_eq!(
            collect_all("cat"),
            vec!["cat", "cta", "act", "atc", "tca", "tac"]
        );
    }

    #[test]
    fn every_candidate_is_full_length() {
        assert!(collect_all("abcd").iter().all(|c| c.len() == 4));
        assert_eq!(collect_all("abcd").len(), 24);
    }

    #[test]
    fn short_inputs_yield_nothing() {
        assert!(collect_all("").is_empty());
        assert!(collect_all("a").is_empty());
    }

    #[test]
    fn next_after_exhaustion_is_noop() {
        let letters: Vec<char> = "ab".chars().collect();
        let permuter = AnagramPermuter::new(&letters);
        let mut config = permuter.new_config();
        permuter.prepare(&mut config);

        let mut candidate = String::new();
        assert!(permuter.next(&mut config, &mut candidate));
        assert!(permuter.next(&mut config, &mut candidate));
        assert!(!permuter.next(&mut config, &mut candidate));
        assert!(!permuter.next(&mut config, &mut candidate));
    }
}
