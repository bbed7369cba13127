// Candidate collection and dictionary filtering pipeline.

use hashbrown::HashSet;
use jumble_core::case::fold_lower;
use jumble_perm::Permuter;
use jumble_perm::anagram::AnagramPermuter;
use jumble_perm::subword::SubwordPermuter;

use crate::dictionary::Dictionary;

/// Options controlling candidate enumeration and filtering.
#[derive(Debug, Clone)]
pub struct FindOptions {
    /// Only consider full-length arrangements (proper anagrams). When
    /// false, every subword length down to two letters is considered.
    pub full_only: bool,
    /// Lowercase the input letters before enumeration so that candidates
    /// match the lowercase word-list keys. Disable to match candidates
    /// against the dictionary exactly as typed.
    pub case_fold: bool,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            full_only: false,
            case_fold: true,
        }
    }
}

/// Collect every distinct candidate arrangement of `letters`.
///
/// This is the uniqueness set of the pipeline: index orderings over
/// repeated letters produce identical strings, and the set collapses them
/// so the dictionary is consulted once per distinct candidate.
pub fn candidate_set(letters: &[char], options: &FindOptions) -> HashSet<String> {
    let folded;
    let letters = if options.case_fold {
        match fold_lower(letters) {
            Some(lowered) => {
                folded = lowered;
                folded.as_slice()
            }
            None => letters,
        }
    } else {
        letters
    };

    let mut set = HashSet::new();
    if options.full_only {
        collect(AnagramPermuter::new(letters), &mut set);
    } else {
        collect(SubwordPermuter::new(letters), &mut set);
    }
    set
}

/// Drain a permuter into the uniqueness set, reusing one output buffer.
fn collect<P: Permuter>(permuter: P, set: &mut HashSet<String>) {
    let mut config = permuter.new_config();
    permuter.prepare(&mut config);

    let mut candidate = String::new();
    while permuter.next(&mut config, &mut candidate) {
        if !set.contains(candidate.as_str()) {
            set.insert(candidate.clone());
        }
    }
}

/// Find every dictionary word formed from the letters.
///
/// Enumerates candidates per `options`, deduplicates, filters through the
/// dictionary, and returns the surviving words sorted shortest first and
/// alphabetically within a length.
pub fn find_words(
    letters: &[char],
    dictionary: &dyn Dictionary,
    options: &FindOptions,
) -> Vec<String> {
    let mut found: Vec<String> = candidate_set(letters, options)
        .into_iter()
        .filter(|candidate| dictionary.contains(candidate))
        .collect();
    sort_words(&mut found);
    found
}

/// Order words shortest first, then alphabetically.
pub fn sort_words(words: &mut [String]) {
    words.sort_by(|a, b| {
        a.chars()
            .count()
            .cmp(&b.chars().count())
            .then_with(|| a.as_str().cmp(b.as_str()))
    });
}
