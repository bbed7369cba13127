// Case pattern detection and folding.

use crate::character::{is_lower, is_upper, simple_lower};

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word.
    NoLetters,
    /// All letters are lowercase: "stone".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Stone".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "stOne".
    Complex,
    /// All letters are uppercase: "STONE".
    AllUpper,
}

/// Detect the case pattern of a character slice.
///
/// Caseless characters are ignored when determining the pattern.
pub fn detect_case(word: &[char]) -> CaseType {
    if word.is_empty() {
        return CaseType::NoLetters;
    }

    let mut first_uc = false;
    let mut rest_lc = true;
    let mut all_uc = true;
    let mut no_letters = true;

    if is_upper(word[0]) {
        first_uc = true;
        no_letters = false;
    }
    if is_lower(word[0]) {
        all_uc = false;
        no_letters = false;
    }

    for &c in &word[1..] {
        if is_upper(c) {
            no_letters = false;
            rest_lc = false;
        }
        if is_lower(c) {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        CaseType::NoLetters
    } else if all_uc {
        CaseType::AllUpper
    } else if first_uc && rest_lc {
        CaseType::FirstUpper
    } else if !first_uc && rest_lc {
        CaseType::AllLower
    } else {
        CaseType::Complex
    }
}

/// Lowercase every character of `word`, skipping the copy when the word is
/// already entirely lowercase.
pub fn fold_lower(word: &[char]) -> Option<Vec<char>> {
    match detect_case(word) {
        CaseType::AllLower | CaseType::NoLetters => None,
        _ => Some(word.iter().copied().map(simple_lower).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn detect_case_patterns() {
        assert_eq!(detect_case(&chars("stone")), CaseType::AllLower);
        assert_eq!(detect_case(&chars("Stone")), CaseType::FirstUpper);
        assert_eq!(detect_case(&chars("STONE")), CaseType::AllUpper);
        assert_eq!(detect_case(&chars("stOne")), CaseType::Complex);
        assert_eq!(detect_case(&chars("sTONE")), CaseType::Complex);
        assert_eq!(detect_case(&[]), CaseType::NoLetters);
    }

    #[test]
    fn fold_lower_skips_lowercase_words() {
        assert_eq!(fold_lower(&chars("stone")), None);
        assert_eq!(fold_lower(&chars("Stone")), Some(chars("stone")));
        assert_eq!(fold_lower(&chars("STONE")), Some(chars("stone")));
    }
}
