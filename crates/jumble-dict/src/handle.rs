// JumbleHandle: top-level integration point for the word finder.
//
// Owns the dictionary oracle and the finder options, and validates raw
// user input before handing it to the pipeline. The engine below performs
// no validation of its own and treats the letters as opaque characters.

use jumble_core::MAX_LETTERS;
use jumble_core::character::is_word_char;

use crate::dictionary::Dictionary;
use crate::finder::{self, FindOptions};

/// Error type for rejected finder input.
#[derive(Debug, thiserror::Error)]
pub enum FindError {
    /// Input was empty or whitespace only.
    #[error("no letters given")]
    EmptyInput,
    /// Input contained a character that cannot appear in a word.
    #[error("input contains a non-letter character: {ch:?}")]
    NotAlphabetic { ch: char },
    /// Input exceeded the enumeration limit.
    #[error("too many letters: {count} (maximum is {max})")]
    TooManyLetters { count: usize, max: usize },
}

/// Parse and validate raw finder input into a letter sequence.
///
/// Surrounding whitespace is trimmed. Every remaining character must be a
/// letter, and at most [`MAX_LETTERS`] of them are accepted -- enumeration
/// work grows factorially with the count. A single letter is valid input;
/// it simply produces no candidates downstream.
pub fn parse_letters(input: &str) -> Result<Vec<char>, FindError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FindError::EmptyInput);
    }

    let letters: Vec<char> = trimmed.chars().collect();
    for &ch in &letters {
        if !is_word_char(ch) {
            return Err(FindError::NotAlphabetic { ch });
        }
    }
    if letters.len() > MAX_LETTERS {
        return Err(FindError::TooManyLetters {
            count: letters.len(),
            max: MAX_LETTERS,
        });
    }
    Ok(letters)
}

/// Top-level handle owning a dictionary and finder options.
pub struct JumbleHandle {
    dictionary: Box<dyn Dictionary>,
    options: FindOptions,
}

impl JumbleHandle {
    /// Create a handle over the given dictionary with default options.
    pub fn new(dictionary: Box<dyn Dictionary>) -> Self {
        Self {
            dictionary,
            options: FindOptions::default(),
        }
    }

    /// Only consider full-length arrangements (proper anagrams).
    pub fn set_full_only(&mut self, full_only: bool) {
        self.options.full_only = full_only;
    }

    /// Lowercase input before matching against the dictionary.
    pub fn set_case_fold(&mut self, case_fold: bool) {
        self.options.case_fold = case_fold;
    }

    /// Find every dictionary word formed from the input letters.
    ///
    /// Words are returned shortest first, then alphabetically.
    pub fn find(&self, input: &str) -> Result<Vec<String>, FindError> {
        let letters = parse_letters(input)?;
        Ok(finder::find_words(
            &letters,
            self.dictionary.as_ref(),
            &self.options,
        ))
    }

    /// The deduplicated candidate set for the input letters, without
    /// dictionary filtering, in the same deterministic order as [`find`].
    ///
    /// [`find`]: JumbleHandle::find
    pub fn candidates(&self, input: &str) -> Result<Vec<String>, FindError> {
        let letters = parse_letters(input)?;
        let mut candidates: Vec<String> = finder::candidate_set(&letters, &self.options)
            .into_iter()
            .collect();
        finder::sort_words(&mut candidates);
        Ok(candidates)
    }
}
