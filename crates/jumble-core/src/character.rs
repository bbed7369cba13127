// Character classification and single-character case mapping.

/// Returns `true` if `c` may appear in a word given to the finder.
///
/// Any Unicode letter qualifies; digits, punctuation and whitespace do not.
/// The engine itself treats characters as opaque, so this is only consulted
/// when validating raw user input.
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic()
}

/// Returns `true` if `c` is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c.is_uppercase()
}

/// Returns `true` if `c` is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c.is_lowercase()
}

/// Lowercase a single character, without multi-character expansions.
///
/// `char::to_lowercase` expands a handful of code points into several
/// characters. Word candidates must keep one character per input letter,
/// so such characters are left unchanged instead.
pub fn simple_lower(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Uppercase a single character, without multi-character expansions.
///
/// The counterpart of [`simple_lower`]; characters whose uppercase form is
/// longer than one character (for example `ß`) are left unchanged.
pub fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('ä'));
        assert!(!is_word_char('7'));
        assert!(!is_word_char(' '));
        assert!(!is_word_char('-'));
    }

    #[test]
    fn simple_lower_basic() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_lower('a'), 'a');
        assert_eq!(simple_lower('Ä'), 'ä');
    }

    #[test]
    fn simple_lower_keeps_expanding_chars() {
        // 'İ' lowercases to "i\u{307}" (two chars); it must stay unchanged.
        assert_eq!(simple_lower('İ'), 'İ');
    }

    #[test]
    fn simple_upper_basic() {
        assert_eq!(simple_upper('a'), 'A');
        assert_eq!(simple_upper('ö'), 'Ö');
        // 'ß' uppercases to "SS"; it must stay unchanged.
        assert_eq!(simple_upper('ß'), 'ß');
    }
}
