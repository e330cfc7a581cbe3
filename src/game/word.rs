//! Input normalization for secret words and guessed letters
//!
//! Everything that reaches the state machine passes through here first, so the
//! rest of the crate can assume uppercase ASCII letters only.

/// Uppercase `input` and drop everything that is not `A`–`Z`.
///
/// Blank or letter-free input normalizes to the empty string, which callers
/// treat as "no word". Case mapping happens before filtering, so characters
/// whose uppercase form expands into ASCII letters (e.g. `ß` → `SS`) are kept.
pub fn normalize_word(input: &str) -> String {
    input
        .to_uppercase()
        .chars()
        .filter(char::is_ascii_uppercase)
        .collect()
}

/// Normalize a single character to an uppercase guess letter.
#[inline]
pub fn normalize_letter(c: char) -> Option<char> {
    let upper = c.to_ascii_uppercase();
    upper.is_ascii_uppercase().then_some(upper)
}

/// Normalize a key name as delivered by a keyboard event.
///
/// Only keys that normalize to exactly one letter count as guesses, so named
/// keys such as `Enter` or `Shift` are ignored rather than treated as words.
pub fn normalize_key(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => normalize_letter(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_word_strips_noise() {
        assert_eq!(normalize_word("  hello123!! "), "HELLO");
        assert_eq!(normalize_word("Rust-Lang"), "RUSTLANG");
        assert_eq!(normalize_word(""), "");
        assert_eq!(normalize_word("1234 !?"), "");
    }

    #[test]
    fn test_normalize_word_non_ascii() {
        // Accented letters are not A-Z and are dropped
        assert_eq!(normalize_word("café"), "CAF");
        assert_eq!(normalize_word("straße"), "STRASSE");
    }

    #[test]
    fn test_normalize_letter() {
        assert_eq!(normalize_letter('a'), Some('A'));
        assert_eq!(normalize_letter('Z'), Some('Z'));
        assert_eq!(normalize_letter('5'), None);
        assert_eq!(normalize_letter(' '), None);
        assert_eq!(normalize_letter('é'), None);
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("q"), Some('Q'));
        assert_eq!(normalize_key("Q"), Some('Q'));
        assert_eq!(normalize_key("Enter"), None);
        assert_eq!(normalize_key("Shift"), None);
        assert_eq!(normalize_key("7"), None);
        assert_eq!(normalize_key(""), None);
    }

    proptest! {
        #[test]
        fn prop_normalize_word_letters_only(s in ".*") {
            let out = normalize_word(&s);
            prop_assert!(out.chars().all(|c| c.is_ascii_uppercase()));
        }

        #[test]
        fn prop_normalize_word_idempotent(s in ".*") {
            let once = normalize_word(&s);
            prop_assert_eq!(normalize_word(&once), once);
        }

        #[test]
        fn prop_normalize_key_single_letter(key in ".{0,8}") {
            if let Some(c) = normalize_key(&key) {
                prop_assert!(c.is_ascii_uppercase());
                prop_assert_eq!(key.chars().count(), 1);
            }
        }
    }
}
