//! Rules section - checks the five composition rules.

use secrecy::{ExposeSecret, SecretString};

use crate::types::ConditionSet;

/// Punctuation accepted by the special character rule.
pub const SPECIAL_CHARS: [char; 20] = [
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', ',', '.', '?', '"', ':', '{', '}', '|',
    '<', '>',
];

/// Evaluates the composition rules against the password.
///
/// Length is counted in characters, not bytes. Letter classes are ASCII only
/// and the password is taken literally, without normalization.
///
/// # Arguments
/// * `password` - The password to check
/// * `min_length` - Characters needed for the length rule
///
/// # Returns
/// A `ConditionSet` with one flag per rule; all false for the empty password.
pub fn rules_section(password: &SecretString, min_length: usize) -> ConditionSet {
    let pwd = password.expose_secret();

    ConditionSet {
        has_min_length: pwd.chars().count() >= min_length,
        has_lowercase: pwd.chars().any(|c| c.is_ascii_lowercase()),
        has_uppercase: pwd.chars().any(|c| c.is_ascii_uppercase()),
        has_digit: pwd.chars().any(|c| c.is_ascii_digit()),
        has_special_char: pwd.chars().any(|c| SPECIAL_CHARS.contains(&c)),
    }
}
