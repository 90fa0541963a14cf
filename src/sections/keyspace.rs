//! Keyspace section - brute-force search space and crack time estimate.

use num_bigint::BigUint;
use secrecy::{ExposeSecret, SecretString};

use crate::types::ConditionSet;

/// Lowercase letters are always part of the alphabet.
pub const LOWERCASE_POOL: u32 = 26;
pub const UPPERCASE_POOL: u32 = 26;
pub const DIGIT_POOL: u32 = 10;
pub const SPECIAL_POOL: u32 = 32;

/// Exact brute-force estimate for one password.
///
/// The crack time is the rational `guess_count / guesses_per_second`; it is
/// kept unreduced so formatting can work in whole or fractional seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyspaceEstimate {
    alphabet_size: u32,
    exponent: u32,
    guess_count: BigUint,
    guesses_per_second: u64,
    saturated: bool,
}

impl KeyspaceEstimate {
    pub fn alphabet_size(&self) -> u32 {
        self.alphabet_size
    }

    /// Password length used as the exponent, after capping.
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    pub fn guess_count(&self) -> &BigUint {
        &self.guess_count
    }

    pub fn guesses_per_second(&self) -> u64 {
        self.guesses_per_second
    }

    pub fn is_saturated(&self) -> bool {
        self.saturated
    }

    /// Estimated seconds, rounded down.
    pub fn whole_seconds(&self) -> BigUint {
        &self.guess_count / self.guesses_per_second
    }

    /// Estimated seconds multiplied by `scale`, rounded down.
    pub fn scaled_seconds(&self, scale: u64) -> BigUint {
        &self.guess_count * scale / self.guesses_per_second
    }
}

/// Alphabet size implied by the character classes present.
///
/// Pools are added flat; the lowercase pool is counted even when the password
/// has no lowercase letter.
pub fn alphabet_size(conditions: &ConditionSet) -> u32 {
    let mut size = LOWERCASE_POOL;
    if conditions.has_uppercase {
        size += UPPERCASE_POOL;
    }
    if conditions.has_digit {
        size += DIGIT_POOL;
    }
    if conditions.has_special_char {
        size += SPECIAL_POOL;
    }
    size
}

/// Estimates the brute-force search space of the password.
///
/// At most `length_cap` characters count towards the exponent; longer
/// passwords are marked saturated. `guesses_per_second` must be non-zero,
/// which `AnalyzerConfig::validate` guarantees.
///
/// # Arguments
/// * `password` - The password to estimate
/// * `conditions` - Rule outcomes for the same password
/// * `guesses_per_second` - Guessing rate of the attacker
/// * `length_cap` - Longest length used as the exponent
///
/// # Returns
/// A `KeyspaceEstimate` holding the exact guess count; a single guess for
/// the empty password.
pub fn keyspace_section(
    password: &SecretString,
    conditions: &ConditionSet,
    guesses_per_second: u64,
    length_cap: usize,
) -> KeyspaceEstimate {
    let length = password.expose_secret().chars().count();
    let capped = length.min(length_cap);
    let exponent = u32::try_from(capped).unwrap_or(u32::MAX);
    let alphabet_size = alphabet_size(conditions);

    KeyspaceEstimate {
        alphabet_size,
        exponent,
        guess_count: BigUint::from(alphabet_size).pow(exponent),
        guesses_per_second,
        saturated: length > length_cap,
    }
}
