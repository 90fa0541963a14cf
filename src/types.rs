//! Result types handed to the presentation layer.

use std::fmt;

use num_bigint::BigUint;

use crate::sections::{FormattedDuration, KeyspaceEstimate};

/// One of the five composition rules, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    MinLength,
    Lowercase,
    Uppercase,
    Digit,
    SpecialChar,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::MinLength,
        Condition::Lowercase,
        Condition::Uppercase,
        Condition::Digit,
        Condition::SpecialChar,
    ];

    /// Checklist copy for this rule. The length label is built from the same
    /// minimum the rule checks.
    pub fn label(self, min_length: usize) -> String {
        match self {
            Condition::MinLength => format!("At least {} characters", min_length),
            Condition::Lowercase => "At least 1 lowercase letter".to_string(),
            Condition::Uppercase => "At least 1 uppercase letter".to_string(),
            Condition::Digit => "At least 1 number".to_string(),
            Condition::SpecialChar => "At least 1 special character".to_string(),
        }
    }
}

/// Outcome of the five composition rules for one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConditionSet {
    pub has_min_length: bool,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_special_char: bool,
}

impl ConditionSet {
    pub fn get(&self, condition: Condition) -> bool {
        match condition {
            Condition::MinLength => self.has_min_length,
            Condition::Lowercase => self.has_lowercase,
            Condition::Uppercase => self.has_uppercase,
            Condition::Digit => self.has_digit,
            Condition::SpecialChar => self.has_special_char,
        }
    }

    /// Number of satisfied rules, 0 to 5.
    pub fn satisfied_count(&self) -> usize {
        Condition::ALL.iter().filter(|&&c| self.get(c)).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Condition, bool)> {
        let set = *self;
        Condition::ALL.into_iter().map(move |c| (c, set.get(c)))
    }
}

/// Discrete strength classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    pub fn message(self) -> &'static str {
        match self {
            StrengthTier::Weak => "Your password is too weak",
            StrengthTier::Medium => "Your password is medium",
            StrengthTier::Strong => "Your password is strong",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthTier::Weak => write!(f, "weak"),
            StrengthTier::Medium => write!(f, "medium"),
            StrengthTier::Strong => write!(f, "strong"),
        }
    }
}

/// Everything derived from one password.
///
/// `estimate`, `formatted` and `tier` are `None` for the empty password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub conditions: ConditionSet,
    pub char_count: usize,
    pub estimate: Option<KeyspaceEstimate>,
    pub formatted: Option<FormattedDuration>,
    pub tier: Option<StrengthTier>,
}

impl Analysis {
    /// Rendered crack time, or an empty string when there is nothing to show.
    pub fn formatted_duration(&self) -> String {
        self.formatted
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Whole seconds of the crack time estimate.
    pub fn estimated_seconds(&self) -> Option<BigUint> {
        self.estimate.as_ref().map(KeyspaceEstimate::whole_seconds)
    }

    /// True when the keyspace exponent hit the configured length cap.
    pub fn is_saturated(&self) -> bool {
        self.estimate.as_ref().is_some_and(KeyspaceEstimate::is_saturated)
    }
}
