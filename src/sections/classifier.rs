//! Classifier section - maps rule count and crack time to a strength tier.

use num_bigint::BigUint;

use crate::config::Thresholds;
use crate::sections::FormattedDuration;
use crate::types::{ConditionSet, StrengthTier};

/// Classifies using only the leading term of the formatted crack time.
pub fn classifier_section(
    conditions: &ConditionSet,
    formatted: &FormattedDuration,
    thresholds: Thresholds,
) -> StrengthTier {
    classify_seconds(conditions, &formatted.leading_term_seconds(), thresholds)
}

/// Classifies from a seconds value.
///
/// Fewer than two rules or a crack time under the weak threshold is weak;
/// fewer than four rules or under the medium threshold is medium.
pub fn classify_seconds(
    conditions: &ConditionSet,
    seconds: &BigUint,
    thresholds: Thresholds,
) -> StrengthTier {
    let satisfied = conditions.satisfied_count();

    if satisfied < 2 || *seconds < BigUint::from(thresholds.weak_seconds) {
        StrengthTier::Weak
    } else if satisfied < 4 || *seconds < BigUint::from(thresholds.medium_seconds) {
        StrengthTier::Medium
    } else {
        StrengthTier::Strong
    }
}
