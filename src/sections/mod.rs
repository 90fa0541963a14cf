//! Password analysis sections
//!
//! Each section is one stage of the pipeline: rules, keyspace, duration,
//! classifier.

mod classifier;
mod duration;
mod keyspace;
mod rules;

pub use classifier::{classifier_section, classify_seconds};
pub use duration::{duration_section, format_seconds, DurationTerm, FormattedDuration, TimeUnit};
pub use keyspace::{
    alphabet_size, keyspace_section, KeyspaceEstimate, DIGIT_POOL, LOWERCASE_POOL, SPECIAL_POOL,
    UPPERCASE_POOL,
};
pub use rules::{rules_section, SPECIAL_CHARS};
