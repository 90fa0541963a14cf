//! Password crack time estimation library
//!
//! This library checks a password against five composition rules, estimates
//! how long a brute-force attack would take, renders that time as text and
//! classifies the password as weak, medium or strong.
//!
//! # Features
//!
//! - `async` (default): Enables debounced analysis with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! Read by [`AnalyzerConfig::from_env`]:
//!
//! - `PWD_MIN_LENGTH` (default: `8`)
//! - `PWD_WEAK_SECONDS` (default: `60`)
//! - `PWD_MEDIUM_SECONDS` (default: `3600`)
//! - `PWD_GUESSES_PER_SECOND` (default: `1000000000`)
//! - `PWD_FORMATTING`: `cascade` or `rounded` (default: `cascade`)
//! - `PWD_EXTENDED_SCALE`: adds centuries and decades (default: `false`)
//! - `PWD_TIER_BASIS`: `leading-term` or `estimated-seconds`
//!   (default: `leading-term`)
//! - `PWD_LENGTH_CAP` (default: `256`)
//!
//! # Example
//!
//! ```rust
//! use crack_time::{Analyzer, AnalyzerConfig, StrengthTier};
//! use secrecy::SecretString;
//!
//! // Validate configuration once, at startup
//! let analyzer = Analyzer::new(AnalyzerConfig::default()).expect("valid config");
//!
//! // Analyze on every keystroke
//! let password = SecretString::new("Ab1!x".to_string().into());
//! let analysis = analyzer.analyze(&password);
//!
//! assert_eq!(analysis.formatted_duration(), "7 seconds");
//! assert_eq!(analysis.tier, Some(StrengthTier::Weak));
//! ```

mod config;
mod evaluator;
mod sections;
mod types;

// Public API
pub use config::{
    AnalyzerConfig, ConfigError, FormattingMode, Thresholds, TierBasis, DEFAULT_GUESSES_PER_SECOND,
    DEFAULT_LENGTH_CAP, DEFAULT_MEDIUM_SECONDS, DEFAULT_MIN_LENGTH, DEFAULT_WEAK_SECONDS,
};
pub use evaluator::{analyze, Analyzer};
pub use sections::{
    alphabet_size, classifier_section as classify, classify_seconds,
    duration_section as format_duration, format_seconds, keyspace_section as estimate,
    rules_section as evaluate_rules, DurationTerm, FormattedDuration, KeyspaceEstimate, TimeUnit,
    DIGIT_POOL, LOWERCASE_POOL, SPECIAL_CHARS, SPECIAL_POOL, UPPERCASE_POOL,
};
pub use types::{Analysis, Condition, ConditionSet, StrengthTier};

#[cfg(feature = "async")]
pub use evaluator::analyze_tx;
