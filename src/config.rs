//! Analyzer configuration
//!
//! Holds the policy constants of the pipeline and resolves overrides from
//! the process environment.

use std::str::FromStr;
use thiserror::Error;

/// Minimum number of characters for the length rule.
pub const DEFAULT_MIN_LENGTH: usize = 8;
/// Below this many seconds a password is always weak.
pub const DEFAULT_WEAK_SECONDS: u64 = 60;
/// Below this many seconds a password is at most medium.
pub const DEFAULT_MEDIUM_SECONDS: u64 = 3600;
/// Guessing rate of the modelled attacker.
pub const DEFAULT_GUESSES_PER_SECOND: u64 = 1_000_000_000;
/// Longest prefix taken into account by the keyspace exponent.
pub const DEFAULT_LENGTH_CAP: usize = 256;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {var}")]
    InvalidValue { var: &'static str, value: String },
    #[error("Guesses per second must be greater than zero")]
    ZeroGuessRate,
    #[error("Minimum length must be greater than zero")]
    ZeroMinLength,
    #[error("Estimation length cap must be greater than zero")]
    ZeroLengthCap,
    #[error("Weak threshold ({weak}s) exceeds medium threshold ({medium}s)")]
    ThresholdOrder { weak: u64, medium: u64 },
}

/// How a crack time is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormattingMode {
    /// Every non-zero unit, largest first: `1 days 1 hours 1 minutes 1 seconds`.
    #[default]
    Cascade,
    /// Largest unit only, two decimals: `1.04 days`.
    Rounded,
}

impl FromStr for FormattingMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cascade" => Ok(Self::Cascade),
            "rounded" => Ok(Self::Rounded),
            _ => Err(()),
        }
    }
}

/// Which seconds value drives tier classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TierBasis {
    /// Seconds rebuilt from the leading term of the formatted duration only.
    #[default]
    LeadingTerm,
    /// The exact estimate, before any formatting.
    EstimatedSeconds,
}

impl FromStr for TierBasis {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leading-term" => Ok(Self::LeadingTerm),
            "estimated-seconds" => Ok(Self::EstimatedSeconds),
            _ => Err(()),
        }
    }
}

/// Seconds thresholds used by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub weak_seconds: u64,
    pub medium_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub min_length: usize,
    pub weak_seconds_threshold: u64,
    pub medium_seconds_threshold: u64,
    pub guesses_per_second: u64,
    pub formatting: FormattingMode,
    /// Adds centuries and decades between million years and years.
    pub extended_scale: bool,
    pub tier_basis: TierBasis,
    pub estimation_length_cap: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            weak_seconds_threshold: DEFAULT_WEAK_SECONDS,
            medium_seconds_threshold: DEFAULT_MEDIUM_SECONDS,
            guesses_per_second: DEFAULT_GUESSES_PER_SECOND,
            formatting: FormattingMode::Cascade,
            extended_scale: false,
            tier_basis: TierBasis::LeadingTerm,
            estimation_length_cap: DEFAULT_LENGTH_CAP,
        }
    }
}

impl AnalyzerConfig {
    /// Builds a configuration from defaults overridden by environment variables.
    ///
    /// Recognized variables:
    /// - `PWD_MIN_LENGTH`
    /// - `PWD_WEAK_SECONDS`
    /// - `PWD_MEDIUM_SECONDS`
    /// - `PWD_GUESSES_PER_SECOND`
    /// - `PWD_FORMATTING` (`cascade` or `rounded`)
    /// - `PWD_EXTENDED_SCALE` (`true` or `false`)
    /// - `PWD_TIER_BASIS` (`leading-term` or `estimated-seconds`)
    /// - `PWD_LENGTH_CAP`
    ///
    /// The result is validated before it is returned.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// unsafe { std::env::set_var("PWD_MIN_LENGTH", "6"); }
    /// let config = crack_time::AnalyzerConfig::from_env()?;
    /// assert_eq!(config.min_length, 6);
    /// ```
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = env_override("PWD_MIN_LENGTH")? {
            config.min_length = v;
        }
        if let Some(v) = env_override("PWD_WEAK_SECONDS")? {
            config.weak_seconds_threshold = v;
        }
        if let Some(v) = env_override("PWD_MEDIUM_SECONDS")? {
            config.medium_seconds_threshold = v;
        }
        if let Some(v) = env_override("PWD_GUESSES_PER_SECOND")? {
            config.guesses_per_second = v;
        }
        if let Some(v) = env_override("PWD_FORMATTING")? {
            config.formatting = v;
        }
        if let Some(v) = env_override("PWD_EXTENDED_SCALE")? {
            config.extended_scale = v;
        }
        if let Some(v) = env_override("PWD_TIER_BASIS")? {
            config.tier_basis = v;
        }
        if let Some(v) = env_override("PWD_LENGTH_CAP")? {
            config.estimation_length_cap = v;
        }

        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = if self.guesses_per_second == 0 {
            Err(ConfigError::ZeroGuessRate)
        } else if self.min_length == 0 {
            Err(ConfigError::ZeroMinLength)
        } else if self.estimation_length_cap == 0 {
            Err(ConfigError::ZeroLengthCap)
        } else if self.weak_seconds_threshold > self.medium_seconds_threshold {
            Err(ConfigError::ThresholdOrder {
                weak: self.weak_seconds_threshold,
                medium: self.medium_seconds_threshold,
            })
        } else {
            Ok(())
        };

        #[cfg(feature = "tracing")]
        {
            if let Err(ref e) = result {
                tracing::error!("Analyzer configuration rejected: {}", e);
            }
        }

        result
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            weak_seconds: self.weak_seconds_threshold,
            medium_seconds: self.medium_seconds_threshold,
        }
    }

    pub fn cascade_formatting(&self) -> bool {
        self.formatting == FormattingMode::Cascade
    }
}

fn env_override<T: FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 8] = [
        "PWD_MIN_LENGTH",
        "PWD_WEAK_SECONDS",
        "PWD_MEDIUM_SECONDS",
        "PWD_GUESSES_PER_SECOND",
        "PWD_FORMATTING",
        "PWD_EXTENDED_SCALE",
        "PWD_TIER_BASIS",
        "PWD_LENGTH_CAP",
    ];

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::set_var(key, value); }
    }

    fn clear_env() {
        for var in VARS {
            // SAFETY: tests touching the environment run under #[serial]
            unsafe { std::env::remove_var(var); }
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.min_length, 8);
        assert!(config.cascade_formatting());
        assert_eq!(
            config.thresholds(),
            Thresholds { weak_seconds: 60, medium_seconds: 3600 }
        );
    }

    #[test]
    fn test_validate_zero_guess_rate() {
        let config = AnalyzerConfig { guesses_per_second: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroGuessRate));
    }

    #[test]
    fn test_validate_zero_min_length() {
        let config = AnalyzerConfig { min_length: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMinLength));
    }

    #[test]
    fn test_validate_zero_length_cap() {
        let config = AnalyzerConfig { estimation_length_cap: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroLengthCap));
    }

    #[test]
    fn test_validate_threshold_order() {
        let config = AnalyzerConfig {
            weak_seconds_threshold: 7200,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ThresholdOrder { weak: 7200, medium: 3600 })
        );
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = AnalyzerConfig::from_env().expect("defaults are valid");
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        set_env("PWD_MIN_LENGTH", "6");
        set_env("PWD_WEAK_SECONDS", "30");
        set_env("PWD_FORMATTING", "Rounded");
        set_env("PWD_EXTENDED_SCALE", "true");
        set_env("PWD_TIER_BASIS", "estimated-seconds");

        let config = AnalyzerConfig::from_env().expect("overrides are valid");
        assert_eq!(config.min_length, 6);
        assert_eq!(config.weak_seconds_threshold, 30);
        assert_eq!(config.formatting, FormattingMode::Rounded);
        assert!(!config.cascade_formatting());
        assert!(config.extended_scale);
        assert_eq!(config.tier_basis, TierBasis::EstimatedSeconds);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_number() {
        clear_env();
        set_env("PWD_GUESSES_PER_SECOND", "fast");

        let result = AnalyzerConfig::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, value }) => {
                assert_eq!(var, "PWD_GUESSES_PER_SECOND");
                assert_eq!(value, "fast");
            }
            other => panic!("Expected InvalidValue error, got {:?}", other),
        }

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_fails_fast_on_zero_rate() {
        clear_env();
        set_env("PWD_GUESSES_PER_SECOND", "0");

        assert_eq!(AnalyzerConfig::from_env(), Err(ConfigError::ZeroGuessRate));

        clear_env();
    }
}
