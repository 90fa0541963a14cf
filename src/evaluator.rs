//! Password analyzer - runs the sections in sequence.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::{AnalyzerConfig, ConfigError, TierBasis};
use crate::sections::{
    classifier_section, classify_seconds, duration_section, keyspace_section, rules_section,
};
use crate::types::Analysis;

/// A validated pipeline, ready to analyze passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Validates the configuration once, up front.
    pub fn new(config: AnalyzerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Analyzer ready: min length {}, {} guesses/s, {:?} formatting",
            config.min_length,
            config.guesses_per_second,
            config.formatting
        );

        Ok(Self { config })
    }

    /// Builds an analyzer from `AnalyzerConfig::from_env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(AnalyzerConfig::from_env()?)
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyzes one password.
    ///
    /// # Arguments
    /// * `password` - The password to analyze
    ///
    /// # Returns
    /// An `Analysis` with the rule outcomes, crack time estimate, formatted
    /// duration and tier. The empty password gets its conditions only: no
    /// estimate, no formatted duration and no tier.
    pub fn analyze(&self, password: &SecretString) -> Analysis {
        run_pipeline(password, &self.config)
    }
}

/// One-off analysis with a configuration that has not been validated yet.
///
/// # Arguments
/// * `password` - The password to analyze
/// * `config` - Pipeline configuration, validated on every call
///
/// # Errors
/// Returns the `ConfigError` from `AnalyzerConfig::validate`; the pipeline
/// does not run with a rejected configuration. Build an [`Analyzer`] to
/// validate once instead of per call.
pub fn analyze(
    password: &SecretString,
    config: &AnalyzerConfig,
) -> Result<Analysis, ConfigError> {
    config.validate()?;
    Ok(run_pipeline(password, config))
}

/// Runs the sections in sequence; `config` must already be validated.
fn run_pipeline(password: &SecretString, config: &AnalyzerConfig) -> Analysis {
    let char_count = password.expose_secret().chars().count();
    let conditions = rules_section(password, config.min_length);

    if char_count == 0 {
        return Analysis {
            conditions,
            char_count,
            estimate: None,
            formatted: None,
            tier: None,
        };
    }

    let estimate = keyspace_section(
        password,
        &conditions,
        config.guesses_per_second,
        config.estimation_length_cap,
    );
    let formatted = duration_section(&estimate, config.formatting, config.extended_scale);

    let tier = match config.tier_basis {
        TierBasis::LeadingTerm => classifier_section(&conditions, &formatted, config.thresholds()),
        TierBasis::EstimatedSeconds => {
            classify_seconds(&conditions, &estimate.whole_seconds(), config.thresholds())
        }
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Analyzed password of {} chars: {} conditions, tier {}, saturated {}",
        char_count,
        conditions.satisfied_count(),
        tier,
        estimate.is_saturated()
    );

    Analysis {
        conditions,
        char_count,
        estimate: Some(estimate),
        formatted: Some(formatted),
        tier: Some(tier),
    }
}

/// Debounced analysis for live input.
///
/// Waits 300 ms, then drops the result if `token` was cancelled by a newer
/// keystroke; otherwise sends the analysis through `tx`.
#[cfg(feature = "async")]
pub async fn analyze_tx(
    analyzer: &Analyzer,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Analysis>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("analysis superseded by newer input");
        return;
    }

    let analysis = analyzer.analyze(password);

    if let Err(e) = tx.send(analysis).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
