//! Engine configuration.

use std::time::Duration;

use crate::error::ConfigError;
use crate::strategy::{AnnealingConfig, GreedyConfig, SimilarityConfig};

/// Pacing of progress notifications.
///
/// A step is forwarded only if at least `min_interval` has passed since the
/// previous forwarded step; otherwise it is dropped. Every forwarded step is
/// followed by a blocking `pause`, which slows the strategy down to a rate
/// an animated view can follow.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_wavebatch::coordinator::PacingConfig;
///
/// let interactive = PacingConfig::default();
/// assert_eq!(interactive.min_interval, Duration::from_millis(100));
/// assert_eq!(interactive.pause, Duration::from_millis(200));
///
/// // Batch and test runs: every step forwarded, no pauses.
/// assert!(PacingConfig::disabled().is_disabled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PacingConfig {
    /// Minimum wall-clock gap between two forwarded steps.
    pub min_interval: Duration,

    /// Blocking delay after each forwarded step.
    pub pause: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            min_interval: Duration::from_millis(100),
            pause: Duration::from_millis(200),
        }
    }
}

impl PacingConfig {
    /// Forwards every step immediately.
    pub fn disabled() -> Self {
        Self {
            min_interval: Duration::ZERO,
            pause: Duration::ZERO,
        }
    }

    pub fn with_min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = interval;
        self
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.min_interval.is_zero() && self.pause.is_zero()
    }
}

/// Configuration of every strategy plus pacing.
///
/// # Examples
///
/// ```
/// use u_wavebatch::coordinator::{EngineConfig, PacingConfig};
/// use u_wavebatch::strategy::GreedyConfig;
///
/// let config = EngineConfig::default()
///     .with_greedy(GreedyConfig::default().with_slack(0))
///     .with_pacing(PacingConfig::disabled());
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    pub greedy: GreedyConfig,
    pub similarity: SimilarityConfig,
    pub annealing: AnnealingConfig,
    pub pacing: PacingConfig,
}

impl EngineConfig {
    /// Defaults with pacing disabled, for non-interactive runs.
    pub fn batch() -> Self {
        Self::default().with_pacing(PacingConfig::disabled())
    }

    pub fn with_greedy(mut self, greedy: GreedyConfig) -> Self {
        self.greedy = greedy;
        self
    }

    pub fn with_similarity(mut self, similarity: SimilarityConfig) -> Self {
        self.similarity = similarity;
        self
    }

    pub fn with_annealing(mut self, annealing: AnnealingConfig) -> Self {
        self.annealing = annealing;
        self
    }

    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.greedy.validate()?;
        self.similarity.validate()?;
        self.annealing.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
        assert!(!EngineConfig::default().pacing.is_disabled());
    }

    #[test]
    fn test_batch_disables_pacing() {
        assert!(EngineConfig::batch().pacing.is_disabled());
    }

    #[test]
    fn test_validate_propagates_section_errors() {
        let config =
            EngineConfig::default().with_annealing(AnnealingConfig::default().with_chunk_size(0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidParameter {
                name: "annealing.chunk_size",
                ..
            })
        ));
    }

    #[test]
    fn test_pacing_builders() {
        let pacing = PacingConfig::disabled().with_pause(Duration::from_millis(1));
        assert!(!pacing.is_disabled());
        assert_eq!(pacing.min_interval, Duration::ZERO);
    }
}
