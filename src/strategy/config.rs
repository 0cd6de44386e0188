//! Strategy configuration and cooling schedules.

use crate::error::ConfigError;

/// Configuration for [`GreedyStrategy`](super::GreedyStrategy).
///
/// # Examples
///
/// ```
/// use u_wavebatch::strategy::GreedyConfig;
///
/// let config = GreedyConfig::default().with_slack(0).with_max_wave_size(6);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyConfig {
    /// Penalty increase tolerated when accepting a candidate.
    ///
    /// A candidate is accepted if its resulting penalty is at most
    /// `current + slack`. With zero slack the wave stops at the first
    /// local optimum.
    pub slack: u64,

    /// Maximum number of orders per wave (seed included).
    pub max_wave_size: usize,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            slack: 2,
            max_wave_size: 10,
        }
    }
}

impl GreedyConfig {
    pub fn with_slack(mut self, slack: u64) -> Self {
        self.slack = slack;
        self
    }

    pub fn with_max_wave_size(mut self, n: usize) -> Self {
        self.max_wave_size = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_wave_size == 0 {
            return Err(ConfigError::invalid(
                "greedy.max_wave_size",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Configuration for [`SimilarityStrategy`](super::SimilarityStrategy).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimilarityConfig {
    /// Jaccard similarity a candidate must strictly exceed to join the seed.
    pub threshold: f64,

    /// Maximum number of orders per wave (seed included).
    pub max_wave_size: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            max_wave_size: 5,
        }
    }
}

impl SimilarityConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_max_wave_size(mut self, n: usize) -> Self {
        self.max_wave_size = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::invalid(
                "similarity.threshold",
                format!("must be in [0, 1], got {}", self.threshold),
            ));
        }
        if self.max_wave_size == 0 {
            return Err(ConfigError::invalid(
                "similarity.max_wave_size",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Temperature schedule for the annealing strategy.
///
/// The temperature of round `k` (zero-based) is a function of `k` and the
/// initial temperature `T0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// `T_k = T0 / (k + 1)`.
    ///
    /// Cools quickly at first and then flattens out: early rounds tolerate
    /// uphill moves, late rounds are nearly greedy.
    #[default]
    Reciprocal,

    /// `T_k = T0 * alpha^k`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },
}

impl CoolingSchedule {
    /// Temperature for `round` given the initial temperature.
    pub fn temperature(&self, initial: f64, round: usize) -> f64 {
        match *self {
            CoolingSchedule::Reciprocal => initial / (round as f64 + 1.0),
            CoolingSchedule::Geometric { alpha } => {
                initial * alpha.powi(i32::try_from(round).unwrap_or(i32::MAX))
            }
        }
    }
}

/// Configuration for [`AnnealingStrategy`](super::AnnealingStrategy).
///
/// # Examples
///
/// ```
/// use u_wavebatch::strategy::{AnnealingConfig, CoolingSchedule};
///
/// let config = AnnealingConfig::default()
///     .with_rounds(200)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.97 })
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingConfig {
    /// Orders per wave in the initial chunking. The last chunk may be smaller.
    pub chunk_size: usize,

    /// Number of swap rounds.
    pub rounds: usize,

    /// Temperature of round zero.
    pub initial_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Random seed for reproducibility. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 4,
            rounds: 50,
            initial_temperature: 100.0,
            cooling: CoolingSchedule::default(),
            seed: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_chunk_size(mut self, n: usize) -> Self {
        self.chunk_size = n;
        self
    }

    pub fn with_rounds(mut self, n: usize) -> Self {
        self.rounds = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::invalid(
                "annealing.chunk_size",
                "must be at least 1",
            ));
        }
        if self.initial_temperature <= 0.0 {
            return Err(ConfigError::invalid(
                "annealing.initial_temperature",
                "must be positive",
            ));
        }
        if let CoolingSchedule::Geometric { alpha } = self.cooling {
            if alpha <= 0.0 || alpha >= 1.0 {
                return Err(ConfigError::invalid(
                    "annealing.cooling",
                    format!("geometric alpha must be in (0, 1), got {alpha}"),
                ));
            }
        }
        Ok(())
    }
}
