//! Strategy registry and run results.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::metrics::Wave;

/// The closed set of runnable strategies.
///
/// `Genetic` and `SimulatedMilp` are both served by the annealing
/// strategy; they differ only in the name reported in results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyKind {
    Greedy,
    RemainderPairing,
    Genetic,
    SimulatedMilp,
    SimilarityGrouping,
}

/// Identifier lookup table.
const REGISTRY: [(&str, StrategyKind); 5] = [
    ("greedy", StrategyKind::Greedy),
    ("remainder_pairing", StrategyKind::RemainderPairing),
    ("genetic", StrategyKind::Genetic),
    ("simulated_milp", StrategyKind::SimulatedMilp),
    ("similarity_grouping", StrategyKind::SimilarityGrouping),
];

/// Name reported when an unknown identifier falls back to greedy.
pub const FALLBACK_NAME: &str = "Default (Greedy)";

/// Outcome of resolving a possibly unknown strategy identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Strategy that will run.
    pub kind: StrategyKind,
    /// Name to report in the result.
    pub name: &'static str,
    /// `true` when the identifier was not recognized.
    pub fallback: bool,
}

impl StrategyKind {
    /// Every registered strategy, in registry order.
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Greedy,
        StrategyKind::RemainderPairing,
        StrategyKind::Genetic,
        StrategyKind::SimulatedMilp,
        StrategyKind::SimilarityGrouping,
    ];

    /// Stable identifier, as accepted by [`lookup`](Self::lookup).
    pub fn id(self) -> &'static str {
        REGISTRY
            .iter()
            .find(|(_, kind)| *kind == self)
            .map_or("greedy", |(id, _)| *id)
    }

    /// Name reported in results.
    pub fn display_name(self) -> &'static str {
        match self {
            StrategyKind::Greedy => "Greedy",
            StrategyKind::RemainderPairing => "Remainder Pairing",
            StrategyKind::Genetic => "Genetic Algorithm",
            StrategyKind::SimulatedMilp => "MILP Approximation",
            StrategyKind::SimilarityGrouping => "FP-Growth / Similarity Grouping",
        }
    }

    /// Exact, case-sensitive registry lookup.
    pub fn lookup(id: &str) -> Option<Self> {
        REGISTRY
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, kind)| *kind)
    }

    /// Resolves `id`, degrading to [`StrategyKind::Greedy`] when unknown.
    ///
    /// This never fails: unknown identifiers (including ones that name
    /// strategies this crate does not implement, such as `"backtracking"`)
    /// run the greedy strategy under [`FALLBACK_NAME`].
    pub fn resolve(id: &str) -> Resolution {
        match Self::lookup(id) {
            Some(kind) => Resolution {
                kind,
                name: kind.display_name(),
                fallback: false,
            },
            None => Resolution {
                kind: StrategyKind::Greedy,
                name: FALLBACK_NAME,
                fallback: true,
            },
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| ConfigError::UnknownStrategy(s.to_string()))
    }
}

/// Final, immutable summary of one run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmResult {
    algorithm_id: String,
    algorithm_name: String,
    waves: Vec<Wave>,
    execution_time: Duration,
    total_waves: usize,
    perfect_waves: usize,
    total_remainder: u64,
}

impl AlgorithmResult {
    /// Aggregates the statistics of `waves`.
    pub(crate) fn new(
        algorithm_id: impl Into<String>,
        algorithm_name: impl Into<String>,
        waves: Vec<Wave>,
        execution_time: Duration,
    ) -> Self {
        let perfect_waves = waves.iter().filter(|w| w.is_perfect()).count();
        let total_remainder = waves.iter().map(Wave::remainder_score).sum();
        Self {
            algorithm_id: algorithm_id.into(),
            algorithm_name: algorithm_name.into(),
            total_waves: waves.len(),
            waves,
            execution_time,
            perfect_waves,
            total_remainder,
        }
    }

    /// The identifier the run was requested with.
    pub fn algorithm_id(&self) -> &str {
        &self.algorithm_id
    }

    pub fn algorithm_name(&self) -> &str {
        &self.algorithm_name
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    /// Wall-clock duration of the run, pacing pauses included.
    pub fn execution_time(&self) -> Duration {
        self.execution_time
    }

    pub fn total_waves(&self) -> usize {
        self.total_waves
    }

    pub fn perfect_waves(&self) -> usize {
        self.perfect_waves
    }

    pub fn total_remainder(&self) -> u64 {
        self.total_remainder
    }

    /// Fraction of waves that are perfect, in `[0, 1]`. Zero for no waves.
    pub fn perfect_ratio(&self) -> f64 {
        if self.total_waves == 0 {
            return 0.0;
        }
        self.perfect_waves as f64 / self.total_waves as f64
    }
}
