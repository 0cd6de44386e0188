//! Run execution.

use std::time::Instant;

use tracing::{debug, info, warn};

use super::config::EngineConfig;
use super::pacing::Throttle;
use super::types::{AlgorithmResult, StrategyKind};
use crate::error::ConfigError;
use crate::model::{Order, Sku};
use crate::strategy::{
    AnnealingStrategy, GreedyStrategy, PairingStrategy, SimilarityStrategy, StepObserver,
    WaveStrategy,
};

/// Drives one strategy per call and summarizes its waves.
///
/// Runs are synchronous and single-flight: the only suspension points are
/// the pacing pauses after forwarded steps. The caller's orders are copied
/// before the strategy sees them.
///
/// # Usage
///
/// ```
/// use u_wavebatch::coordinator::{Coordinator, EngineConfig};
/// use u_wavebatch::model::{Order, OrderItem, Sku};
/// use u_wavebatch::strategy::NoopObserver;
///
/// let coordinator = Coordinator::new(EngineConfig::batch()).unwrap();
/// let skus = vec![Sku::new("a", 10)];
/// let orders = vec![
///     Order::new("o1", vec![OrderItem::new("a", 3)]),
///     Order::new("o2", vec![OrderItem::new("a", 7)]),
/// ];
///
/// let result = coordinator.run("remainder_pairing", &orders, &skus, &mut NoopObserver);
/// assert_eq!(result.total_waves(), 1);
/// assert_eq!(result.perfect_waves(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Coordinator {
    config: EngineConfig,
}

impl Coordinator {
    /// Creates a coordinator after validating `config`.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Instantiates the strategy serving `kind`.
    pub fn strategy(&self, kind: StrategyKind) -> Box<dyn WaveStrategy> {
        match kind {
            StrategyKind::Greedy => Box::new(GreedyStrategy::new(self.config.greedy.clone())),
            StrategyKind::RemainderPairing => Box::new(PairingStrategy),
            StrategyKind::Genetic | StrategyKind::SimulatedMilp => {
                Box::new(AnnealingStrategy::new(self.config.annealing.clone()))
            }
            StrategyKind::SimilarityGrouping => {
                Box::new(SimilarityStrategy::new(self.config.similarity.clone()))
            }
        }
    }

    /// Runs the strategy registered under `strategy_id`.
    ///
    /// Unknown identifiers run the greedy strategy; the result then keeps
    /// the requested id but reports [`FALLBACK_NAME`](super::FALLBACK_NAME).
    pub fn run(
        &self,
        strategy_id: &str,
        orders: &[Order],
        skus: &[Sku],
        observer: &mut dyn StepObserver,
    ) -> AlgorithmResult {
        let resolution = StrategyKind::resolve(strategy_id);
        if resolution.fallback {
            warn!(
                strategy_id,
                fallback = resolution.kind.id(),
                "unknown strategy id, using default"
            );
        }
        self.execute(
            strategy_id,
            resolution.kind,
            resolution.name,
            orders,
            skus,
            observer,
        )
    }

    /// Runs a strategy selected by kind.
    pub fn run_kind(
        &self,
        kind: StrategyKind,
        orders: &[Order],
        skus: &[Sku],
        observer: &mut dyn StepObserver,
    ) -> AlgorithmResult {
        self.execute(kind.id(), kind, kind.display_name(), orders, skus, observer)
    }

    fn execute(
        &self,
        strategy_id: &str,
        kind: StrategyKind,
        name: &str,
        orders: &[Order],
        skus: &[Sku],
        observer: &mut dyn StepObserver,
    ) -> AlgorithmResult {
        let started = Instant::now();
        info!(
            strategy = strategy_id,
            orders = orders.len(),
            skus = skus.len(),
            "wave run started"
        );

        let strategy = self.strategy(kind);
        let mut throttle = Throttle::new(observer, self.config.pacing);
        let waves = strategy.build_waves(orders.to_vec(), skus, &mut throttle);
        debug!(
            forwarded = throttle.forwarded(),
            dropped = throttle.dropped(),
            "progress steps throttled"
        );

        let result = AlgorithmResult::new(strategy_id, name, waves, started.elapsed());
        info!(
            strategy = strategy_id,
            waves = result.total_waves(),
            perfect = result.perfect_waves(),
            remainder = result.total_remainder(),
            elapsed_ms = result.execution_time().as_millis() as u64,
            "wave run finished"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderItem;
    use crate::strategy::{NoopObserver, SimulationStep};

    fn batch() -> Coordinator {
        Coordinator::new(EngineConfig::batch()).unwrap()
    }

    fn single_sku_orders(quantities: &[u32]) -> Vec<Order> {
        quantities
            .iter()
            .enumerate()
            .map(|(i, &q)| Order::new(format!("o{}", i + 1), vec![OrderItem::new("a", q)]))
            .collect()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = EngineConfig::batch()
            .with_greedy(crate::strategy::GreedyConfig::default().with_max_wave_size(0));
        assert!(Coordinator::new(config).is_err());
    }

    #[test]
    fn test_empty_orders_yield_empty_result() {
        let skus = vec![Sku::new("a", 6)];
        for kind in StrategyKind::ALL {
            let result = batch().run_kind(kind, &[], &skus, &mut NoopObserver);
            assert_eq!(result.total_waves(), 0);
            assert_eq!(result.perfect_waves(), 0);
            assert_eq!(result.total_remainder(), 0);
        }
    }

    #[test]
    fn test_single_full_case_order() {
        let skus = vec![Sku::new("a", 8)];
        let orders = single_sku_orders(&[8]);
        for kind in StrategyKind::ALL {
            let result = batch().run_kind(kind, &orders, &skus, &mut NoopObserver);
            assert_eq!(result.total_waves(), 1);
            let wave = &result.waves()[0];
            assert!(wave.is_perfect());
            assert_eq!(wave.sku_details()["a"].remainder, 0);
            assert_eq!(wave.sku_details()["a"].cases, 1);
        }
    }

    #[test]
    fn test_greedy_scenario_all_perfect() {
        let skus = vec![Sku::new("a", 10)];
        let result = batch().run("greedy", &single_sku_orders(&[3, 7, 2, 8]), &skus, &mut NoopObserver);
        assert_eq!(result.total_remainder(), 0);
        assert_eq!(result.perfect_waves(), result.total_waves());
    }

    #[test]
    fn test_unknown_id_falls_back() {
        let skus = vec![Sku::new("a", 10)];
        let orders = single_sku_orders(&[3, 7]);
        let result = batch().run("backtracking", &orders, &skus, &mut NoopObserver);
        assert_eq!(result.algorithm_id(), "backtracking");
        assert_eq!(result.algorithm_name(), crate::coordinator::FALLBACK_NAME);
        assert_eq!(result.total_waves(), 1);
    }

    #[test]
    fn test_genetic_and_milp_share_annealing() {
        let coordinator = Coordinator::new(
            EngineConfig::batch()
                .with_annealing(crate::strategy::AnnealingConfig::default().with_seed(11)),
        )
        .unwrap();
        let skus = vec![Sku::new("a", 7)];
        let orders = single_sku_orders(&(1..=13).collect::<Vec<_>>());

        let genetic = coordinator.run("genetic", &orders, &skus, &mut NoopObserver);
        let milp = coordinator.run("simulated_milp", &orders, &skus, &mut NoopObserver);
        assert_eq!(genetic.waves(), milp.waves());
        assert_eq!(genetic.algorithm_name(), "Genetic Algorithm");
        assert_eq!(milp.algorithm_name(), "MILP Approximation");
    }

    #[test]
    fn test_caller_orders_untouched() {
        let skus = vec![Sku::new("a", 10)];
        let orders = single_sku_orders(&[9, 1, 4, 6, 5]);
        let snapshot = orders.clone();
        for kind in StrategyKind::ALL {
            batch().run_kind(kind, &orders, &skus, &mut NoopObserver);
        }
        assert_eq!(orders, snapshot);
    }

    #[test]
    fn test_observer_receives_steps() {
        let skus = vec![Sku::new("a", 10)];
        let mut steps: Vec<SimulationStep> = Vec::new();
        batch().run(
            "similarity_grouping",
            &single_sku_orders(&[1, 2, 3, 4, 5, 6, 7]),
            &skus,
            &mut steps,
        );
        // Identical SKU sets, capped at five per wave.
        assert_eq!(steps.len(), 2);
        assert!(steps.iter().all(|s| s.algorithm_name == "Similarity Grouping"));
    }
}
