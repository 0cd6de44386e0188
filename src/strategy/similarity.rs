//! Similarity clustering.
//!
//! Groups orders that touch the same SKUs, in the spirit of frequent-itemset
//! grouping (not a true FP-Growth). Quantities play no part in grouping;
//! the committed waves are still scored by [`metrics`](crate::metrics).
//!
//! The pool is first sorted by structural signature so that orders with
//! identical SKU sets sit next to each other. Each seed then absorbs pool
//! orders, left to right, whose Jaccard similarity with the seed's SKU set
//! exceeds the configured threshold.

use std::collections::{BTreeSet, VecDeque};

use tracing::debug;

use super::config::SimilarityConfig;
use super::types::{wave_id, SimulationStep, StepObserver, WaveStrategy};
use crate::metrics::Wave;
use crate::model::{Order, Sku};

/// Jaccard similarity `|a ∩ b| / |a ∪ b|`.
///
/// Two empty sets are defined to be identical (similarity 1).
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use u_wavebatch::strategy::jaccard;
///
/// let a: BTreeSet<&str> = ["x", "y"].into();
/// let b: BTreeSet<&str> = ["y", "z"].into();
/// assert!((jaccard(&a, &b) - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 1.0;
    }
    intersection as f64 / union as f64
}

/// Similarity clustering strategy.
#[derive(Debug, Clone, Default)]
pub struct SimilarityStrategy {
    config: SimilarityConfig,
}

impl SimilarityStrategy {
    pub fn new(config: SimilarityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    fn accepts(&self, seed: &BTreeSet<&str>, candidate: &BTreeSet<&str>) -> bool {
        if seed.is_empty() && candidate.is_empty() {
            return true;
        }
        jaccard(seed, candidate) > self.config.threshold
    }
}

impl WaveStrategy for SimilarityStrategy {
    fn name(&self) -> &str {
        "Similarity Grouping"
    }

    fn build_waves(
        &self,
        mut orders: Vec<Order>,
        skus: &[Sku],
        observer: &mut dyn StepObserver,
    ) -> Vec<Wave> {
        orders.sort_by_cached_key(Order::signature);
        let mut pool: VecDeque<Order> = orders.into();
        let mut waves = Vec::new();

        while let Some(seed) = pool.pop_front() {
            let mut current = vec![seed];
            let mut i = 0;

            while i < pool.len() && current.len() < self.config.max_wave_size {
                let grouped = self.accepts(&current[0].sku_set(), &pool[i].sku_set());
                if grouped {
                    if let Some(order) = pool.remove(i) {
                        current.push(order);
                    }
                } else {
                    i += 1;
                }
            }

            observer.on_step(SimulationStep {
                current_wave_orders: current.clone(),
                pool_orders: pool.iter().cloned().collect(),
                description: format!(
                    "similarity grouping: found {} structurally similar orders",
                    current.len()
                ),
                algorithm_name: self.name().to_string(),
                progress: 0.0,
            });

            let wave = Wave::build(wave_id(waves.len()), current, skus);
            debug!(
                wave = wave.id(),
                orders = wave.len(),
                remainder = wave.remainder_score(),
                "similarity wave committed"
            );
            waves.push(wave);
        }

        waves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderItem;
    use crate::strategy::NoopObserver;

    fn order(id: &str, skus: &[&str]) -> Order {
        Order::new(id, skus.iter().map(|&s| OrderItem::new(s, 1)).collect())
    }

    fn catalog() -> Vec<Sku> {
        ["a", "b", "c", "d"].iter().map(|&id| Sku::new(id, 4)).collect()
    }

    #[test]
    fn test_jaccard_values() {
        let ab: BTreeSet<&str> = ["a", "b"].into();
        let abc: BTreeSet<&str> = ["a", "b", "c"].into();
        let cd: BTreeSet<&str> = ["c", "d"].into();
        let empty: BTreeSet<&str> = BTreeSet::new();

        assert!((jaccard(&ab, &ab) - 1.0).abs() < 1e-12);
        assert!((jaccard(&ab, &abc) - 2.0 / 3.0).abs() < 1e-12);
        assert!(jaccard(&ab, &cd).abs() < 1e-12);
        assert!((jaccard(&empty, &empty) - 1.0).abs() < 1e-12);
        assert!(jaccard(&empty, &ab).abs() < 1e-12);
    }

    #[test]
    fn test_groups_identical_sku_sets() {
        let orders = vec![
            order("o1", &["a", "b"]),
            order("o2", &["c"]),
            order("o3", &["b", "a"]),
            order("o4", &["c"]),
        ];
        let waves = SimilarityStrategy::default().build_waves(orders, &catalog(), &mut NoopObserver);

        assert_eq!(waves.len(), 2);
        assert_eq!(waves[0].order_ids().collect::<Vec<_>>(), vec!["o1", "o3"]);
        assert_eq!(waves[1].order_ids().collect::<Vec<_>>(), vec!["o2", "o4"]);
    }

    #[test]
    fn test_threshold_is_strict() {
        // {a,b} vs {a,c}: 1/3. {a,b} vs {a,b,c,d}: exactly 0.5, rejected.
        let orders = vec![
            order("o1", &["a", "b"]),
            order("o2", &["a", "b", "c", "d"]),
            order("o3", &["a", "c"]),
        ];
        let waves = SimilarityStrategy::default().build_waves(orders, &catalog(), &mut NoopObserver);
        assert_eq!(waves.len(), 3);
        assert!(waves.iter().all(|w| w.len() == 1));
    }

    #[test]
    fn test_empty_orders_group_together() {
        let orders = vec![order("e1", &[]), order("x", &["a"]), order("e2", &[])];
        let waves = SimilarityStrategy::default().build_waves(orders, &catalog(), &mut NoopObserver);
        assert_eq!(waves[0].order_ids().collect::<Vec<_>>(), vec!["e1", "e2"]);
        assert_eq!(waves[1].order_ids().collect::<Vec<_>>(), vec!["x"]);
    }

    #[test]
    fn test_wave_size_cap_and_one_step_per_wave() {
        let orders: Vec<Order> = (0..7).map(|i| order(&format!("o{i}"), &["a"])).collect();
        let mut steps: Vec<SimulationStep> = Vec::new();
        let waves = SimilarityStrategy::default().build_waves(orders, &catalog(), &mut steps);

        assert_eq!(waves.len(), 2);
        assert_eq!(waves[0].len(), 5);
        assert_eq!(waves[1].len(), 2);
        assert_eq!(steps.len(), waves.len());
        assert!(steps[0].description.contains("found 5"));
    }

    #[test]
    fn test_lower_threshold_groups_partial_overlap() {
        let orders = vec![order("o1", &["a", "b"]), order("o2", &["a", "c"])];
        let strategy = SimilarityStrategy::new(SimilarityConfig::default().with_threshold(0.3));
        let waves = strategy.build_waves(orders, &catalog(), &mut NoopObserver);
        assert_eq!(waves.len(), 1);
    }

    #[test]
    fn test_scores_waves_by_quantity() {
        let skus = vec![Sku::new("a", 10)];
        let orders = vec![
            Order::new("o1", vec![OrderItem::new("a", 4)]),
            Order::new("o2", vec![OrderItem::new("a", 3)]),
        ];
        let waves = SimilarityStrategy::default().build_waves(orders, &skus, &mut NoopObserver);
        assert_eq!(waves.len(), 1);
        assert_eq!(waves[0].remainder_score(), 7);
        assert!(!waves[0].is_perfect());
    }
}
