//! Complement pairing.
//!
//! Forms two-order waves: each seed is paired with the pool order whose
//! quantities best complete its partial cases. The whole pool is scanned
//! for every seed (O(n²) overall), trading speed for finding true local
//! complements.

use std::collections::VecDeque;

use tracing::debug;

use super::scan::best_candidate;
use super::types::{wave_id, SimulationStep, StepObserver, WaveStrategy};
use crate::metrics::{self, Wave};
use crate::model::{Order, Sku};

/// Complement pairing strategy. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairingStrategy;

impl WaveStrategy for PairingStrategy {
    fn name(&self) -> &str {
        "Remainder Pairing"
    }

    fn build_waves(
        &self,
        orders: Vec<Order>,
        skus: &[Sku],
        observer: &mut dyn StepObserver,
    ) -> Vec<Wave> {
        let mut pool: VecDeque<Order> = orders.into();
        let mut waves = Vec::new();

        while let Some(seed) = pool.pop_front() {
            let best = best_candidate(pool.len(), |i| {
                metrics::remainder_score([&seed, &pool[i]], skus)
            });

            let mut current = vec![seed];
            if let Some((index, score)) = best {
                if let Some(partner) = pool.remove(index) {
                    let description = format!(
                        "remainder pairing: {} matched with {} (remainder sum {})",
                        current[0].id, partner.id, score
                    );
                    current.push(partner);

                    observer.on_step(SimulationStep {
                        current_wave_orders: current.clone(),
                        pool_orders: pool.iter().cloned().collect(),
                        description,
                        algorithm_name: self.name().to_string(),
                        progress: 0.0,
                    });
                }
            }

            let wave = Wave::build(wave_id(waves.len()), current, skus);
            debug!(
                wave = wave.id(),
                orders = wave.len(),
                remainder = wave.remainder_score(),
                "pairing wave committed"
            );
            waves.push(wave);
        }

        waves
    }
}
