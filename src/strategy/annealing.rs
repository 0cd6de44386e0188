//! Stochastic annealing refinement.
//!
//! Starts from a naive partition (consecutive chunks of fixed size) and
//! refines it by swapping single orders between two random waves.
//!
//! # Algorithm
//!
//! 1. Chunk the pool into waves of `chunk_size` orders
//! 2. Each round, pick two distinct waves and one position in each; swap
//! 3. Accept if the total remainder does not increase, otherwise accept
//!    with probability `exp(-Δ / T)` (Metropolis criterion)
//! 4. Revert rejected swaps
//! 5. Return the lowest-energy configuration seen, which need not be the
//!    final accepted one
//!
//! Wave contents are tracked as indices into an arena of orders, so swaps
//! and best-state snapshots never clone orders.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

use rand::Rng;
use tracing::{debug, trace};

use super::config::AnnealingConfig;
use super::types::{wave_id, SimulationStep, StepObserver, WaveStrategy};
use crate::metrics::{self, Wave};
use crate::model::{Order, Sku};
use crate::random::create_rng;

/// Result of an annealing run, with search statistics.
#[derive(Debug, Clone)]
pub struct AnnealingOutcome {
    /// Waves of the best configuration found.
    pub waves: Vec<Wave>,

    /// Energy (total remainder) of the initial chunking.
    pub initial_energy: u64,

    /// Energy of the returned configuration.
    pub best_energy: u64,

    /// Number of rounds executed. Less than the configured count only when
    /// the initial chunking has fewer than two waves.
    pub rounds_run: usize,

    /// Number of accepted swaps (including neutral and uphill ones).
    pub accepted_moves: usize,

    /// Best energy after initialization and after every executed round.
    pub energy_history: Vec<u64>,
}

/// Simulated annealing over order-to-wave assignments.
#[derive(Debug, Clone, Default)]
pub struct AnnealingStrategy {
    config: AnnealingConfig,
}

impl AnnealingStrategy {
    pub fn new(config: AnnealingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnnealingConfig {
        &self.config
    }

    /// Runs the search with a generator seeded from the configuration.
    pub fn anneal(
        &self,
        orders: Vec<Order>,
        skus: &[Sku],
        observer: &mut dyn StepObserver,
    ) -> AnnealingOutcome {
        let mut rng = create_rng(self.config.seed);
        self.anneal_with_rng(orders, skus, observer, &mut rng)
    }

    /// Runs the search drawing randomness from `rng`.
    pub fn anneal_with_rng<R: Rng>(
        &self,
        orders: Vec<Order>,
        skus: &[Sku],
        observer: &mut dyn StepObserver,
        rng: &mut R,
    ) -> AnnealingOutcome {
        let rounds = self.config.rounds;
        let indices: Vec<usize> = (0..orders.len()).collect();
        let mut groups: Vec<Vec<usize>> = indices
            .chunks(self.config.chunk_size.max(1))
            .map(<[usize]>::to_vec)
            .collect();

        let score = |group: &[usize]| {
            metrics::remainder_score(group.iter().map(|&i| &orders[i]), skus)
        };

        let mut wave_scores: Vec<u64> = groups.iter().map(|g| score(g)).collect();
        let mut energy: u64 = wave_scores.iter().sum();
        let initial_energy = energy;
        let mut best = groups.clone();
        let mut best_energy = energy;
        let mut energy_history = Vec::with_capacity(rounds + 1);
        energy_history.push(best_energy);

        let mut rounds_run = 0;
        let mut accepted_moves = 0;

        for round in 0..rounds {
            if groups.len() < 2 {
                break;
            }
            rounds_run += 1;

            let w1 = rng.random_range(0..groups.len());
            let mut w2 = rng.random_range(0..groups.len() - 1);
            if w2 >= w1 {
                w2 += 1;
            }
            if groups[w1].is_empty() || groups[w2].is_empty() {
                energy_history.push(best_energy);
                continue;
            }

            let p1 = rng.random_range(0..groups[w1].len());
            let p2 = rng.random_range(0..groups[w2].len());
            swap_between(&mut groups, (w1, p1), (w2, p2));

            let s1 = score(&groups[w1]);
            let s2 = score(&groups[w2]);
            let candidate = energy - wave_scores[w1] - wave_scores[w2] + s1 + s2;

            let delta = candidate as f64 - energy as f64;
            let temperature = self
                .config
                .cooling
                .temperature(self.config.initial_temperature, round);
            let accept = delta <= 0.0
                || (temperature > 0.0 && rng.random_range(0.0..1.0) < (-delta / temperature).exp());

            if accept {
                energy = candidate;
                wave_scores[w1] = s1;
                wave_scores[w2] = s2;
                accepted_moves += 1;

                if energy < best_energy {
                    best_energy = energy;
                    best = groups.clone();
                }
                trace!(round, energy, delta, temperature, "swap accepted");

                observer.on_step(SimulationStep {
                    current_wave_orders: groups[w1].iter().map(|&i| orders[i].clone()).collect(),
                    pool_orders: Vec::new(),
                    description: format!(
                        "simulated annealing: round {}/{}, energy (total remainder) {}",
                        round + 1,
                        rounds,
                        energy
                    ),
                    algorithm_name: self.name().to_string(),
                    progress: round as f64 / rounds as f64 * 100.0,
                });
            } else {
                swap_between(&mut groups, (w1, p1), (w2, p2));
            }

            energy_history.push(best_energy);
        }

        debug!(
            initial_energy,
            best_energy, rounds_run, accepted_moves, "annealing finished"
        );

        let mut arena: Vec<Option<Order>> = orders.into_iter().map(Some).collect();
        let waves = best
            .iter()
            .enumerate()
            .map(|(n, group)| {
                let members = group.iter().filter_map(|&i| arena[i].take()).collect();
                Wave::build(wave_id(n), members, skus)
            })
            .collect();

        AnnealingOutcome {
            waves,
            initial_energy,
            best_energy,
            rounds_run,
            accepted_moves,
            energy_history,
        }
    }
}

/// Swaps the entries at `(wave, position)` `a` and `b`; `a.0 != b.0`.
fn swap_between(groups: &mut [Vec<usize>], a: (usize, usize), b: (usize, usize)) {
    let tmp = groups[a.0][a.1];
    groups[a.0][a.1] = groups[b.0][b.1];
    groups[b.0][b.1] = tmp;
}

impl WaveStrategy for AnnealingStrategy {
    fn name(&self) -> &str {
        "Simulated Annealing (SA/GA)"
    }

    fn build_waves(
        &self,
        orders: Vec<Order>,
        skus: &[Sku],
        observer: &mut dyn StepObserver,
    ) -> Vec<Wave> {
        self.anneal(orders, skus, observer).waves
    }
}
