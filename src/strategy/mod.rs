//! Wave batching strategies.
//!
//! Each strategy partitions a pool of orders into waves and reports
//! intermediate state through a [`StepObserver`]. All of them score waves
//! with [`metrics`](crate::metrics), so their results are comparable.
//!
//! # Strategies
//!
//! - [`GreedyStrategy`]: grows each wave by the pool order that least
//!   increases the penalty, within a slack
//! - [`PairingStrategy`]: pairs each seed with its best complement
//! - [`SimilarityStrategy`]: clusters orders by SKU-set Jaccard similarity
//! - [`AnnealingStrategy`]: refines a naive chunking by random swaps under
//!   a cooling temperature

mod annealing;
mod config;
mod greedy;
mod pairing;
mod scan;
mod similarity;
mod types;

pub use annealing::{AnnealingOutcome, AnnealingStrategy};
pub use config::{AnnealingConfig, CoolingSchedule, GreedyConfig, SimilarityConfig};
pub use greedy::GreedyStrategy;
pub use pairing::PairingStrategy;
pub use similarity::{jaccard, SimilarityStrategy};
pub use types::{NoopObserver, SimulationStep, StepObserver, WaveStrategy};
