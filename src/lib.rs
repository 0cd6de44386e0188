//! Wave batching for full-case picking.
//!
//! Groups incoming orders into *waves* so that, for every SKU, the total
//! quantity in a wave is as close as possible to a whole number of cases.
//! Every unit that does not fill a case is a split-case pick; the sum of
//! those remainders is the penalty all strategies minimize.
//!
//! - **Metrics**: [`metrics::evaluate`] computes per-SKU totals, cases and
//!   remainders for any group of orders. It is the single scoring function
//!   shared by every strategy.
//! - **Strategies**: greedy accretion, complement pairing, similarity
//!   clustering, and simulated annealing, behind the
//!   [`strategy::WaveStrategy`] trait.
//! - **Coordinator**: [`coordinator::Coordinator`] selects a strategy by
//!   identifier, paces progress notifications for live views, and returns
//!   an [`coordinator::AlgorithmResult`].
//!
//! All strategies are heuristics; none guarantees an optimal partition.
//!
//! # Example
//!
//! ```
//! use u_wavebatch::coordinator::{Coordinator, EngineConfig};
//! use u_wavebatch::model::{Order, OrderItem, Sku};
//! use u_wavebatch::strategy::SimulationStep;
//!
//! let skus = vec![Sku::new("sku-0", 10)];
//! let orders: Vec<Order> = [3, 7, 2, 8]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &q)| Order::new(format!("ORD-{i}"), vec![OrderItem::new("sku-0", q)]))
//!     .collect();
//!
//! let coordinator = Coordinator::new(EngineConfig::batch()).unwrap();
//! let mut log = Vec::new();
//! let result = coordinator.run("greedy", &orders, &skus, &mut |step: SimulationStep| {
//!     log.push(step.description)
//! });
//!
//! assert_eq!(result.total_remainder(), 0);
//! assert!(!log.is_empty());
//! ```

pub mod coordinator;
pub mod error;
pub mod generator;
pub mod history;
pub mod metrics;
pub mod model;
pub mod random;
pub mod strategy;

pub use error::ConfigError;
