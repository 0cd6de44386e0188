//! Run coordination.
//!
//! [`Coordinator`] resolves a strategy identifier, copies the caller's
//! orders, runs the strategy with throttled progress forwarding, and
//! returns a single [`AlgorithmResult`].
//!
//! # Key Types
//!
//! - [`StrategyKind`]: closed registry of strategies with a greedy default
//! - [`EngineConfig`]: per-strategy parameters plus [`PacingConfig`]
//! - [`Throttle`]: observer adapter that drops and paces steps

mod config;
mod pacing;
mod runner;
mod types;

pub use config::{EngineConfig, PacingConfig};
pub use pacing::Throttle;
pub use runner::Coordinator;
pub use types::{AlgorithmResult, Resolution, StrategyKind, FALLBACK_NAME};
