//! Core traits for wave strategies and progress observation.

use crate::metrics::Wave;
use crate::model::{Order, Sku};

/// Snapshot of a strategy's intermediate state.
///
/// Only the latest step is meaningful; observers should treat earlier ones
/// as superseded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationStep {
    /// Orders in the wave being assembled (or the wave just changed).
    pub current_wave_orders: Vec<Order>,
    /// Orders not yet assigned to any wave.
    pub pool_orders: Vec<Order>,
    /// Human-readable summary of the decision just made.
    pub description: String,
    /// Display name of the strategy that produced the step.
    pub algorithm_name: String,
    /// Completion percentage in `[0, 100]`.
    ///
    /// Only iteration-bounded strategies (annealing) report a non-zero value.
    pub progress: f64,
}

/// Receives progress notifications while a strategy runs.
///
/// Implemented for any `FnMut(SimulationStep)` closure and for
/// `Vec<SimulationStep>` (which records every step).
pub trait StepObserver {
    /// Called with each new snapshot.
    fn on_step(&mut self, step: SimulationStep);
}

impl<F> StepObserver for F
where
    F: FnMut(SimulationStep),
{
    fn on_step(&mut self, step: SimulationStep) {
        self(step)
    }
}

impl StepObserver for Vec<SimulationStep> {
    fn on_step(&mut self, step: SimulationStep) {
        self.push(step);
    }
}

/// Observer that discards every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _step: SimulationStep) {}
}

/// A batching strategy: partitions orders into waves.
///
/// Implementations own `orders` for the duration of the call and may
/// reorder or split it freely. Every input order must appear in exactly one
/// returned wave.
///
/// # Examples
///
/// ```
/// use u_wavebatch::model::{Order, OrderItem, Sku};
/// use u_wavebatch::strategy::{NoopObserver, PairingStrategy, WaveStrategy};
///
/// let skus = vec![Sku::new("a", 10)];
/// let orders = vec![
///     Order::new("o1", vec![OrderItem::new("a", 4)]),
///     Order::new("o2", vec![OrderItem::new("a", 6)]),
/// ];
/// let waves = PairingStrategy.build_waves(orders, &skus, &mut NoopObserver);
/// assert_eq!(waves.len(), 1);
/// assert!(waves[0].is_perfect());
/// ```
pub trait WaveStrategy {
    /// Display name used in progress steps.
    fn name(&self) -> &str;

    /// Groups `orders` into waves, reporting progress to `observer`.
    fn build_waves(
        &self,
        orders: Vec<Order>,
        skus: &[Sku],
        observer: &mut dyn StepObserver,
    ) -> Vec<Wave>;
}

/// Identifier for the `n`-th (zero-based) wave committed in a run.
pub(crate) fn wave_id(n: usize) -> String {
    format!("wave-{:03}", n + 1)
}
