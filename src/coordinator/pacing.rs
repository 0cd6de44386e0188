//! Throttled forwarding of progress steps.

use std::thread;
use std::time::Instant;

use super::config::PacingConfig;
use crate::strategy::{SimulationStep, StepObserver};

/// Observer adapter enforcing a [`PacingConfig`].
///
/// Steps arriving within `min_interval` of the last forwarded one are
/// dropped without queuing. Each forwarded step blocks the calling strategy
/// for `pause`.
pub struct Throttle<'a> {
    inner: &'a mut dyn StepObserver,
    config: PacingConfig,
    last_forward: Option<Instant>,
    forwarded: usize,
    dropped: usize,
}

impl<'a> Throttle<'a> {
    pub fn new(inner: &'a mut dyn StepObserver, config: PacingConfig) -> Self {
        Self {
            inner,
            config,
            last_forward: None,
            forwarded: 0,
            dropped: 0,
        }
    }

    /// Steps delivered to the wrapped observer.
    pub fn forwarded(&self) -> usize {
        self.forwarded
    }

    /// Steps discarded by the interval check.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl StepObserver for Throttle<'_> {
    fn on_step(&mut self, step: SimulationStep) {
        let now = Instant::now();
        let due = self
            .last_forward
            .is_none_or(|last| now.duration_since(last) >= self.config.min_interval);
        if !due {
            self.dropped += 1;
            return;
        }

        self.last_forward = Some(now);
        self.forwarded += 1;
        self.inner.on_step(step);

        if !self.config.pause.is_zero() {
            thread::sleep(self.config.pause);
        }
    }
}
