//! Caller-side accumulation of run results for comparison.

use crate::coordinator::AlgorithmResult;

/// Results of past runs, at most one per strategy id.
///
/// The engine never holds on to results; this type is for callers that want
/// to compare strategies over the same input.
#[derive(Debug, Clone, Default)]
pub struct RunHistory {
    results: Vec<AlgorithmResult>,
}

impl RunHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `result`, replacing an earlier result with the same
    /// strategy id. New ids are appended, so insertion order is kept.
    pub fn record(&mut self, result: AlgorithmResult) {
        match self
            .results
            .iter_mut()
            .find(|r| r.algorithm_id() == result.algorithm_id())
        {
            Some(slot) => *slot = result,
            None => self.results.push(result),
        }
    }

    /// The best result: lowest total remainder, then most perfect waves,
    /// then shortest execution time.
    pub fn best(&self) -> Option<&AlgorithmResult> {
        self.results.iter().min_by(|a, b| {
            a.total_remainder()
                .cmp(&b.total_remainder())
                .then_with(|| b.perfect_waves().cmp(&a.perfect_waves()))
                .then_with(|| a.execution_time().cmp(&b.execution_time()))
        })
    }

    pub fn get(&self, algorithm_id: &str) -> Option<&AlgorithmResult> {
        self.results.iter().find(|r| r.algorithm_id() == algorithm_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmResult> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }
}
