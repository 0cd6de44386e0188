//! Candidate scanning shared by the accretion strategies.

/// Returns `(index, penalty)` of the lowest-penalty candidate in `0..len`.
///
/// Ties resolve to the lowest index, so the result is identical whether or
/// not the `parallel` feature is enabled.
pub(crate) fn best_candidate<F>(len: usize, score: F) -> Option<(usize, u64)>
where
    F: Fn(usize) -> u64 + Sync,
{
    #[cfg(feature = "parallel")]
    let best = {
        use rayon::prelude::*;
        (0..len).into_par_iter().map(|i| (score(i), i)).min()
    };

    #[cfg(not(feature = "parallel"))]
    let best = (0..len).map(|i| (score(i), i)).min();

    best.map(|(penalty, index)| (index, penalty))
}
