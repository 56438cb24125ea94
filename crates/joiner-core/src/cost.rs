//! Minimum-cost joining of cables.
//!
//! Joining two cables of lengths `a` and `b` costs `a + b` and yields one
//! cable of that length. Always joining the two shortest outstanding cables
//! minimizes the total cost; this is the same exchange argument that makes
//! Huffman coding optimal, and no other pairing order is used here.
//!
//! # Tie-break
//!
//! Weights are plain `u64` values, so two equal weights are interchangeable
//! and the sequence of step costs is fully determined by the input multiset.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::observer::{NoopObserver, StepEvent, StepObserver, StepRecorder};
use crate::queue::MinPriorityQueue;

/// Total cost together with every step that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostReport {
    pub total_cost: u64,
    pub steps: Vec<StepEvent>,
}

/// Minimum total cost of joining all `weights` into one cable.
///
/// A single cable costs nothing to "join".
///
/// # Errors
/// - [`CoreError::EmptyInput`] if `weights` is empty.
/// - [`CoreError::CostOverflow`] if a sum does not fit in `u64`.
pub fn minimize_cost(weights: &[u64]) -> Result<u64, CoreError> {
    minimize_cost_with(weights, &mut NoopObserver)
}

/// Like [`minimize_cost`], but returns the full step trace as well.
///
/// # Errors
/// Same as [`minimize_cost`].
pub fn minimize_cost_report(weights: &[u64]) -> Result<CostReport, CoreError> {
    let mut recorder = StepRecorder::new();
    let total_cost = minimize_cost_with(weights, &mut recorder)?;
    Ok(CostReport {
        total_cost,
        steps: recorder.into_events(),
    })
}

/// Like [`minimize_cost`], reporting each combination to `observer`.
///
/// # Errors
/// Same as [`minimize_cost`]. On overflow the observer has already seen
/// every step that completed before it.
pub fn minimize_cost_with<O>(weights: &[u64], observer: &mut O) -> Result<u64, CoreError>
where
    O: StepObserver + ?Sized,
{
    let _span = tracing::debug_span!("minimize_cost", n = weights.len()).entered();

    if weights.is_empty() {
        return Err(CoreError::EmptyInput);
    }

    let mut pool = MinPriorityQueue::build(weights.iter().copied());
    let mut total_cost: u64 = 0;
    let mut step_index = 0;

    while pool.len() > 1 {
        step_index += 1;
        let first = pool.pop_min()?;
        let second = pool.pop_min()?;
        let cost = first
            .checked_add(second)
            .ok_or(CoreError::CostOverflow { step: step_index })?;
        total_cost = total_cost
            .checked_add(cost)
            .ok_or(CoreError::CostOverflow { step: step_index })?;
        pool.push(cost);

        observer.on_step(&StepEvent {
            step_index,
            first,
            second,
            cost,
            remaining: pool.len(),
        });
    }

    tracing::debug!(total_cost, steps = step_index, "cables joined");
    Ok(total_cost)
}
