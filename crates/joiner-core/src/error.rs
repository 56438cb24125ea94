//! Error types for the core algorithms.
//!
//! [`CoreError`] is returned by every fallible core operation. Malformed user
//! input never reaches this crate; the shell validates it first, so the only
//! failures left are contract violations and arithmetic overflow.

use thiserror::Error;

/// Errors returned by the core algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CoreError {
    /// `minimize_cost` was called with no weights at all.
    #[error("cannot join cables: the list of lengths is empty")]
    EmptyInput,

    /// A minimum was requested from an empty priority queue.
    ///
    /// Unreachable through the public operations; seeing it means a caller
    /// broke a precondition.
    #[error("priority queue is empty")]
    EmptyQueue,

    /// The accumulated cost no longer fits in a `u64`.
    #[error("joining cost overflowed at step {step}")]
    CostOverflow {
        /// 1-based index of the combination that overflowed.
        step: usize,
    },
}

/// Returned by [`MinPriorityQueue::pop_min`](crate::MinPriorityQueue::pop_min)
/// on an empty queue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Error)]
#[error("priority queue is empty")]
pub struct EmptyQueueError;

impl From<EmptyQueueError> for CoreError {
    fn from(_: EmptyQueueError) -> Self {
        Self::EmptyQueue
    }
}
