//! K-way merge of sorted sequences.
//!
//! The frontier holds at most one head per input, keyed by
//! `(value, source index)`, so equal values from different inputs come out
//! in input order and the output is reproducible. Each element costs one
//! `pop_min` and at most one `push`: O(n log k) for n elements across k
//! inputs.
//!
//! Inputs must already be sorted in non-decreasing order. This is not
//! checked; an unsorted input yields an unspecified (but complete) ordering.

use crate::queue::MinPriorityQueue;

// ---------------------------------------------------------------------------
// Head — one frontier entry
// ---------------------------------------------------------------------------

/// Current head of one input. Field order matters: the derived `Ord` compares
/// `value` first and falls back to `source`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Head<T> {
    value: T,
    source: usize,
}

// ---------------------------------------------------------------------------
// KMerge
// ---------------------------------------------------------------------------

/// Lazy merge of several sorted iterators.
///
/// ```
/// use joiner_core::KMerge;
///
/// let merged: Vec<i32> = KMerge::new(vec![vec![1, 4], vec![2, 3]]).collect();
/// assert_eq!(merged, vec![1, 2, 3, 4]);
/// ```
pub struct KMerge<I>
where
    I: Iterator,
    I::Item: Ord,
{
    frontier: MinPriorityQueue<Head<I::Item>>,
    sources: Vec<I>,
}

impl<I> KMerge<I>
where
    I: Iterator,
    I::Item: Ord,
{
    /// Start merging `inputs`. Empty inputs are skipped.
    pub fn new<S>(inputs: S) -> Self
    where
        S: IntoIterator,
        S::Item: IntoIterator<IntoIter = I, Item = I::Item>,
    {
        let mut sources: Vec<I> = inputs.into_iter().map(IntoIterator::into_iter).collect();
        let frontier = sources
            .iter_mut()
            .enumerate()
            .filter_map(|(source, it)| it.next().map(|value| Head { value, source }))
            .collect();
        Self { frontier, sources }
    }

    /// Number of inputs that still have elements.
    #[must_use]
    pub fn live_sources(&self) -> usize {
        self.frontier.len()
    }
}

impl<I> Iterator for KMerge<I>
where
    I: Iterator,
    I::Item: Ord,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Head { value, source } = self.frontier.pop_min().ok()?;
        if let Some(next) = self.sources.get_mut(source).and_then(Iterator::next) {
            self.frontier.push(Head {
                value: next,
                source,
            });
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.frontier.len();
        self.sources
            .iter()
            .map(Iterator::size_hint)
            .fold((pending, Some(pending)), |(lo, hi), (l, h)| {
                (
                    lo.saturating_add(l),
                    hi.and_then(|hi| h.and_then(|h| hi.checked_add(h))),
                )
            })
    }
}

// ---------------------------------------------------------------------------
// Convenience wrappers
// ---------------------------------------------------------------------------

/// Merge owned sorted sequences into one sorted vector.
///
/// An empty `sequences` gives an empty vector; empty sub-sequences are ignored.
#[must_use]
pub fn merge<T: Ord>(sequences: Vec<Vec<T>>) -> Vec<T> {
    let _span = tracing::debug_span!("merge", k = sequences.len()).entered();
    let merged: Vec<T> = KMerge::new(sequences).collect();
    tracing::debug!(len = merged.len(), "sequences merged");
    merged
}

/// Merge borrowed sorted slices into one sorted vector.
#[must_use]
pub fn merge_slices<T: Ord + Clone>(sequences: &[&[T]]) -> Vec<T> {
    KMerge::new(sequences.iter().map(|s| s.iter()))
        .cloned()
        .collect()
}

/// `true` if `seq[i] <= seq[i + 1]` for every adjacent pair.
#[must_use]
pub fn is_sorted_non_decreasing<T: Ord>(seq: &[T]) -> bool {
    seq.windows(2).all(|w| w[0] <= w[1])
}
