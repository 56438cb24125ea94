//! Core algorithms for cable-joiner.
//!
//! Two independent routines share one primitive:
//!
//! - [`cost::minimize_cost`] — repeatedly joins the two shortest outstanding
//!   cables and returns the minimum total joining cost.
//! - [`merge::merge`] — k-way merge of already-sorted sequences.
//!
//! Both are built on [`queue::MinPriorityQueue`]. Nothing here touches the
//! terminal or the filesystem; progress is reported through
//! [`observer::StepObserver`].

pub mod cost;
pub mod error;
pub mod merge;
pub mod observer;
pub mod queue;


pub use cost::{CostReport, minimize_cost, minimize_cost_report, minimize_cost_with};
pub use error::{CoreError, EmptyQueueError};
pub use merge::{KMerge, is_sorted_non_decreasing, merge, merge_slices};
pub use observer::{NoopObserver, StepEvent, StepObserver, StepRecorder};
pub use queue::MinPriorityQueue;
