//! The two exercises, wired to the core and rendered for the console.
//!
//! Shared by the interactive menu and the one-shot subcommands.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use joiner_core::{StepEvent, StepObserver, StepRecorder, merge, minimize_cost_with};
use serde::Serialize;

use crate::console::{Console, Tone};

// ---------------------------------------------------------------------------
// TracingObserver
// ---------------------------------------------------------------------------

/// Logs every joining step at `info` and keeps the trace for rendering.
#[derive(Debug, Default)]
pub struct TracingObserver {
    recorder: StepRecorder,
}

impl TracingObserver {
    #[must_use]
    pub fn into_steps(self) -> Vec<StepEvent> {
        self.recorder.into_events()
    }
}

impl StepObserver for TracingObserver {
    fn on_step(&mut self, event: &StepEvent) {
        tracing::info!(
            step = event.step_index,
            first = event.first,
            second = event.second,
            cost = event.cost,
            remaining = event.remaining,
            "joined cables"
        );
        self.recorder.on_step(event);
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Result of joining cables; also the JSON envelope for `connect`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CableOutcome {
    pub lengths: Vec<u64>,
    pub steps: Vec<StepEvent>,
    pub total_cost: u64,
}

/// Result of merging lists; also the JSON envelope for `merge`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MergeOutcome {
    pub lists: Vec<Vec<i64>>,
    pub merged: Vec<i64>,
}

/// Join `lengths` at minimum cost, logging each step.
///
/// # Errors
/// Propagates core errors (empty input, overflow) with context.
pub fn join_cables(lengths: Vec<u64>) -> Result<CableOutcome> {
    let mut observer = TracingObserver::default();
    let total_cost =
        minimize_cost_with(&lengths, &mut observer).context("could not join the cables")?;
    tracing::info!(total_cost, cables = lengths.len(), "minimum joining cost computed");
    Ok(CableOutcome {
        lengths,
        steps: observer.into_steps(),
        total_cost,
    })
}

/// Merge `lists` into one sorted list.
#[must_use]
pub fn merge_lists(lists: Vec<Vec<i64>>) -> MergeOutcome {
    let merged = merge(lists.clone());
    tracing::info!(?merged, "merged sorted list");
    MergeOutcome { lists, merged }
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

/// `[1, 2, 3]`
pub fn format_list<T: std::fmt::Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Print the joining steps and the total.
///
/// # Errors
/// Returns an error if the output cannot be written.
pub fn render_cables<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    outcome: &CableOutcome,
) -> Result<()> {
    if outcome.steps.is_empty() {
        console.line(Tone::Prompt, "Only one cable. Nothing to join, no cost.")?;
    } else {
        console.blank()?;
        console.line(
            Tone::Prompt,
            "Joining cables (minimizing the total cost):",
        )?;
        for step in &outcome.steps {
            console.line(
                Tone::Success,
                format!(
                    "Step {}: joined {} + {} at cost {}.",
                    step.step_index, step.first, step.second, step.cost
                ),
            )?;
        }
    }
    console.blank()?;
    console.line(Tone::Heading, "Done!")?;
    console.line(
        Tone::Prompt,
        format!("Minimum total cost of joining the cables: {}", outcome.total_cost),
    )
}

/// Print the merged list.
///
/// # Errors
/// Returns an error if the output cannot be written.
pub fn render_merge<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    outcome: &MergeOutcome,
) -> Result<()> {
    console.blank()?;
    console.line(Tone::Heading, "Result of merging the sorted lists:")?;
    console.line(
        Tone::Prompt,
        format!("Merged sorted list: {}", format_list(&outcome.merged)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Console<&[u8], Vec<u8>>) -> Result<()>,
    {
        let mut c = Console::new(&b""[..], Vec::new(), false);
        f(&mut c).unwrap();
        String::from_utf8(c.into_output()).unwrap()
    }

    #[test]
    fn join_cables_collects_steps() {
        let outcome = join_cables(vec![1, 2, 3, 4]).unwrap();
        assert_eq!(outcome.total_cost, 19);
        assert_eq!(outcome.steps.len(), 3);
        assert_eq!(outcome.lengths, vec![1, 2, 3, 4]);
    }

    #[test]
    fn join_cables_empty_is_an_error() {
        let err = join_cables(Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("empty"));
    }

    #[test]
    fn render_cables_lists_every_step() {
        let outcome = join_cables(vec![1, 2, 3, 4]).unwrap();
        let out = render(|c| render_cables(c, &outcome));
        assert!(out.contains("Step 1: joined 1 + 2 at cost 3."));
        assert!(out.contains("Step 3: joined 4 + 6 at cost 10."));
        assert!(out.contains("Minimum total cost of joining the cables: 19"));
    }

    #[test]
    fn render_single_cable() {
        let outcome = join_cables(vec![5]).unwrap();
        let out = render(|c| render_cables(c, &outcome));
        assert!(out.contains("Only one cable"));
        assert!(out.contains("cables: 0"));
    }

    #[test]
    fn merge_and_render() {
        let outcome = merge_lists(vec![vec![1, 4, 7], vec![2, 3], vec![0, 5, 6]]);
        assert_eq!(outcome.merged, vec![0, 1, 2, 3, 4, 5, 6, 7]);
        let out = render(|c| render_merge(c, &outcome));
        assert!(out.contains("Merged sorted list: [0, 1, 2, 3, 4, 5, 6, 7]"));
    }

    #[test]
    fn outcome_json_shape() {
        let outcome = join_cables(vec![2, 2]).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["total_cost"], 4);
        assert_eq!(json["steps"][0]["step_index"], 1);
        assert_eq!(json["steps"][0]["cost"], 4);
    }

    #[test]
    fn format_list_brackets() {
        assert_eq!(format_list::<i64>(&[]), "[]");
        assert_eq!(format_list(&[3, -1]), "[3, -1]");
    }
}
