//! Step events emitted while joining cables.
//!
//! The core never logs or prints on its own behalf; callers pass a
//! [`StepObserver`] and decide what to do with each [`StepEvent`].

use serde::{Deserialize, Serialize};

/// One combination performed by the cost minimizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEvent {
    /// 1-based step number.
    pub step_index: usize,
    /// The shorter of the two joined cables.
    pub first: u64,
    /// The longer of the two joined cables.
    pub second: u64,
    /// Cost of this step (`first + second`), also the new cable length.
    pub cost: u64,
    /// Number of cables left in the pool after this step.
    pub remaining: usize,
}

/// Receives a [`StepEvent`] after every combination.
pub trait StepObserver {
    fn on_step(&mut self, event: &StepEvent);
}

/// Observer that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _event: &StepEvent) {}
}

impl<F> StepObserver for F
where
    F: FnMut(&StepEvent),
{
    fn on_step(&mut self, event: &StepEvent) {
        self(event);
    }
}

/// Collects events in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepRecorder {
    events: Vec<StepEvent>,
}

impl StepRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[StepEvent] {
        &self.events
    }

    #[must_use]
    pub fn into_events(self) -> Vec<StepEvent> {
        self.events
    }
}

impl StepObserver for StepRecorder {
    fn on_step(&mut self, event: &StepEvent) {
        self.events.push(*event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(step_index: usize) -> StepEvent {
        StepEvent {
            step_index,
            first: 1,
            second: 2,
            cost: 3,
            remaining: 1,
        }
    }

    #[test]
    fn closure_observer_sees_events() {
        let mut seen = 0;
        {
            let mut obs = |e: &StepEvent| seen += e.cost;
            obs.on_step(&event(1));
            obs.on_step(&event(2));
        }
        assert_eq!(seen, 6);
    }

    #[test]
    fn recorder_collects_in_order() {
        let mut recorder = StepRecorder::new();
        recorder.on_step(&event(1));
        recorder.on_step(&event(2));
        assert_eq!(recorder.events().len(), 2);
        assert_eq!(
            recorder
                .into_events()
                .iter()
                .map(|e| e.step_index)
                .collect::<Vec<_>>(),
            vec![1, 2]
        );
    }
}
