//! Playback over a precomputed step trace.
//!
//! Navigation is a pure state machine: an index into an immutable step
//! sequence, clamped to `[-1, len - 1]`, where `-1` means "before the
//! first step". Nothing is recomputed when moving. A trace is only
//! valid for the graph it was computed from — after mutating a
//! topology, rebuild the graph, rerun the engine, and construct a
//! fresh cursor.

use crate::step::Step;

/// A replay cursor over an immutable, ordered step sequence.
#[derive(Debug, Clone)]
pub struct TraceCursor {
    steps: Vec<Step>,
    index: isize,
}

impl TraceCursor {
    /// Wrap a completed trace. The cursor starts at `-1`, before the
    /// first step.
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps, index: -1 }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Current position in `[-1, len - 1]`.
    pub fn index(&self) -> isize {
        self.index
    }

    /// The step at the current position, or `None` at position `-1`.
    pub fn current(&self) -> Option<&Step> {
        if self.index < 0 {
            None
        } else {
            self.steps.get(self.index as usize)
        }
    }

    pub fn is_at_start(&self) -> bool {
        self.index < 0
    }

    pub fn is_at_end(&self) -> bool {
        !self.steps.is_empty() && self.index == self.steps.len() as isize - 1
    }

    /// Advance one step, clamped at the last step.
    pub fn step_forward(&mut self) -> Option<&Step> {
        if self.index + 1 < self.steps.len() as isize {
            self.index += 1;
        }
        self.current()
    }

    /// Go back one step, clamped at `-1`.
    pub fn step_back(&mut self) -> Option<&Step> {
        if self.index > -1 {
            self.index -= 1;
        }
        self.current()
    }

    /// Jump to an arbitrary position, clamped to `[-1, len - 1]`.
    pub fn seek(&mut self, index: isize) -> Option<&Step> {
        let max = self.steps.len() as isize - 1;
        self.index = index.clamp(-1, max.max(-1));
        self.current()
    }

    /// Return to the pre-run position.
    pub fn reset(&mut self) {
        self.index = -1;
    }
}
