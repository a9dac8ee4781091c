//! The step trace: an ordered, append-only log of algorithm state.
//!
//! Every state-mutating or decision event during a run produces one
//! [`Step`] carrying a full snapshot of the distance and predecessor
//! maps. The trace is the sole replay mechanism — playback never
//! recomputes anything, it only re-renders the snapshot at an index.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use sar_core::{Distance, EdgeId, NodeId};

/// What happened at a step. A tagged union rather than a free-form
/// string, so traces stay machine-checkable; the human-readable
/// `message` on [`Step`] is derived alongside, never parsed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum StepKind {
    /// Distances initialized: start at zero, everything else unreachable.
    Init,
    /// A vertex was settled — its distance is now final (Dijkstra).
    Settle { node: NodeId },
    /// A relaxation improved `to`'s tentative distance via `from`.
    Relax { from: NodeId, to: NodeId },
    /// An edge was considered but did not improve the tentative distance.
    NoImprovement { from: NodeId, to: NodeId },
    /// An edge was rejected by the risk-threshold admission control.
    Skip { from: NodeId, to: NodeId, risk: f64 },
    /// A full Bellman-Ford relaxation pass finished with updates.
    PassComplete { pass: usize },
    /// A Bellman-Ford pass performed zero relaxations — converged early.
    Converged { pass: usize },
    /// The post-pass scan found a still-relaxable arc. Terminal;
    /// distances for affected vertices are unreliable from here on.
    NegativeCycle,
    /// Clean completion. Terminal.
    Complete,
    /// Final reachability summary (Bellman-Ford).
    Summary { reachable: Vec<NodeId> },
}

/// One immutable record of algorithm state, ordered by `index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Sequence index within the trace, starting at 0.
    pub index: usize,
    pub kind: StepKind,
    /// Snapshot of every vertex's tentative distance.
    pub distances: BTreeMap<NodeId, Distance>,
    /// Snapshot of the predecessor map.
    pub predecessors: BTreeMap<NodeId, Option<NodeId>>,
    /// Settled vertices at this point (empty for Bellman-Ford).
    pub settled: BTreeSet<NodeId>,
    /// The vertex being processed, if any.
    pub current_node: Option<NodeId>,
    /// The edge under consideration, if any.
    pub highlighted_edge: Option<EdgeId>,
    /// Human-readable log line for this step.
    pub message: String,
}

impl Step {
    /// Whether this step ends the run.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.kind,
            StepKind::NegativeCycle | StepKind::Complete | StepKind::Summary { .. }
        )
    }

    pub fn negative_cycle_detected(&self) -> bool {
        matches!(self.kind, StepKind::NegativeCycle)
    }

    /// The snapshotted distance to `node` (unreachable if absent).
    pub fn distance_to(&self, node: &NodeId) -> Distance {
        self.distances
            .get(node)
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    /// The snapshotted predecessor of `node`, if one was recorded.
    pub fn predecessor_of(&self, node: &NodeId) -> Option<&NodeId> {
        self.predecessors.get(node).and_then(|p| p.as_ref())
    }
}

/// Append-only builder the engines record into.
#[derive(Debug, Default)]
pub(crate) struct StepRecorder {
    steps: Vec<Step>,
}

impl StepRecorder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn push(
        &mut self,
        kind: StepKind,
        distances: &BTreeMap<NodeId, Distance>,
        predecessors: &BTreeMap<NodeId, Option<NodeId>>,
        settled: &BTreeSet<NodeId>,
        current_node: Option<NodeId>,
        highlighted_edge: Option<EdgeId>,
        message: String,
    ) {
        let index = self.steps.len();
        self.steps.push(Step {
            index,
            kind,
            distances: distances.clone(),
            predecessors: predecessors.clone(),
            settled: settled.clone(),
            current_node,
            highlighted_edge,
            message,
        });
    }

    pub(crate) fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}
