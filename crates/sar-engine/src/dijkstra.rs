//! Label-setting single-source shortest path with a full step trace.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use sar_core::{Distance, Graph, NodeId, RoutingMode, RoutingPolicy};

use crate::cost::{edge_cost, mode_label};
use crate::step::{Step, StepKind, StepRecorder};

/// Admission-control cutoff applied when the caller supplies none.
pub const DEFAULT_RISK_THRESHOLD: f64 = 0.8;

/// Min-heap entry. Ordered by tentative distance, then by insertion
/// sequence so that equal-distance vertices settle in the order they
/// were first pushed — the tie-break must be deterministic.
#[derive(Debug, Clone)]
struct FrontierEntry {
    distance: f64,
    seq: u64,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; invert both keys for min-behavior.
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Run Dijkstra from `start` under `policy`, returning the ordered step
/// trace. Total for any well-formed graph: a start vertex that is not
/// in the graph yields an initialization-only trace, never an error.
///
/// In security-aware mode, edges whose risk exceeds `risk_threshold`
/// (default [`DEFAULT_RISK_THRESHOLD`]) are rejected outright — a hard
/// admission cutoff recorded as a `Skip` step, not a cost penalty.
/// Classic mode never reads risk and ignores the threshold.
pub fn run_dijkstra(
    graph: &Graph,
    start: &NodeId,
    policy: &RoutingPolicy,
    risk_threshold: Option<f64>,
) -> Vec<Step> {
    let threshold = risk_threshold.unwrap_or(DEFAULT_RISK_THRESHOLD);
    let mut recorder = StepRecorder::new();

    let mut distances: BTreeMap<NodeId, Distance> = graph
        .nodes()
        .iter()
        .map(|n| (n.clone(), Distance::Unreachable))
        .collect();
    let mut predecessors: BTreeMap<NodeId, Option<NodeId>> =
        graph.nodes().iter().map(|n| (n.clone(), None)).collect();
    let mut settled: BTreeSet<NodeId> = BTreeSet::new();

    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    let mut seq: u64 = 0;

    if graph.contains(start) {
        distances.insert(start.clone(), Distance::ZERO);
        frontier.push(FrontierEntry {
            distance: 0.0,
            seq,
            node: start.clone(),
        });
        seq += 1;
    }

    recorder.push(
        StepKind::Init,
        &distances,
        &predecessors,
        &settled,
        None,
        None,
        format!(
            "{} Dijkstra initialized. Start node: {}, all other distances set to ∞.",
            mode_label(policy),
            start
        ),
    );

    while let Some(entry) = frontier.pop() {
        let current = entry.node;
        let current_distance = entry.distance;

        // Outdated entry for an already-settled vertex.
        if settled.contains(&current) {
            continue;
        }
        settled.insert(current.clone());
        tracing::debug!(node = %current, distance = current_distance, "settled vertex");

        recorder.push(
            StepKind::Settle {
                node: current.clone(),
            },
            &distances,
            &predecessors,
            &settled,
            Some(current.clone()),
            None,
            format!(
                "Visiting node {}. Current shortest distance: {:.2}. Mark as visited.",
                current, current_distance
            ),
        );

        for edge in graph.incident_edges(&current) {
            // A self-loop can never improve a distance.
            if edge.is_self_loop() {
                continue;
            }
            let neighbor = match edge.other(&current) {
                Some(n) => n.clone(),
                None => continue,
            };
            if settled.contains(&neighbor) {
                continue;
            }

            if policy.mode == RoutingMode::SecurityAware {
                let risk = edge.security_risk();
                if risk > threshold {
                    recorder.push(
                        StepKind::Skip {
                            from: current.clone(),
                            to: neighbor.clone(),
                            risk,
                        },
                        &distances,
                        &predecessors,
                        &settled,
                        Some(current.clone()),
                        Some(edge.id.clone()),
                        format!(
                            "SAR: skipping edge {} to {} — security risk {:.2} exceeds threshold {:.2}.",
                            edge.id, neighbor, risk, threshold
                        ),
                    );
                    continue;
                }
            }

            let cost = edge_cost(edge, policy);
            let candidate_value = current_distance + cost;
            let candidate = Distance::Finite(candidate_value);
            let existing = distances
                .get(&neighbor)
                .copied()
                .unwrap_or(Distance::Unreachable);

            if candidate < existing {
                distances.insert(neighbor.clone(), candidate);
                predecessors.insert(neighbor.clone(), Some(current.clone()));
                frontier.push(FrontierEntry {
                    distance: candidate_value,
                    seq,
                    node: neighbor.clone(),
                });
                seq += 1;
                tracing::debug!(
                    from = %current,
                    to = %neighbor,
                    distance = candidate_value,
                    "relaxed edge"
                );
                recorder.push(
                    StepKind::Relax {
                        from: current.clone(),
                        to: neighbor.clone(),
                    },
                    &distances,
                    &predecessors,
                    &settled,
                    Some(current.clone()),
                    Some(edge.id.clone()),
                    format!(
                        "Updated distance for {} to {:.2} via edge {}. Set predecessor to {}.",
                        neighbor, candidate_value, edge.id, current
                    ),
                );
            } else {
                recorder.push(
                    StepKind::NoImprovement {
                        from: current.clone(),
                        to: neighbor.clone(),
                    },
                    &distances,
                    &predecessors,
                    &settled,
                    Some(current.clone()),
                    Some(edge.id.clone()),
                    format!(
                        "No update needed for {} (new: {:.2} ≥ current: {}).",
                        neighbor, candidate_value, existing
                    ),
                );
            }
        }
    }

    recorder.push(
        StepKind::Complete,
        &distances,
        &predecessors,
        &settled,
        None,
        None,
        format!(
            "{} Dijkstra finished. All reachable nodes visited.",
            mode_label(policy)
        ),
    );

    recorder.into_steps()
}
