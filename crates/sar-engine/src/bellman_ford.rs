//! Iterative-relaxation single-source shortest path with negative-cycle
//! detection and a full step trace.

use std::collections::{BTreeMap, BTreeSet};

use sar_core::{Distance, Graph, NodeId, RoutingPolicy};

use crate::cost::{edge_cost, mode_label};
use crate::step::{Step, StepKind, StepRecorder};

/// Run Bellman-Ford from `start` under `policy`, returning the ordered
/// step trace. Total for any well-formed graph; a negative cycle is
/// signalled via a terminal step flag, never an error.
///
/// Each undirected edge is relaxed as two directed arcs. Exactly
/// `|V| - 1` passes are attempted, with early exit once a pass performs
/// zero relaxations. Relaxation uses strict less-than: an equal-cost
/// alternative never replaces the first-discovered predecessor. There
/// is no risk threshold — this engine evaluates the full blended cost
/// and serves as the comparison baseline.
pub fn run_bellman_ford(graph: &Graph, start: &NodeId, policy: &RoutingPolicy) -> Vec<Step> {
    let mut recorder = StepRecorder::new();

    let mut distances: BTreeMap<NodeId, Distance> = graph
        .nodes()
        .iter()
        .map(|n| (n.clone(), Distance::Unreachable))
        .collect();
    let mut predecessors: BTreeMap<NodeId, Option<NodeId>> =
        graph.nodes().iter().map(|n| (n.clone(), None)).collect();
    // Bellman-Ford never settles vertices; the snapshot set stays empty.
    let settled: BTreeSet<NodeId> = BTreeSet::new();

    if graph.contains(start) {
        distances.insert(start.clone(), Distance::ZERO);
    }

    recorder.push(
        StepKind::Init,
        &distances,
        &predecessors,
        &settled,
        None,
        None,
        format!(
            "{} Bellman-Ford initialized. Source: {}. All distances set to ∞ except source (0).",
            mode_label(policy),
            start
        ),
    );

    let node_count = graph.node_count();
    let passes = node_count.saturating_sub(1);

    for pass in 1..=passes {
        let mut relaxed_in_pass = 0usize;

        for edge in graph.edges() {
            if edge.is_self_loop() {
                continue;
            }
            let cost = edge_cost(edge, policy);

            for (from, to) in [(&edge.a, &edge.b), (&edge.b, &edge.a)] {
                let from_distance = distances.get(from).copied().unwrap_or(Distance::Unreachable);
                let from_value = match from_distance.value() {
                    Some(v) => v,
                    None => continue,
                };
                let candidate = Distance::Finite(from_value + cost);
                let existing = distances.get(to).copied().unwrap_or(Distance::Unreachable);
                if candidate < existing {
                    distances.insert(to.clone(), candidate);
                    predecessors.insert(to.clone(), Some(from.clone()));
                    relaxed_in_pass += 1;
                    tracing::debug!(
                        pass,
                        from = %from,
                        to = %to,
                        distance = from_value + cost,
                        "relaxed arc"
                    );
                    recorder.push(
                        StepKind::Relax {
                            from: from.clone(),
                            to: to.clone(),
                        },
                        &distances,
                        &predecessors,
                        &settled,
                        None,
                        Some(edge.id.clone()),
                        format!(
                            "Pass {}: relaxed arc {} → {}. Distance to {}: {} → {:.2} (cost: {:.2}).",
                            pass,
                            from,
                            to,
                            to,
                            existing,
                            from_value + cost,
                            cost
                        ),
                    );
                }
            }
        }

        if relaxed_in_pass == 0 {
            recorder.push(
                StepKind::Converged { pass },
                &distances,
                &predecessors,
                &settled,
                None,
                None,
                format!("Pass {}: no arcs relaxed. Algorithm converged early.", pass),
            );
            break;
        }
        recorder.push(
            StepKind::PassComplete { pass },
            &distances,
            &predecessors,
            &settled,
            None,
            None,
            format!("Pass {}: completed arc relaxation phase.", pass),
        );
    }

    // One additional full scan: any arc that can still be relaxed means
    // a negative cycle, and distances past this point are unreliable
    // for the affected vertices.
    let mut negative_cycle = false;
    'scan: for edge in graph.edges() {
        if edge.is_self_loop() {
            continue;
        }
        let cost = edge_cost(edge, policy);
        for (from, to) in [(&edge.a, &edge.b), (&edge.b, &edge.a)] {
            let from_distance = distances.get(from).copied().unwrap_or(Distance::Unreachable);
            if let Some(from_value) = from_distance.value() {
                let existing = distances.get(to).copied().unwrap_or(Distance::Unreachable);
                if Distance::Finite(from_value + cost) < existing {
                    negative_cycle = true;
                    tracing::warn!(edge = %edge.id, from = %from, to = %to, "negative cycle detected");
                    recorder.push(
                        StepKind::NegativeCycle,
                        &distances,
                        &predecessors,
                        &settled,
                        None,
                        Some(edge.id.clone()),
                        format!(
                            "Negative cycle detected! Arc {} → {} can still be relaxed after {} passes.",
                            from, to, passes
                        ),
                    );
                    break 'scan;
                }
            }
        }
    }

    if !negative_cycle {
        recorder.push(
            StepKind::Complete,
            &distances,
            &predecessors,
            &settled,
            None,
            None,
            "Negative cycle check: no cycles found. Algorithm completed successfully.".to_string(),
        );
    }

    let reachable: Vec<NodeId> = distances
        .iter()
        .filter(|(n, d)| *n != start && d.is_finite())
        .map(|(n, _)| n.clone())
        .collect();
    let reachable_list = reachable
        .iter()
        .map(|n| n.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    recorder.push(
        StepKind::Summary {
            reachable: reachable.clone(),
        },
        &distances,
        &predecessors,
        &settled,
        None,
        None,
        format!(
            "Run complete. Reachable nodes from {}: [{}]. Mode: {}. Passes: {}.",
            start,
            reachable_list,
            mode_label(policy),
            passes
        ),
    );

    recorder.into_steps()
}
