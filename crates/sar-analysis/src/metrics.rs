use serde::{Deserialize, Serialize};

use sar_core::{Graph, NodeId};
use sar_engine::Step;

use crate::path::build_path;

/// Per-destination aggregates derived from one completed run.
///
/// Sums are over the raw edge weights along the reconstructed path —
/// the actual distance and actual risk, not the blended cost the
/// engine optimized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteMetrics {
    pub total_distance: f64,
    pub total_security_risk: f64,
    pub hop_count: usize,
    pub path_nodes: Vec<NodeId>,
}

/// Derive metrics for `target` from the final step of a completed
/// trace. `None` when the target is unreachable.
pub fn compute_metrics(
    graph: &Graph,
    steps: &[Step],
    start: &NodeId,
    target: &NodeId,
) -> Option<RouteMetrics> {
    let final_step = steps.last()?;
    if final_step.distance_to(target).is_unreachable() {
        return None;
    }

    let path_nodes = build_path(steps, start, target);
    if path_nodes.is_empty() {
        return None;
    }
    let hop_count = path_nodes.len() - 1;

    let mut total_distance = 0.0;
    let mut total_security_risk = 0.0;
    for pair in path_nodes.windows(2) {
        // Look the edge up in the graph, either orientation.
        if let Some(edge) = graph.find_edge(&pair[0], &pair[1]) {
            total_distance += edge.distance_weight();
            total_security_risk += edge.security_risk();
        }
    }

    Some(RouteMetrics {
        total_distance,
        total_security_risk,
        hop_count,
        path_nodes,
    })
}
