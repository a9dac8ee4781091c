//! Policy comparison: classic vs. security-aware over one topology.

use serde::{Deserialize, Serialize};

use sar_core::{EngineKind, Graph, NodeId, RoutingPolicy};
use sar_engine::{run_bellman_ford, run_dijkstra, Step};

use crate::metrics::{compute_metrics, RouteMetrics};

/// Classification of a single destination under the two policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteOutcome {
    BothUnreachable,
    ClassicOnly,
    SecurityAwareOnly,
    /// Reachable under both with literally identical node sequences.
    IdenticalPath,
    /// Reachable under both but the node sequences differ anywhere —
    /// a different intermediate node or a reordering both count.
    RouteChanged,
}

impl std::fmt::Display for RouteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BothUnreachable => write!(f, "both unreachable"),
            Self::ClassicOnly => write!(f, "classic only"),
            Self::SecurityAwareOnly => write!(f, "sar only"),
            Self::IdenticalPath => write!(f, "identical"),
            Self::RouteChanged => write!(f, "changed"),
        }
    }
}

/// Per-destination comparison row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationResult {
    pub destination: NodeId,
    pub outcome: RouteOutcome,
    pub classic: Option<RouteMetrics>,
    pub security_aware: Option<RouteMetrics>,
}

/// Aggregates over all destinations.
///
/// The percentage averages cover only destinations reachable under
/// both policies; a zero classic denominator contributes 0% rather
/// than propagating NaN or infinity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub destinations: usize,
    pub reachable_classic: usize,
    pub reachable_security_aware: usize,
    pub route_changes: usize,
    pub avg_risk_reduction_pct: f64,
    pub avg_distance_increase_pct: f64,
}

/// The full comparison: per-destination rows plus the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub start: NodeId,
    pub engine: EngineKind,
    pub results: Vec<DestinationResult>,
    pub summary: ComparisonSummary,
}

fn run_engine(
    engine: EngineKind,
    graph: &Graph,
    start: &NodeId,
    policy: &RoutingPolicy,
) -> Vec<Step> {
    match engine {
        EngineKind::Dijkstra => run_dijkstra(graph, start, policy, None),
        EngineKind::BellmanFord => run_bellman_ford(graph, start, policy),
    }
}

/// Run the chosen engine once under each policy from the same start,
/// derive metrics for every other vertex, and diff the results.
pub fn compare_all(
    graph: &Graph,
    start: &NodeId,
    classic: &RoutingPolicy,
    security_aware: &RoutingPolicy,
    engine: EngineKind,
) -> ComparisonReport {
    let classic_steps = run_engine(engine, graph, start, classic);
    let sar_steps = run_engine(engine, graph, start, security_aware);

    let mut results = Vec::new();
    let mut reachable_classic = 0usize;
    let mut reachable_security_aware = 0usize;
    let mut route_changes = 0usize;
    let mut risk_reduction_sum = 0.0;
    let mut distance_increase_sum = 0.0;
    let mut both_reachable = 0usize;

    for destination in graph.nodes().iter().filter(|n| *n != start) {
        let classic_metrics = compute_metrics(graph, &classic_steps, start, destination);
        let sar_metrics = compute_metrics(graph, &sar_steps, start, destination);

        let outcome = match (&classic_metrics, &sar_metrics) {
            (None, None) => RouteOutcome::BothUnreachable,
            (Some(_), None) => RouteOutcome::ClassicOnly,
            (None, Some(_)) => RouteOutcome::SecurityAwareOnly,
            (Some(c), Some(s)) => {
                if c.path_nodes == s.path_nodes {
                    RouteOutcome::IdenticalPath
                } else {
                    RouteOutcome::RouteChanged
                }
            }
        };

        if classic_metrics.is_some() {
            reachable_classic += 1;
        }
        if sar_metrics.is_some() {
            reachable_security_aware += 1;
        }
        if outcome == RouteOutcome::RouteChanged {
            route_changes += 1;
        }

        if let (Some(c), Some(s)) = (&classic_metrics, &sar_metrics) {
            both_reachable += 1;
            if c.total_security_risk != 0.0 {
                risk_reduction_sum +=
                    (c.total_security_risk - s.total_security_risk) / c.total_security_risk * 100.0;
            }
            if c.total_distance != 0.0 {
                distance_increase_sum +=
                    (s.total_distance - c.total_distance) / c.total_distance * 100.0;
            }
        }

        results.push(DestinationResult {
            destination: destination.clone(),
            outcome,
            classic: classic_metrics,
            security_aware: sar_metrics,
        });
    }

    let (avg_risk_reduction_pct, avg_distance_increase_pct) = if both_reachable == 0 {
        (0.0, 0.0)
    } else {
        (
            risk_reduction_sum / both_reachable as f64,
            distance_increase_sum / both_reachable as f64,
        )
    };

    let summary = ComparisonSummary {
        destinations: results.len(),
        reachable_classic,
        reachable_security_aware,
        route_changes,
        avg_risk_reduction_pct,
        avg_distance_increase_pct,
    };

    tracing::debug!(
        destinations = summary.destinations,
        route_changes = summary.route_changes,
        "policy comparison complete"
    );

    ComparisonReport {
        start: start.clone(),
        engine,
        results,
        summary,
    }
}
