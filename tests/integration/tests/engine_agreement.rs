//! Integration test: the two engines agree on cycle-free,
//! non-negative-cost graphs under identical policies.

use sar_core::{Distance, Graph, RoutingPolicy};
use sar_engine::{run_bellman_ford, run_dijkstra};
use sar_integration_tests::{edge, illustrative_graph, node, scaled_graph};

/// Final distances from both engines for the same graph/start/policy.
/// Dijkstra runs with a threshold above the risk scale so admission
/// control never diverges from the threshold-free Bellman-Ford.
fn final_distances(
    graph: &Graph,
    start: &str,
    policy: &RoutingPolicy,
) -> (Vec<(String, Distance)>, Vec<(String, Distance)>) {
    let dijkstra = run_dijkstra(graph, &node(start), policy, Some(f64::MAX));
    let bellman_ford = run_bellman_ford(graph, &node(start), policy);
    let collect = |steps: &[sar_engine::Step]| {
        let last = steps.last().unwrap();
        graph
            .nodes()
            .iter()
            .map(|n| (n.as_str().to_string(), last.distance_to(n)))
            .collect::<Vec<_>>()
    };
    (collect(&dijkstra), collect(&bellman_ford))
}

#[test]
fn test_agreement_classic() {
    let graph = illustrative_graph();
    let (d, bf) = final_distances(&graph, "A", &RoutingPolicy::classic());
    assert_eq!(d, bf);
}

#[test]
fn test_agreement_security_aware() {
    let graph = illustrative_graph();
    for beta in [0.0, 0.3, 0.6, 1.0] {
        let policy = RoutingPolicy::security_aware(beta).unwrap();
        let (d, bf) = final_distances(&graph, "A", &policy);
        assert_eq!(d, bf, "engines disagree at beta {}", beta);
    }
}

#[test]
fn test_agreement_from_every_start() {
    let graph = scaled_graph();
    let policy = RoutingPolicy::security_aware(0.5).unwrap();
    for start in ["A", "B", "C", "D", "E"] {
        let (d, bf) = final_distances(&graph, start, &policy);
        assert_eq!(d, bf, "engines disagree from start {}", start);
    }
}

#[test]
fn test_agreement_with_unreachable_component() {
    let graph = Graph::new(
        vec![node("A"), node("B"), node("X"), node("Y")],
        vec![
            edge("e0", "A", "B", 1.0, 0.2),
            edge("e1", "X", "Y", 1.0, 0.2),
        ],
    );
    let (d, bf) = final_distances(&graph, "A", &RoutingPolicy::classic());
    assert_eq!(d, bf);
    assert!(d.iter().any(|(n, dist)| n == "X" && dist.is_unreachable()));
}

#[test]
fn test_illustrative_scenario_both_engines() {
    let graph = illustrative_graph();
    let policy = RoutingPolicy::security_aware(0.6).unwrap();

    let dijkstra = run_dijkstra(&graph, &node("A"), &policy, Some(f64::MAX));
    let bellman_ford = run_bellman_ford(&graph, &node("A"), &policy);

    for steps in [&dijkstra, &bellman_ford] {
        let last = steps.last().unwrap();
        let to_e = last.distance_to(&node("E")).value().unwrap();
        assert!((to_e - 7.2).abs() < 1e-9, "expected 7.2, got {}", to_e);
        assert_eq!(last.predecessor_of(&node("E")), Some(&node("C")));
    }
}

#[test]
fn test_traces_are_idempotent() {
    let graph = scaled_graph();
    let policy = RoutingPolicy::security_aware(0.5).unwrap();

    let d1 = run_dijkstra(&graph, &node("A"), &policy, None);
    let d2 = run_dijkstra(&graph, &node("A"), &policy, None);
    assert_eq!(
        serde_json::to_string(&d1).unwrap(),
        serde_json::to_string(&d2).unwrap()
    );

    let b1 = run_bellman_ford(&graph, &node("A"), &policy);
    let b2 = run_bellman_ford(&graph, &node("A"), &policy);
    assert_eq!(
        serde_json::to_string(&b1).unwrap(),
        serde_json::to_string(&b2).unwrap()
    );
}
