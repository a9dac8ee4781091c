//! Integration test: replaying a recorded engine run through the
//! cursor, including re-running after the graph changes.

use sar_core::{Graph, RoutingPolicy};
use sar_engine::{run_dijkstra, StepKind, TraceCursor};
use sar_integration_tests::{edge, node, scaled_graph};

#[test]
fn test_forward_walk_reaches_terminal_step() {
    let graph = scaled_graph();
    let policy = RoutingPolicy::classic();
    let steps = run_dijkstra(&graph, &node("A"), &policy, None);

    let mut cursor = TraceCursor::new(steps);
    assert!(cursor.is_at_start());
    assert!(cursor.current().is_none());

    let mut seen = 0;
    while !cursor.is_at_end() {
        let step = cursor.step_forward().unwrap();
        assert_eq!(step.index, seen);
        seen += 1;
    }
    assert_eq!(seen, cursor.len());
    assert!(matches!(cursor.current().unwrap().kind, StepKind::Complete));
}

#[test]
fn test_back_and_forward_are_inverse() {
    let graph = scaled_graph();
    let policy = RoutingPolicy::security_aware(0.5).unwrap();
    let steps = run_dijkstra(&graph, &node("A"), &policy, None);
    let mut cursor = TraceCursor::new(steps);

    cursor.seek(3);
    let at_three = cursor.current().unwrap().clone();
    cursor.step_back();
    cursor.step_forward();
    assert_eq!(cursor.current().unwrap(), &at_three);
}

#[test]
fn test_seek_clamps_to_trace_bounds() {
    let graph = scaled_graph();
    let steps = run_dijkstra(&graph, &node("A"), &RoutingPolicy::classic(), None);
    let last = steps.len() as isize - 1;
    let mut cursor = TraceCursor::new(steps);

    cursor.seek(isize::MAX);
    assert_eq!(cursor.index(), last);
    cursor.seek(isize::MIN);
    assert_eq!(cursor.index(), -1);
    assert!(cursor.is_at_start());
}

#[test]
fn test_every_replayed_step_is_self_contained() {
    // Each step snapshot carries the full state, so any seek position
    // answers distance queries without consulting neighboring steps.
    let graph = scaled_graph();
    let policy = RoutingPolicy::security_aware(0.5).unwrap();
    let steps = run_dijkstra(&graph, &node("A"), &policy, None);
    let mut cursor = TraceCursor::new(steps);

    let mut last_a = None;
    for i in 0..cursor.len() as isize {
        let step = cursor.seek(i).unwrap();
        assert_eq!(step.distances.len(), graph.nodes().len());
        assert_eq!(step.predecessors.len(), graph.nodes().len());
        last_a = Some(step.distance_to(&node("A")));
    }
    // The start stays settled at zero throughout.
    assert_eq!(last_a.unwrap().value(), Some(0.0));
}

#[test]
fn test_graph_change_requires_fresh_run() {
    let graph = scaled_graph();
    let policy = RoutingPolicy::classic();
    let cursor = TraceCursor::new(run_dijkstra(&graph, &node("A"), &policy, None));
    let old_e = cursor.steps().last().unwrap().distance_to(&node("E"));

    // A shortcut edge invalidates the recorded trace; the caller
    // rebuilds the graph and replaces the cursor wholesale.
    let mut edges = graph.edges().to_vec();
    edges.push(edge("e6", "A", "E", 1.0, 0.1));
    let rebuilt = Graph::new(graph.nodes().to_vec(), edges);
    let fresh = TraceCursor::new(run_dijkstra(&rebuilt, &node("A"), &policy, None));
    let new_e = fresh.steps().last().unwrap().distance_to(&node("E"));

    assert!(new_e < old_e);
    assert_eq!(new_e.value(), Some(1.0));
    assert!(fresh.is_at_start());
}
