//! Shared helpers for the SAR integration tests.

use sar_core::{Edge, EdgeId, Graph, NodeId};

pub fn node(id: &str) -> NodeId {
    NodeId::from(id)
}

pub fn edge(id: &str, a: &str, b: &str, weight: f64, risk: f64) -> Edge {
    Edge::new(EdgeId::from(id), node(a), node(b), weight, Some(risk))
}

/// The illustrative five-node network with risk on a 1–10 scale:
///
/// ```text
///        B --- D
///       /       \
///   A -+         E
///       \       /
///        C ----+
/// ```
///
/// A–B(2/7), A–C(5/3), B–D(3/8), C–D(4/4), D–E(2/3), C–E(7/1).
/// At beta = 0.6 the blended costs are A–B=5.0, A–C=3.8, B–D=6.0,
/// C–D=4.0, D–E=2.6, C–E=3.4, so the best A→E route is A→C→E at 7.2.
pub fn illustrative_graph() -> Graph {
    Graph::new(
        vec![node("A"), node("B"), node("C"), node("D"), node("E")],
        vec![
            edge("e0", "A", "B", 2.0, 7.0),
            edge("e1", "A", "C", 5.0, 3.0),
            edge("e2", "B", "D", 3.0, 8.0),
            edge("e3", "C", "D", 4.0, 4.0),
            edge("e4", "D", "E", 2.0, 3.0),
            edge("e5", "C", "E", 7.0, 1.0),
        ],
    )
}

/// Same shape with editor-scale risks in [0, 1].
pub fn scaled_graph() -> Graph {
    Graph::new(
        vec![node("A"), node("B"), node("C"), node("D"), node("E")],
        vec![
            edge("e0", "A", "B", 2.0, 0.7),
            edge("e1", "A", "C", 5.0, 0.3),
            edge("e2", "B", "D", 3.0, 0.8),
            edge("e3", "C", "D", 4.0, 0.4),
            edge("e4", "D", "E", 2.0, 0.3),
            edge("e5", "C", "E", 7.0, 0.1),
        ],
    )
}
