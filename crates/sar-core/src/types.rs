use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// Default distance weight applied to malformed or absent edge weights.
pub const DEFAULT_DISTANCE_WEIGHT: f64 = 1.0;

/// Default security risk applied when an edge carries no risk value.
///
/// An explicit zero, deliberately: runs must be a pure function of
/// their inputs, so a missing risk value never becomes a random one.
pub const DEFAULT_SECURITY_RISK: f64 = 0.0;

/// Identifier of a vertex, unique within a graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier of an edge. Used only for trace highlighting — it carries
/// no graph semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(String);

impl EdgeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EdgeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A tentative shortest-path distance.
///
/// `Unreachable` compares greater than every finite distance and equal
/// to itself, so the strict `<` comparisons in the relaxation loops
/// read the same as they would over raw floats with infinity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Distance {
    Finite(f64),
    Unreachable,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0.0);

    pub fn is_unreachable(&self) -> bool {
        matches!(self, Distance::Unreachable)
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite value, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            Distance::Finite(v) => Some(*v),
            Distance::Unreachable => None,
        }
    }

    /// Add an edge cost. Unreachable absorbs any addition.
    pub fn plus(&self, cost: f64) -> Distance {
        match self {
            Distance::Finite(v) => Distance::Finite(v + cost),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a == b,
            (Distance::Unreachable, Distance::Unreachable) => true,
            _ => false,
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.partial_cmp(b),
            (Distance::Finite(_), Distance::Unreachable) => Some(Ordering::Less),
            (Distance::Unreachable, Distance::Finite(_)) => Some(Ordering::Greater),
            (Distance::Unreachable, Distance::Unreachable) => Some(Ordering::Equal),
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(v) => write!(f, "{:.2}", v),
            Distance::Unreachable => write!(f, "∞"),
        }
    }
}

/// An undirected edge between two vertices.
///
/// The distance weight is sanitized at construction: a non-finite or
/// non-positive weight is coerced to [`DEFAULT_DISTANCE_WEIGHT`] so that
/// the label-setting engine never sees a negative cost. The security
/// risk is conventionally in [0, 1] (the topology editor produces that
/// range); negative or non-finite values are coerced, larger scales are
/// accepted as supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub a: NodeId,
    pub b: NodeId,
    distance_weight: f64,
    security_risk: f64,
}

impl Edge {
    pub fn new(
        id: EdgeId,
        a: NodeId,
        b: NodeId,
        distance_weight: f64,
        security_risk: Option<f64>,
    ) -> Self {
        let distance_weight = if distance_weight.is_finite() && distance_weight > 0.0 {
            distance_weight
        } else {
            DEFAULT_DISTANCE_WEIGHT
        };
        let security_risk = match security_risk {
            Some(risk) if risk.is_finite() => risk.max(0.0),
            _ => DEFAULT_SECURITY_RISK,
        };
        Self {
            id,
            a,
            b,
            distance_weight,
            security_risk,
        }
    }

    /// Construct an edge without weight sanitation.
    ///
    /// Bellman-Ford handles negative weights (that is what its cycle
    /// detection exists for); the coercion in [`Edge::new`] protects
    /// Dijkstra's non-negativity assumption at the topology boundary.
    /// Callers feeding the label-setting engine should prefer
    /// [`Edge::new`].
    pub fn from_parts(
        id: EdgeId,
        a: NodeId,
        b: NodeId,
        distance_weight: f64,
        security_risk: f64,
    ) -> Self {
        Self {
            id,
            a,
            b,
            distance_weight,
            security_risk,
        }
    }

    pub fn distance_weight(&self) -> f64 {
        self.distance_weight
    }

    pub fn security_risk(&self) -> f64 {
        self.security_risk
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }

    /// The opposite endpoint, or `None` if `node` is not an endpoint.
    pub fn other(&self, node: &NodeId) -> Option<&NodeId> {
        if *node == self.a {
            Some(&self.b)
        } else if *node == self.b {
            Some(&self.a)
        } else {
            None
        }
    }

    /// Whether this edge joins `x` and `y`, in either orientation.
    pub fn connects(&self, x: &NodeId, y: &NodeId) -> bool {
        (self.a == *x && self.b == *y) || (self.a == *y && self.b == *x)
    }
}

/// An undirected weighted graph with an incidence index.
///
/// Parallel edges between the same pair of vertices are kept as-is;
/// self-loops are kept but indexed once so traversal sees them a single
/// time (and skips them — a self-loop can never improve a distance).
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<NodeId>,
    edges: Vec<Edge>,
    incidence: HashMap<NodeId, Vec<usize>>,
}

impl Graph {
    pub fn new(nodes: Vec<NodeId>, edges: Vec<Edge>) -> Self {
        let mut incidence: HashMap<NodeId, Vec<usize>> = HashMap::new();
        for node in &nodes {
            incidence.entry(node.clone()).or_default();
        }
        for (i, edge) in edges.iter().enumerate() {
            incidence.entry(edge.a.clone()).or_default().push(i);
            if !edge.is_self_loop() {
                incidence.entry(edge.b.clone()).or_default().push(i);
            }
        }
        Self {
            nodes,
            edges,
            incidence,
        }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.nodes.iter().any(|n| n == node)
    }

    /// All edges incident to `node`, regardless of which endpoint the
    /// edge stores first. Insertion order, for deterministic traversal.
    pub fn incident_edges(&self, node: &NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.incidence
            .get(node)
            .into_iter()
            .flatten()
            .map(move |&i| &self.edges[i])
    }

    /// First edge joining `x` and `y` in either orientation.
    pub fn find_edge(&self, x: &NodeId, y: &NodeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.connects(x, y))
    }
}
