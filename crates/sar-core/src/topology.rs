//! Serde mirror of the topology submission format.
//!
//! The surrounding application submits topologies as
//! `{nodes:[{id,type,position}], links:[{source,target,...}]}`. Only
//! `id`, `source`, `target`, `weight`, and `securityRisk` matter to the
//! engines; display attributes are carried through untouched so a
//! topology file can round-trip.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::{Edge, EdgeId, Graph, NodeId, DEFAULT_DISTANCE_WEIGHT};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topology {
    pub nodes: Vec<TopologyNode>,
    #[serde(default)]
    pub links: Vec<TopologyLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologyNode {
    pub id: String,
    /// Display type ("router", "switch", ...). Not used by the engines.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_risk: Option<f64>,
}

impl Topology {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the engine-facing [`Graph`].
    ///
    /// Node ids must be unique and every link must reference declared
    /// nodes. Missing link ids are synthesized from the link's index;
    /// missing weights default to 1. Weight/risk sanitation happens in
    /// [`Edge::new`].
    pub fn into_graph(self) -> Result<Graph, CoreError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(CoreError::DuplicateNode(node.id.clone()));
            }
        }

        let mut edges = Vec::with_capacity(self.links.len());
        for (i, link) in self.links.iter().enumerate() {
            for endpoint in [&link.source, &link.target] {
                if !seen.contains(endpoint.as_str()) {
                    return Err(CoreError::UnknownNode(endpoint.clone()));
                }
            }
            let id = link
                .id
                .clone()
                .unwrap_or_else(|| format!("e{}", i));
            edges.push(Edge::new(
                EdgeId::new(id),
                NodeId::new(link.source.clone()),
                NodeId::new(link.target.clone()),
                link.weight.unwrap_or(DEFAULT_DISTANCE_WEIGHT),
                link.security_risk,
            ));
        }

        let nodes: Vec<NodeId> = self.nodes.into_iter().map(|n| NodeId::new(n.id)).collect();
        tracing::debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            "built graph from topology"
        );
        Ok(Graph::new(nodes, edges))
    }

    /// The five-node demonstration topology written by `sar init`.
    pub fn sample() -> Self {
        let node = |id: &str| TopologyNode {
            id: id.to_string(),
            node_type: Some("router".to_string()),
            position: None,
        };
        let link = |id: &str, source: &str, target: &str, weight: f64, risk: f64| TopologyLink {
            id: Some(id.to_string()),
            source: source.to_string(),
            target: target.to_string(),
            weight: Some(weight),
            security_risk: Some(risk),
        };
        Self {
            nodes: vec![node("A"), node("B"), node("C"), node("D"), node("E")],
            links: vec![
                link("e0", "A", "B", 2.0, 0.7),
                link("e1", "A", "C", 5.0, 0.3),
                link("e2", "B", "D", 3.0, 0.8),
                link("e3", "C", "D", 4.0, 0.4),
                link("e4", "D", "E", 2.0, 0.3),
                link("e5", "C", "E", 7.0, 0.1),
            ],
        }
    }
}
