use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The routing policy family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoutingMode {
    /// Traditional shortest path: only the distance weight matters.
    /// Risk values are never read, not merely weighted to zero.
    Classic,
    /// Security-Aware Routing: blended distance/risk cost.
    SecurityAware,
}

impl fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classic => write!(f, "classic"),
            Self::SecurityAware => write!(f, "sar"),
        }
    }
}

impl FromStr for RoutingMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Self::Classic),
            "sar" | "security-aware" => Ok(Self::SecurityAware),
            other => Err(CoreError::UnknownMode(other.to_string())),
        }
    }
}

/// Which shortest-path engine to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngineKind {
    Dijkstra,
    BellmanFord,
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dijkstra => write!(f, "dijkstra"),
            Self::BellmanFord => write!(f, "bellman-ford"),
        }
    }
}

impl FromStr for EngineKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dijkstra" => Ok(Self::Dijkstra),
            "bellman-ford" | "bellmanford" => Ok(Self::BellmanFord),
            other => Err(CoreError::UnknownEngine(other.to_string())),
        }
    }
}

/// A validated routing policy: the mode plus the security weight factor.
///
/// `beta` is the weight of the security risk term; the distance weight
/// `alpha` is always `1 - beta` so the two stay normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingPolicy {
    pub mode: RoutingMode,
    beta: f64,
}

impl RoutingPolicy {
    /// Create a policy, validating `beta ∈ [0, 1]`.
    pub fn new(mode: RoutingMode, beta: f64) -> Result<Self, CoreError> {
        if !(0.0..=1.0).contains(&beta) {
            return Err(CoreError::InvalidBeta(beta));
        }
        Ok(Self { mode, beta })
    }

    /// The classic policy. Beta is pinned to zero but is irrelevant:
    /// classic mode never reads risk at all.
    pub fn classic() -> Self {
        Self {
            mode: RoutingMode::Classic,
            beta: 0.0,
        }
    }

    /// A security-aware policy with the given risk weight.
    pub fn security_aware(beta: f64) -> Result<Self, CoreError> {
        Self::new(RoutingMode::SecurityAware, beta)
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Distance weight factor, `1 - beta`.
    pub fn alpha(&self) -> f64 {
        1.0 - self.beta
    }
}

/// Validate a Dijkstra risk threshold.
pub fn validate_risk_threshold(threshold: f64) -> Result<f64, CoreError> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(CoreError::InvalidRiskThreshold(threshold));
    }
    Ok(threshold)
}
