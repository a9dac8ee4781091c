//! SAR Core — shared model for the Security-Aware Routing engine.
//!
//! This crate provides:
//! - [`Graph`], [`Edge`], [`NodeId`] — the undirected weighted graph the
//!   engines traverse, with sanitized distance weights and security
//!   risk values.
//! - [`Distance`] — tentative shortest-path distances with an explicit
//!   `Unreachable` value.
//! - [`RoutingPolicy`] and [`RoutingMode`] — the classic vs.
//!   security-aware policy with its validated blend factor.
//! - [`Topology`] — the JSON submission format and graph construction.
//! - [`RunConfig`] — TOML configuration for the CLI.

pub mod config;
pub mod error;
pub mod policy;
pub mod topology;
pub mod types;

// Re-exports for convenience.
pub use config::RunConfig;
pub use error::CoreError;
pub use policy::{validate_risk_threshold, EngineKind, RoutingMode, RoutingPolicy};
pub use topology::{Topology, TopologyLink, TopologyNode};
pub use types::{
    Distance, Edge, EdgeId, Graph, NodeId, DEFAULT_DISTANCE_WEIGHT, DEFAULT_SECURITY_RISK,
};
