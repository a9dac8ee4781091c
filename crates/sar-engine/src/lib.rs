//! SAR Engine — shortest-path computation under security-aware cost.
//!
//! This crate provides:
//! - [`edge_cost`] — the scalar blended cost of traversing an edge
//!   under a [`sar_core::RoutingPolicy`].
//! - [`run_dijkstra`] — label-setting single-source shortest path with
//!   risk-threshold admission control and a full step trace.
//! - [`run_bellman_ford`] — iterative relaxation with negative-cycle
//!   detection and a full step trace.
//! - [`Step`] and [`StepKind`] — the immutable, replayable trace records.
//! - [`TraceCursor`] — clamped-index playback over a completed trace.
//!
//! Both engines are total, synchronous, pure functions: identical
//! inputs produce identical traces, and every failure condition
//! (unreachable targets, missing start vertex, negative cycles) is
//! representable in the returned trace rather than an error.

pub mod bellman_ford;
pub mod cost;
pub mod dijkstra;
pub mod replay;
pub mod step;

// Re-exports for convenience.
pub use bellman_ford::run_bellman_ford;
pub use cost::edge_cost;
pub use dijkstra::{run_dijkstra, DEFAULT_RISK_THRESHOLD};
pub use replay::TraceCursor;
pub use step::{Step, StepKind};
