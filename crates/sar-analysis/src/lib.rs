//! SAR Analysis — derived results over completed step traces.
//!
//! This crate provides:
//! - [`build_path`] / [`build_path_at`] — node sequence reconstruction
//!   from a trace's predecessor map.
//! - [`RouteMetrics`] and [`compute_metrics`] — per-destination
//!   aggregates (raw distance, raw risk, hop count, path).
//! - [`compare_all`] — classic vs. security-aware comparison across
//!   every destination, with per-route classification and summary
//!   percentages.

pub mod compare;
pub mod metrics;
pub mod path;

// Re-exports for convenience.
pub use compare::{
    compare_all, ComparisonReport, ComparisonSummary, DestinationResult, RouteOutcome,
};
pub use metrics::{compute_metrics, RouteMetrics};
pub use path::{build_path, build_path_at};
