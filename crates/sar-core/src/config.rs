use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CoreError;
use crate::policy::{EngineKind, RoutingMode};

/// Configuration for a SAR run, loaded from `sar.toml`.
///
/// CLI flags override file values field by field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Which shortest-path engine to run.
    pub engine: EngineKind,
    /// Routing policy family (classic or sar).
    pub mode: RoutingMode,
    /// Security weight factor in [0, 1].
    pub beta: f64,
    /// Admission-control cutoff for Dijkstra in sar mode.
    pub risk_threshold: f64,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::Dijkstra,
            mode: RoutingMode::SecurityAware,
            beta: 0.5,
            risk_threshold: 0.8,
            log_level: "info".into(),
        }
    }
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
