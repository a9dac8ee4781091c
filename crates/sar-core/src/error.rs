/// Errors that can occur while building graphs, policies, or configuration.
///
/// The routing engines themselves never fail for a structurally valid
/// graph; everything here belongs to the input-validation boundary.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("beta must be in [0, 1], got {0}")]
    InvalidBeta(f64),

    #[error("risk threshold must be in [0, 1], got {0}")]
    InvalidRiskThreshold(f64),

    #[error("duplicate node id: {0}")]
    DuplicateNode(String),

    #[error("link references unknown node: {0}")]
    UnknownNode(String),

    #[error("unknown routing mode: {0} (expected 'classic' or 'sar')")]
    UnknownMode(String),

    #[error("unknown engine: {0} (expected 'dijkstra' or 'bellman-ford')")]
    UnknownEngine(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("topology parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
