use std::fs;
use std::path::Path;

use ipc_core::errors::{ErrorInfo, IpcError};
use serde::{Deserialize, Serialize};

/// Order in which unexplored curves are expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExploreOrder {
    /// Smallest distance from the seed first, ties broken by crossing count.
    #[default]
    Bfs,
    /// Fewest crossings first, ties broken by distance.
    VerticesFirst,
}

/// Parameters of one exploration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExploreConfig {
    /// Whitney index of the canonical curve seeding an empty store.
    pub seed_whitney: i64,
    /// Curves with more crossings are stored but never expanded.
    pub max_vertices: Option<usize>,
    /// Stop after expanding this many curves.
    pub max_curves: Option<usize>,
    /// Expansion order.
    pub order: ExploreOrder,
    /// Log a census line every this many inserted curves.
    pub progress_every: usize,
    /// Run the invariant diagnostics on every newly stored curve.
    pub verify_invariants: bool,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            seed_whitney: 1,
            max_vertices: None,
            max_curves: None,
            order: ExploreOrder::Bfs,
            progress_every: 50_000,
            verify_invariants: false,
        }
    }
}

impl ExploreConfig {
    /// Parses a YAML document, filling absent fields with defaults.
    pub fn from_yaml_str(contents: &str) -> Result<Self, IpcError> {
        let config: ExploreConfig = serde_yaml::from_str(contents)
            .map_err(|err| IpcError::Serde(ErrorInfo::new("yaml-deserialize", err.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, IpcError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            IpcError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Rejects settings that cannot drive a run.
    pub fn validate(&self) -> Result<(), IpcError> {
        if self.progress_every == 0 {
            return Err(IpcError::Config(ErrorInfo::new(
                "progress-every",
                "progress_every must be at least 1",
            )));
        }
        if self.max_vertices == Some(0) {
            return Err(IpcError::Config(
                ErrorInfo::new("max-vertices", "max_vertices of 0 only expands the primitive loops")
                    .with_hint("leave max_vertices unset to expand without a crossing cap"),
            ));
        }
        Ok(())
    }
}
