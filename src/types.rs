//! Core types for graph_poet
//!
//! This module defines the edge weight type, the choice of graph backing,
//! and the configuration shared by the builder and the poem generator.

use crate::errors::{GraphError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Weight
// ============================================================================

/// Edge weight.
///
/// Signed so that a negative request can be represented and rejected;
/// stored weights are always `>= 0`.
pub type Weight = i64;

/// Weight returned by `set` when no edge previously existed for the pair.
pub const NO_PRIOR_EDGE: Weight = 0;

// ============================================================================
// Backing
// ============================================================================

/// Which graph representation backs a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backing {
    /// Vertex set plus a flat list of edge records
    EdgeList,
    /// Per-vertex outgoing maps with a reverse index
    #[default]
    Adjacency,
}

impl Backing {
    /// All backings, in a stable order
    pub const ALL: [Backing; 2] = [Backing::EdgeList, Backing::Adjacency];

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "edge_list" | "edgelist" | "edges" | "list" => Backing::EdgeList,
            _ => Backing::Adjacency,
        }
    }

    /// Stable name for this backing
    pub fn as_str(&self) -> &'static str {
        match self {
            Backing::EdgeList => "edge_list",
            Backing::Adjacency => "adjacency",
        }
    }
}

impl std::str::FromStr for Backing {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Backing::parse(value))
    }
}

impl std::fmt::Display for Backing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for building an affinity graph and generating poems
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoetConfig {
    /// Graph representation to build into
    #[serde(default)]
    pub backing: Backing,
    /// Count adjacency across line boundaries (treat the corpus as one stream)
    #[serde(default)]
    pub span_lines: bool,
    /// Minimum source-to-bridge weight for a candidate to be eligible
    #[serde(default)]
    pub min_bridge_weight: Weight,
    /// Corpora with more lines than this are counted in parallel (0 = never)
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_parallel_threshold() -> usize {
    1000
}

impl Default for PoetConfig {
    fn default() -> Self {
        Self {
            backing: Backing::default(),
            span_lines: false,
            min_bridge_weight: 0,
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl PoetConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize this config to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_bridge_weight < 0 {
            return Err(GraphError::invalid_config(format!(
                "min_bridge_weight must be >= 0, got {}",
                self.min_bridge_weight
            )));
        }

        Ok(())
    }

    /// Builder method: set backing
    pub fn with_backing(mut self, backing: Backing) -> Self {
        self.backing = backing;
        self
    }

    /// Builder method: set line spanning
    pub fn with_span_lines(mut self, span_lines: bool) -> Self {
        self.span_lines = span_lines;
        self
    }

    /// Builder method: set minimum bridge weight
    pub fn with_min_bridge_weight(mut self, weight: Weight) -> Self {
        self.min_bridge_weight = weight;
        self
    }

    /// Builder method: set parallel threshold
    pub fn with_parallel_threshold(mut self, lines: usize) -> Self {
        self.parallel_threshold = lines;
        self
    }
}
