//! Weighted directed edge value

use crate::errors::GraphError;
use crate::types::Weight;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable directed edge with a weight.
///
/// Ordering is by source, then target, then weight, which gives edge
/// snapshots a stable order regardless of backing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawEdge<L>",
    bound(deserialize = "L: Deserialize<'de>")
)]
pub struct WeightedEdge<L> {
    source: L,
    target: L,
    weight: Weight,
}

/// Unchecked wire form; deserialization rejects negative weights
#[derive(Deserialize)]
struct RawEdge<L> {
    source: L,
    target: L,
    weight: Weight,
}

impl<L> TryFrom<RawEdge<L>> for WeightedEdge<L> {
    type Error = GraphError;

    fn try_from(raw: RawEdge<L>) -> std::result::Result<Self, Self::Error> {
        if raw.weight < 0 {
            return Err(GraphError::invalid_weight(raw.weight));
        }
        Ok(Self::new(raw.source, raw.target, raw.weight))
    }
}

impl<L> WeightedEdge<L> {
    /// Create a new edge. The caller guarantees `weight >= 0`.
    pub fn new(source: L, target: L, weight: Weight) -> Self {
        debug_assert!(weight >= 0, "edge weight must be non-negative");
        Self {
            source,
            target,
            weight,
        }
    }

    /// The source vertex
    pub fn source(&self) -> &L {
        &self.source
    }

    /// The target vertex
    pub fn target(&self) -> &L {
        &self.target
    }

    /// The edge weight
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// A copy of this edge carrying a different weight
    pub fn with_weight(&self, weight: Weight) -> Self
    where
        L: Clone,
    {
        Self::new(self.source.clone(), self.target.clone(), weight)
    }

    /// Whether `vertex` is either endpoint of this edge
    pub fn touches(&self, vertex: &L) -> bool
    where
        L: PartialEq,
    {
        &self.source == vertex || &self.target == vertex
    }

    /// Whether this edge connects `source` to `target`
    pub fn connects(&self, source: &L, target: &L) -> bool
    where
        L: PartialEq,
    {
        &self.source == source && &self.target == target
    }
}

impl<L: fmt::Debug> fmt::Display for WeightedEdge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?} : {}", self.source, self.target, self.weight)
    }
}
