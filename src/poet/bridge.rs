//! Bridge word selection
//!
//! A bridge between `a` and `b` is a word `w` with edges `a -> w` and
//! `w -> b`. When several exist, the one with the heaviest `a -> w` edge
//! wins; equal weights go to the lexicographically smallest word.

use crate::graph::GraphStore;
use crate::types::{PoetConfig, Weight};
use std::cmp::Ordering;

/// Chooses at most one bridge word between two adjacent words
#[derive(Debug, Clone, Default)]
pub struct BridgeSelector {
    min_bridge_weight: Weight,
}

impl BridgeSelector {
    /// Create a selector that accepts every candidate
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selector from a config
    pub fn with_config(config: &PoetConfig) -> Self {
        Self {
            min_bridge_weight: config.min_bridge_weight,
        }
    }

    /// Ignore candidates whose `from -> candidate` weight is below `weight`
    pub fn with_min_bridge_weight(mut self, weight: Weight) -> Self {
        self.min_bridge_weight = weight;
        self
    }

    /// Candidates between `from` and `to`, best first.
    ///
    /// Both words must already be case-folded. A word missing from the graph
    /// yields no candidates.
    pub fn candidates<G>(&self, graph: &G, from: &str, to: &str) -> Vec<(String, Weight)>
    where
        G: GraphStore<String> + ?Sized,
    {
        let (from, to) = (from.to_string(), to.to_string());
        if !graph.contains(&from) || !graph.contains(&to) {
            return Vec::new();
        }
        let (Ok(targets), Ok(sources)) = (graph.targets(&from), graph.sources(&to)) else {
            return Vec::new();
        };
        if targets.is_empty() {
            return Vec::new();
        }

        let mut candidates: Vec<(String, Weight)> = targets
            .into_iter()
            .filter(|(word, weight)| *weight >= self.min_bridge_weight && sources.contains_key(word))
            .collect();
        candidates.sort_by(rank);
        candidates
    }

    /// The single best bridge between `from` and `to`, if any
    pub fn select<G>(&self, graph: &G, from: &str, to: &str) -> Option<String>
    where
        G: GraphStore<String> + ?Sized,
    {
        self.candidates(graph, from, to)
            .into_iter()
            .next()
            .map(|(word, _)| word)
    }
}

/// Heavier first, then lexicographically smaller
fn rank(a: &(String, Weight), b: &(String, Weight)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}
