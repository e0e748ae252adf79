//! Adjacency-map graph backing
//!
//! Each vertex maps to its outgoing edges (target -> weight). A reverse
//! index (target -> source -> weight) is kept in lock-step so that
//! `sources` is a single lookup and `remove` only touches the removed
//! vertex's neighbours instead of every vertex.

use super::{check_set_args, fmt_graph, GraphStore, Label, WeightedEdge};
use crate::errors::{GraphError, Result};
use crate::types::{Weight, NO_PRIOR_EDGE};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// A graph stored as per-vertex outgoing and incoming edge maps
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<L> {
    /// vertex -> (target -> weight); every vertex has an entry
    outgoing: FxHashMap<L, FxHashMap<L, Weight>>,
    /// vertex -> (source -> weight); mirrors `outgoing`
    incoming: FxHashMap<L, FxHashMap<L, Weight>>,
    edge_count: usize,
}

impl<L: Label> Default for AdjacencyGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> AdjacencyGraph<L> {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self {
            outgoing: FxHashMap::default(),
            incoming: FxHashMap::default(),
            edge_count: 0,
        }
    }

    /// Create a graph with pre-allocated capacity
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            outgoing: FxHashMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
            incoming: FxHashMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
            edge_count: 0,
        }
    }

    /// Out-degree of `vertex`, if present
    pub fn out_degree(&self, vertex: &L) -> Option<usize> {
        self.outgoing.get(vertex).map(|m| m.len())
    }

    /// In-degree of `vertex`, if present
    pub fn in_degree(&self, vertex: &L) -> Option<usize> {
        self.incoming.get(vertex).map(|m| m.len())
    }

    /// Representation invariant, checked in debug builds after each mutation.
    fn check_rep(&self) {
        if cfg!(debug_assertions) {
            debug_assert_eq!(self.outgoing.len(), self.incoming.len());
            let mut forward = 0;
            for (source, targets) in &self.outgoing {
                debug_assert!(self.incoming.contains_key(source));
                for (target, weight) in targets {
                    debug_assert!(*weight >= 0);
                    debug_assert_eq!(
                        self.incoming.get(target).and_then(|m| m.get(source)),
                        Some(weight),
                        "reverse index out of sync for {:?} -> {:?}",
                        source,
                        target
                    );
                    forward += 1;
                }
            }
            let backward: usize = self.incoming.values().map(|m| m.len()).sum();
            debug_assert_eq!(forward, backward);
            debug_assert_eq!(forward, self.edge_count);
        }
    }
}

impl<L: Label> GraphStore<L> for AdjacencyGraph<L> {
    fn add(&mut self, vertex: L) -> bool {
        if self.outgoing.contains_key(&vertex) {
            return false;
        }
        self.incoming.insert(vertex.clone(), FxHashMap::default());
        self.outgoing.insert(vertex, FxHashMap::default());
        self.check_rep();
        true
    }

    fn set(&mut self, source: &L, target: &L, weight: Weight) -> Result<Weight> {
        check_set_args(|v| self.outgoing.contains_key(v), source, target, weight)?;

        let previous = self
            .outgoing
            .get_mut(source)
            .and_then(|targets| targets.insert(target.clone(), weight));
        if let Some(sources) = self.incoming.get_mut(target) {
            sources.insert(source.clone(), weight);
        }
        if previous.is_none() {
            self.edge_count += 1;
        }

        self.check_rep();
        Ok(previous.unwrap_or(NO_PRIOR_EDGE))
    }

    fn remove(&mut self, vertex: &L) -> bool {
        let Some(targets) = self.outgoing.remove(vertex) else {
            return false;
        };
        let sources = self.incoming.remove(vertex).unwrap_or_default();

        for target in targets.keys() {
            if let Some(back) = self.incoming.get_mut(target) {
                back.remove(vertex);
            }
        }
        for source in sources.keys() {
            if let Some(forward) = self.outgoing.get_mut(source) {
                forward.remove(vertex);
            }
        }

        // A self-loop appears in both maps but is one edge.
        let self_loop = targets.contains_key(vertex);
        self.edge_count -= targets.len() + sources.len() - usize::from(self_loop);

        self.check_rep();
        true
    }

    fn remove_edge(&mut self, source: &L, target: &L) -> bool {
        let removed = self
            .outgoing
            .get_mut(source)
            .and_then(|targets| targets.remove(target))
            .is_some();
        if removed {
            if let Some(sources) = self.incoming.get_mut(target) {
                sources.remove(source);
            }
            self.edge_count -= 1;
            self.check_rep();
        }
        removed
    }

    fn vertices(&self) -> FxHashSet<L> {
        self.outgoing.keys().cloned().collect()
    }

    fn sources(&self, target: &L) -> Result<FxHashMap<L, Weight>> {
        self.incoming
            .get(target)
            .cloned()
            .ok_or_else(|| GraphError::invalid_vertex(target))
    }

    fn targets(&self, source: &L) -> Result<FxHashMap<L, Weight>> {
        self.outgoing
            .get(source)
            .cloned()
            .ok_or_else(|| GraphError::invalid_vertex(source))
    }

    fn contains(&self, vertex: &L) -> bool {
        self.outgoing.contains_key(vertex)
    }

    fn weight(&self, source: &L, target: &L) -> Option<Weight> {
        self.outgoing.get(source)?.get(target).copied()
    }

    fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn edges(&self) -> Vec<WeightedEdge<L>> {
        let mut edges: Vec<WeightedEdge<L>> = self
            .outgoing
            .iter()
            .flat_map(|(source, targets)| {
                targets
                    .iter()
                    .map(move |(target, &weight)| WeightedEdge::new(source.clone(), target.clone(), weight))
            })
            .collect();
        edges.sort();
        edges
    }
}

impl<L: Label> fmt::Display for AdjacencyGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_graph(self, f)
    }
}
