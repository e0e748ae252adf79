//! Edge-list graph backing
//!
//! Stores a vertex set and a flat list of [`WeightedEdge`] records. `add`
//! and membership checks are O(1) through the set; `set`, `remove`,
//! `sources` and `targets` scan the edge list, O(E).

use super::{check_set_args, fmt_graph, GraphStore, Label, WeightedEdge};
use crate::errors::{GraphError, Result};
use crate::types::{Weight, NO_PRIOR_EDGE};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// A graph stored as a vertex set plus a list of edges
#[derive(Debug, Clone)]
pub struct EdgeListGraph<L> {
    vertices: FxHashSet<L>,
    edges: Vec<WeightedEdge<L>>,
}

impl<L: Label> Default for EdgeListGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> EdgeListGraph<L> {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self {
            vertices: FxHashSet::default(),
            edges: Vec::new(),
        }
    }

    /// Create a graph with pre-allocated capacity
    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            vertices: FxHashSet::with_capacity_and_hasher(vertex_capacity, Default::default()),
            edges: Vec::with_capacity(edge_capacity),
        }
    }

    fn position(&self, source: &L, target: &L) -> Option<usize> {
        self.edges.iter().position(|e| e.connects(source, target))
    }

    /// Representation invariant, checked in debug builds after each mutation.
    fn check_rep(&self) {
        if cfg!(debug_assertions) {
            let mut seen = FxHashSet::default();
            for edge in &self.edges {
                debug_assert!(self.vertices.contains(edge.source()));
                debug_assert!(self.vertices.contains(edge.target()));
                debug_assert!(edge.weight() >= 0);
                debug_assert!(
                    seen.insert((edge.source(), edge.target())),
                    "duplicate edge {}",
                    edge
                );
            }
        }
    }
}

impl<L: Label> GraphStore<L> for EdgeListGraph<L> {
    fn add(&mut self, vertex: L) -> bool {
        let inserted = self.vertices.insert(vertex);
        self.check_rep();
        inserted
    }

    fn set(&mut self, source: &L, target: &L, weight: Weight) -> Result<Weight> {
        check_set_args(|v| self.vertices.contains(v), source, target, weight)?;

        let previous = match self.position(source, target) {
            Some(idx) => {
                let previous = self.edges[idx].weight();
                self.edges[idx] = self.edges[idx].with_weight(weight);
                previous
            }
            None => {
                self.edges
                    .push(WeightedEdge::new(source.clone(), target.clone(), weight));
                NO_PRIOR_EDGE
            }
        };

        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        if !self.vertices.remove(vertex) {
            return false;
        }
        self.edges.retain(|e| !e.touches(vertex));
        self.check_rep();
        true
    }

    fn remove_edge(&mut self, source: &L, target: &L) -> bool {
        match self.position(source, target) {
            Some(idx) => {
                self.edges.swap_remove(idx);
                self.check_rep();
                true
            }
            None => false,
        }
    }

    fn vertices(&self) -> FxHashSet<L> {
        self.vertices.clone()
    }

    fn sources(&self, target: &L) -> Result<FxHashMap<L, Weight>> {
        if !self.vertices.contains(target) {
            return Err(GraphError::invalid_vertex(target));
        }
        Ok(self
            .edges
            .iter()
            .filter(|e| e.target() == target)
            .map(|e| (e.source().clone(), e.weight()))
            .collect())
    }

    fn targets(&self, source: &L) -> Result<FxHashMap<L, Weight>> {
        if !self.vertices.contains(source) {
            return Err(GraphError::invalid_vertex(source));
        }
        Ok(self
            .edges
            .iter()
            .filter(|e| e.source() == source)
            .map(|e| (e.target().clone(), e.weight()))
            .collect())
    }

    fn contains(&self, vertex: &L) -> bool {
        self.vertices.contains(vertex)
    }

    fn weight(&self, source: &L, target: &L) -> Option<Weight> {
        self.position(source, target).map(|idx| self.edges[idx].weight())
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn edges(&self) -> Vec<WeightedEdge<L>> {
        let mut edges = self.edges.clone();
        edges.sort();
        edges
    }
}

impl<L: Label> fmt::Display for EdgeListGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_graph(self, f)
    }
}
