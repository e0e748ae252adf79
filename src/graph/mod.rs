//! Mutable weighted directed graphs
//!
//! [`GraphStore`] is the contract every backing satisfies. Two backings are
//! provided and are observably interchangeable:
//!
//! - [`EdgeListGraph`] — vertex set plus a flat list of edge records
//! - [`AdjacencyGraph`] — outgoing maps per vertex plus a reverse index
//!
//! Query methods return snapshot copies; no internal collection is ever
//! handed out by reference.

pub mod adjacency;
pub mod builder;
pub mod edge;
pub mod edge_list;

pub use adjacency::AdjacencyGraph;
pub use builder::AffinityGraphBuilder;
pub use edge::WeightedEdge;
pub use edge_list::EdgeListGraph;

use crate::errors::{GraphError, Result};
use crate::types::{Backing, Weight};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt::{self, Debug, Write as _};
use std::hash::Hash;

/// Bounds required of a vertex label.
pub trait Label: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Label for T {}

/// A mutable weighted directed graph.
///
/// At most one edge exists per ordered `(source, target)` pair; self-loops
/// are allowed; a weight of zero is a stored value distinct from absence.
/// Every edge endpoint is always a vertex.
pub trait GraphStore<L: Label> {
    /// Insert `vertex` if absent. Returns whether the graph changed.
    fn add(&mut self, vertex: L) -> bool;

    /// Create or overwrite the edge `source -> target`.
    ///
    /// Returns the previous weight, or [`NO_PRIOR_EDGE`](crate::types::NO_PRIOR_EDGE)
    /// when the edge is new. Never creates vertices.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidWeight`] if `weight < 0`, then
    /// [`GraphError::InvalidVertex`] if either endpoint is absent. The graph
    /// is unchanged on error.
    fn set(&mut self, source: &L, target: &L, weight: Weight) -> Result<Weight>;

    /// Remove `vertex` and every edge into or out of it.
    /// Returns whether the vertex existed.
    fn remove(&mut self, vertex: &L) -> bool;

    /// Remove the single edge `source -> target`, leaving both vertices.
    /// Returns whether the edge existed.
    fn remove_edge(&mut self, source: &L, target: &L) -> bool;

    /// Snapshot of all vertices
    fn vertices(&self) -> FxHashSet<L>;

    /// Every vertex with an edge into `target`, with that edge's weight.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if `target` is not a vertex.
    fn sources(&self, target: &L) -> Result<FxHashMap<L, Weight>>;

    /// Every vertex `source` has an edge to, with that edge's weight.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if `source` is not a vertex.
    fn targets(&self, source: &L) -> Result<FxHashMap<L, Weight>>;

    /// Whether `vertex` is in the graph
    fn contains(&self, vertex: &L) -> bool;

    /// Weight of the edge `source -> target`, if it exists
    fn weight(&self, source: &L, target: &L) -> Option<Weight> {
        self.targets(source).ok()?.get(target).copied()
    }

    /// Number of vertices
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Number of edges
    fn edge_count(&self) -> usize;

    /// Snapshot of all edges, sorted by source then target
    fn edges(&self) -> Vec<WeightedEdge<L>> {
        let mut edges: Vec<WeightedEdge<L>> = self
            .vertices()
            .into_iter()
            .flat_map(|source| {
                self.targets(&source)
                    .unwrap_or_default()
                    .into_iter()
                    .map(move |(target, weight)| WeightedEdge::new(source.clone(), target, weight))
            })
            .collect();
        edges.sort();
        edges
    }

    /// Whether the graph has no vertices
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Deterministic text rendering: a sorted vertex list, then one line per
    /// edge in source/target order.
    fn render(&self) -> String {
        let mut vertices: Vec<L> = self.vertices().into_iter().collect();
        vertices.sort();

        let mut out = String::new();
        let _ = writeln!(out, "Vertices: {:?}", vertices);
        for edge in self.edges() {
            let _ = writeln!(out, "{}", edge);
        }
        out
    }
}

impl<L: Label> GraphStore<L> for Box<dyn GraphStore<L>> {
    fn add(&mut self, vertex: L) -> bool {
        (**self).add(vertex)
    }

    fn set(&mut self, source: &L, target: &L, weight: Weight) -> Result<Weight> {
        (**self).set(source, target, weight)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        (**self).remove(vertex)
    }

    fn remove_edge(&mut self, source: &L, target: &L) -> bool {
        (**self).remove_edge(source, target)
    }

    fn vertices(&self) -> FxHashSet<L> {
        (**self).vertices()
    }

    fn sources(&self, target: &L) -> Result<FxHashMap<L, Weight>> {
        (**self).sources(target)
    }

    fn targets(&self, source: &L) -> Result<FxHashMap<L, Weight>> {
        (**self).targets(source)
    }

    fn contains(&self, vertex: &L) -> bool {
        (**self).contains(vertex)
    }

    fn weight(&self, source: &L, target: &L) -> Option<Weight> {
        (**self).weight(source, target)
    }

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }

    fn edges(&self) -> Vec<WeightedEdge<L>> {
        (**self).edges()
    }
}

/// Create a new, empty, independently owned graph with the given backing.
///
/// Every call returns a distinct instance.
pub fn empty<L: Label + 'static>(backing: Backing) -> Box<dyn GraphStore<L>> {
    match backing {
        Backing::EdgeList => Box::new(EdgeListGraph::new()),
        Backing::Adjacency => Box::new(AdjacencyGraph::new()),
    }
}

/// Shared argument validation for `set`: weight first, then endpoints.
pub(crate) fn check_set_args<L: Label>(
    contains: impl Fn(&L) -> bool,
    source: &L,
    target: &L,
    weight: Weight,
) -> Result<()> {
    if weight < 0 {
        return Err(GraphError::invalid_weight(weight));
    }
    for vertex in [source, target] {
        if !contains(vertex) {
            return Err(GraphError::invalid_vertex(vertex));
        }
    }
    Ok(())
}

/// Adapter so backings can implement `Display` through [`GraphStore::render`].
pub(crate) fn fmt_graph<L: Label, G: GraphStore<L> + ?Sized>(
    graph: &G,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.write_str(&graph.render())
}
