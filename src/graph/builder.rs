//! Affinity graph construction
//!
//! Turns an ordered corpus (lines of already-normalized tokens) into a graph
//! whose edge `a -> b` weighs the number of times `b` directly followed `a`.
//! Adjacency never crosses a line boundary unless `span_lines` is set.

use super::{empty, GraphStore};
use crate::errors::Result;
use crate::types::{Backing, PoetConfig, Weight, NO_PRIOR_EDGE};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Counts gathered while building, reported for logging and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Lines consumed
    pub lines: usize,
    /// Tokens consumed
    pub tokens: usize,
    /// Adjacent pairs counted (each occurrence, not each distinct pair)
    pub pairs: usize,
}

/// Builds affinity graphs from tokenized corpora
#[derive(Debug, Clone)]
pub struct AffinityGraphBuilder {
    span_lines: bool,
    parallel_threshold: usize,
}

impl Default for AffinityGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AffinityGraphBuilder {
    /// Create a builder with default settings
    pub fn new() -> Self {
        Self::with_config(&PoetConfig::default())
    }

    /// Create a builder from a config
    pub fn with_config(config: &PoetConfig) -> Self {
        Self {
            span_lines: config.span_lines,
            parallel_threshold: config.parallel_threshold,
        }
    }

    /// Count adjacency across line boundaries
    pub fn with_span_lines(mut self, span_lines: bool) -> Self {
        self.span_lines = span_lines;
        self
    }

    /// Use the parallel counter for corpora with more than `lines` lines
    /// (0 = never)
    pub fn with_parallel_threshold(mut self, lines: usize) -> Self {
        self.parallel_threshold = lines;
        self
    }

    /// Build a fresh graph with the given backing
    pub fn build<S>(&self, lines: &[Vec<S>], backing: Backing) -> Result<Box<dyn GraphStore<String>>>
    where
        S: AsRef<str> + Sync,
    {
        let mut graph = empty(backing);
        self.build_into(&mut graph, lines)?;
        Ok(graph)
    }

    /// Add the corpus to `graph`, accumulating onto any existing weights
    pub fn build_into<G, S>(&self, graph: &mut G, lines: &[Vec<S>]) -> Result<BuildStats>
    where
        G: GraphStore<String> + ?Sized,
        S: AsRef<str> + Sync,
    {
        trace_stage!("build_graph");

        let stats = if self.parallel_threshold > 0 && lines.len() > self.parallel_threshold {
            self.build_parallel_into(graph, lines)?
        } else {
            self.build_sequential_into(graph, lines)?
        };

        trace_debug!(
            lines = stats.lines,
            tokens = stats.tokens,
            pairs = stats.pairs,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "affinity graph built"
        );
        Ok(stats)
    }

    /// Single pass over the corpus: add each token, then bump the edge from
    /// its predecessor.
    pub fn build_sequential_into<G, S>(&self, graph: &mut G, lines: &[Vec<S>]) -> Result<BuildStats>
    where
        G: GraphStore<String> + ?Sized,
        S: AsRef<str>,
    {
        let mut stats = BuildStats::default();
        let mut prev: Option<String> = None;

        for line in lines {
            stats.lines += 1;
            if !self.span_lines {
                prev = None;
            }
            for token in line {
                let word = token.as_ref().to_string();
                graph.add(word.clone());
                stats.tokens += 1;
                if let Some(source) = prev.take() {
                    increment_edge(graph, &source, &word, 1)?;
                    stats.pairs += 1;
                }
                prev = Some(word);
            }
        }

        Ok(stats)
    }

    /// Count pairs in parallel, then apply the merged counts on one thread.
    ///
    /// Produces the same graph as [`build_sequential_into`](Self::build_sequential_into).
    pub fn build_parallel_into<G, S>(&self, graph: &mut G, lines: &[Vec<S>]) -> Result<BuildStats>
    where
        G: GraphStore<String> + ?Sized,
        S: AsRef<str> + Sync,
    {
        let mut stats = BuildStats {
            lines: lines.len(),
            ..BuildStats::default()
        };

        for token in lines.iter().flatten() {
            graph.add(token.as_ref().to_string());
            stats.tokens += 1;
        }

        let counts = self.count_pairs_parallel(lines);
        let mut pairs: Vec<_> = counts.into_iter().collect();
        pairs.sort_unstable();
        for ((source, target), count) in pairs {
            increment_edge(graph, &source, &target, count)?;
            stats.pairs += count as usize;
        }

        Ok(stats)
    }

    /// Count every adjacent `(source, target)` pair in the corpus.
    ///
    /// Lines are counted independently in parallel and merged; boundary
    /// pairs are added afterwards when `span_lines` is set.
    pub fn count_pairs_parallel<S>(&self, lines: &[Vec<S>]) -> FxHashMap<(String, String), Weight>
    where
        S: AsRef<str> + Sync,
    {
        let mut counts = lines
            .par_iter()
            .map(|line| {
                let mut local: FxHashMap<(String, String), Weight> = FxHashMap::default();
                for pair in line.windows(2) {
                    let key = (pair[0].as_ref().to_string(), pair[1].as_ref().to_string());
                    *local.entry(key).or_insert(0) += 1;
                }
                local
            })
            .reduce(FxHashMap::default, |mut acc, partial| {
                for (key, count) in partial {
                    *acc.entry(key).or_insert(0) += count;
                }
                acc
            });

        if self.span_lines {
            let mut prev: Option<&str> = None;
            for line in lines {
                if let (Some(source), Some(first)) = (prev, line.first()) {
                    let key = (source.to_string(), first.as_ref().to_string());
                    *counts.entry(key).or_insert(0) += 1;
                }
                if let Some(last) = line.last() {
                    prev = Some(last.as_ref());
                }
            }
        }

        counts
    }
}

/// Add `by` to the weight of `source -> target`, creating the edge at 0.
/// Both endpoints must already be vertices. The sum saturates at `Weight::MAX`.
fn increment_edge<G>(graph: &mut G, source: &String, target: &String, by: Weight) -> Result<()>
where
    G: GraphStore<String> + ?Sized,
{
    let current = graph.weight(source, target).unwrap_or(NO_PRIOR_EDGE);
    graph.set(source, target, current.saturating_add(by))?;
    Ok(())
}
