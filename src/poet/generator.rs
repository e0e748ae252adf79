//! Poem generation
//!
//! [`PoemGenerator`] walks an input phrase pair by pair and inserts the
//! selected bridge word (if any) between each adjacent pair. [`GraphPoet`]
//! bundles a corpus, the affinity graph built from it, and a generator.

use super::bridge::BridgeSelector;
use crate::errors::Result;
use crate::graph::{AffinityGraphBuilder, GraphStore};
use crate::nlp::tokenizer::Tokenizer;
use crate::types::PoetConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A bridge inserted into a poem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bridge {
    /// Index of the input word the bridge follows
    pub after: usize,
    /// The bridge word, lowercase
    pub word: String,
}

/// A generated poem
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Poem {
    /// Output words: input words in original casing, interleaved with bridges
    pub words: Vec<String>,
    /// Bridges in input order
    pub bridges: Vec<Bridge>,
}

impl Poem {
    /// The poem as a single-space-separated string
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

impl fmt::Display for Poem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Inserts bridge words into phrases using a built graph
#[derive(Debug, Clone, Default)]
pub struct PoemGenerator {
    selector: BridgeSelector,
    tokenizer: Tokenizer,
}

impl PoemGenerator {
    /// Create a generator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator from a config
    pub fn with_config(config: &PoetConfig) -> Self {
        Self {
            selector: BridgeSelector::with_config(config),
            tokenizer: Tokenizer::new(),
        }
    }

    /// Use a specific bridge selector
    pub fn with_selector(mut self, selector: BridgeSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Generate a poem from `input`, reporting the bridges used
    pub fn generate<G>(&self, graph: &G, input: &str) -> Poem
    where
        G: GraphStore<String> + ?Sized,
    {
        trace_stage!("generate_poem");

        let words = self.tokenizer.split_words(input);
        let folded: Vec<String> = words.iter().map(|w| Tokenizer::fold(w)).collect();

        let mut poem = Poem {
            words: Vec::with_capacity(words.len() * 2),
            bridges: Vec::new(),
        };

        for (i, word) in words.iter().enumerate() {
            poem.words.push((*word).to_string());
            let Some(next) = folded.get(i + 1) else {
                continue;
            };
            if let Some(bridge) = self.selector.select(graph, &folded[i], next) {
                let bridge = Tokenizer::fold(&bridge);
                trace_debug!(after = i, bridge = bridge.as_str(), "bridge selected");
                poem.words.push(bridge.clone());
                poem.bridges.push(Bridge {
                    after: i,
                    word: bridge,
                });
            }
        }

        poem
    }

    /// Generate a poem from `input` as a string
    pub fn poem<G>(&self, graph: &G, input: &str) -> String
    where
        G: GraphStore<String> + ?Sized,
    {
        self.generate(graph, input).text()
    }
}

/// A corpus-backed poet: owns the corpus words, the affinity graph built
/// from them, and a poem generator.
pub struct GraphPoet {
    graph: Box<dyn GraphStore<String>>,
    words: Vec<String>,
    generator: PoemGenerator,
}

impl GraphPoet {
    /// Build from already-tokenized, case-folded lines
    pub fn from_lines<S>(lines: &[Vec<S>], config: &PoetConfig) -> Result<Self>
    where
        S: AsRef<str> + Sync,
    {
        config.validate()?;

        let builder = AffinityGraphBuilder::with_config(config);
        let graph = builder.build(lines, config.backing)?;
        let words = lines
            .iter()
            .flatten()
            .map(|token| token.as_ref().to_string())
            .collect();

        Ok(Self {
            graph,
            words,
            generator: PoemGenerator::with_config(config),
        })
    }

    /// Build from raw corpus text
    pub fn from_text(text: &str, config: &PoetConfig) -> Result<Self> {
        let lines = Tokenizer::new().tokenize_lines(text);
        Self::from_lines(&lines, config)
    }

    /// Build from a corpus file
    pub fn from_file(path: impl AsRef<Path>, config: &PoetConfig) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_text(&text, config)
    }

    /// The corpus as a flat list of lowercase tokens, in corpus order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Read-only access to the affinity graph
    pub fn graph(&self) -> &dyn GraphStore<String> {
        &*self.graph
    }

    /// Generate a poem string from `input`
    pub fn poem(&self, input: &str) -> String {
        self.generator.poem(self.graph(), input)
    }

    /// Generate a poem from `input`, reporting the bridges used
    pub fn poem_with_bridges(&self, input: &str) -> Poem {
        self.generator.generate(self.graph(), input)
    }
}

impl fmt::Debug for GraphPoet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphPoet")
            .field("words", &self.words.len())
            .field("vertices", &self.graph.vertex_count())
            .field("edges", &self.graph.edge_count())
            .finish()
    }
}

impl fmt::Display for GraphPoet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.graph.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyGraph, EdgeListGraph};
    use crate::types::Backing;

    fn bridge_graph() -> EdgeListGraph<String> {
        let mut graph = EdgeListGraph::new();
        for v in ["a", "x", "y", "b"] {
            graph.add(v.to_string());
        }
        for (s, t, w) in [("a", "x", 1), ("a", "y", 3), ("x", "b", 1), ("y", "b", 1)] {
            graph.set(&s.to_string(), &t.to_string(), w).unwrap();
        }
        graph
    }

    #[test]
    fn test_bridge_inserted() {
        let graph = bridge_graph();
        assert_eq!(PoemGenerator::new().poem(&graph, "a b"), "a y b");
    }

    #[test]
    fn test_original_casing_preserved() {
        let graph = bridge_graph();
        let poem = PoemGenerator::new().generate(&graph, "A B");

        assert_eq!(poem.text(), "A y B");
        assert_eq!(
            poem.bridges,
            vec![Bridge {
                after: 0,
                word: "y".to_string()
            }]
        );
    }

    #[test]
    fn test_custom_selector_threshold() {
        let graph = bridge_graph();
        let strict = PoemGenerator::new()
            .with_selector(BridgeSelector::new().with_min_bridge_weight(4));
        let loose = PoemGenerator::new()
            .with_selector(BridgeSelector::new().with_min_bridge_weight(3));

        assert_eq!(strict.poem(&graph, "a b"), "a b");
        assert_eq!(loose.poem(&graph, "a b"), "a y b");
    }

    #[test]
    fn test_no_bridge_returns_input() {
        let graph = AdjacencyGraph::<String>::new();
        let generator = PoemGenerator::new();

        assert_eq!(generator.poem(&graph, "Hello there World"), "Hello there World");
        assert_eq!(generator.poem(&graph, "Java"), "Java");
        assert_eq!(generator.poem(&graph, ""), "");
        assert_eq!(generator.poem(&graph, "   "), "");
    }

    #[test]
    fn test_whitespace_collapsed() {
        let graph = bridge_graph();
        assert_eq!(PoemGenerator::new().poem(&graph, "  a \t b  "), "a y b");
    }

    #[test]
    fn test_graph_poet_from_text() {
        let corpus = "To explore strange new worlds\nTo seek out new life and new civilizations";
        let poet = GraphPoet::from_text(corpus, &PoetConfig::default()).unwrap();

        assert_eq!(
            poet.poem("Seek to explore new and exciting synergies!"),
            "Seek to explore strange new life and exciting synergies!"
        );
        assert_eq!(poet.words().len(), 13);
        assert!(poet.words().iter().all(|w| w == &w.to_lowercase()));
    }

    #[test]
    fn test_graph_poet_backings_agree() {
        let corpus = "the cat sat on the mat\nthe dog sat on the log\non the mat the cat sat";
        let inputs = ["The sat the", "cat on", "dog the mat", "sat the"];

        let poets: Vec<GraphPoet> = Backing::ALL
            .iter()
            .map(|&b| GraphPoet::from_text(corpus, &PoetConfig::new().with_backing(b)).unwrap())
            .collect();

        for input in inputs {
            assert_eq!(poets[0].poem(input), poets[1].poem(input), "input {input:?}");
        }
        assert_eq!(poets[0].to_string(), poets[1].to_string());
    }

    #[test]
    fn test_graph_poet_rejects_invalid_config() {
        let config = PoetConfig::new().with_min_bridge_weight(-1);
        assert!(GraphPoet::from_text("a b", &config).is_err());
    }

    #[test]
    fn test_graph_poet_missing_file() {
        let err = GraphPoet::from_file("/definitely/not/here.txt", &PoetConfig::default())
            .unwrap_err();
        assert!(matches!(err, crate::errors::GraphError::Io { .. }));
    }
}
