//! # graph_poet
//!
//! Mutable weighted directed graphs and a word-affinity poet built on them.
//!
//! A corpus is turned into an affinity graph whose edge `a -> b` counts how
//! often `b` directly followed `a`. Given an input phrase, the poet inserts
//! at most one bridge word between each adjacent pair of words.
//!
//! ## Features
//!
//! - **Two interchangeable backings**: [`EdgeListGraph`] and
//!   [`AdjacencyGraph`] implement the same [`GraphStore`] contract
//! - **Deterministic bridges**: heaviest first edge wins, ties go to the
//!   lexicographically smallest word
//! - **Parallel counting** for large corpora via rayon

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a processing stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("poet_stage", stage = $name).entered();
    };
}

/// Emit a debug event (when the `tracing` feature is enabled).
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod poet;
pub mod types;

// Re-export commonly used types
pub use errors::{GraphError, Result};
pub use types::{Backing, PoetConfig, Weight, NO_PRIOR_EDGE};

// Re-export main functionality
pub use graph::builder::BuildStats;
pub use graph::{empty, AdjacencyGraph, AffinityGraphBuilder, EdgeListGraph, GraphStore, Label, WeightedEdge};
pub use nlp::tokenizer::Tokenizer;
pub use poet::{Bridge, BridgeSelector, GraphPoet, Poem, PoemGenerator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
