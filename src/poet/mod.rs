//! Bridge-augmented poem generation
//!
//! - [`bridge`] — choosing one bridge word between two adjacent words
//! - [`generator`] — walking an input phrase and assembling the poem

pub mod bridge;
pub mod generator;

pub use bridge::BridgeSelector;
pub use generator::{Bridge, GraphPoet, Poem, PoemGenerator};
