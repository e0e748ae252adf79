//! Error types for graph_poet
//!
//! This module defines the error types used throughout the library.
//! Vertex and weight errors are contract violations by the caller; they are
//! never retried and always propagate synchronously.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GraphError>;

/// Main error type for graph_poet
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A referenced vertex is not present in the graph
    #[error("Invalid vertex: {vertex} is not in the graph")]
    InvalidVertex { vertex: String },

    /// An edge weight was negative
    #[error("Invalid weight: {weight} (edge weights must be >= 0)")]
    InvalidWeight { weight: i64 },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Reading a corpus failed
    #[error("I/O error: {message}")]
    Io { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl GraphError {
    /// Create an invalid vertex error from any debuggable label
    pub fn invalid_vertex(vertex: &impl std::fmt::Debug) -> Self {
        Self::InvalidVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an invalid weight error
    pub fn invalid_weight(weight: i64) -> Self {
        Self::InvalidWeight { weight }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error is a caller contract violation on the graph
    /// (bad vertex or bad weight)
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::InvalidVertex { .. } | Self::InvalidWeight { .. })
    }
}

impl From<std::io::Error> for GraphError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
