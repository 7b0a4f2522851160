//! Error types for trestle operations

use thiserror::Error;

/// Result type alias for trestle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during trestle operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An edge endpoint index is outside the graph's vertex range.
    #[error("Invalid vertex index {index}: graph has {vertex_count} vertices")]
    InvalidVertexIndex {
        /// The offending index.
        index: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// An edge endpoint name does not match any registered vertex.
    #[error("Unknown vertex name: {0}")]
    UnknownVertexName(String),

    /// Vertex names within a graph must be unique.
    #[error("Duplicate vertex name: {0}")]
    DuplicateVertexName(String),

    /// An input document is structurally invalid.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
