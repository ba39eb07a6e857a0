use thiserror::Error;

/// Failures raised by graph construction and traversal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("vertex index {index} out of range for graph with {vertex_count} vertices")]
    IndexOutOfRange { index: usize, vertex_count: usize },

    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    #[error("no path from vertex {start} to vertex {target}")]
    Unreachable { start: usize, target: usize },

    #[error("predecessor chain broken at vertex {at} before reaching start {start}")]
    BrokenPredecessorChain { start: usize, at: usize },

    #[error("edge {from} -> {to} has no weight")]
    MissingWeight { from: usize, to: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;
