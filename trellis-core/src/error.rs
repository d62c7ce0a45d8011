//! Error Types
//!
//! Every fallible graph operation reports exactly one of these conditions.
//! "No path" from shortest-path search is deliberately absent: it is an
//! expected outcome and is returned as `Ok(None)`.

use thiserror::Error;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Conditions a caller must handle when running graph algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A required endpoint is not a vertex of the graph.
    ///
    /// Carries the `Debug` rendering of the missing vertex.
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    /// The graph contains a cycle, so no topological order exists.
    #[error("graph contains a cycle")]
    CycleDetected,

    /// The operation is not defined for this kind of graph.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

impl GraphError {
    /// Build a `VertexNotFound` from any debuggable vertex.
    pub(crate) fn vertex_not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        Self::VertexNotFound(format!("{vertex:?}"))
    }
}
