//! Error types for graph construction.

use thiserror::Error;

/// Errors raised when building or mutating a [`crate::Graph`].
///
/// All read/derive operations are total; only edge insertion can fail, and
/// only on structurally invalid input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An endpoint does not name a vertex of the graph.
    #[error("vertex {vertex} out of range for a graph on {limit} vertices")]
    VertexOutOfRange {
        /// The offending endpoint.
        vertex: usize,
        /// The graph's vertex count.
        limit: usize,
    },

    /// Both endpoints are the same vertex; simple graphs carry no self-loops.
    #[error("self-loop on vertex {0} rejected (simple graph)")]
    SelfLoop(usize),
}

impl GraphError {
    /// Create an out-of-range error.
    pub fn out_of_range(vertex: usize, limit: usize) -> Self {
        Self::VertexOutOfRange { vertex, limit }
    }
}
