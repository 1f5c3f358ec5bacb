//! Error types for mapping validation.
//!
//! "Not isomorphic" / "not homomorphic" are ordinary `Ok(None)` query
//! results, and solver failures travel as
//! [`gopt_solver::SolverError`] — this module only covers structurally
//! malformed candidate mappings handed to the membership checks.

use thiserror::Error;

/// A candidate mapping that cannot even be checked.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MappingError {
    /// The mapping covers the wrong number of source vertices.
    #[error("mapping covers {actual} vertices, source graph has {expected}")]
    DomainSizeMismatch {
        /// The source graph's vertex count.
        expected: usize,
        /// The number of vertices the mapping covers.
        actual: usize,
    },

    /// An image is not a vertex of the target graph.
    #[error("vertex {vertex} maps to {image}, outside the target graph on {limit} vertices")]
    TargetOutOfRange {
        /// The source vertex with the bad image.
        vertex: usize,
        /// The out-of-range image.
        image: usize,
        /// The target graph's vertex count.
        limit: usize,
    },
}
