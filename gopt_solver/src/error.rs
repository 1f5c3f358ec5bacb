//! Solver failure taxonomy.
//!
//! Infeasibility is deliberately absent here: it is a first-class query
//! outcome ([`crate::Outcome::Infeasible`]), not a failure.

use thiserror::Error;

/// Errors surfaced by a [`crate::Solve`] backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The model is unbounded in the objective direction; for the
    /// feasibility models this workspace builds, that indicates a malformed
    /// encoding rather than a property of the input graphs.
    #[error("model unbounded in the objective direction")]
    Unbounded,

    /// The backend errored out (numerical failure, internal limit, timeout).
    #[error("solver backend failure: {0}")]
    Backend(String),

    /// The backend reported success but the assignment does not decode
    /// (e.g. a binary variable far from both bounds).
    #[error("solver returned an unusable assignment: {0}")]
    Assignment(String),
}

impl SolverError {
    /// Wrap a backend-reported failure.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Flag an assignment that does not decode.
    pub fn assignment(msg: impl Into<String>) -> Self {
        Self::Assignment(msg.into())
    }
}
