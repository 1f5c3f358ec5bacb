//! Maximum clique.

use gopt_common::Graph;
use gopt_solver::{Solve, SolverError};

use crate::independent_set::maximum_independent_set;

/// A maximum clique, via a maximum independent set of the complement.
pub fn maximum_clique(g: &Graph, solver: &impl Solve) -> Result<Vec<usize>, SolverError> {
    maximum_independent_set(&g.complement(), solver)
}

/// The clique number ω(G).
pub fn clique_number(g: &Graph, solver: &impl Solve) -> Result<usize, SolverError> {
    Ok(maximum_clique(g, solver)?.len())
}
