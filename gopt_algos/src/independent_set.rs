//! Maximum independent set.

use gopt_common::Graph;
use gopt_solver::{Direction, LinExpr, Model, Outcome, Sense, Solve, SolverError, VarId};
use tracing::debug;

/// A maximum independent set: one binary variable per vertex, mutual
/// exclusion on every edge, cardinality maximized.
pub fn maximum_independent_set(
    g: &Graph,
    solver: &impl Solve,
) -> Result<Vec<usize>, SolverError> {
    if g.vertex_count() == 0 {
        return Ok(Vec::new());
    }
    let mut model = Model::new(Direction::Maximize);
    let picks: Vec<VarId> = g.vertices().map(|_| model.binary_with_obj(1.0)).collect();
    for (u, v) in g.edges() {
        model.constrain(
            LinExpr::sum([picks[u], picks[v]]),
            Sense::Le,
            1.0,
        );
    }
    let assignment = match solver.solve(&model)? {
        // no constraint system over binaries with these bounds is infeasible
        Outcome::Infeasible => return Err(SolverError::assignment("independent set model infeasible")),
        Outcome::Feasible(a) => a,
    };
    let chosen: Vec<usize> = g.vertices().filter(|&v| assignment.is_one(picks[v])).collect();
    debug!(size = chosen.len(), "maximum independent set found");
    Ok(chosen)
}

/// The independence number α(G).
pub fn independence_number(g: &Graph, solver: &impl Solve) -> Result<usize, SolverError> {
    Ok(maximum_independent_set(g, solver)?.len())
}
