//! Minimum dominating set.

use gopt_common::Graph;
use gopt_solver::{Direction, LinExpr, Model, Outcome, Sense, Solve, SolverError, VarId};
use tracing::debug;

/// A minimum dominating set: every vertex is chosen or adjacent to a chosen
/// vertex (closed-neighborhood sums ≥ 1, minimized).
pub fn minimum_dominating_set(g: &Graph, solver: &impl Solve) -> Result<Vec<usize>, SolverError> {
    if g.vertex_count() == 0 {
        return Ok(Vec::new());
    }
    let mut model = Model::new(Direction::Minimize);
    let picks: Vec<VarId> = g.vertices().map(|_| model.binary_with_obj(1.0)).collect();
    for v in g.vertices() {
        let mut closed = LinExpr::new().with(picks[v], 1.0);
        for u in g.neighbors(v) {
            closed.push(picks[u], 1.0);
        }
        model.constrain(closed, Sense::Ge, 1.0);
    }
    let assignment = match solver.solve(&model)? {
        Outcome::Infeasible => {
            return Err(SolverError::assignment("domination model infeasible"));
        }
        Outcome::Feasible(a) => a,
    };
    let dominators: Vec<usize> = g
        .vertices()
        .filter(|&v| assignment.is_one(picks[v]))
        .collect();
    debug!(size = dominators.len(), "minimum dominating set found");
    Ok(dominators)
}

/// The domination number γ(G).
pub fn domination_number(g: &Graph, solver: &impl Solve) -> Result<usize, SolverError> {
    Ok(minimum_dominating_set(g, solver)?.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gopt_common::generators::{cycle, petersen, star};
    use gopt_solver::MicrolpSolver;

    #[test]
    fn known_domination_numbers() {
        let solver = MicrolpSolver;
        assert_eq!(domination_number(&cycle(5), &solver).unwrap(), 2);
        assert_eq!(domination_number(&star(6), &solver).unwrap(), 1);
        assert_eq!(domination_number(&petersen(), &solver).unwrap(), 3);
        assert_eq!(domination_number(&Graph::new(3), &solver).unwrap(), 3);
    }

    #[test]
    fn set_dominates_every_vertex() {
        let g = cycle(9);
        let set = minimum_dominating_set(&g, &MicrolpSolver).unwrap();
        assert_eq!(set.len(), 3);
        for v in g.vertices() {
            assert!(set.contains(&v) || g.neighbors(v).any(|u| set.contains(&u)));
        }
    }
}
