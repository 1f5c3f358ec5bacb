//! Maximum average degree.

use gopt_common::Graph;
use gopt_solver::{Direction, LinExpr, Model, Outcome, Sense, Solve, SolverError, VarId};

/// The maximum average degree over all subgraphs, `max_H 2·|E(H)| / |V(H)|`.
///
/// Twice the densest-subgraph LP value: one weight per edge capped by the
/// weights of both endpoints, vertex weights summing to one. The LP
/// optimum equals the best edge-to-vertex ratio, so no subgraph
/// enumeration is needed.
pub fn maximum_average_degree(g: &Graph, solver: &impl Solve) -> Result<f64, SolverError> {
    let edges = g.edges();
    if edges.is_empty() {
        return Ok(0.0);
    }
    let mut model = Model::new(Direction::Maximize);
    let edge_weights: Vec<VarId> = edges.iter().map(|_| model.continuous(0.0, 1.0, 1.0)).collect();
    let vertex_weights: Vec<VarId> = g.vertices().map(|_| model.continuous(0.0, 1.0, 0.0)).collect();
    for (i, &(u, v)) in edges.iter().enumerate() {
        for endpoint in [u, v] {
            model.constrain(
                LinExpr::new()
                    .with(edge_weights[i], 1.0)
                    .with(vertex_weights[endpoint], -1.0),
                Sense::Le,
                0.0,
            );
        }
    }
    model.constrain(
        LinExpr::sum(vertex_weights.iter().copied()),
        Sense::Eq,
        1.0,
    );
    match solver.solve(&model)? {
        Outcome::Infeasible => Err(SolverError::assignment("density model infeasible")),
        Outcome::Feasible(a) => {
            let density: f64 = edge_weights.iter().map(|&w| a.value(w)).sum();
            Ok(2.0 * density)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gopt_common::generators::{complete, cycle, path, petersen, star};
    use gopt_solver::MicrolpSolver;
    use rstest::rstest;

    #[rstest]
    #[case::regular_cycle(cycle(5), 2.0)]
    #[case::complete(complete(4), 3.0)]
    #[case::regular_petersen(petersen(), 3.0)]
    #[case::path(path(4), 1.5)]
    #[case::star(star(4), 1.6)]
    #[case::edgeless(Graph::new(3), 0.0)]
    fn known_maximum_average_degrees(#[case] g: Graph, #[case] expected: f64) {
        let mad = maximum_average_degree(&g, &MicrolpSolver).unwrap();
        assert!((mad - expected).abs() < 1e-6, "got {mad}, expected {expected}");
    }

    #[test]
    fn dense_core_dominates_pendant_edges() {
        // K4 with a pendant path attached keeps mad(K4) = 3
        let g = Graph::from_edges(
            6,
            &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3), (3, 4), (4, 5)],
        )
        .unwrap();
        let mad = maximum_average_degree(&g, &MicrolpSolver).unwrap();
        assert!((mad - 3.0).abs() < 1e-6);
    }
}
