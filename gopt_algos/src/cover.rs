//! Minimum vertex and edge covers.

use gopt_common::Graph;
use gopt_solver::{Direction, LinExpr, Model, Outcome, Sense, Solve, SolverError, VarId};
use tracing::debug;

/// A minimum vertex cover: every edge sees at least one chosen endpoint.
pub fn minimum_vertex_cover(g: &Graph, solver: &impl Solve) -> Result<Vec<usize>, SolverError> {
    if g.edge_count() == 0 {
        return Ok(Vec::new());
    }
    let mut model = Model::new(Direction::Minimize);
    let picks: Vec<VarId> = g.vertices().map(|_| model.binary_with_obj(1.0)).collect();
    for (u, v) in g.edges() {
        model.constrain(LinExpr::sum([picks[u], picks[v]]), Sense::Ge, 1.0);
    }
    let assignment = match solver.solve(&model)? {
        Outcome::Infeasible => return Err(SolverError::assignment("vertex cover model infeasible")),
        Outcome::Feasible(a) => a,
    };
    let cover: Vec<usize> = g.vertices().filter(|&v| assignment.is_one(picks[v])).collect();
    debug!(size = cover.len(), "minimum vertex cover found");
    Ok(cover)
}

/// The vertex cover number τ(G).
pub fn vertex_cover_number(g: &Graph, solver: &impl Solve) -> Result<usize, SolverError> {
    Ok(minimum_vertex_cover(g, solver)?.len())
}

/// A minimum edge cover: every vertex sees at least one chosen edge.
///
/// `Ok(None)` when an isolated vertex makes covering impossible.
pub fn minimum_edge_cover(
    g: &Graph,
    solver: &impl Solve,
) -> Result<Option<Vec<(usize, usize)>>, SolverError> {
    if g.vertex_count() == 0 {
        return Ok(Some(Vec::new()));
    }
    if g.vertices().any(|v| g.degree(v) == 0) {
        debug!("no edge cover: isolated vertex present");
        return Ok(None);
    }
    let edges = g.edges();
    let mut model = Model::new(Direction::Minimize);
    let picks: Vec<VarId> = edges.iter().map(|_| model.binary_with_obj(1.0)).collect();
    for v in g.vertices() {
        let mut incident = LinExpr::new();
        for (i, &(a, b)) in edges.iter().enumerate() {
            if a == v || b == v {
                incident.push(picks[i], 1.0);
            }
        }
        model.constrain(incident, Sense::Ge, 1.0);
    }
    let assignment = match solver.solve(&model)? {
        Outcome::Infeasible => return Err(SolverError::assignment("edge cover model infeasible")),
        Outcome::Feasible(a) => a,
    };
    Ok(Some(
        edges
            .iter()
            .zip(&picks)
            .filter(|&(_, &var)| assignment.is_one(var))
            .map(|(&e, _)| e)
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gopt_common::generators::{complete, cycle, path, star};
    use gopt_solver::MicrolpSolver;

    #[test]
    fn gallai_identity_on_samples() {
        // τ(G) + α(G) = |V| on every graph
        let solver = MicrolpSolver;
        for g in [cycle(5), path(6), complete(4), star(4)] {
            let tau = vertex_cover_number(&g, &solver).unwrap();
            let alpha = crate::independence_number(&g, &solver).unwrap();
            assert_eq!(tau + alpha, g.vertex_count());
        }
    }

    #[test]
    fn cover_touches_every_edge() {
        let g = cycle(7);
        let cover = minimum_vertex_cover(&g, &MicrolpSolver).unwrap();
        assert_eq!(cover.len(), 4);
        for (u, v) in g.edges() {
            assert!(cover.contains(&u) || cover.contains(&v));
        }
    }

    #[test]
    fn edge_cover_of_a_star_uses_every_leaf_edge() {
        let g = star(4);
        let cover = minimum_edge_cover(&g, &MicrolpSolver).unwrap().unwrap();
        assert_eq!(cover.len(), 4);
    }

    #[test]
    fn isolated_vertices_forbid_edge_covers() {
        let g = Graph::from_edges(3, &[(0, 1)]).unwrap();
        assert_eq!(minimum_edge_cover(&g, &MicrolpSolver).unwrap(), None);
    }
}
