//! Vertex and edge connectivity via minimum-cut programs.

use gopt_common::Graph;
use gopt_solver::{Direction, LinExpr, Model, Outcome, Sense, Solve, SolverError, VarId};
use itertools::Itertools;
use tracing::debug;

/// The edge connectivity λ(G): the fewest edge deletions that disconnect
/// the graph. Zero for disconnected or trivial graphs.
///
/// Solved as a minimum s–t cut for a fixed source against every other
/// sink: binary side labels per vertex and a continuous cut indicator per
/// edge that must dominate the label gap across it.
pub fn edge_connectivity(g: &Graph, solver: &impl Solve) -> Result<usize, SolverError> {
    let n = g.vertex_count();
    if n <= 1 || !g.is_connected() {
        return Ok(0);
    }
    let edges = g.edges();
    let mut best = edges.len();
    for sink in 1..n {
        let cut = min_cut_edges(g, &edges, 0, sink, solver)?;
        debug!(sink, cut, "edge cut computed");
        best = best.min(cut);
    }
    Ok(best)
}

/// The vertex connectivity κ(G): the fewest vertex deletions that
/// disconnect the graph (n − 1 for complete graphs, 0 when already
/// disconnected).
///
/// Minimum vertex s–t cut over every non-adjacent pair: binary side
/// labels, binary deletion markers, and a per-edge rule that a label may
/// only drop across an edge into a deleted endpoint.
pub fn vertex_connectivity(g: &Graph, solver: &impl Solve) -> Result<usize, SolverError> {
    let n = g.vertex_count();
    if n == 0 || !g.is_connected() {
        return Ok(0);
    }
    if g.edge_count() == n * (n - 1) / 2 {
        return Ok(n - 1);
    }
    let mut best = n - 1;
    for (s, t) in (0..n).tuple_combinations() {
        if g.has_edge(s, t) {
            continue;
        }
        let cut = min_cut_vertices(g, s, t, solver)?;
        debug!(s, t, cut, "vertex cut computed");
        best = best.min(cut);
    }
    Ok(best)
}

fn min_cut_edges(
    g: &Graph,
    edges: &[(usize, usize)],
    source: usize,
    sink: usize,
    solver: &impl Solve,
) -> Result<usize, SolverError> {
    let mut model = Model::new(Direction::Minimize);
    let sides: Vec<VarId> = g.vertices().map(|_| model.binary()).collect();
    let cuts: Vec<VarId> = edges.iter().map(|_| model.continuous(0.0, 1.0, 1.0)).collect();
    model.constrain(LinExpr::new().with(sides[source], 1.0), Sense::Eq, 0.0);
    model.constrain(LinExpr::new().with(sides[sink], 1.0), Sense::Eq, 1.0);
    for (i, &(u, v)) in edges.iter().enumerate() {
        // cut_e ≥ |side_u − side_v|
        model.constrain(
            LinExpr::new()
                .with(cuts[i], 1.0)
                .with(sides[u], -1.0)
                .with(sides[v], 1.0),
            Sense::Ge,
            0.0,
        );
        model.constrain(
            LinExpr::new()
                .with(cuts[i], 1.0)
                .with(sides[v], -1.0)
                .with(sides[u], 1.0),
            Sense::Ge,
            0.0,
        );
    }
    objective_as_count(solver.solve(&model)?, &cuts)
}

fn min_cut_vertices(
    g: &Graph,
    source: usize,
    sink: usize,
    solver: &impl Solve,
) -> Result<usize, SolverError> {
    let mut model = Model::new(Direction::Minimize);
    let sides: Vec<VarId> = g.vertices().map(|_| model.binary()).collect();
    let deleted: Vec<VarId> = g.vertices().map(|_| model.binary_with_obj(1.0)).collect();
    model.constrain(LinExpr::new().with(sides[source], 1.0), Sense::Eq, 1.0);
    model.constrain(LinExpr::new().with(sides[sink], 1.0), Sense::Eq, 0.0);
    model.constrain(LinExpr::new().with(deleted[source], 1.0), Sense::Eq, 0.0);
    model.constrain(LinExpr::new().with(deleted[sink], 1.0), Sense::Eq, 0.0);
    for (u, v) in g.edges() {
        // a surviving edge cannot step down from the source side
        model.constrain(
            LinExpr::new()
                .with(sides[u], -1.0)
                .with(sides[v], 1.0)
                .with(deleted[v], 1.0),
            Sense::Ge,
            0.0,
        );
        model.constrain(
            LinExpr::new()
                .with(sides[v], -1.0)
                .with(sides[u], 1.0)
                .with(deleted[u], 1.0),
            Sense::Ge,
            0.0,
        );
    }
    objective_as_count(solver.solve(&model)?, &deleted)
}

/// Sum the chosen variables and round; the cut programs only ever admit
/// integral optima.
fn objective_as_count(outcome: Outcome, vars: &[VarId]) -> Result<usize, SolverError> {
    match outcome {
        Outcome::Infeasible => Err(SolverError::assignment("cut model infeasible")),
        Outcome::Feasible(a) => {
            let total: f64 = vars.iter().map(|&v| a.value(v)).sum();
            Ok(total.round() as usize)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gopt_common::generators::{complete, cycle, disjoint_union, path, petersen};
    use gopt_solver::MicrolpSolver;

    #[test]
    fn complete_graph_is_maximally_connected() {
        let solver = MicrolpSolver;
        assert_eq!(vertex_connectivity(&complete(5), &solver).unwrap(), 4);
        assert_eq!(edge_connectivity(&complete(5), &solver).unwrap(), 4);
    }

    #[test]
    fn cycles_are_two_connected() {
        let solver = MicrolpSolver;
        assert_eq!(vertex_connectivity(&cycle(6), &solver).unwrap(), 2);
        assert_eq!(edge_connectivity(&cycle(6), &solver).unwrap(), 2);
    }

    #[test]
    fn paths_hang_by_one_edge() {
        let solver = MicrolpSolver;
        assert_eq!(edge_connectivity(&path(5), &solver).unwrap(), 1);
        assert_eq!(vertex_connectivity(&path(5), &solver).unwrap(), 1);
    }

    #[test]
    fn petersen_is_three_connected() {
        let solver = MicrolpSolver;
        assert_eq!(vertex_connectivity(&petersen(), &solver).unwrap(), 3);
        assert_eq!(edge_connectivity(&petersen(), &solver).unwrap(), 3);
    }

    #[test]
    fn disconnected_and_trivial_graphs() {
        let solver = MicrolpSolver;
        let two_triangles = disjoint_union(&cycle(3), &cycle(3));
        assert_eq!(vertex_connectivity(&two_triangles, &solver).unwrap(), 0);
        assert_eq!(edge_connectivity(&two_triangles, &solver).unwrap(), 0);
        assert_eq!(edge_connectivity(&Graph::new(1), &solver).unwrap(), 0);
        assert_eq!(vertex_connectivity(&complete(1), &solver).unwrap(), 0);
    }
}
