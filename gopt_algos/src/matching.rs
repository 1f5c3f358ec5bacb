//! Maximum, fractional, and k-regular matchings.

use gopt_common::Graph;
use gopt_solver::{Direction, LinExpr, Model, Outcome, Sense, Solve, SolverError, VarId};
use tracing::debug;

/// A maximum matching: one binary variable per edge, each vertex covered at
/// most once, cardinality maximized.
pub fn maximum_matching(
    g: &Graph,
    solver: &impl Solve,
) -> Result<Vec<(usize, usize)>, SolverError> {
    let edges = g.edges();
    if edges.is_empty() {
        return Ok(Vec::new());
    }
    let mut model = Model::new(Direction::Maximize);
    let picks: Vec<VarId> = edges.iter().map(|_| model.binary_with_obj(1.0)).collect();
    add_degree_constraints(&mut model, g, &edges, &picks, Sense::Le, 1.0);

    let assignment = match solver.solve(&model)? {
        Outcome::Infeasible => {
            return Err(SolverError::assignment("matching model infeasible"));
        }
        Outcome::Feasible(a) => a,
    };
    let matched: Vec<(usize, usize)> = edges
        .iter()
        .zip(&picks)
        .filter(|&(_, &var)| assignment.is_one(var))
        .map(|(&e, _)| e)
        .collect();
    debug!(size = matched.len(), "maximum matching found");
    Ok(matched)
}

/// The matching number ν(G).
pub fn matching_number(g: &Graph, solver: &impl Solve) -> Result<usize, SolverError> {
    Ok(maximum_matching(g, solver)?.len())
}

/// The fractional matching number: the same program with edge weights
/// relaxed to `[0, 1]`. Always ≥ ν(G); the optimum is half-integral.
pub fn fractional_matching_number(g: &Graph, solver: &impl Solve) -> Result<f64, SolverError> {
    let edges = g.edges();
    if edges.is_empty() {
        return Ok(0.0);
    }
    let mut model = Model::new(Direction::Maximize);
    let weights: Vec<VarId> = edges
        .iter()
        .map(|_| model.continuous(0.0, 1.0, 1.0))
        .collect();
    add_degree_constraints(&mut model, g, &edges, &weights, Sense::Le, 1.0);

    match solver.solve(&model)? {
        Outcome::Infeasible => Err(SolverError::assignment("fractional matching infeasible")),
        Outcome::Feasible(a) => Ok(weights.iter().map(|&w| a.value(w)).sum()),
    }
}

/// A k-factor: a spanning k-regular subgraph, as its edge set.
///
/// `Ok(None)` when no k-factor exists (a feasibility verdict, not an
/// error).
pub fn k_factor(
    g: &Graph,
    k: usize,
    solver: &impl Solve,
) -> Result<Option<Vec<(usize, usize)>>, SolverError> {
    if k == 0 || g.vertex_count() == 0 {
        return Ok(Some(Vec::new()));
    }
    if g.vertices().any(|v| g.degree(v) < k) {
        debug!("no {k}-factor: a vertex has degree below {k}");
        return Ok(None);
    }
    let edges = g.edges();
    let mut model = Model::feasibility();
    let picks: Vec<VarId> = edges.iter().map(|_| model.binary()).collect();
    add_degree_constraints(&mut model, g, &edges, &picks, Sense::Eq, k as f64);

    match solver.solve(&model)? {
        Outcome::Infeasible => Ok(None),
        Outcome::Feasible(a) => Ok(Some(
            edges
                .iter()
                .zip(&picks)
                .filter(|&(_, &var)| a.is_one(var))
                .map(|(&e, _)| e)
                .collect(),
        )),
    }
}

/// One `Σ_{e ∋ v} x_e <sense> rhs` constraint per vertex.
fn add_degree_constraints(
    model: &mut Model,
    g: &Graph,
    edges: &[(usize, usize)],
    vars: &[VarId],
    sense: Sense,
    rhs: f64,
) {
    for v in g.vertices() {
        let mut incident = LinExpr::new();
        for (i, &(a, b)) in edges.iter().enumerate() {
            if a == v || b == v {
                incident.push(vars[i], 1.0);
            }
        }
        if !incident.is_empty() {
            model.constrain(incident, sense, rhs);
        } else if sense == Sense::Eq && rhs != 0.0 {
            // isolated vertex can never reach the required degree; the
            // callers guard this, keep the model honest anyway
            model.constrain(LinExpr::new().with(vars[0], 0.0), sense, rhs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gopt_common::generators::{complete, cycle, hypercube, path, petersen};
    use gopt_solver::MicrolpSolver;

    #[test]
    fn known_matching_numbers() {
        let solver = MicrolpSolver;
        assert_eq!(matching_number(&cycle(5), &solver).unwrap(), 2);
        assert_eq!(matching_number(&path(4), &solver).unwrap(), 2);
        assert_eq!(matching_number(&complete(4), &solver).unwrap(), 2);
        assert_eq!(matching_number(&petersen(), &solver).unwrap(), 5);
    }

    #[test]
    fn matching_edges_are_disjoint() {
        let g = petersen();
        let matching = maximum_matching(&g, &MicrolpSolver).unwrap();
        let mut seen = vec![false; g.vertex_count()];
        for (u, v) in matching {
            assert!(!seen[u] && !seen[v]);
            seen[u] = true;
            seen[v] = true;
        }
    }

    #[test]
    fn odd_cycle_fractional_matching_beats_integral() {
        // ν(C5) = 2 but the half-weights solution reaches 5/2
        let value = fractional_matching_number(&cycle(5), &MicrolpSolver).unwrap();
        assert!((value - 2.5).abs() < 1e-6);
    }

    #[test]
    fn cycle_is_its_own_two_factor() {
        let g = cycle(6);
        let factor = k_factor(&g, 2, &MicrolpSolver).unwrap().unwrap();
        assert_eq!(factor.len(), 6);
    }

    #[test]
    fn cube_has_a_perfect_matching() {
        let q3 = hypercube(3);
        let factor = k_factor(&q3, 1, &MicrolpSolver).unwrap().unwrap();
        assert_eq!(factor.len(), 4);
    }

    #[test]
    fn path_has_no_two_factor() {
        assert_eq!(k_factor(&path(4), 2, &MicrolpSolver).unwrap(), None);
    }
}
