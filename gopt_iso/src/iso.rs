//! The two-phase isomorphism algorithm and its homomorphism / fractional
//! relatives.
//!
//! Invariant-based rejections resolve locally and never touch the solver;
//! whatever survives pruning is encoded (see [`crate::encode`]) and decided
//! by the backend, whose infeasibility verdict is exact. Solver failures
//! propagate unmodified — they are never read as "not isomorphic".

use gopt_common::Graph;
use gopt_solver::{Assignment, Model, Outcome, Solve, SolverError, VarKind};
use tracing::debug;

use crate::encode::{AssignmentMatrix, add_class_constraints, bijection_model, homomorphism_model};
use crate::mapping::VertexMap;
use crate::partition::Classes;
use crate::signature::{graph_signature_from, vertex_signatures};

/// Decide isomorphism of `g` and `h` along the full two-phase path:
/// count/degree reject, signature reject, invariant-class partitioning,
/// then the partitioned assignment program.
///
/// `Ok(Some(map))` carries a witness bijection, `Ok(None)` is proven
/// non-isomorphism, and `Err` is a solver failure (neither verdict).
pub fn isomorphism(
    g: &Graph,
    h: &Graph,
    solver: &impl Solve,
) -> Result<Option<VertexMap>, SolverError> {
    if !counts_and_degrees_agree(g, h) {
        debug!("rejected before signatures: counts or degree sequences differ");
        return Ok(None);
    }
    if g.vertex_count() == 0 {
        return Ok(Some(VertexMap::default()));
    }

    let sigs_g = vertex_signatures(g);
    let sigs_h = vertex_signatures(h);
    if graph_signature_from(&sigs_g, g) != graph_signature_from(&sigs_h, h) {
        debug!("rejected: graph signatures differ");
        return Ok(None);
    }

    let classes_g = Classes::by_signature(&sigs_g);
    let classes_h = Classes::by_signature(&sigs_h);
    if !classes_g.compatible_with(&classes_h) {
        debug!("rejected: invariant class partitions differ");
        return Ok(None);
    }
    debug!(
        classes = classes_g.len(),
        sizes = ?classes_g.sizes(),
        "invariant pruning passed, encoding assignment program"
    );

    let (mut model, matrix) = bijection_model(g, h, VarKind::Binary);
    add_class_constraints(&mut model, &matrix, &classes_g, &classes_h);
    solve_for_map(solver, &model, &matrix, g.vertex_count())
}

/// The unpruned entry point: bijection plus adjacency-consistency
/// constraints only, no signatures, no classes.
///
/// Faster than [`isomorphism`] on highly symmetric inputs, where
/// partitioning degenerates to one giant class; always agrees with it on
/// the verdict.
pub fn isomorphism_direct(
    g: &Graph,
    h: &Graph,
    solver: &impl Solve,
) -> Result<Option<VertexMap>, SolverError> {
    if g.vertex_count() != h.vertex_count() {
        return Ok(None);
    }
    if g.vertex_count() == 0 {
        return Ok(Some(VertexMap::default()));
    }
    let (model, matrix) = bijection_model(g, h, VarKind::Binary);
    solve_for_map(solver, &model, &matrix, g.vertex_count())
}

/// Decide fractional isomorphism: a doubly stochastic `S` with
/// `A·S = S·B`, found by pure linear programming.
///
/// A strictly weaker equivalence than exact isomorphism — a returned matrix
/// is a necessary-condition witness only.
pub fn fractional_isomorphism(
    g: &Graph,
    h: &Graph,
    solver: &impl Solve,
) -> Result<Option<Vec<Vec<f64>>>, SolverError> {
    let n = g.vertex_count();
    if n != h.vertex_count() {
        return Ok(None);
    }
    if n == 0 {
        return Ok(Some(Vec::new()));
    }
    let (model, matrix) = bijection_model(g, h, VarKind::Continuous { lo: 0.0, hi: 1.0 });
    match solver.solve(&model)? {
        Outcome::Infeasible => {
            debug!("no doubly stochastic solution: not fractionally isomorphic");
            Ok(None)
        }
        Outcome::Feasible(assignment) => {
            let rows = (0..n)
                .map(|v| (0..n).map(|x| assignment.value(matrix.var(v, x))).collect())
                .collect();
            Ok(Some(rows))
        }
    }
}

/// Find a homomorphism `g -> h` (edges land on edges, not necessarily
/// injective), or prove none exists.
pub fn homomorphism(
    g: &Graph,
    h: &Graph,
    solver: &impl Solve,
) -> Result<Option<VertexMap>, SolverError> {
    if g.vertex_count() == 0 {
        return Ok(Some(VertexMap::default()));
    }
    if h.vertex_count() == 0 {
        debug!("no homomorphism: target graph is empty");
        return Ok(None);
    }
    let (model, matrix) = homomorphism_model(g, h);
    match solver.solve(&model)? {
        Outcome::Infeasible => Ok(None),
        Outcome::Feasible(assignment) => {
            extract_map(&assignment, &matrix, g.vertex_count(), h.vertex_count()).map(Some)
        }
    }
}

/// Cheap O(V log V) screen: vertex count, edge count, sorted degree
/// sequence.
fn counts_and_degrees_agree(g: &Graph, h: &Graph) -> bool {
    g.vertex_count() == h.vertex_count()
        && g.edge_count() == h.edge_count()
        && g.degree_sequence() == h.degree_sequence()
}

fn solve_for_map(
    solver: &impl Solve,
    model: &Model,
    matrix: &AssignmentMatrix,
    n: usize,
) -> Result<Option<VertexMap>, SolverError> {
    match solver.solve(model)? {
        Outcome::Infeasible => {
            debug!("solver proved infeasibility: not isomorphic");
            Ok(None)
        }
        Outcome::Feasible(assignment) => extract_map(&assignment, matrix, n, n).map(Some),
    }
}

fn extract_map(
    assignment: &Assignment,
    matrix: &AssignmentMatrix,
    source_count: usize,
    target_count: usize,
) -> Result<VertexMap, SolverError> {
    let mut images = Vec::with_capacity(source_count);
    for v in 0..source_count {
        let image = (0..target_count).find(|&x| assignment.is_one(matrix.var(v, x)));
        match image {
            Some(x) => images.push(x),
            None => {
                return Err(SolverError::assignment(format!(
                    "no target selected for source vertex {v}"
                )));
            }
        }
    }
    Ok(VertexMap::from_images(images))
}
