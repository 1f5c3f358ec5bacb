//! Constraint-system encodings of assignment questions.
//!
//! The decision variables form a matrix `P[v][x]` = "source vertex v maps
//! to target vertex x". Exact isomorphism constrains P to a permutation
//! matrix satisfying the linearization of `A·P = P·B`; the fractional
//! variant keeps the same equations over a doubly stochastic P; the
//! homomorphism variant keeps only row sums and forbids edges landing on
//! non-edges.

use gopt_common::Graph;
use gopt_solver::{LinExpr, Model, Sense, VarId, VarKind};
use tracing::trace;

use crate::partition::Classes;

/// Row-major handle matrix over the model's assignment variables.
pub(crate) struct AssignmentMatrix {
    target_count: usize,
    vars: Vec<VarId>,
}

impl AssignmentMatrix {
    fn build(model: &mut Model, source_count: usize, target_count: usize, kind: VarKind) -> Self {
        let vars = (0..source_count * target_count)
            .map(|_| model.add_var(kind, 0.0))
            .collect();
        AssignmentMatrix { target_count, vars }
    }

    /// The variable for "source `v` maps to target `x`".
    pub(crate) fn var(&self, v: usize, x: usize) -> VarId {
        self.vars[v * self.target_count + x]
    }

    fn row(&self, v: usize) -> impl Iterator<Item = VarId> + '_ {
        (0..self.target_count).map(move |x| self.var(v, x))
    }
}

/// Permutation-matrix model with adjacency consistency: the shared core of
/// exact and fractional isomorphism.
///
/// `kind` is [`VarKind::Binary`] for the exact search and a `[0, 1]`
/// continuous variable for the doubly-stochastic relaxation.
#[contracts::debug_requires(g.vertex_count() == h.vertex_count())]
#[contracts::debug_requires(g.vertex_count() > 0)]
pub(crate) fn bijection_model(g: &Graph, h: &Graph, kind: VarKind) -> (Model, AssignmentMatrix) {
    let n = g.vertex_count();
    let mut model = Model::feasibility();
    let matrix = AssignmentMatrix::build(&mut model, n, n, kind);

    for v in 0..n {
        model.constrain(LinExpr::sum(matrix.row(v)), Sense::Eq, 1.0);
    }
    for x in 0..n {
        model.constrain(
            LinExpr::sum((0..n).map(|v| matrix.var(v, x))),
            Sense::Eq,
            1.0,
        );
    }

    add_adjacency_consistency(&mut model, &matrix, g, h);
    trace!(
        vars = model.var_count(),
        constraints = model.constraints().len(),
        "bijection model built"
    );
    (model, matrix)
}

/// For every (v, x): sum of "v's neighbors land on x" equals sum of "v lands
/// on x's neighbors" — the entrywise reading of `A·P = P·B`.
fn add_adjacency_consistency(model: &mut Model, matrix: &AssignmentMatrix, g: &Graph, h: &Graph) {
    let n = g.vertex_count();
    for v in 0..n {
        for x in 0..n {
            let mut expr = LinExpr::new();
            for w in g.neighbors(v) {
                expr.push(matrix.var(w, x), 1.0);
            }
            for y in h.neighbors(x) {
                expr.push(matrix.var(v, y), -1.0);
            }
            if !expr.is_empty() {
                model.constrain(expr, Sense::Eq, 0.0);
            }
        }
    }
}

/// Force each invariant class of `g` to land on the matching class of `h`:
/// total assignment mass between corresponding classes equals the class
/// size. Sound because any isomorphism preserves the invariant.
#[contracts::debug_requires(classes_g.compatible_with(classes_h))]
pub(crate) fn add_class_constraints(
    model: &mut Model,
    matrix: &AssignmentMatrix,
    classes_g: &Classes,
    classes_h: &Classes,
) {
    for ((_, members_g), (_, members_h)) in classes_g.iter().zip(classes_h.iter()) {
        let mut expr = LinExpr::new();
        for &v in members_g {
            for &x in members_h {
                expr.push(matrix.var(v, x), 1.0);
            }
        }
        model.constrain(expr, Sense::Eq, members_g.len() as f64);
    }
}

/// Homomorphism model: every source vertex maps somewhere (row sums), and no
/// edge of `g` may land on a non-adjacent (or collapsed) target pair.
#[contracts::debug_requires(g.vertex_count() > 0 && h.vertex_count() > 0)]
pub(crate) fn homomorphism_model(g: &Graph, h: &Graph) -> (Model, AssignmentMatrix) {
    let n_source = g.vertex_count();
    let n_target = h.vertex_count();
    let mut model = Model::feasibility();
    let matrix = AssignmentMatrix::build(&mut model, n_source, n_target, VarKind::Binary);

    for v in 0..n_source {
        model.constrain(LinExpr::sum(matrix.row(v)), Sense::Eq, 1.0);
    }

    for (u, v) in g.edges() {
        for x in 0..n_target {
            for y in 0..n_target {
                if x == y || !h.has_edge(x, y) {
                    model.constrain(
                        LinExpr::new()
                            .with(matrix.var(u, x), 1.0)
                            .with(matrix.var(v, y), 1.0),
                        Sense::Le,
                        1.0,
                    );
                }
            }
        }
    }

    trace!(
        vars = model.var_count(),
        constraints = model.constraints().len(),
        "homomorphism model built"
    );
    (model, matrix)
}
