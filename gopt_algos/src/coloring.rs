//! Optimal vertex and edge coloring.

use gopt_common::Graph;
use gopt_common::generators::line_graph;
use gopt_solver::{Direction, LinExpr, Model, Outcome, Sense, Solve, SolverError, VarId};
use tracing::debug;

/// An optimal proper vertex coloring, as a color index per vertex.
///
/// Colors used form the prefix `0..chromatic_number`.
pub fn vertex_coloring(g: &Graph, solver: &impl Solve) -> Result<Vec<usize>, SolverError> {
    let greedy = greedy_coloring(g);
    let upper = color_count(&greedy);
    // 0 colors (empty), 1 color (edgeless) and 2 colors (bipartite with an
    // edge) are already optimal
    if upper <= 2 {
        return Ok(greedy);
    }
    debug!(upper, "greedy bound set, encoding coloring program");

    let n = g.vertex_count();
    let mut model = Model::new(Direction::Minimize);
    let assigns: Vec<Vec<VarId>> = (0..n)
        .map(|_| (0..upper).map(|_| model.binary()).collect())
        .collect();
    let used: Vec<VarId> = (0..upper).map(|_| model.binary_with_obj(1.0)).collect();

    for v in 0..n {
        model.constrain(LinExpr::sum(assigns[v].iter().copied()), Sense::Eq, 1.0);
        for c in 0..upper {
            model.constrain(
                LinExpr::new().with(assigns[v][c], 1.0).with(used[c], -1.0),
                Sense::Le,
                0.0,
            );
        }
    }
    for (u, v) in g.edges() {
        for c in 0..upper {
            model.constrain(
                LinExpr::sum([assigns[u][c], assigns[v][c]]),
                Sense::Le,
                1.0,
            );
        }
    }
    // used colors form a prefix
    for c in 1..upper {
        model.constrain(
            LinExpr::new().with(used[c - 1], 1.0).with(used[c], -1.0),
            Sense::Ge,
            0.0,
        );
    }

    let assignment = match solver.solve(&model)? {
        // the greedy coloring is always feasible within its own bound
        Outcome::Infeasible => return Err(SolverError::assignment("coloring model infeasible")),
        Outcome::Feasible(a) => a,
    };
    let mut colors = vec![0usize; n];
    for v in 0..n {
        match (0..upper).find(|&c| assignment.is_one(assigns[v][c])) {
            Some(c) => colors[v] = c,
            None => {
                return Err(SolverError::assignment(format!(
                    "no color selected for vertex {v}"
                )));
            }
        }
    }
    Ok(colors)
}

/// The chromatic number χ(G).
pub fn chromatic_number(g: &Graph, solver: &impl Solve) -> Result<usize, SolverError> {
    Ok(color_count(&vertex_coloring(g, solver)?))
}

/// An optimal proper edge coloring, as `(edge, color)` pairs in
/// [`Graph::edges`] order — vertex coloring of the line graph mapped back.
pub fn edge_coloring(
    g: &Graph,
    solver: &impl Solve,
) -> Result<Vec<((usize, usize), usize)>, SolverError> {
    let colors = vertex_coloring(&line_graph(g), solver)?;
    Ok(g.edges().into_iter().zip(colors).collect())
}

/// The chromatic index χ'(G).
pub fn chromatic_index(g: &Graph, solver: &impl Solve) -> Result<usize, SolverError> {
    Ok(chromatic_number(&line_graph(g), solver)?)
}

/// First-fit coloring in vertex order; an upper bound of at most Δ+1
/// colors.
#[contracts::debug_ensures(ret.len() == g.vertex_count())]
fn greedy_coloring(g: &Graph) -> Vec<usize> {
    let mut colors = vec![usize::MAX; g.vertex_count()];
    for v in g.vertices() {
        let taken: Vec<usize> = g
            .neighbors(v)
            .filter(|&u| colors[u] != usize::MAX)
            .map(|u| colors[u])
            .collect();
        colors[v] = (0..).find(|c| !taken.contains(c)).unwrap_or(0);
    }
    colors
}

fn color_count(colors: &[usize]) -> usize {
    colors.iter().map(|&c| c + 1).max().unwrap_or(0)
}
