//! Chromatic polynomial by deletion–contraction.

use gopt_common::Graph;
use gopt_iso::IsoCache;
use gopt_solver::{Solve, SolverError};
use tracing::trace;

use crate::poly::Polynomial;

/// The chromatic polynomial P(G, x), coefficients constant-term first.
///
/// Recurses as `P(G) = P(G − e) − P(G / e)`; an edgeless graph on n
/// vertices contributes `x^n`. Intermediate graphs are memoized up to
/// isomorphism, so the two branches share work whenever deletion and
/// contraction produce the same graph under different labels.
pub fn chromatic_polynomial(g: &Graph, solver: &impl Solve) -> Result<Polynomial, SolverError> {
    let mut cache = IsoCache::new();
    chromatic_polynomial_cached(g, &mut cache, solver)
}

/// [`chromatic_polynomial`] against a caller-owned cache, for reuse across
/// several graphs.
pub fn chromatic_polynomial_cached(
    g: &Graph,
    cache: &mut IsoCache<Polynomial>,
    solver: &impl Solve,
) -> Result<Polynomial, SolverError> {
    if g.edge_count() == 0 {
        return Ok(Polynomial::x_pow(g.vertex_count()));
    }
    if let Some(known) = cache.lookup(g, solver)? {
        return Ok(known.clone());
    }
    let (u, v) = g.edges()[0];
    trace!(n = g.vertex_count(), m = g.edge_count(), "expanding on edge ({u}, {v})");
    let deleted = chromatic_polynomial_cached(&g.without_edge(u, v), cache, solver)?;
    let contracted = chromatic_polynomial_cached(&g.contracted(u, v), cache, solver)?;
    let result = deleted - contracted;
    cache.store(g.clone(), result.clone(), solver)?;
    Ok(result)
}
