//! Per-vertex and whole-graph structural invariants.
//!
//! Everything here is invariant under vertex relabeling by construction:
//! multisets are sorted before use and traces ignore ordering entirely.
//! Invariants are necessary conditions only — equal records never prove
//! isomorphism.

use gopt_common::Graph;

/// Number of matrix-power traces taken for each of A and L.
pub const MOMENT_ORDER: usize = 10;

/// The invariant record of a single vertex.
///
/// Two vertices related by an automorphism always produce identical records;
/// the converse does not hold.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VertexInvariant {
    /// Degrees of the vertex's neighbors, sorted.
    pub neighbor_degrees: Vec<usize>,
    /// Degrees (in the complement) of the vertex's complement-neighbors,
    /// sorted.
    pub co_neighbor_degrees: Vec<usize>,
    /// BFS distances to every other vertex, sorted;
    /// [`gopt_common::UNREACHABLE`] for separated pairs.
    pub distances: Vec<u32>,
    /// The same distance profile taken in the complement graph.
    pub co_distances: Vec<u32>,
}

/// Compute the invariant record of every vertex.
///
/// Costs one BFS per vertex in the graph and its complement plus the degree
/// scans; the empty graph yields an empty vector.
#[contracts::debug_ensures(ret.len() == g.vertex_count())]
pub fn vertex_invariants(g: &Graph) -> Vec<VertexInvariant> {
    let co = g.complement();
    g.vertices()
        .map(|v| {
            let mut neighbor_degrees: Vec<usize> = g.neighbors(v).map(|w| g.degree(w)).collect();
            neighbor_degrees.sort_unstable();
            let mut co_neighbor_degrees: Vec<usize> =
                co.neighbors(v).map(|w| co.degree(w)).collect();
            co_neighbor_degrees.sort_unstable();
            VertexInvariant {
                neighbor_degrees,
                co_neighbor_degrees,
                distances: distance_profile(g, v),
                co_distances: distance_profile(&co, v),
            }
        })
        .collect()
}

/// `trace(A^k)` for k = 1..=[`MOMENT_ORDER`], A the adjacency matrix.
pub fn adjacency_moments(g: &Graph) -> Vec<i128> {
    moments_of(g.vertex_count(), adjacency_matrix(g))
}

/// `trace(L^k)` for k = 1..=[`MOMENT_ORDER`], L = D - A the Laplacian.
pub fn laplacian_moments(g: &Graph) -> Vec<i128> {
    let n = g.vertex_count();
    let mut l = adjacency_matrix(g);
    for v in 0..n {
        for entry in l[v * n..(v + 1) * n].iter_mut() {
            *entry = -*entry;
        }
        l[v * n + v] = g.degree(v) as i128;
    }
    moments_of(n, l)
}

fn distance_profile(g: &Graph, v: usize) -> Vec<u32> {
    let mut dist = g.bfs_distances(v);
    dist.swap_remove(v);
    dist.sort_unstable();
    dist
}

fn adjacency_matrix(g: &Graph) -> Vec<i128> {
    let n = g.vertex_count();
    let mut a = vec![0i128; n * n];
    for (u, v) in g.edges() {
        a[u * n + v] = 1;
        a[v * n + u] = 1;
    }
    a
}

/// Traces of the first [`MOMENT_ORDER`] powers of an `n x n` matrix, by
/// repeated dense multiplication. i128 keeps walk counts exact for the graph
/// sizes this workspace targets.
fn moments_of(n: usize, base: Vec<i128>) -> Vec<i128> {
    let mut power = base.clone();
    let mut out = Vec::with_capacity(MOMENT_ORDER);
    out.push(trace(n, &power));
    for _ in 1..MOMENT_ORDER {
        power = mat_mul(n, &power, &base);
        out.push(trace(n, &power));
    }
    out
}

fn mat_mul(n: usize, a: &[i128], b: &[i128]) -> Vec<i128> {
    let mut out = vec![0i128; n * n];
    for i in 0..n {
        for k in 0..n {
            let aik = a[i * n + k];
            if aik == 0 {
                continue;
            }
            for j in 0..n {
                out[i * n + j] += aik * b[k * n + j];
            }
        }
    }
    out
}

fn trace(n: usize, m: &[i128]) -> i128 {
    (0..n).map(|i| m[i * n + i]).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gopt_common::generators::{cycle, relabel, star};

    #[test]
    fn empty_graph_yields_empty_records() {
        assert!(vertex_invariants(&Graph::new(0)).is_empty());
        assert_eq!(adjacency_moments(&Graph::new(0)), vec![0; MOMENT_ORDER]);
    }

    #[test]
    fn cycle_vertices_share_one_record() {
        let records = vertex_invariants(&cycle(5));
        assert!(records.iter().all(|r| *r == records[0]));
        assert_eq!(records[0].neighbor_degrees, vec![2, 2]);
        assert_eq!(records[0].distances, vec![1, 1, 2, 2]);
    }

    #[test]
    fn star_center_differs_from_leaves() {
        let records = vertex_invariants(&star(3));
        assert_ne!(records[0], records[1]);
        assert_eq!(records[1], records[2]);
    }

    #[test]
    fn adjacency_moments_count_closed_walks() {
        // trace(A^2) = 2|E|, trace(A^3) = 6 * (#triangles)
        let g = cycle(3);
        let moments = adjacency_moments(&g);
        assert_eq!(moments[0], 0);
        assert_eq!(moments[1], 6);
        assert_eq!(moments[2], 6);
    }

    #[test]
    fn moments_ignore_labeling() {
        let g = cycle(6);
        let shuffled = relabel(&g, &[3, 1, 4, 5, 0, 2]);
        assert_eq!(adjacency_moments(&g), adjacency_moments(&shuffled));
        assert_eq!(laplacian_moments(&g), laplacian_moments(&shuffled));
    }
}
