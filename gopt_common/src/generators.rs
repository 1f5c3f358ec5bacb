//! Named graph constructors.
//!
//! These cover the standard families the algorithm crates and the test
//! suites draw from. Constructors assert on structurally meaningless
//! parameters (they are programming errors, not data errors).

use itertools::Itertools;

use crate::graph::Graph;

/// The path on `n` vertices, `0 - 1 - … - (n-1)`.
pub fn path(n: usize) -> Graph {
    let mut g = Graph::new(n);
    for v in 1..n {
        let _ = g.add_edge(v - 1, v);
    }
    g
}

/// The cycle on `n >= 3` vertices.
///
/// # Panics
/// Panics if `n < 3`.
pub fn cycle(n: usize) -> Graph {
    assert!(n >= 3, "a cycle needs at least 3 vertices");
    let mut g = path(n);
    let _ = g.add_edge(n - 1, 0);
    g
}

/// The complete graph on `n` vertices.
pub fn complete(n: usize) -> Graph {
    Graph::new(n).complement()
}

/// The complete bipartite graph with parts of size `a` and `b`.
pub fn complete_bipartite(a: usize, b: usize) -> Graph {
    let mut g = Graph::new(a + b);
    for u in 0..a {
        for v in a..(a + b) {
            let _ = g.add_edge(u, v);
        }
    }
    g
}

/// The star `K_{1,leaves}`: vertex 0 joined to `leaves` leaves.
pub fn star(leaves: usize) -> Graph {
    complete_bipartite(1, leaves)
}

/// The Kneser graph `K(n, k)`: vertices are the k-subsets of `{0, …, n-1}`
/// in lexicographic order, adjacent when disjoint.
///
/// # Panics
/// Panics if `k > n`.
pub fn kneser(n: usize, k: usize) -> Graph {
    assert!(k <= n, "subset size may not exceed the ground set");
    let subsets: Vec<Vec<usize>> = (0..n).combinations(k).collect();
    let mut g = Graph::new(subsets.len());
    for (i, a) in subsets.iter().enumerate() {
        for (j, b) in subsets.iter().enumerate().skip(i + 1) {
            if a.iter().all(|x| !b.contains(x)) {
                let _ = g.add_edge(i, j);
            }
        }
    }
    g
}

/// The Petersen graph, realized as `K(5, 2)`.
pub fn petersen() -> Graph {
    kneser(5, 2)
}

/// The Paley graph on `q` vertices: `u ~ v` iff `v - u` is a nonzero square
/// mod `q`. Self-complementary for every valid `q`.
///
/// # Panics
/// Panics unless `q` is a prime congruent to 1 mod 4.
pub fn paley(q: usize) -> Graph {
    assert!(q % 4 == 1 && is_prime(q), "Paley graphs need a prime q ≡ 1 (mod 4)");
    let residues: Vec<bool> = {
        let mut r = vec![false; q];
        for i in 1..q {
            r[(i * i) % q] = true;
        }
        r
    };
    let mut g = Graph::new(q);
    for u in 0..q {
        for v in (u + 1)..q {
            if residues[(v - u) % q] {
                let _ = g.add_edge(u, v);
            }
        }
    }
    g
}

/// The `d`-dimensional hypercube graph on `2^d` vertices.
pub fn hypercube(d: u32) -> Graph {
    let n = 1usize << d;
    let mut g = Graph::new(n);
    for u in 0..n {
        for bit in 0..d {
            let v = u ^ (1 << bit);
            if u < v {
                let _ = g.add_edge(u, v);
            }
        }
    }
    g
}

/// The line graph `L(g)`: one vertex per edge of `g` (in [`Graph::edges`]
/// order), adjacent when the underlying edges share an endpoint.
pub fn line_graph(g: &Graph) -> Graph {
    let edges = g.edges();
    let mut out = Graph::new(edges.len());
    for (i, &(a, b)) in edges.iter().enumerate() {
        for (j, &(c, d)) in edges.iter().enumerate().skip(i + 1) {
            if a == c || a == d || b == c || b == d {
                let _ = out.add_edge(i, j);
            }
        }
    }
    out
}

/// Apply a vertex relabeling: vertex `v` of `g` becomes `perm[v]`.
///
/// # Panics
/// Panics if `perm` is not a permutation of `0..g.vertex_count()`.
pub fn relabel(g: &Graph, perm: &[usize]) -> Graph {
    let n = g.vertex_count();
    assert_eq!(perm.len(), n, "relabeling must cover every vertex");
    let mut seen = vec![false; n];
    for &image in perm {
        assert!(image < n && !seen[image], "relabeling must be a permutation");
        seen[image] = true;
    }
    let mut out = Graph::new(n);
    for (u, v) in g.edges() {
        let _ = out.add_edge(perm[u], perm[v]);
    }
    out
}

/// The disjoint union of `a` and `b`, with `b`'s vertices shifted past `a`'s.
pub fn disjoint_union(a: &Graph, b: &Graph) -> Graph {
    let offset = a.vertex_count();
    let mut out = Graph::new(offset + b.vertex_count());
    for (u, v) in a.edges() {
        let _ = out.add_edge(u, v);
    }
    for (u, v) in b.edges() {
        let _ = out.add_edge(u + offset, v + offset);
    }
    out
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn petersen_is_three_regular() {
        let g = petersen();
        assert_eq!(g.vertex_count(), 10);
        assert_eq!(g.edge_count(), 15);
        assert!(g.vertices().all(|v| g.degree(v) == 3));
    }

    #[test]
    fn paley_17_is_self_complementary_by_counts() {
        let g = paley(17);
        let comp = g.complement();
        assert_eq!(g.edge_count(), comp.edge_count());
        assert_eq!(g.degree_sequence(), comp.degree_sequence());
    }

    #[test]
    fn hypercube_q3_shape() {
        let q3 = hypercube(3);
        assert_eq!(q3.vertex_count(), 8);
        assert_eq!(q3.edge_count(), 12);
        assert!(q3.is_connected());
    }

    #[test]
    fn line_graph_of_triangle_is_triangle() {
        let k3 = complete(3);
        let lg = line_graph(&k3);
        assert_eq!(lg.vertex_count(), 3);
        assert_eq!(lg.edge_count(), 3);
    }

    #[rstest]
    #[case::path(path(5), 4)]
    #[case::cycle(cycle(5), 5)]
    #[case::complete(complete(5), 10)]
    #[case::star(star(4), 4)]
    fn edge_counts(#[case] g: Graph, #[case] expected: usize) {
        assert_eq!(g.edge_count(), expected);
    }

    #[test]
    fn relabel_preserves_shape() {
        let g = cycle(5);
        let relabeled = relabel(&g, &[4, 3, 2, 1, 0]);
        assert_eq!(relabeled.edge_count(), g.edge_count());
        assert_eq!(relabeled.degree_sequence(), g.degree_sequence());
    }

    #[test]
    fn disjoint_union_offsets() {
        let two_triangles = disjoint_union(&complete(3), &complete(3));
        assert_eq!(two_triangles.vertex_count(), 6);
        assert_eq!(two_triangles.edge_count(), 6);
        assert!(!two_triangles.is_connected());
    }
}
