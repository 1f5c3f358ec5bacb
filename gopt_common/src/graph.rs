//! A simple undirected graph with dense `0..n` vertex identifiers.
//!
//! Adjacency is stored as one `BTreeSet` per vertex so that neighbor
//! iteration is deterministic regardless of insertion order. The container
//! never holds self-loops or parallel edges; derive operations (complement,
//! induced subgraph, deletion, contraction) return owned copies and leave
//! `self` untouched.

use std::collections::{BTreeSet, VecDeque};
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Sentinel distance for vertex pairs with no connecting path.
pub const UNREACHABLE: u32 = u32::MAX;

/// A simple undirected graph on vertices `0..n`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    adj: Vec<BTreeSet<usize>>,
    edge_count: usize,
}

impl Graph {
    /// An edgeless graph on `n` vertices.
    pub fn new(n: usize) -> Self {
        Graph {
            adj: vec![BTreeSet::new(); n],
            edge_count: 0,
        }
    }

    /// Build a graph on `n` vertices from an edge list.
    ///
    /// Duplicate edges coalesce; invalid endpoints or self-loops are errors.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut g = Graph::new(n);
        for &(u, v) in edges {
            g.add_edge(u, v)?;
        }
        Ok(g)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterator over all vertex identifiers.
    pub fn vertices(&self) -> Range<usize> {
        0..self.adj.len()
    }

    /// Insert the undirected edge `{u, v}`.
    ///
    /// Returns `Ok(true)` if the edge was new, `Ok(false)` if it was already
    /// present.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool, GraphError> {
        let n = self.adj.len();
        for endpoint in [u, v] {
            if endpoint >= n {
                return Err(GraphError::out_of_range(endpoint, n));
            }
        }
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if !self.adj[u].insert(v) {
            return Ok(false);
        }
        self.adj[v].insert(u);
        self.edge_count += 1;
        Ok(true)
    }

    /// Remove the edge `{u, v}` if present; returns whether it existed.
    #[contracts::debug_requires(u < self.vertex_count() && v < self.vertex_count())]
    pub fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        if self.adj[u].remove(&v) {
            self.adj[v].remove(&u);
            self.edge_count -= 1;
            true
        } else {
            false
        }
    }

    /// Adjacency test.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj.get(u).is_some_and(|nbrs| nbrs.contains(&v))
    }

    /// Degree of `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    /// Neighbors of `v` in ascending order.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj[v].iter().copied()
    }

    /// All edges as `(u, v)` pairs with `u < v`, lexicographically sorted.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::with_capacity(self.edge_count);
        for u in self.vertices() {
            for &v in self.adj[u].range((u + 1)..) {
                out.push((u, v));
            }
        }
        out
    }

    /// Degrees of all vertices, sorted ascending.
    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut degrees: Vec<usize> = self.adj.iter().map(BTreeSet::len).collect();
        degrees.sort_unstable();
        degrees
    }

    /// The complement graph on the same vertex set.
    #[contracts::debug_ensures(
        ret.edge_count() + self.edge_count()
            == self.vertex_count() * self.vertex_count().saturating_sub(1) / 2
    )]
    pub fn complement(&self) -> Graph {
        let n = self.adj.len();
        let mut out = Graph::new(n);
        for u in 0..n {
            for v in (u + 1)..n {
                if !self.adj[u].contains(&v) {
                    out.adj[u].insert(v);
                    out.adj[v].insert(u);
                    out.edge_count += 1;
                }
            }
        }
        out
    }

    /// The subgraph induced by `keep`, relabeled to `0..keep.len()` in the
    /// order given.
    ///
    /// `keep` must list distinct, in-range vertices.
    #[contracts::debug_requires(keep.iter().all(|&v| v < self.vertex_count()))]
    pub fn induced_subgraph(&self, keep: &[usize]) -> Graph {
        let mut position = vec![usize::MAX; self.adj.len()];
        for (new, &old) in keep.iter().enumerate() {
            debug_assert_eq!(position[old], usize::MAX, "duplicate vertex in induced set");
            position[old] = new;
        }
        let mut out = Graph::new(keep.len());
        for (new_u, &old_u) in keep.iter().enumerate() {
            for &old_v in &self.adj[old_u] {
                let new_v = position[old_v];
                if new_v != usize::MAX && new_u < new_v {
                    out.adj[new_u].insert(new_v);
                    out.adj[new_v].insert(new_u);
                    out.edge_count += 1;
                }
            }
        }
        out
    }

    /// A copy of the graph with the edge `{u, v}` removed.
    pub fn without_edge(&self, u: usize, v: usize) -> Graph {
        let mut out = self.clone();
        out.remove_edge(u, v);
        out
    }

    /// Contract `v` into `u`: neighbors of `v` become neighbors of `u`, the
    /// vertex `v` disappears, and the resulting self-loop and parallel edges
    /// are dropped. Vertices above `v` shift down by one.
    #[contracts::debug_requires(u < self.vertex_count() && v < self.vertex_count() && u != v)]
    #[contracts::debug_ensures(ret.vertex_count() + 1 == self.vertex_count())]
    pub fn contracted(&self, u: usize, v: usize) -> Graph {
        let n = self.adj.len();
        let relabel = |w: usize| if w > v { w - 1 } else { w };
        let merged_u = relabel(u);
        let mut out = Graph::new(n - 1);
        for a in 0..n {
            if a == v {
                continue;
            }
            for &b in self.adj[a].range((a + 1)..) {
                if b == v {
                    continue;
                }
                // ignore Result: endpoints are in range and distinct
                let _ = out.add_edge(relabel(a), relabel(b));
            }
        }
        for w in self.adj[v].iter().copied() {
            if w != u {
                let _ = out.add_edge(merged_u, relabel(w));
            }
        }
        out
    }

    /// BFS distances from `source` to every vertex; unreachable vertices get
    /// [`UNREACHABLE`].
    #[contracts::debug_requires(source < self.vertex_count())]
    pub fn bfs_distances(&self, source: usize) -> Vec<u32> {
        let mut dist = vec![UNREACHABLE; self.adj.len()];
        dist[source] = 0;
        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            for &v in &self.adj[u] {
                if dist[v] == UNREACHABLE {
                    dist[v] = dist[u] + 1;
                    queue.push_back(v);
                }
            }
        }
        dist
    }

    /// Whether the graph is connected (vacuously true below two vertices).
    pub fn is_connected(&self) -> bool {
        if self.adj.len() <= 1 {
            return true;
        }
        self.bfs_distances(0).iter().all(|&d| d != UNREACHABLE)
    }
}
