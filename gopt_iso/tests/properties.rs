//! Randomized invariance properties for the signature layer.

use quickcheck::{Arbitrary, Gen, quickcheck};

use gopt_common::Graph;
use gopt_common::generators::relabel;
use gopt_iso::{graph_signature, isomorphism, vertex_signatures};
use gopt_solver::MicrolpSolver;

fn random_graph(source: &mut Gen, max_vertices: usize) -> Graph {
    let n = usize::arbitrary(source) % max_vertices;
    let mut graph = Graph::new(n);
    for u in 0..n {
        for v in (u + 1)..n {
            if bool::arbitrary(source) {
                let _ = graph.add_edge(u, v);
            }
        }
    }
    graph
}

/// A random graph on at most 8 vertices together with a random relabeling
/// of it.
#[derive(Clone, Debug)]
struct RelabeledPair {
    graph: Graph,
    perm: Vec<usize>,
}

impl Arbitrary for RelabeledPair {
    fn arbitrary(source: &mut Gen) -> Self {
        let graph = random_graph(source, 8);
        let n = graph.vertex_count();
        let keys: Vec<u64> = (0..n).map(|_| u64::arbitrary(source)).collect();
        let mut perm: Vec<usize> = (0..n).collect();
        perm.sort_by_key(|&i| keys[i]);
        RelabeledPair { graph, perm }
    }
}

quickcheck! {
    fn graph_signature_survives_relabeling(pair: RelabeledPair) -> bool {
        let shuffled = relabel(&pair.graph, &pair.perm);
        graph_signature(&pair.graph) == graph_signature(&shuffled)
    }

    fn vertex_signature_multiset_survives_relabeling(pair: RelabeledPair) -> bool {
        let shuffled = relabel(&pair.graph, &pair.perm);
        let mut ours = vertex_signatures(&pair.graph);
        let mut theirs = vertex_signatures(&shuffled);
        ours.sort_unstable();
        theirs.sort_unstable();
        ours == theirs
    }

    fn signatures_respect_edge_counts(pair: RelabeledPair) -> bool {
        // dropping an edge must change the signature
        match pair.graph.edges().first() {
            None => true,
            Some(&(u, v)) => {
                let smaller = pair.graph.without_edge(u, v);
                graph_signature(&pair.graph) != graph_signature(&smaller)
            }
        }
    }

    fn verdicts_are_symmetric(pair: UnrelatedPair) -> bool {
        let solver = MicrolpSolver;
        let forward = isomorphism(&pair.a, &pair.b, &solver).unwrap().is_some();
        let backward = isomorphism(&pair.b, &pair.a, &solver).unwrap().is_some();
        forward == backward
    }
}

/// Two independently drawn random graphs on at most 6 vertices; most pairs
/// fast-reject, a few reach the solver.
#[derive(Clone, Debug)]
struct UnrelatedPair {
    a: Graph,
    b: Graph,
}

impl Arbitrary for UnrelatedPair {
    fn arbitrary(source: &mut Gen) -> Self {
        UnrelatedPair {
            a: random_graph(source, 6),
            b: random_graph(source, 6),
        }
    }
}
