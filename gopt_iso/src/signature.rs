//! 128-bit canonical signatures for vertices and graphs.
//!
//! A signature is a hash of sorted invariant data, so isomorphic graphs
//! always collide and relabeling never changes the value. The converse is
//! NOT guaranteed: distinct non-isomorphic graphs may collide, and every
//! consumer (fast-reject, memo table) treats equality as "maybe", never as
//! proof.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use gopt_common::Graph;

use crate::invariant::{adjacency_moments, laplacian_moments, vertex_invariants};

/// Whole-graph canonical signature.
///
/// Equal for isomorphic graphs; unequal values prove non-isomorphism.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphSignature(u128);

impl GraphSignature {
    /// Raw 128-bit value.
    pub fn value(self) -> u128 {
        self.0
    }
}

/// Per-vertex signatures, indexed by vertex, from the full invariant
/// records.
pub fn vertex_signatures(g: &Graph) -> Vec<u128> {
    vertex_invariants(g).iter().map(hash128).collect()
}

/// The graph signature: sorted per-vertex signatures concatenated with the
/// adjacency and Laplacian moment sequences, hashed to 128 bits.
pub fn graph_signature(g: &Graph) -> GraphSignature {
    graph_signature_from(&vertex_signatures(g), g)
}

/// [`graph_signature`] when the vertex signatures are already in hand.
pub(crate) fn graph_signature_from(vertex_sigs: &[u128], g: &Graph) -> GraphSignature {
    let mut sorted = vertex_sigs.to_vec();
    sorted.sort_unstable();
    GraphSignature(hash128(&(
        sorted,
        adjacency_moments(g),
        laplacian_moments(g),
    )))
}

/// Two domain-separated SipHash passes folded into one 128-bit value, so an
/// accidental collision needs both 64-bit halves to agree.
fn hash128<T: Hash + ?Sized>(value: &T) -> u128 {
    let mut lo = DefaultHasher::new();
    0u8.hash(&mut lo);
    value.hash(&mut lo);
    let mut hi = DefaultHasher::new();
    1u8.hash(&mut hi);
    value.hash(&mut hi);
    ((hi.finish() as u128) << 64) | (lo.finish() as u128)
}
