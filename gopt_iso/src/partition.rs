//! Invariant-class partitioning of vertex sets.
//!
//! Vertices sharing a per-vertex signature form a class; any isomorphism
//! must map classes onto classes, so mismatched partitions reject a pair
//! without a solver call, and matched partitions shrink the assignment
//! search space.

use std::collections::BTreeMap;

use itertools::Itertools;

/// Vertices grouped by per-vertex signature, deterministically ordered by
/// signature value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Classes {
    by_signature: BTreeMap<u128, Vec<usize>>,
}

impl Classes {
    /// Group `0..sigs.len()` by signature.
    pub(crate) fn by_signature(sigs: &[u128]) -> Self {
        let mut by_signature: BTreeMap<u128, Vec<usize>> = BTreeMap::new();
        for (v, &sig) in sigs.iter().enumerate() {
            by_signature.entry(sig).or_default().push(v);
        }
        Classes { by_signature }
    }

    /// Whether `other` has exactly the same signatures with the same class
    /// sizes — the precondition for a class-to-class assignment.
    pub(crate) fn compatible_with(&self, other: &Classes) -> bool {
        self.by_signature.len() == other.by_signature.len()
            && self
                .by_signature
                .iter()
                .zip(other.by_signature.iter())
                .all(|((sa, va), (sb, vb))| sa == sb && va.len() == vb.len())
    }

    /// Iterate classes as `(signature, members)`.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&u128, &Vec<usize>)> {
        self.by_signature.iter()
    }

    /// Class sizes in descending order (log/debug friendly).
    pub(crate) fn sizes(&self) -> Vec<usize> {
        self.by_signature
            .values()
            .map(Vec::len)
            .sorted_unstable()
            .rev()
            .collect()
    }

    /// Number of classes.
    pub(crate) fn len(&self) -> usize {
        self.by_signature.len()
    }
}
