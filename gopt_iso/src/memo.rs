//! A per-artifact memo table keyed by graph signature.
//!
//! Signatures are an imperfect key: the cache stores a small
//! insertion-ordered bucket of `(graph, artifact)` pairs per signature and
//! always disambiguates with the exact isomorphism test before returning a
//! hit. A bucket scanned to exhaustion is a plain miss, never an error.
//!
//! The cache is a value owned by the caller — construct one, thread it
//! through the calls that should share results, drop or [`IsoCache::clear`]
//! it for isolation. There is no process-wide instance.

use gopt_common::Graph;
use gopt_solver::{Solve, SolverError};
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::iso::isomorphism;
use crate::signature::{GraphSignature, graph_signature};

/// Signature-keyed cache of expensive per-graph artifacts (chromatic
/// polynomials, isomorphism-class representatives, …).
#[derive(Debug, Default)]
pub struct IsoCache<T> {
    buckets: IndexMap<GraphSignature, Vec<(Graph, T)>>,
    hits: u64,
    misses: u64,
}

impl<T> IsoCache<T> {
    /// An empty cache.
    pub fn new() -> Self {
        IsoCache {
            buckets: IndexMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Look up the artifact stored for any graph isomorphic to `g`.
    ///
    /// Computes `g`'s signature, then scans that bucket in insertion order
    /// with the exact test. `Err` only on solver failure during
    /// disambiguation.
    pub fn lookup(&mut self, g: &Graph, solver: &impl Solve) -> Result<Option<&T>, SolverError> {
        let sig = graph_signature(g);
        self.lookup_keyed(sig, g, solver)
    }

    /// [`IsoCache::lookup`] with the signature already computed.
    pub fn lookup_keyed(
        &mut self,
        sig: GraphSignature,
        g: &Graph,
        solver: &impl Solve,
    ) -> Result<Option<&T>, SolverError> {
        let found = match self.buckets.get(&sig) {
            None => None,
            Some(bucket) => {
                let mut index = None;
                for (i, (stored, _)) in bucket.iter().enumerate() {
                    if isomorphism(g, stored, solver)?.is_some() {
                        index = Some(i);
                        break;
                    }
                }
                index
            }
        };
        match found {
            Some(i) => {
                self.hits += 1;
                trace!(bucket_entry = i, "cache hit");
                Ok(self
                    .buckets
                    .get(&sig)
                    .and_then(|bucket| bucket.get(i))
                    .map(|(_, artifact)| artifact))
            }
            None => {
                self.misses += 1;
                Ok(None)
            }
        }
    }

    /// Store `artifact` for `g`'s isomorphism class.
    ///
    /// Scans the bucket first and keeps the earliest entry per class:
    /// returns `Ok(false)` (and drops the new pair) when an isomorphic graph
    /// is already present, `Ok(true)` when the pair was appended.
    pub fn store(&mut self, g: Graph, artifact: T, solver: &impl Solve) -> Result<bool, SolverError> {
        let sig = graph_signature(&g);
        if let Some(bucket) = self.buckets.get(&sig) {
            for (stored, _) in bucket {
                if isomorphism(&g, stored, solver)?.is_some() {
                    trace!("store skipped: isomorphism class already cached");
                    return Ok(false);
                }
            }
        }
        self.buckets.entry(sig).or_default().push((g, artifact));
        Ok(true)
    }

    /// Drop every bucket (test isolation, memory bounds). Counters survive.
    pub fn clear(&mut self) {
        debug!(entries = self.len(), "clearing cache");
        self.buckets.clear();
    }

    /// Total stored `(graph, artifact)` pairs across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of lookups resolved by a stored entry.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that fell through.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gopt_common::generators::{cycle, path, relabel};
    use gopt_solver::MicrolpSolver;

    #[test]
    fn relabeled_queries_hit_the_same_entry() {
        let solver = MicrolpSolver;
        let mut cache: IsoCache<&'static str> = IsoCache::new();
        assert!(cache.store(cycle(5), "pentagon", &solver).unwrap());

        let shuffled = relabel(&cycle(5), &[2, 4, 1, 0, 3]);
        assert_eq!(cache.lookup(&shuffled, &solver).unwrap(), Some(&"pentagon"));
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 0);
    }

    #[test]
    fn missing_classes_are_plain_misses() {
        let solver = MicrolpSolver;
        let mut cache: IsoCache<u32> = IsoCache::new();
        cache.store(cycle(5), 7, &solver).unwrap();
        assert_eq!(cache.lookup(&path(5), &solver).unwrap(), None);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn duplicate_classes_are_not_stored_twice() {
        let solver = MicrolpSolver;
        let mut cache: IsoCache<u32> = IsoCache::new();
        assert!(cache.store(cycle(4), 1, &solver).unwrap());
        assert!(!cache.store(relabel(&cycle(4), &[3, 2, 1, 0]), 2, &solver).unwrap());
        assert_eq!(cache.len(), 1);
        // first writer wins
        assert_eq!(cache.lookup(&cycle(4), &solver).unwrap(), Some(&1));
    }

    #[test]
    fn clear_resets_contents() {
        let solver = MicrolpSolver;
        let mut cache: IsoCache<u32> = IsoCache::new();
        cache.store(cycle(4), 1, &solver).unwrap();
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
    }
}
