//! Isomorphism engine: invariants, canonical signatures, memoization, and
//! solver-backed exact search.
//!
//! The pipeline for "is G isomorphic to H?" runs cheapest-first:
//!
//! 1. vertex/edge counts and degree sequences (O(V log V) reject),
//! 2. 128-bit graph signatures built from per-vertex invariant records and
//!    spectral moments (reject on mismatch; a match proves nothing),
//! 3. vertices partitioned into invariant classes, and the remaining
//!    candidates encoded as a 0/1 assignment-matrix program handed to an
//!    external solver. Solver infeasibility is definitive non-isomorphism.
//!
//! Every query returns `Ok(None)` for a definitive negative; only solver
//! failures are errors. The [`IsoCache`] reuses the same signatures as an
//! imperfect cache key, always disambiguating collisions with the exact
//! search.

mod check;
mod encode;
mod error;
mod invariant;
mod iso;
mod mapping;
mod memo;
mod partition;
mod signature;

pub use crate::check::*;
pub use crate::error::*;
pub use crate::invariant::*;
pub use crate::iso::*;
pub use crate::mapping::*;
pub use crate::memo::*;
pub use crate::signature::*;
