//! Solver-backed combinatorial graph algorithms.
//!
//! Every function here is a mechanical transcription of its problem into a
//! [`gopt_solver::Model`] — build the constraints, call the solver, decode
//! the assignment. The one exception is the chromatic polynomial, which
//! recurses by deletion–contraction and leans on [`gopt_iso::IsoCache`] to
//! reuse results across isomorphic subgraphs.
//!
//! All entry points take the solver by reference; solver failures propagate
//! unmodified.

mod chromatic;
mod clique;
mod coloring;
mod connectivity;
mod cover;
mod domination;
mod independent_set;
mod mad;
mod matching;
mod poly;

pub use crate::chromatic::*;
pub use crate::clique::*;
pub use crate::coloring::*;
pub use crate::connectivity::*;
pub use crate::cover::*;
pub use crate::domination::*;
pub use crate::independent_set::*;
pub use crate::mad::*;
pub use crate::matching::*;
pub use crate::poly::*;
