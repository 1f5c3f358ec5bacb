//! The optimization-solver boundary of the GOPT workspace.
//!
//! Callers describe an integer/linear program with [`Model`] — typed
//! decision variables, linear constraints, an optional objective — and hand
//! it to any [`Solve`] implementor. The answer distinguishes three worlds:
//! a feasible [`Assignment`], proven infeasibility ([`Outcome::Infeasible`],
//! ordinary data, not an error), and solver failure ([`SolverError`], which
//! always propagates to the caller unretried).
//!
//! The default backend wraps the pure-Rust `microlp` simplex /
//! branch-and-bound crate; no branch-and-bound lives in this workspace.

mod backend;
mod error;
mod model;

pub use crate::backend::*;
pub use crate::error::*;
pub use crate::model::*;
