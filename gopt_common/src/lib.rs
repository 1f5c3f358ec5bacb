//! Shared types for the GOPT workspace.
//!
//! This crate provides the undirected-graph container and the named graph
//! constructors used across the GOPT project. Everything downstream (the
//! isomorphism engine, the solver-backed algorithms) consumes graphs through
//! the read/derive interface defined here.

mod error;
pub mod generators;
mod graph;

pub use crate::error::*;
pub use crate::graph::*;
