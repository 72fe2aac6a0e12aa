//! Percolate core library.
//!
//! Simulates percolation on an N×N grid: sites are opened one at a time in a
//! seeded random order until a path of open, orthogonally adjacent sites
//! connects a virtual top node to a virtual bottom node.
//!
//! The crate is split into two strictly layered components:
//!
//! - the disjoint-set engine ([`UnionFind`] and its [`Strategy`] variants),
//!   which knows nothing about grids; and
//! - the percolation driver ([`Percolation`]), which maps the 2-D grid onto
//!   the engine, opens sites, wires adjacency unions, and detects the
//!   percolation event.
//!
//! # Determinism
//!
//! The visitation order is a Fisher–Yates shuffle driven by an explicit
//! seed. The same `(side, seed)` pair always opens the same sites in the
//! same order and percolates at the same step, regardless of the engine
//! strategy chosen. This rule is what makes runs reproducible in tests and
//! comparable across strategies in benchmarks.

mod builder;
mod error;
mod grid;
mod simulation;
mod union_find;

pub use crate::{
    builder::PercolationBuilder,
    error::{
        PercolationError, PercolationErrorCode, Result, UnionFindError, UnionFindErrorCode,
    },
    grid::Grid,
    simulation::{Percolation, RunOutcome},
    union_find::{QuickFind, QuickUnion, Strategy, UnionFind, Weighted, WeightedCompressed},
};
