//! Benchmark support crate for percolate.
//!
//! Provides the shared parameter grid used by the Criterion benchmarks so
//! strategy comparisons run over identical grids and seeds.

use percolate_core::Strategy;

/// Grid side lengths exercised by the strategy benchmarks.
///
/// Quick-find pays O(n) per union, so the largest side stays modest enough
/// for the slowest strategy to finish in reasonable time per sample.
pub const SIDES: &[usize] = &[16, 32, 64];

/// Seed shared by every benchmarked run; keeps the percolation point, and
/// therefore the amount of work, identical across strategies.
pub const SEED: u64 = 42;

/// Benchmark label for a strategy.
#[must_use]
pub const fn strategy_label(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::QuickFind => "quick-find",
        Strategy::QuickUnion => "quick-union",
        Strategy::Weighted => "weighted",
        Strategy::WeightedCompressed => "weighted-compressed",
    }
}
