//! Builder for configuring percolation simulation runs.
//!
//! Collects the side length, shuffle seed, and engine strategy, validates
//! them, and constructs a [`Percolation`] ready to step.

use std::num::NonZeroUsize;

use crate::{
    Result,
    error::PercolationError,
    simulation::Percolation,
    union_find::Strategy,
};

const DEFAULT_SIDE: usize = 20;

/// Configures and constructs [`Percolation`] instances.
///
/// # Examples
/// ```
/// use percolate_core::{PercolationBuilder, Strategy};
///
/// let sim = PercolationBuilder::new()
///     .with_side(10)
///     .with_seed(7)
///     .with_strategy(Strategy::Weighted)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(sim.side(), 10);
/// assert_eq!(sim.seed(), 7);
/// assert_eq!(sim.strategy(), Strategy::Weighted);
/// ```
#[derive(Debug, Clone)]
pub struct PercolationBuilder {
    side: usize,
    seed: u64,
    strategy: Strategy,
}

impl Default for PercolationBuilder {
    fn default() -> Self {
        Self {
            side: DEFAULT_SIDE,
            seed: 0,
            strategy: Strategy::default(),
        }
    }
}

impl PercolationBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use percolate_core::{PercolationBuilder, Strategy};
    ///
    /// let builder = PercolationBuilder::new();
    /// assert_eq!(builder.side(), 20);
    /// assert_eq!(builder.seed(), 0);
    /// assert_eq!(builder.strategy(), Strategy::WeightedCompressed);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the grid side length N.
    #[must_use]
    pub const fn with_side(mut self, side: usize) -> Self {
        self.side = side;
        self
    }

    /// Returns the configured side length.
    #[must_use]
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Overrides the seed driving the visitation-order shuffle.
    ///
    /// The same `(side, seed)` pair always reproduces the same run.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Selects the disjoint-set strategy backing the engine.
    ///
    /// # Examples
    /// ```
    /// use percolate_core::{PercolationBuilder, Strategy};
    ///
    /// let builder = PercolationBuilder::new().with_strategy(Strategy::QuickFind);
    /// assert_eq!(builder.strategy(), Strategy::QuickFind);
    /// ```
    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured strategy.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Validates the configuration and constructs a [`Percolation`].
    ///
    /// # Errors
    /// Returns [`PercolationError::ZeroSide`] when the side length is zero.
    ///
    /// # Examples
    /// ```
    /// use percolate_core::{PercolationBuilder, PercolationError};
    ///
    /// let err = PercolationBuilder::new()
    ///     .with_side(0)
    ///     .build()
    ///     .expect_err("zero side must be rejected");
    /// assert!(matches!(err, PercolationError::ZeroSide));
    /// ```
    pub fn build(self) -> Result<Percolation> {
        let side = NonZeroUsize::new(self.side).ok_or(PercolationError::ZeroSide)?;
        Ok(Percolation::new(side, self.seed, self.strategy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_rejects_zero_side() {
        let err = PercolationBuilder::new()
            .with_side(0)
            .build()
            .expect_err("zero side must be rejected");
        assert_eq!(err, PercolationError::ZeroSide);
    }

    #[test]
    fn build_threads_configuration_through() {
        let sim = PercolationBuilder::new()
            .with_side(3)
            .with_seed(11)
            .with_strategy(Strategy::QuickUnion)
            .build()
            .expect("configuration is valid");
        assert_eq!(sim.side(), 3);
        assert_eq!(sim.seed(), 11);
        assert_eq!(sim.strategy(), Strategy::QuickUnion);
        assert_eq!(sim.total_sites(), 9);
        assert_eq!(sim.opened_count(), 0);
        assert!(!sim.is_percolated());
    }
}
