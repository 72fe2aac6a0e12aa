//! The percolation driver: opens sites in seeded random order and detects
//! the percolation event.
//!
//! Each simulation owns one [`Grid`] and one disjoint-set engine sized
//! `side² + 2`; the two extra elements are the virtual top and bottom
//! nodes. Opening a site unions it with its already-open orthogonal
//! neighbours, with the top node when it sits on row 0, and with the bottom
//! node when it sits on the last row. The run percolates the moment the
//! two virtual nodes share a set.

use std::num::NonZeroUsize;

use rand::{SeedableRng, rngs::SmallRng, seq::SliceRandom};
use tracing::{info, instrument};

use crate::{
    error::{PercolationError, Result},
    grid::Grid,
    union_find::{Strategy, UnionFind},
};


/// Outcome of a [`Percolation::run_to_completion`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Steps taken within the call.
    pub steps_taken: usize,
    /// Whether the grid percolates.
    pub percolated: bool,
}

/// A single percolation simulation run.
///
/// Constructed via [`crate::PercolationBuilder`]. The state machine has two
/// phases: *filling*, while sites are still being opened, and the terminal
/// *percolated* phase. Unions are never undone, so the percolated flag can
/// never revert.
///
/// # Examples
/// ```
/// use percolate_core::PercolationBuilder;
///
/// let mut sim = PercolationBuilder::new()
///     .with_side(8)
///     .with_seed(42)
///     .build()?;
/// let outcome = sim.run_to_completion()?;
/// assert!(outcome.percolated);
/// assert_eq!(outcome.steps_taken, sim.opened_count());
/// # Ok::<(), percolate_core::PercolationError>(())
/// ```
#[derive(Debug)]
pub struct Percolation {
    grid: Grid,
    engine: Box<dyn UnionFind>,
    order: Vec<usize>,
    strategy: Strategy,
    seed: u64,
    top: usize,
    bottom: usize,
    percolated: bool,
}

impl Percolation {
    /// Allocates the grid and engine and shuffles the visitation order.
    pub(crate) fn new(side: NonZeroUsize, seed: u64, strategy: Strategy) -> Self {
        let grid = Grid::new(side);
        let sites = grid.total_sites();
        let engine = strategy.build(sites + 2);

        let mut order: Vec<usize> = (0..sites).collect();
        let mut rng = SmallRng::seed_from_u64(seed);
        order.shuffle(&mut rng);

        Self {
            grid,
            engine,
            order,
            strategy,
            seed,
            top: sites,
            bottom: sites + 1,
            percolated: false,
        }
    }

    /// Opens the next site in visitation order.
    ///
    /// Returns whether the system is percolated after the step. Once the
    /// run has percolated further calls are no-ops that keep returning
    /// `Ok(true)`.
    ///
    /// # Errors
    /// Returns [`PercolationError::ExhaustedSequence`] when every site is
    /// already open and the grid never percolated. A fully opened grid
    /// always percolates, but the guard keeps a caller bug from walking
    /// past the end of the visitation order.
    pub fn step(&mut self) -> Result<bool> {
        if self.percolated {
            return Ok(true);
        }

        let id = self
            .order
            .get(self.grid.opened_count())
            .copied()
            .ok_or(PercolationError::ExhaustedSequence {
                side: self.grid.side(),
            })?;

        let (row, col) = self.grid.position(id);
        self.grid.open(id);

        let neighbours: Vec<usize> = self.grid.open_neighbours(row, col).collect();
        for neighbour in neighbours {
            self.engine.union(id, neighbour)?;
        }
        if row == 0 {
            self.engine.union(id, self.top)?;
        }
        if row == self.grid.side() - 1 {
            self.engine.union(id, self.bottom)?;
        }

        self.percolated = self.engine.connected(self.top, self.bottom)?;
        Ok(self.percolated)
    }

    /// Steps until the system percolates or the grid is fully open.
    ///
    /// Returns the number of steps taken within this call. A full grid
    /// always percolates (every column is a top-to-bottom path), so the
    /// outcome reports `percolated == true` whenever the grid has at least
    /// one site; the flag exists for callers that interleave manual steps.
    ///
    /// # Errors
    /// Propagates engine failures surfaced by [`Self::step`].
    #[instrument(
        name = "core.run_to_completion",
        err,
        skip(self),
        fields(side = self.grid.side(), seed = self.seed, strategy = ?self.strategy),
    )]
    pub fn run_to_completion(&mut self) -> Result<RunOutcome> {
        let start = self.grid.opened_count();
        while !self.percolated && self.grid.opened_count() < self.grid.total_sites() {
            self.step()?;
        }
        let outcome = RunOutcome {
            steps_taken: self.grid.opened_count() - start,
            percolated: self.percolated,
        };
        info!(
            opened = self.grid.opened_count(),
            total = self.grid.total_sites(),
            percolated = outcome.percolated,
            "run completed"
        );
        Ok(outcome)
    }

    /// Whether the virtual top and bottom nodes are connected.
    #[must_use]
    pub const fn is_percolated(&self) -> bool {
        self.percolated
    }

    /// Whether the site at `(row, col)` is open.
    ///
    /// Out-of-bounds coordinates read as closed.
    #[must_use]
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.grid.is_open(row, col)
    }

    /// Number of sites opened so far.
    #[must_use]
    pub const fn opened_count(&self) -> usize {
        self.grid.opened_count()
    }

    /// Total number of sites, `side * side`.
    #[must_use]
    pub const fn total_sites(&self) -> usize {
        self.grid.total_sites()
    }

    /// Side length N.
    #[must_use]
    pub const fn side(&self) -> usize {
        self.grid.side()
    }

    /// Strategy the engine was built with.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Seed the visitation order was shuffled with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Canonical component id of the site at `(row, col)`.
    ///
    /// Delegates to the engine's `find`; with the compressing strategy this
    /// may flatten paths but never changes set membership, so calling it
    /// every frame for display purposes is safe.
    ///
    /// # Errors
    /// Returns [`PercolationError::SiteOutOfBounds`] when `(row, col)` is
    /// outside the grid.
    pub fn component_id_of(&mut self, row: usize, col: usize) -> Result<usize> {
        let id = self.site_id(row, col)?;
        Ok(self.engine.find(id)?)
    }

    /// Whether the site at `(row, col)` is connected to the virtual top
    /// node, i.e. the set a renderer highlights as the "full" component.
    ///
    /// # Errors
    /// Returns [`PercolationError::SiteOutOfBounds`] when `(row, col)` is
    /// outside the grid.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let id = self.site_id(row, col)?;
        Ok(self.engine.connected(id, self.top)?)
    }

    fn site_id(&self, row: usize, col: usize) -> Result<usize> {
        self.grid
            .checked_index(row, col)
            .ok_or(PercolationError::SiteOutOfBounds {
                row,
                col,
                side: self.grid.side(),
            })
    }
}
