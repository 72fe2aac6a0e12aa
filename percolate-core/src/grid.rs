//! Square grid state: the open-mask and the shared 2-D↔1-D site mapping.
//!
//! The linear id `row * side + col` is the single source of truth relating
//! grid coordinates to disjoint-set element ids. Both the driver and any
//! renderer go through [`Grid::index`] / [`Grid::position`] so the two
//! views can never diverge.

use std::num::NonZeroUsize;

/// The N×N open/closed site matrix.
///
/// Sites start closed and opening is monotonic: once a site is open it
/// never closes again within a run.
#[derive(Clone, Debug)]
pub struct Grid {
    side: NonZeroUsize,
    open: Vec<bool>,
    opened: usize,
}

impl Grid {
    /// Creates a fully closed grid of `side × side` sites.
    #[must_use]
    pub fn new(side: NonZeroUsize) -> Self {
        Self {
            side,
            open: vec![false; side.get() * side.get()],
            opened: 0,
        }
    }

    /// Side length N.
    #[must_use]
    pub const fn side(&self) -> usize {
        self.side.get()
    }

    /// Total number of sites, `side * side`.
    #[must_use]
    pub const fn total_sites(&self) -> usize {
        self.side.get() * self.side.get()
    }

    /// Number of sites opened so far.
    #[must_use]
    pub const fn opened_count(&self) -> usize {
        self.opened
    }

    /// Linear site id for in-bounds coordinates.
    ///
    /// Callers must have validated the coordinates; use
    /// [`Self::checked_index`] for untrusted input.
    #[must_use]
    pub const fn index(&self, row: usize, col: usize) -> usize {
        row * self.side.get() + col
    }

    /// Linear site id, or `None` when `(row, col)` is outside the grid.
    #[must_use]
    pub const fn checked_index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.side.get() && col < self.side.get() {
            Some(self.index(row, col))
        } else {
            None
        }
    }

    /// Inverse of [`Self::index`]: `(row, col)` for a linear site id.
    #[must_use]
    pub const fn position(&self, id: usize) -> (usize, usize) {
        (id / self.side.get(), id % self.side.get())
    }

    /// Whether the site at `(row, col)` is open.
    ///
    /// Out-of-bounds coordinates read as closed, which keeps neighbour
    /// probes and render loops branch-free.
    #[must_use]
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.checked_index(row, col)
            .and_then(|id| self.open.get(id).copied())
            .unwrap_or(false)
    }

    /// Opens the site with the given linear id.
    ///
    /// Returns `true` when the site was newly opened and `false` when it was
    /// already open (opening is idempotent and monotonic).
    pub fn open(&mut self, id: usize) -> bool {
        match self.open.get_mut(id) {
            Some(slot) if !*slot => {
                *slot = true;
                self.opened += 1;
                true
            }
            _ => false,
        }
    }

    /// Linear ids of the up-to-four orthogonal neighbours of `(row, col)`
    /// that are inside the grid and already open.
    pub(crate) fn open_neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = usize> {
        let candidates = [
            (row.checked_sub(1), Some(col)),
            (row.checked_add(1), Some(col)),
            (Some(row), col.checked_sub(1)),
            (Some(row), col.checked_add(1)),
        ];
        candidates.into_iter().filter_map(|(r, c)| {
            let (r, c) = (r?, c?);
            (self.is_open(r, c)).then(|| self.index(r, c))
        })
    }
}
