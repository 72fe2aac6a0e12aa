//! Disjoint-set (union-find) engine behind the percolation driver.
//!
//! The engine maintains a partition of `n` integer-labelled elements into
//! disjoint sets and supports merging two sets and asking whether two
//! elements share a set. Four interchangeable strategies implement the same
//! [`UnionFind`] contract with different cost profiles; the driver is
//! written against the trait only and treats the choice as configuration.

mod quick_find;
mod quick_union;
mod weighted;

#[cfg(test)]
mod tests;

pub use quick_find::QuickFind;
pub use quick_union::QuickUnion;
pub use weighted::{Weighted, WeightedCompressed};

use crate::error::UnionFindError;

/// A partition of `n` elements into disjoint sets.
///
/// `find` takes `&mut self` so path-compressing implementations can flatten
/// the traversed path as a side effect. Compression may repoint parent
/// pointers but must never change which set an element belongs to, so
/// repeated `find` calls (for example a renderer recolouring components
/// every frame) are always safe.
pub trait UnionFind: std::fmt::Debug {
    /// Number of elements in the universe.
    fn len(&self) -> usize;

    /// Whether the universe is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of disjoint sets remaining.
    ///
    /// Starts at [`Self::len`] and decreases by exactly one per merging
    /// (non-redundant) union.
    fn count(&self) -> usize;

    /// Returns the canonical root id of the set containing `p`.
    ///
    /// # Errors
    /// Returns [`UnionFindError::OutOfRange`] when `p` is outside `[0, n)`.
    fn find(&mut self, p: usize) -> Result<usize, UnionFindError>;

    /// Merges the sets containing `p` and `q`.
    ///
    /// Returns `true` when two distinct sets were merged and `false` when
    /// `p` and `q` already shared a set (a valid no-op).
    ///
    /// # Errors
    /// Returns [`UnionFindError::OutOfRange`] when either id is outside
    /// `[0, n)`.
    fn union(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError>;

    /// Whether `p` and `q` belong to the same set.
    ///
    /// # Errors
    /// Returns [`UnionFindError::OutOfRange`] when either id is outside
    /// `[0, n)`.
    fn connected(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        Ok(self.find(p)? == self.find(q)?)
    }
}

/// Selects which [`UnionFind`] implementation a simulation uses.
///
/// The strategies are observationally equivalent: for the same sequence of
/// unions they agree on every `connected` answer and on `count`. They differ
/// only in cost: quick-find pays O(n) per union and quick-union can
/// degenerate on pathological orders, while the weighted variants bound
/// tree height.
///
/// # Examples
/// ```
/// use percolate_core::Strategy;
///
/// let mut engine = Strategy::WeightedCompressed.build(10);
/// assert_eq!(engine.count(), 10);
/// assert!(engine.union(3, 4)?);
/// assert!(engine.connected(4, 3)?);
/// # Ok::<(), percolate_core::UnionFindError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Flat labels: O(1) `find`, O(n) `union`.
    QuickFind,
    /// Unbalanced parent forest: O(n) worst-case `find` and `union`.
    QuickUnion,
    /// Size-weighted parent forest: O(log n) `find` and `union`.
    Weighted,
    /// Size-weighted forest with path compression: near-constant amortised.
    #[default]
    WeightedCompressed,
}

impl Strategy {
    /// Constructs an engine of this strategy over a universe of `n` elements.
    #[must_use]
    pub fn build(self, n: usize) -> Box<dyn UnionFind> {
        match self {
            Self::QuickFind => Box::new(QuickFind::new(n)),
            Self::QuickUnion => Box::new(QuickUnion::new(n)),
            Self::Weighted => Box::new(Weighted::new(n)),
            Self::WeightedCompressed => Box::new(WeightedCompressed::new(n)),
        }
    }

    /// All strategies, in documentation order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::QuickFind,
            Self::QuickUnion,
            Self::Weighted,
            Self::WeightedCompressed,
        ]
    }
}

/// Validates that `id` addresses an element of a universe of `len` elements.
fn check_element(id: usize, len: usize) -> Result<(), UnionFindError> {
    if id < len {
        Ok(())
    } else {
        Err(UnionFindError::OutOfRange { id, len })
    }
}
