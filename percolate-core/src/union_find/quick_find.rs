//! Quick-find strategy: every element stores its set label directly.
//!
//! `find` is a single lookup; `union` relabels every element that carried
//! the absorbed set's label, which costs O(n) per merge. Useful as the
//! simplest correct oracle for the other strategies.

use crate::error::UnionFindError;

use super::{UnionFind, check_element};

/// Eager-labelling union-find.
#[derive(Clone, Debug)]
pub struct QuickFind {
    label: Vec<usize>,
    components: usize,
}

impl QuickFind {
    /// Creates a universe of `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            label: (0..n).collect(),
            components: n,
        }
    }
}

impl UnionFind for QuickFind {
    fn len(&self) -> usize {
        self.label.len()
    }

    fn count(&self) -> usize {
        self.components
    }

    fn find(&mut self, p: usize) -> Result<usize, UnionFindError> {
        self.label
            .get(p)
            .copied()
            .ok_or(UnionFindError::OutOfRange {
                id: p,
                len: self.label.len(),
            })
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        let keep = self.find(p)?;
        let absorbed = self.find(q)?;
        if keep == absorbed {
            return Ok(false);
        }
        for slot in &mut self.label {
            if *slot == absorbed {
                *slot = keep;
            }
        }
        self.components -= 1;
        Ok(true)
    }

    fn connected(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        check_element(p, self.label.len())?;
        check_element(q, self.label.len())?;
        Ok(self.label[p] == self.label[q])
    }
}
