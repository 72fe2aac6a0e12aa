//! Quick-union strategy: an unbalanced parent forest.
//!
//! `find` chases parent pointers to a root; `union` attaches the root of
//! `p`'s tree under the root of `q`'s tree without balancing, so adversarial
//! union orders can degenerate the forest into a linked list.

use crate::error::UnionFindError;

use super::{UnionFind, check_element};

/// Unbalanced parent-forest union-find.
#[derive(Clone, Debug)]
pub struct QuickUnion {
    parent: Vec<usize>,
    components: usize,
}

impl QuickUnion {
    /// Creates a universe of `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            components: n,
        }
    }

    /// Chases parent pointers from an already validated id to its root.
    fn root(&self, mut node: usize) -> usize {
        while self.parent[node] != node {
            node = self.parent[node];
        }
        node
    }
}

impl UnionFind for QuickUnion {
    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.components
    }

    fn find(&mut self, p: usize) -> Result<usize, UnionFindError> {
        check_element(p, self.parent.len())?;
        Ok(self.root(p))
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        let moved = self.find(p)?;
        let target = self.find(q)?;
        if moved == target {
            return Ok(false);
        }
        self.parent[moved] = target;
        self.components -= 1;
        Ok(true)
    }
}
