//! Size-weighted strategies, with and without path compression.
//!
//! Both keep a parent forest and a per-root element count. `union` always
//! attaches the root of the smaller tree under the root of the larger, which
//! bounds tree height at O(log n); on equal sizes the smaller root id
//! becomes the parent so merge order stays deterministic.
//!
//! [`WeightedCompressed`] adds a second pass to `find` that repoints every
//! traversed node directly at the discovered root. Compression mutates
//! parent pointers only; set membership, `count`, and every `connected`
//! answer are unchanged by it.

use crate::error::UnionFindError;

use super::{UnionFind, check_element};

#[derive(Clone, Debug)]
struct Forest {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl Forest {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    fn root(&self, mut node: usize) -> usize {
        while self.parent[node] != node {
            node = self.parent[node];
        }
        node
    }

    /// Two-pass find: locate the root, then flatten the traversed path.
    fn root_compressing(&mut self, mut node: usize) -> usize {
        let root = self.root(node);
        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }
        root
    }

    /// Links two distinct roots, smaller tree under larger.
    fn link(&mut self, left: usize, right: usize) {
        let (parent, child) = match self.size[left].cmp(&self.size[right]) {
            std::cmp::Ordering::Greater => (left, right),
            std::cmp::Ordering::Less => (right, left),
            // Equal sizes: the smaller id wins the tie deterministically.
            std::cmp::Ordering::Equal => (left.min(right), left.max(right)),
        };
        self.parent[child] = parent;
        self.size[parent] += self.size[child];
        self.components -= 1;
    }
}

/// Size-weighted union-find without path compression.
///
/// `find` here is read-only, which makes the strategy convenient when a
/// caller wants component ids without any structural churn.
#[derive(Clone, Debug)]
pub struct Weighted {
    forest: Forest,
}

impl Weighted {
    /// Creates a universe of `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            forest: Forest::new(n),
        }
    }
}

impl UnionFind for Weighted {
    fn len(&self) -> usize {
        self.forest.parent.len()
    }

    fn count(&self) -> usize {
        self.forest.components
    }

    fn find(&mut self, p: usize) -> Result<usize, UnionFindError> {
        check_element(p, self.forest.parent.len())?;
        Ok(self.forest.root(p))
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        let left = self.find(p)?;
        let right = self.find(q)?;
        if left == right {
            return Ok(false);
        }
        self.forest.link(left, right);
        Ok(true)
    }
}

/// Size-weighted union-find with path compression.
///
/// The default strategy: amortised near-constant `find` and `union`.
#[derive(Clone, Debug)]
pub struct WeightedCompressed {
    forest: Forest,
}

impl WeightedCompressed {
    /// Creates a universe of `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            forest: Forest::new(n),
        }
    }
}

impl UnionFind for WeightedCompressed {
    fn len(&self) -> usize {
        self.forest.parent.len()
    }

    fn count(&self) -> usize {
        self.forest.components
    }

    fn find(&mut self, p: usize) -> Result<usize, UnionFindError> {
        check_element(p, self.forest.parent.len())?;
        Ok(self.forest.root_compressing(p))
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        let left = self.find(p)?;
        let right = self.find(q)?;
        if left == right {
            return Ok(false);
        }
        self.forest.link(left, right);
        Ok(true)
    }
}
