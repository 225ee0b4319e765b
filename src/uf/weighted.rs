#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::{UnionFind, UnionFindError, check_index, filled, singletons};

/// Quick-union that keeps its trees short.
///
/// Each root tracks the size of its tree and `union` always hangs the smaller
/// tree below the larger one, which bounds the height by lg N. `find` also
/// performs path halving: every visited site is re-pointed at its grandparent,
/// flattening the tree as a side effect of searching.
///
/// `union`, `find` and `connected` are all O(lg N).
#[derive(Debug, Clone)]
pub struct WeightedQuickUnion {
    /// `parent[k]` is the parent of site `k`; roots point at themselves.
    parent: Vec<usize>,
    /// Number of sites in the tree rooted at `k`. Only meaningful for roots.
    size:   Vec<usize>,
    /// Number of components.
    count:  usize,
}

impl WeightedQuickUnion {
    /// Creates `n` sites, each a tree of size one.
    pub fn new(n: usize) -> Result<Self, UnionFindError> {
        Ok(Self {
            parent: singletons(n)?,
            size:   filled(n, 1)?,
            count:  n,
        })
    }

    /// Number of sites in the component containing `p`.
    pub fn component_size(&mut self, p: usize) -> Result<usize, UnionFindError> {
        let root = self.find(p)?;
        Ok(self.size[root])
    }
}

impl UnionFind for WeightedQuickUnion {
    fn union(&mut self, p: usize, q: usize) -> Result<(), UnionFindError> {
        check_index(p, self.parent.len())?;
        check_index(q, self.parent.len())?;

        let root_p = self.find(p)?;
        let root_q = self.find(q)?;
        if root_p == root_q {
            return Ok(());
        }

        if self.size[root_p] < self.size[root_q] {
            self.parent[root_p] = root_q;
            self.size[root_q] += self.size[root_p];
        } else {
            // ties go to p
            self.parent[root_q] = root_p;
            self.size[root_p] += self.size[root_q];
        }
        self.count -= 1;

        tracing::debug!(p, q, components = self.count, "weighted union");
        Ok(())
    }

    fn find(&mut self, p: usize) -> Result<usize, UnionFindError> {
        check_index(p, self.parent.len())?;

        let mut p = p;
        while p != self.parent[p] {
            self.parent[p] = self.parent[self.parent[p]];
            p = self.parent[p];
        }
        Ok(p)
    }

    fn count(&self) -> usize {
        self.count
    }

    fn len(&self) -> usize {
        self.parent.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_sizes_attach_q_below_p() {
        let mut uf = WeightedQuickUnion::new(2).unwrap();
        uf.union(0, 1).unwrap();
        assert_eq!(uf.parent, vec![0, 0]);
        assert_eq!(uf.component_size(1).unwrap(), 2);
    }

    #[test]
    fn smaller_tree_goes_below_larger_one() {
        let mut uf = WeightedQuickUnion::new(3).unwrap();
        uf.union(0, 1).unwrap();
        // p's tree is smaller here, so it is the one re-parented
        uf.union(2, 1).unwrap();
        assert_eq!(uf.parent[2], 0);
        assert_eq!(uf.component_size(2).unwrap(), 3);
    }

    #[test]
    fn find_halves_the_path() {
        let mut uf = WeightedQuickUnion::new(4).unwrap();
        // hand-built chain 3 -> 2 -> 1 -> 0
        uf.parent = vec![0, 0, 1, 2];
        assert_eq!(uf.find(3).unwrap(), 0);
        assert_eq!(uf.parent, vec![0, 0, 1, 1]);
    }
}
