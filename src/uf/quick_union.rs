#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::{UnionFind, UnionFindError, check_index, singletons};

/// Links sites into trees; two sites are connected when they share a root.
///
/// * `find` walks up to the root, O(N) in the worst case since trees can
///   degenerate into a list
/// * `union` is cheap but pays for two `find`s, O(N)
/// * processing N sites costs O(N^2)
#[derive(Debug, Clone)]
pub struct QuickUnion {
    /// `parent[k]` is the parent of site `k`; roots point at themselves.
    parent: Vec<usize>,
    /// Number of components.
    count:  usize,
}

impl QuickUnion {
    /// Creates `n` sites, each the root of its own tree.
    pub fn new(n: usize) -> Result<Self, UnionFindError> {
        Ok(Self {
            parent: singletons(n)?,
            count:  n,
        })
    }
}

impl UnionFind for QuickUnion {
    fn union(&mut self, p: usize, q: usize) -> Result<(), UnionFindError> {
        check_index(p, self.parent.len())?;
        check_index(q, self.parent.len())?;

        let root_p = self.find(p)?;
        let root_q = self.find(q)?;
        if root_p == root_q {
            return Ok(());
        }
        self.parent[root_p] = root_q;
        self.count -= 1;

        tracing::debug!(p, q, components = self.count, "quick-union union");
        Ok(())
    }

    fn find(&mut self, p: usize) -> Result<usize, UnionFindError> {
        check_index(p, self.parent.len())?;

        let mut p = p;
        while p != self.parent[p] {
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
    fn root_of_p_is_attached_below_root_of_q() {
        let mut uf = QuickUnion::new(3).unwrap();
        uf.union(0, 1).unwrap();
        uf.union(1, 2).unwrap();

        assert_eq!(uf.parent, vec![1, 2, 2]);
        assert_eq!(uf.find(0).unwrap(), 2);
    }

    #[test]
    fn failed_union_leaves_forest_untouched() {
        let mut uf = QuickUnion::new(2).unwrap();
        assert!(uf.union(0, 7).is_err());
        assert_eq!(uf.parent, vec![0, 1]);
        assert_eq!(uf.count(), 2);
    }
}
