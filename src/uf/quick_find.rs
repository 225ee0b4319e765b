#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::{UnionFind, UnionFindError, check_index, singletons};

/// Keeps connected sites under the same component id by rewriting ids on
/// every union.
///
/// * `find` is O(1)
/// * `union` is O(N), it scans every site
/// * processing N sites costs O(N^2)
#[derive(Debug, Clone)]
pub struct QuickFind {
    /// Indexed by site, stores the component id.
    id:    Vec<usize>,
    /// Number of components.
    count: usize,
}

impl QuickFind {
    /// Creates `n` sites, each in its own component.
    pub fn new(n: usize) -> Result<Self, UnionFindError> {
        Ok(Self {
            id:    singletons(n)?,
            count: n,
        })
    }
}

impl UnionFind for QuickFind {
    fn union(&mut self, p: usize, q: usize) -> Result<(), UnionFindError> {
        let pid = self.find(p)?;
        let qid = self.find(q)?;
        // already connected; the count only drops on a real merge
        if pid == qid {
            return Ok(());
        }

        // move the whole p group over to q's id
        for id in self.id.iter_mut().filter(|id| **id == pid) {
            *id = qid;
        }
        self.count -= 1;

        tracing::debug!(p, q, components = self.count, "quick-find union");
        Ok(())
    }

    fn find(&mut self, p: usize) -> Result<usize, UnionFindError> {
        check_index(p, self.id.len())?;
        Ok(self.id[p])
    }

    fn count(&self) -> usize {
        self.count
    }

    fn len(&self) -> usize {
        self.id.len()
    }
}
