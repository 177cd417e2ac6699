use super::DisjointSets;
use crate::error::{check_site, UnionFindError};

/// Flat forest: `id[i]` is the component identifier of site `i`.
///
/// `find` is a single lookup; `union` relabels every site of one component.
#[derive(Debug, Clone)]
pub struct QuickFind {
    id: Vec<usize>,
    count: usize,
}

impl QuickFind {
    pub fn new(n: usize) -> Self {
        Self {
            id: (0..n).collect(),
            count: n,
        }
    }
}

impl DisjointSets for QuickFind {
    fn with_sites(n: usize) -> Self {
        Self::new(n)
    }

    fn len(&self) -> usize {
        self.id.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, site: usize) -> Result<usize, UnionFindError> {
        check_site(site, self.id.len())?;
        Ok(self.id[site])
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        check_site(p, self.id.len())?;
        check_site(q, self.id.len())?;
        // Read both ids up front: relabeling overwrites id[p] mid-loop.
        let pid = self.id[p];
        let qid = self.id[q];
        if pid == qid {
            return Ok(false);
        }
        for id in self.id.iter_mut().filter(|id| **id == pid) {
            *id = qid;
        }
        self.count -= 1;
        Ok(true)
    }
}
