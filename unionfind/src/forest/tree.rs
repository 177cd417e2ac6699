use std::fmt;
use std::marker::PhantomData;

use super::policy::{BySize, Compress, Link};
use super::DisjointSets;
use crate::error::{check_site, UnionFindError};

/// Tree-linked disjoint-set forest.
///
/// `parent[i] == i` marks a root. The linking policy `L` decides which root
/// survives a union and maintains `weight`; the compression policy `C`
/// decides how `find` rewrites the path it walks.
pub struct Forest<L, C> {
    parent: Vec<usize>,
    weight: Vec<usize>,
    count: usize,
    policy: PhantomData<fn() -> (L, C)>,
}

impl<L: Link, C: Compress> Forest<L, C> {
    pub fn new(n: usize) -> Self {
        let weight = match L::SINGLETON {
            Some(w) => vec![w; n],
            None => Vec::new(),
        };
        Self {
            parent: (0..n).collect(),
            weight,
            count: n,
            policy: PhantomData,
        }
    }

    /// Immediate parent of `site`; a root is its own parent.
    pub fn parent(&self, site: usize) -> Result<usize, UnionFindError> {
        check_site(site, self.parent.len())?;
        Ok(self.parent[site])
    }

    /// Recorded weight of `site`, or `None` for unweighted linking.
    ///
    /// Only meaningful at roots.
    pub fn weight(&self, site: usize) -> Result<Option<usize>, UnionFindError> {
        check_site(site, self.parent.len())?;
        Ok(self.weight.get(site).copied())
    }

    /// Number of links between `site` and its root. Does not compress.
    pub fn depth(&self, mut site: usize) -> Result<usize, UnionFindError> {
        check_site(site, self.parent.len())?;
        let mut depth = 0;
        while self.parent[site] != site {
            site = self.parent[site];
            depth += 1;
        }
        Ok(depth)
    }
}

impl<C: Compress> Forest<BySize, C> {
    /// Number of sites in the component containing `site`.
    pub fn component_size(&mut self, site: usize) -> Result<usize, UnionFindError> {
        let root = self.find(site)?;
        Ok(self.weight[root])
    }
}

impl<L: Link, C: Compress> DisjointSets for Forest<L, C> {
    fn with_sites(n: usize) -> Self {
        Self::new(n)
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, site: usize) -> Result<usize, UnionFindError> {
        check_site(site, self.parent.len())?;
        Ok(C::find(&mut self.parent, site))
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        check_site(p, self.parent.len())?;
        check_site(q, self.parent.len())?;
        let root_p = C::find(&mut self.parent, p);
        let root_q = C::find(&mut self.parent, q);
        if root_p == root_q {
            return Ok(false);
        }
        L::link(&mut self.parent, &mut self.weight, root_p, root_q);
        self.count -= 1;
        Ok(true)
    }

    fn connected(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        check_site(p, self.parent.len())?;
        check_site(q, self.parent.len())?;
        Ok(C::find(&mut self.parent, p) == C::find(&mut self.parent, q))
    }
}

impl<L, C> Clone for Forest<L, C> {
    fn clone(&self) -> Self {
        Self {
            parent: self.parent.clone(),
            weight: self.weight.clone(),
            count: self.count,
            policy: PhantomData,
        }
    }
}

impl<L, C> fmt::Debug for Forest<L, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forest")
            .field("parent", &self.parent)
            .field("weight", &self.weight)
            .field("count", &self.count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::{
        HeightWeightedUnion, PathCompressionUnion, QuickUnion, RankedHalvingUnion,
        WeightedQuickUnion,
    };
    use super::*;

    #[test]
    fn find_initializes_self() {
        let mut uf = WeightedQuickUnion::new(5);
        assert_eq!(uf.find(3).unwrap(), 3);
    }

    #[test]
    fn union_merges_sets() {
        let mut uf = RankedHalvingUnion::new(5);
        assert!(uf.union(0, 1).unwrap());
        assert_eq!(uf.find(0).unwrap(), uf.find(1).unwrap());
        assert_eq!(uf.count(), 4);
    }

    #[test]
    fn quick_union_links_p_root_under_q_root() {
        let mut uf = QuickUnion::new(4);
        uf.union(0, 1).unwrap();
        uf.union(1, 2).unwrap();
        uf.union(2, 3).unwrap();
        // 0 -> 1 -> 2 -> 3
        assert_eq!(uf.parent(0).unwrap(), 1);
        assert_eq!(uf.parent(2).unwrap(), 3);
        assert_eq!(uf.depth(0).unwrap(), 3);
        assert_eq!(uf.find(0).unwrap(), 3);
        // find leaves the chain alone
        assert_eq!(uf.depth(0).unwrap(), 3);
    }

    #[test]
    fn path_compression_flattens_visited_path() {
        let mut uf = PathCompressionUnion::new(5);
        // Build 0 -> 1 -> 2 -> 3 -> 4 by unioning roots only.
        for i in 0..4 {
            uf.union(i, i + 1).unwrap();
        }
        assert_eq!(uf.depth(0).unwrap(), 4);
        assert_eq!(uf.find(0).unwrap(), 4);
        for site in 0..4 {
            assert_eq!(uf.parent(site).unwrap(), 4);
            assert!(uf.depth(site).unwrap() <= 1);
        }
    }

    #[test]
    fn union_weighted_larger_becomes_root() {
        let mut uf = WeightedQuickUnion::new(10);
        uf.union(0, 1).unwrap();
        uf.union(0, 2).unwrap();
        let r_large = uf.find(0).unwrap();
        uf.union(5, 0).unwrap();
        assert_eq!(uf.find(5).unwrap(), r_large);
    }

    #[test]
    fn component_size_correct() {
        let mut uf = WeightedQuickUnion::new(5);
        assert_eq!(uf.component_size(0).unwrap(), 1);
        uf.union(0, 1).unwrap();
        assert_eq!(uf.component_size(0).unwrap(), 2);
        assert_eq!(uf.component_size(1).unwrap(), 2);
        uf.union(0, 2).unwrap();
        assert_eq!(uf.component_size(0).unwrap(), 3);
        assert_eq!(uf.component_size(4).unwrap(), 1);
    }

    #[test]
    fn rank_tie_increments_and_halving_shortens() {
        let mut uf = RankedHalvingUnion::new(8);
        // Pairwise then doubling merges give a rank-3 tree.
        for (p, q) in [(0, 1), (2, 3), (4, 5), (6, 7), (0, 2), (4, 6), (0, 4)] {
            uf.union(p, q).unwrap();
        }
        let root = uf.find(0).unwrap();
        assert_eq!(root, 0);
        assert_eq!(uf.weight(root).unwrap(), Some(3));
        let before = uf.depth(7).unwrap();
        assert_eq!(before, 3);
        uf.find(7).unwrap();
        assert!(uf.depth(7).unwrap() < before);
    }

    #[test]
    fn height_is_exact() {
        let mut uf = HeightWeightedUnion::new(4);
        uf.union(0, 1).unwrap();
        assert_eq!(uf.weight(0).unwrap(), Some(1));
        // Attaching a singleton to a height-1 tree keeps height 1.
        uf.union(2, 0).unwrap();
        assert_eq!(uf.weight(0).unwrap(), Some(1));
        assert_eq!(uf.parent(2).unwrap(), 0);
        uf.union(3, 3).unwrap();
        assert_eq!(uf.weight(0).unwrap(), Some(1));
    }

    #[test]
    fn unweighted_records_no_weight() {
        let uf = QuickUnion::new(2);
        assert_eq!(uf.weight(1).unwrap(), None);
    }

    #[test]
    fn out_of_range_is_rejected_without_mutation() {
        let mut uf = PathCompressionUnion::new(3);
        uf.union(0, 1).unwrap();
        uf.union(1, 2).unwrap();
        let snapshot = format!("{uf:?}");
        assert_eq!(
            uf.find(5),
            Err(UnionFindError::InvalidSite { site: 5, len: 3 })
        );
        assert!(uf.union(0, 3).is_err());
        assert!(uf.connected(0, 9).is_err());
        assert_eq!(format!("{uf:?}"), snapshot);
        assert!(uf.parent(3).is_err());
        assert!(uf.depth(3).is_err());
    }

    #[test]
    fn largest_index_is_reported_as_given() {
        let mut uf = QuickUnion::new(3);
        assert_eq!(
            uf.find(usize::MAX),
            Err(UnionFindError::InvalidSite {
                site: usize::MAX as i128,
                len: 3
            })
        );
    }

    #[test]
    fn union_same_set_is_noop() {
        let mut uf = WeightedQuickUnion::new(3);
        uf.union(0, 1).unwrap();
        assert!(!uf.union(1, 0).unwrap());
        assert!(!uf.union(2, 2).unwrap());
        assert_eq!(uf.count(), 2);
    }
}
