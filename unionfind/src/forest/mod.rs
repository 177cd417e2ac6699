//! Disjoint-set forests over a fixed universe of `n` sites.
//!
//! Every variant implements [`DisjointSets`]. They differ only in how
//! components are linked on `union` and whether `find` flattens the paths
//! it walks:
//!
//! | Variant | find | union |
//! |---|---|---|
//! | [`QuickFind`] | O(1) | O(n) |
//! | [`QuickUnion`] | O(n) | O(n) |
//! | [`PathCompressionUnion`] | O(log n) amortized | same |
//! | [`WeightedQuickUnion`] | O(log n) | same |
//! | [`RankedHalvingUnion`] | inverse-Ackermann amortized | same |
//! | [`HeightWeightedUnion`] | O(log n) | same |
//!
//! All mutation goes through `&mut self`; a forest shared across threads
//! needs external synchronization.

mod policy;
mod quick_find;
mod tree;

use crate::error::UnionFindError;

pub use policy::{
    ByHeight, ByRank, BySize, Compress, FullCompression, Halving, Link, NoCompression, Unweighted,
};
pub use quick_find::QuickFind;
pub use tree::Forest;

/// Parent links only; root of `p` always goes under root of `q`.
pub type QuickUnion = Forest<Unweighted, NoCompression>;
/// Quick-union whose `find` re-points every visited site at the root.
pub type PathCompressionUnion = Forest<Unweighted, FullCompression>;
/// Smaller tree (by site count) goes under the larger one.
pub type WeightedQuickUnion = Forest<BySize, NoCompression>;
/// Union by rank with path halving.
pub type RankedHalvingUnion = Forest<ByRank, Halving>;
/// Shorter tree goes under the taller one; heights are exact.
pub type HeightWeightedUnion = Forest<ByHeight, NoCompression>;

/// Common contract of every disjoint-set forest.
pub trait DisjointSets {
    /// Create a forest of `n` singleton components.
    fn with_sites(n: usize) -> Self
    where
        Self: Sized;

    /// Create a forest from an untrusted site count.
    fn try_with_sites(n: i64) -> Result<Self, UnionFindError>
    where
        Self: Sized,
    {
        let n = usize::try_from(n).map_err(|_| UnionFindError::InvalidSize(n))?;
        Ok(Self::with_sites(n))
    }

    /// Number of sites.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of components.
    fn count(&self) -> usize;

    /// Canonical representative of the component containing `site`.
    fn find(&mut self, site: usize) -> Result<usize, UnionFindError>;

    /// Merge the components of `p` and `q`.
    ///
    /// Returns `false` without touching the count when they were already
    /// connected.
    fn union(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError>;

    fn connected(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        Ok(self.find(p)? == self.find(q)?)
    }
}

/// Runtime selection of a forest strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Variant {
    QuickFind,
    QuickUnion,
    PathCompression,
    Weighted,
    WeightedRankHalving,
    WeightedHeight,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::QuickFind,
        Variant::QuickUnion,
        Variant::PathCompression,
        Variant::Weighted,
        Variant::WeightedRankHalving,
        Variant::WeightedHeight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::QuickFind => "quick-find",
            Variant::QuickUnion => "quick-union",
            Variant::PathCompression => "path-compression",
            Variant::Weighted => "weighted",
            Variant::WeightedRankHalving => "weighted-rank-halving",
            Variant::WeightedHeight => "weighted-height",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }

    /// Construct an empty forest of this variant with `n` sites.
    pub fn build(self, n: usize) -> Box<dyn DisjointSets + Send> {
        match self {
            Variant::QuickFind => Box::new(QuickFind::with_sites(n)),
            Variant::QuickUnion => Box::new(QuickUnion::with_sites(n)),
            Variant::PathCompression => Box::new(PathCompressionUnion::with_sites(n)),
            Variant::Weighted => Box::new(WeightedQuickUnion::with_sites(n)),
            Variant::WeightedRankHalving => Box::new(RankedHalvingUnion::with_sites(n)),
            Variant::WeightedHeight => Box::new(HeightWeightedUnion::with_sites(n)),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
