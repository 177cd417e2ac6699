//! Disjoint-set forests (union-find) over a fixed universe of sites, with
//! two clients: a filter that drops redundant connections from a pair
//! stream, and a simulator that measures how many random edges it takes to
//! connect every site.
pub mod error;
pub mod filter;
pub mod forest;
pub mod input;
pub mod report;
pub mod simulate;
pub mod stats;

pub use error::{InputError, UnionFindError};
pub use filter::{ConnectivityFilter, FilterSummary};
pub use forest::{
    DisjointSets, Forest, HeightWeightedUnion, PathCompressionUnion, QuickFind, QuickUnion,
    RankedHalvingUnion, Variant, WeightedQuickUnion,
};
