//! Linking and compression strategies for [`Forest`](super::Forest).
//!
//! Policies are zero-sized; they only select the code path used by
//! `union` and `find`.

/// How two distinct roots are joined.
pub trait Link {
    /// Weight recorded for a singleton, or `None` when the policy keeps no
    /// weights.
    const SINGLETON: Option<usize>;

    /// Attach one of the roots `p` and `q` beneath the other and return the
    /// surviving root. `weight` is empty when `SINGLETON` is `None`.
    fn link(parent: &mut [usize], weight: &mut [usize], p: usize, q: usize) -> usize;
}

/// How `find` walks (and possibly rewrites) the path from a site to its root.
pub trait Compress {
    fn find(parent: &mut [usize], site: usize) -> usize;
}

/// Root of `p` becomes a child of root of `q`, whatever their shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unweighted;

impl Link for Unweighted {
    const SINGLETON: Option<usize> = None;

    fn link(parent: &mut [usize], _weight: &mut [usize], p: usize, q: usize) -> usize {
        parent[p] = q;
        q
    }
}

/// Weight is the number of sites in the tree. The smaller tree goes under
/// the larger; on a tie `q` goes under `p`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BySize;

impl Link for BySize {
    const SINGLETON: Option<usize> = Some(1);

    fn link(parent: &mut [usize], weight: &mut [usize], p: usize, q: usize) -> usize {
        if weight[p] < weight[q] {
            parent[p] = q;
            weight[q] += weight[p];
            q
        } else {
            parent[q] = p;
            weight[p] += weight[q];
            p
        }
    }
}

/// Weight is a rank, an upper bound on tree height that stays valid under
/// compression.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByRank;

impl Link for ByRank {
    const SINGLETON: Option<usize> = Some(0);

    fn link(parent: &mut [usize], weight: &mut [usize], p: usize, q: usize) -> usize {
        link_by_level(parent, weight, p, q)
    }
}

/// Weight is the exact height of the tree. Only sound without compression,
/// since flattening a path would leave the recorded height stale.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByHeight;

impl Link for ByHeight {
    const SINGLETON: Option<usize> = Some(0);

    fn link(parent: &mut [usize], weight: &mut [usize], p: usize, q: usize) -> usize {
        link_by_level(parent, weight, p, q)
    }
}

// Lower level goes under higher. A tie grows the surviving root by one,
// which is exact for heights: attaching a strictly shorter tree cannot
// raise the taller one.
fn link_by_level(parent: &mut [usize], level: &mut [usize], p: usize, q: usize) -> usize {
    if level[p] < level[q] {
        parent[p] = q;
        q
    } else if level[p] > level[q] {
        parent[q] = p;
        p
    } else {
        parent[q] = p;
        level[p] += 1;
        p
    }
}

/// Plain walk to the root; the forest is left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCompression;

impl Compress for NoCompression {
    fn find(parent: &mut [usize], mut site: usize) -> usize {
        while parent[site] != site {
            site = parent[site];
        }
        site
    }
}

/// Two passes: locate the root, then point every visited site straight at it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullCompression;

impl Compress for FullCompression {
    fn find(parent: &mut [usize], site: usize) -> usize {
        let mut root = site;
        while parent[root] != root {
            root = parent[root];
        }
        let mut cur = site;
        while cur != root {
            let next = parent[cur];
            parent[cur] = root;
            cur = next;
        }
        root
    }
}

/// Single pass: every visited site is re-pointed at its grandparent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Halving;

impl Compress for Halving {
    fn find(parent: &mut [usize], mut site: usize) -> usize {
        while parent[site] != site {
            let grandparent = parent[parent[site]];
            parent[site] = grandparent;
            site = grandparent;
        }
        site
    }
}
