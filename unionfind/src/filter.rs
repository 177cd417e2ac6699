//! Streaming removal of redundant connectivity assertions.
use log::trace;

use crate::error::UnionFindError;
use crate::forest::DisjointSets;

/// Totals after a filter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterSummary {
    /// Pairs offered to the filter.
    pub read: usize,
    /// Pairs that joined two components.
    pub accepted: usize,
    /// Components left in the forest.
    pub components: usize,
}

/// Passes through only the pairs that connect something new.
///
/// Each accepted pair is unioned before the next is examined, so a pair is
/// judged against every pair accepted before it.
pub struct ConnectivityFilter<'a, F: ?Sized> {
    forest: &'a mut F,
    read: usize,
    accepted: usize,
}

impl<'a, F: DisjointSets + ?Sized> ConnectivityFilter<'a, F> {
    pub fn new(forest: &'a mut F) -> Self {
        Self {
            forest,
            read: 0,
            accepted: 0,
        }
    }

    /// Examine one pair. Returns `true` if it was accepted (and unioned).
    pub fn offer(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        if self.forest.connected(p, q)? {
            self.read += 1;
            trace!("redundant pair {p} {q}");
            return Ok(false);
        }
        self.forest.union(p, q)?;
        self.read += 1;
        self.accepted += 1;
        Ok(true)
    }

    /// Run every pair through the filter and collect the accepted ones.
    pub fn filter<I>(&mut self, pairs: I) -> Result<Vec<(usize, usize)>, UnionFindError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut kept = Vec::new();
        for (p, q) in pairs {
            if self.offer(p, q)? {
                kept.push((p, q));
            }
        }
        Ok(kept)
    }

    /// Lazily filter a fallible pair stream, such as a
    /// [`PairReader`](crate::input::PairReader).
    ///
    /// The adapter yields accepted pairs in arrival order and stops after
    /// the first error.
    pub fn accepted<I, E>(&mut self, pairs: I) -> Accepted<'_, 'a, F, I::IntoIter>
    where
        I: IntoIterator<Item = Result<(usize, usize), E>>,
        E: From<UnionFindError>,
    {
        Accepted {
            filter: self,
            pairs: pairs.into_iter(),
            done: false,
        }
    }

    /// Current number of components in the underlying forest.
    pub fn count(&self) -> usize {
        self.forest.count()
    }

    pub fn summary(&self) -> FilterSummary {
        FilterSummary {
            read: self.read,
            accepted: self.accepted,
            components: self.forest.count(),
        }
    }
}

/// Iterator returned by [`ConnectivityFilter::accepted`].
pub struct Accepted<'f, 'a, F: ?Sized, I> {
    filter: &'f mut ConnectivityFilter<'a, F>,
    pairs: I,
    done: bool,
}

impl<F, I, E> Iterator for Accepted<'_, '_, F, I>
where
    F: DisjointSets + ?Sized,
    I: Iterator<Item = Result<(usize, usize), E>>,
    E: From<UnionFindError>,
{
    type Item = Result<(usize, usize), E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        for item in self.pairs.by_ref() {
            let (p, q) = match item {
                Ok(pair) => pair,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };
            match self.filter.offer(p, q) {
                Ok(true) => return Some(Ok((p, q))),
                Ok(false) => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            }
        }
        self.done = true;
        None
    }
}
