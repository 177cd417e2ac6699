//! Reader for the textual connection format: a site count followed by
//! whitespace-separated `p q` pairs, in any line layout.
use std::io::BufRead;

use crate::error::{InputError, UnionFindError};

/// Whitespace-separated integer tokens with line tracking.
struct Tokens<R> {
    reader: R,
    line: usize,
    buf: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: Vec::new(),
        }
    }

    fn next_int(&mut self) -> Result<Option<i64>, InputError> {
        while self.buf.is_empty() {
            let mut text = String::new();
            if self.reader.read_line(&mut text)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            self.buf = text.split_whitespace().rev().map(str::to_owned).collect();
        }
        let Some(token) = self.buf.pop() else {
            return Ok(None);
        };
        token
            .parse()
            .map(Some)
            .map_err(|_| InputError::Parse {
                token,
                line: self.line,
            })
    }
}

/// Streams `(p, q)` pairs after the leading site count.
///
/// Negative values are rejected here; checking sites against the count is
/// left to the forest. Iteration ends after the first error.
pub struct PairReader<R> {
    tokens: Tokens<R>,
    sites: usize,
    done: bool,
}

impl<R: BufRead> PairReader<R> {
    /// Read the site count and prepare to stream pairs.
    pub fn new(reader: R) -> Result<Self, InputError> {
        let mut tokens = Tokens::new(reader);
        let n = tokens.next_int()?.ok_or(InputError::MissingSiteCount)?;
        let sites = usize::try_from(n).map_err(|_| UnionFindError::InvalidSize(n))?;
        Ok(Self {
            tokens,
            sites,
            done: false,
        })
    }

    /// Site count from the header.
    pub fn sites(&self) -> usize {
        self.sites
    }

    fn site(&self, raw: i64) -> Result<usize, InputError> {
        usize::try_from(raw).map_err(|_| {
            InputError::from(UnionFindError::InvalidSite {
                site: i128::from(raw),
                len: self.sites,
            })
        })
    }

    fn next_pair(&mut self) -> Result<Option<(usize, usize)>, InputError> {
        let Some(p) = self.tokens.next_int()? else {
            return Ok(None);
        };
        let q = self
            .tokens
            .next_int()?
            .ok_or(InputError::UnpairedSite(p))?;
        Ok(Some((self.site(p)?, self.site(q)?)))
    }
}

impl<R: BufRead> Iterator for PairReader<R> {
    type Item = Result<(usize, usize), InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.next_pair().transpose();
        if !matches!(item, Some(Ok(_))) {
            self.done = true;
        }
        item
    }
}
