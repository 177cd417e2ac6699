use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnionFindError {
    #[error("invalid count {0}")]
    InvalidSize(i64),

    #[error("index {site} is not between 0 and {len} (exclusive)")]
    InvalidSite { site: i128, len: usize },
}

/// Reject `site` unless it lies in `[0, len)`.
pub(crate) fn check_site(site: usize, len: usize) -> Result<(), UnionFindError> {
    if site < len {
        Ok(())
    } else {
        Err(UnionFindError::InvalidSite {
            site: site as i128,
            len,
        })
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input is empty, expected a site count")]
    MissingSiteCount,

    #[error("line {line}: expected an integer, found '{token}'")]
    Parse { token: String, line: usize },

    #[error("site {0} has no partner at end of input")]
    UnpairedSite(i64),

    #[error(transparent)]
    Forest(#[from] UnionFindError),

    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn huge_site_is_reported_unchanged() {
        let err = check_site(usize::MAX, 3).unwrap_err();
        assert_eq!(
            err,
            UnionFindError::InvalidSite {
                site: usize::MAX as i128,
                len: 3
            }
        );
        assert_eq!(
            err.to_string(),
            format!("index {} is not between 0 and 3 (exclusive)", usize::MAX)
        );
    }
}
