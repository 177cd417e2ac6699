//! Sample statistics over trial results.

/// Arithmetic mean, or `None` for an empty sample.
pub fn mean(samples: &[u64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let sum: f64 = samples.iter().map(|&s| s as f64).sum();
    Some(sum / samples.len() as f64)
}

/// Unbiased sample variance (divides by `len - 1`). Needs two samples.
pub fn variance(samples: &[u64]) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }
    let mu = mean(samples)?;
    let sum_sq: f64 = samples
        .iter()
        .map(|&s| {
            let d = s as f64 - mu;
            d * d
        })
        .sum();
    Some(sum_sq / (samples.len() - 1) as f64)
}

/// Sample standard deviation, the square root of [`variance`].
pub fn stddev(samples: &[u64]) -> Option<f64> {
    variance(samples).map(f64::sqrt)
}

pub fn min(samples: &[u64]) -> Option<u64> {
    samples.iter().copied().min()
}

pub fn max(samples: &[u64]) -> Option<u64> {
    samples.iter().copied().max()
}

/// Expected number of random edges before `n` sites become connected,
/// `n ln(n) / 2`.
pub fn erdos_renyi_estimate(n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    0.5 * n * n.ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sample_has_no_statistics() {
        assert_eq!(mean(&[]), None);
        assert_eq!(stddev(&[]), None);
        assert_eq!(min(&[]), None);
        assert_eq!(max(&[]), None);
    }

    #[test]
    fn single_sample_has_mean_but_no_spread() {
        assert_eq!(mean(&[7]), Some(7.0));
        assert_eq!(variance(&[7]), None);
    }

    #[test]
    fn unbiased_variance() {
        let samples = [2, 4, 4, 4, 5, 5, 7, 9];
        assert_eq!(mean(&samples), Some(5.0));
        // sum of squared deviations is 32, over n - 1 = 7
        let var = variance(&samples).unwrap();
        assert!((var - 32.0 / 7.0).abs() < 1e-12);
        assert!((stddev(&samples).unwrap() - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn min_max() {
        let samples = [5, 1, 9, 3];
        assert_eq!(min(&samples), Some(1));
        assert_eq!(max(&samples), Some(9));
    }

    #[test]
    fn estimate_matches_closed_form() {
        assert_eq!(erdos_renyi_estimate(1), 0.0);
        let e = erdos_renyi_estimate(1000);
        assert!((e - 3453.877639491).abs() < 1e-6);
    }
}
