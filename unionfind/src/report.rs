//! Side-by-side replay of one pair list through several forest variants.
use std::time::{Duration, Instant};

use log::debug;

use crate::error::UnionFindError;
use crate::filter::ConnectivityFilter;
use crate::forest::Variant;

/// Result of replaying the pairs through one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantReport {
    pub variant: Variant,
    /// Pairs the filter kept.
    pub accepted: usize,
    /// Components left after the last pair.
    pub components: usize,
    /// Wall time for construction plus replay.
    pub elapsed_us: u64,
}

/// Reports for every compared variant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompareReport {
    pub sites: usize,
    pub pairs: usize,
    pub variants: Vec<VariantReport>,
    /// Every variant kept the same pairs and ended with the same count.
    pub agreed: bool,
}

/// Replay `pairs` on a fresh forest of each variant behind a
/// [`ConnectivityFilter`].
pub fn compare(
    sites: usize,
    pairs: &[(usize, usize)],
    variants: &[Variant],
) -> Result<CompareReport, UnionFindError> {
    let mut reports = Vec::with_capacity(variants.len());
    let mut baseline: Option<(Vec<(usize, usize)>, usize)> = None;
    let mut agreed = true;

    for &variant in variants {
        let start = Instant::now();
        let mut forest = variant.build(sites);
        let mut filter = ConnectivityFilter::new(forest.as_mut());
        let kept = filter.filter(pairs.iter().copied())?;
        let components = filter.count();
        let elapsed = start.elapsed();
        debug!(
            "{variant}: kept {} of {} pairs in {:?}",
            kept.len(),
            pairs.len(),
            elapsed
        );

        reports.push(VariantReport {
            variant,
            accepted: kept.len(),
            components,
            elapsed_us: micros(elapsed),
        });

        match &baseline {
            Some((base_kept, base_components)) => {
                if *base_kept != kept || *base_components != components {
                    agreed = false;
                }
            }
            None => baseline = Some((kept, components)),
        }
    }

    Ok(CompareReport {
        sites,
        pairs: pairs.len(),
        variants: reports,
        agreed,
    })
}

fn micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

/// Print a terminal table summarizing a comparison.
pub fn print_terminal(report: &CompareReport) {
    println!(
        "{:<24} {:>10} {:>10} {:>12}",
        "Variant", "Accepted", "Components", "Time (ms)"
    );
    println!("{}", "-".repeat(59));

    for v in &report.variants {
        println!(
            "{:<24} {:>10} {:>10} {:>12.3}",
            v.variant.name(),
            v.accepted,
            v.components,
            v.elapsed_us as f64 / 1000.0,
        );
    }

    println!("{}", "-".repeat(59));
    println!(
        "Sites: {} | Pairs: {} | Variants agree: {}",
        report.sites,
        report.pairs,
        if report.agreed { "yes" } else { "NO" }
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_variants_agree_on_tiny_input() {
        let pairs = [
            (4, 3),
            (3, 8),
            (6, 5),
            (9, 4),
            (2, 1),
            (8, 9),
            (5, 0),
            (7, 2),
            (6, 1),
            (1, 0),
            (6, 7),
        ];
        let report = compare(10, &pairs, &Variant::ALL).unwrap();
        assert!(report.agreed);
        assert_eq!(report.pairs, 11);
        assert_eq!(report.variants.len(), 6);
        for v in &report.variants {
            assert_eq!(v.accepted, 8);
            assert_eq!(v.components, 2);
        }
    }

    #[test]
    fn invalid_site_aborts_comparison() {
        let err = compare(3, &[(0, 1), (1, 3)], &[Variant::QuickFind]).unwrap_err();
        assert_eq!(err, UnionFindError::InvalidSite { site: 3, len: 3 });
    }

    #[test]
    fn elapsed_saturates_instead_of_wrapping() {
        assert_eq!(micros(Duration::from_micros(1500)), 1500);
        assert_eq!(micros(Duration::MAX), u64::MAX);
    }

    #[test]
    fn no_variants_is_trivially_agreed() {
        let report = compare(3, &[(0, 1)], &[]).unwrap();
        assert!(report.agreed);
        assert!(report.variants.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_output_parses() {
        let report = compare(2, &[(0, 1)], &[Variant::Weighted]).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["variants"][0]["variant"], "weighted");
        assert_eq!(parsed["agreed"], true);
    }
}
