//! Random-edge connectivity trials.
//!
//! A trial draws uniformly random pairs of sites, with replacement, and
//! unions them until one component remains. Every draw counts as an edge,
//! including self-pairs and pairs that were already connected.
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "parallel")]
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

use crate::error::UnionFindError;
use crate::forest::{DisjointSets, Variant};
use crate::stats;

/// Count the random edges drawn until `forest` collapses to one component.
///
/// The forest is used as given; pass a fresh one for an independent trial.
pub fn edges_to_connect<F, R>(forest: &mut F, rng: &mut R) -> Result<u64, UnionFindError>
where
    F: DisjointSets + ?Sized,
    R: Rng,
{
    let n = forest.len();
    if n == 0 {
        return Err(UnionFindError::InvalidSize(0));
    }
    let mut edges = 0u64;
    while forest.count() > 1 {
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        forest.union(i, j)?;
        edges += 1;
    }
    Ok(edges)
}

/// Simulation configuration.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub sites: usize,
    pub trials: usize,
    /// Master seed. `None` draws one from the OS.
    pub seed: Option<u64>,
    pub variant: Variant,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sites: 1000,
            trials: 100,
            seed: None,
            variant: Variant::WeightedRankHalving,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), UnionFindError> {
        if self.sites == 0 {
            return Err(UnionFindError::InvalidSize(0));
        }
        if self.trials == 0 {
            return Err(UnionFindError::InvalidSize(0));
        }
        Ok(())
    }
}

/// Outcome of a batch of trials.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialSummary {
    pub variant: Variant,
    pub sites: usize,
    pub trials: usize,
    /// Master seed actually used; rerunning with it reproduces `edges`.
    pub seed: u64,
    /// Edge count of each trial, in trial order.
    pub edges: Vec<u64>,
    pub mean: f64,
    /// `None` when only one trial ran.
    pub stddev: Option<f64>,
    pub min: u64,
    pub max: u64,
    /// Closed-form `n ln(n) / 2` for comparison with `mean`.
    pub estimate: f64,
}

/// Run `config.trials` independent trials.
///
/// Each trial gets its own generator, seeded from a sequence drawn off the
/// master seed, so results do not depend on scheduling.
pub fn run(config: &SimulationConfig) -> Result<TrialSummary, UnionFindError> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut master = StdRng::seed_from_u64(seed);
    let trial_seeds: Vec<u64> = (0..config.trials).map(|_| master.gen()).collect();

    let run_one = |(trial, &trial_seed): (usize, &u64)| -> Result<u64, UnionFindError> {
        let mut forest = config.variant.build(config.sites);
        let mut rng = StdRng::seed_from_u64(trial_seed);
        let edges = edges_to_connect(forest.as_mut(), &mut rng)?;
        debug!("trial {trial}: {edges} edges");
        Ok(edges)
    };

    #[cfg(feature = "parallel")]
    let edges: Vec<u64> = trial_seeds
        .par_iter()
        .enumerate()
        .map(run_one)
        .collect::<Result<_, UnionFindError>>()?;

    #[cfg(not(feature = "parallel"))]
    let edges: Vec<u64> = trial_seeds
        .iter()
        .enumerate()
        .map(run_one)
        .collect::<Result<_, UnionFindError>>()?;

    Ok(TrialSummary {
        variant: config.variant,
        sites: config.sites,
        trials: config.trials,
        seed,
        mean: stats::mean(&edges).unwrap_or_default(),
        stddev: stats::stddev(&edges),
        min: stats::min(&edges).unwrap_or_default(),
        max: stats::max(&edges).unwrap_or_default(),
        estimate: stats::erdos_renyi_estimate(config.sites),
        edges,
    })
}
