use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;

use super::contraction::{Contraction, ContractionOutcome};
use super::multigraph::Graph;
use crate::cs::error::{Error, Result};

/// How many independent trials to run for a graph of `n` vertices.
///
/// One trial finds a minimum cut with probability at least `1 / C(n, 2)`;
/// about `n² ln n` trials push the failure probability below `1 / n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrialBudget {
    /// Exactly this many trials.
    Fixed(usize),
    /// `k · n` trials.
    PerVertex(usize),
    /// `⌈n² · ln n⌉` trials.
    QuadraticLog,
}

impl TrialBudget {
    pub fn trials_for(&self, n: usize) -> usize {
        match *self {
            TrialBudget::Fixed(trials) => trials,
            TrialBudget::PerVertex(k) => k.saturating_mul(n),
            TrialBudget::QuadraticLog => {
                if n < 2 {
                    return 1;
                }
                let n = n as f64;
                ((n * n * n.ln()).ceil() as usize).max(1)
            }
        }
    }
}

/// Configuration for [`estimate_min_cut`].
#[derive(Debug, Clone)]
pub struct KargerConfig {
    /// Trial-count policy
    pub budget: TrialBudget,
    /// Optional RNG seed for reproducible runs
    pub seed: Option<u64>,
    /// Spread trials over the rayon thread pool
    pub parallel: bool,
}

impl Default for KargerConfig {
    fn default() -> Self {
        Self {
            budget: TrialBudget::PerVertex(50),
            seed: None,
            parallel: false,
        }
    }
}

/// Smallest cut seen over a batch of trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinCutEstimate {
    /// Minimum cut value observed
    pub cut: usize,
    /// Number of trials run
    pub trials: usize,
    /// Number of trials that reported `cut`
    pub hits: usize,
}

impl MinCutEstimate {
    fn empty() -> Self {
        Self {
            cut: usize::MAX,
            trials: 0,
            hits: 0,
        }
    }

    fn single(cut: usize) -> Self {
        Self {
            cut,
            trials: 1,
            hits: 1,
        }
    }

    /// Combines two partial results; associative and commutative.
    fn merge(self, other: Self) -> Self {
        let trials = self.trials + other.trials;
        match self.cut.cmp(&other.cut) {
            std::cmp::Ordering::Less => Self { trials, ..self },
            std::cmp::Ordering::Greater => Self { trials, ..other },
            std::cmp::Ordering::Equal => Self {
                cut: self.cut,
                trials,
                hits: self.hits + other.hits,
            },
        }
    }
}

fn validate(graph: &Graph, trials: usize) -> Result<()> {
    if trials < 1 {
        return Err(Error::InvalidTrialCount(trials));
    }
    if graph.vertex_count() < 2 {
        return Err(Error::TooFewVertices(graph.vertex_count()));
    }
    Ok(())
}

/// Runs one contraction trial on a fresh copy of `graph`.
pub fn run_trial<R: Rng + ?Sized>(graph: &Graph, rng: &mut R) -> Result<ContractionOutcome> {
    let working = graph.try_clone()?;
    Ok(Contraction::new(working).run(rng))
}

fn run_sequential<R: Rng + ?Sized>(
    graph: &Graph,
    trials: usize,
    rng: &mut R,
) -> Result<MinCutEstimate> {
    let mut best = MinCutEstimate::empty();
    for trial in 0..trials {
        let outcome = run_trial(graph, rng)?;
        trace!("trial {} found cut {}", trial, outcome.cut);
        best = best.merge(MinCutEstimate::single(outcome.cut));
    }
    Ok(best)
}

fn run_parallel(graph: &Graph, trials: usize, seed: u64) -> Result<MinCutEstimate> {
    (0..trials)
        .into_par_iter()
        .map(|trial| -> Result<MinCutEstimate> {
            // One ChaCha stream per trial keeps results independent of scheduling.
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            rng.set_stream(trial as u64);
            let outcome = run_trial(graph, &mut rng)?;
            trace!("trial {} found cut {}", trial, outcome.cut);
            Ok(MinCutEstimate::single(outcome.cut))
        })
        .try_reduce(MinCutEstimate::empty, |a, b| Ok(a.merge(b)))
}

/// Estimates the global minimum cut of `graph` with Karger's algorithm.
///
/// # Arguments
/// - `graph`: The graph; it is never modified.
/// - `trials`: Number of independent contraction trials (at least 1).
/// - `rng`: Randomness source shared by all trials, in order.
///
/// # Returns
/// The smallest cut value found. It is always the size of a real cut, so it
/// is never below the true minimum.
pub fn compute_approx_min_cut<R: Rng + ?Sized>(
    graph: &Graph,
    trials: usize,
    rng: &mut R,
) -> Result<usize> {
    validate(graph, trials)?;
    debug!(
        "running {} trials on {} vertices and {} edges",
        trials,
        graph.vertex_count(),
        graph.edge_count()
    );
    let estimate = run_sequential(graph, trials, rng)?;
    debug!("minimum cut {} seen in {} trials", estimate.cut, estimate.hits);
    Ok(estimate.cut)
}

/// Same as [`compute_approx_min_cut`], with trials spread over the rayon
/// thread pool. The result depends only on `seed` and `trials`.
pub fn compute_approx_min_cut_parallel(graph: &Graph, trials: usize, seed: u64) -> Result<usize> {
    validate(graph, trials)?;
    debug!(
        "running {} parallel trials on {} vertices with seed {}",
        trials,
        graph.vertex_count(),
        seed
    );
    Ok(run_parallel(graph, trials, seed)?.cut)
}

/// Estimates the minimum cut using the trial budget, seed and execution
/// mode from `config`.
pub fn estimate_min_cut(graph: &Graph, config: &KargerConfig) -> Result<MinCutEstimate> {
    let trials = config.budget.trials_for(graph.vertex_count());
    validate(graph, trials)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    debug!(
        "estimating min cut: {} trials ({:?}), seed {}, parallel {}",
        trials, config.budget, seed, config.parallel
    );

    let estimate = if config.parallel {
        run_parallel(graph, trials, seed)?
    } else {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        run_sequential(graph, trials, &mut rng)?
    };
    debug!(
        "minimum cut {} seen in {} of {} trials",
        estimate.cut, estimate.hits, estimate.trials
    );
    Ok(estimate)
}
