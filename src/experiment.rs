//! Monte Carlo estimation of the percolation threshold.
//!
//! Each trial opens sites of a fresh [`PercolationGrid`] at random until it
//! percolates and records the open fraction. After `T` trials the sample
//! mean, sample standard deviation, and a 95% confidence interval
//! `mean ± 1.96·s/√T` summarise the threshold estimate.
//!
//! Trial `i` draws from `create_rng(trial_seed(seed, i))` and owns its grid,
//! so trials are independent and the result does not depend on whether the
//! `parallel` feature runs them on several threads.

use rand::Rng;

use crate::error::PercolationError;
use crate::grid::PercolationGrid;
use crate::random::{create_rng, random_site, shuffled_indices, trial_seed};
use crate::stats;

/// How a trial chooses which site to open next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// Draw `(row, col)` uniformly and open it; already-open draws are
    /// no-ops and simply retried.
    #[default]
    Uniform,
    /// Open sites in a uniformly shuffled order, never repeating one.
    Permutation,
}

/// Parameters of a threshold experiment.
///
/// # Examples
/// ```
/// use percolation::{ExperimentConfig, Sampling};
///
/// let config = ExperimentConfig::new(20, 30)
///     .with_seed(7)
///     .with_sampling(Sampling::Permutation);
/// assert!(config.validate().is_ok());
/// assert!(ExperimentConfig::new(20, 0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Grid side length `n`.
    pub grid_size: usize,
    /// Number of independent trials `T`.
    pub trials: usize,
    /// Base seed; trial `i` uses `trial_seed(seed, i)`.
    pub seed: u64,
    /// How each trial picks sites to open.
    pub sampling: Sampling,
}

impl ExperimentConfig {
    /// Creates a config with seed 0 and [`Sampling::Uniform`].
    pub fn new(grid_size: usize, trials: usize) -> Self {
        Self {
            grid_size,
            trials,
            seed: 0,
            sampling: Sampling::default(),
        }
    }

    /// Sets the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the site sampling strategy.
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Checks `grid_size >= 1` and `trials >= 1`.
    pub fn validate(&self) -> Result<(), PercolationError> {
        if self.grid_size < 1 {
            return Err(PercolationError::InvalidArgument(format!(
                "grid size must be at least 1, got {}",
                self.grid_size
            )));
        }
        if self.trials < 1 {
            return Err(PercolationError::InvalidArgument(format!(
                "trial count must be at least 1, got {}",
                self.trials
            )));
        }
        Ok(())
    }
}

/// Runs one trial on a fresh `n × n` grid until it percolates.
///
/// Returns the fraction of open sites at the moment of percolation.
///
/// # Examples
/// ```
/// use percolation::{run_trial, Sampling};
/// use percolation::random::create_rng;
///
/// let mut rng = create_rng(1);
/// let p = run_trial(10, Sampling::Uniform, &mut rng).unwrap();
/// assert!(p > 0.0 && p <= 1.0);
/// ```
pub fn run_trial<R: Rng>(
    n: usize,
    sampling: Sampling,
    rng: &mut R,
) -> Result<f64, PercolationError> {
    let grid = percolate(n, sampling, rng)?;
    Ok(grid.number_of_open_sites() as f64 / (n * n) as f64)
}

/// Opens random sites of a fresh grid until it percolates and returns the grid.
pub fn percolate<R: Rng>(
    n: usize,
    sampling: Sampling,
    rng: &mut R,
) -> Result<PercolationGrid, PercolationError> {
    let mut grid = PercolationGrid::new(n)?;
    match sampling {
        Sampling::Uniform => {
            while !grid.percolates() {
                let (row, col) = random_site(n, rng);
                grid.open(row, col)?;
            }
        }
        Sampling::Permutation => {
            for index in shuffled_indices(n * n, rng) {
                grid.open(index / n + 1, index % n + 1)?;
                if grid.percolates() {
                    break;
                }
            }
        }
    }
    Ok(grid)
}

/// Summary of a completed threshold experiment.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    grid_size: usize,
    thresholds: Vec<f64>,
    mean: f64,
    std_dev: Option<f64>,
}

impl PercolationStats {
    /// Runs `config.trials` independent trials.
    ///
    /// # Examples
    /// ```
    /// use percolation::{ExperimentConfig, PercolationStats};
    ///
    /// let stats = PercolationStats::run(&ExperimentConfig::new(16, 20).with_seed(3)).unwrap();
    /// assert_eq!(stats.trials(), 20);
    /// let (lo, hi) = stats.confidence_interval().unwrap();
    /// assert!(lo <= stats.mean() && stats.mean() <= hi);
    /// ```
    pub fn run(config: &ExperimentConfig) -> Result<Self, PercolationError> {
        config.validate()?;
        let thresholds = run_trials(config)?;
        Self::from_thresholds(config.grid_size, thresholds)
    }

    /// Builds a summary from already-measured per-trial thresholds.
    pub fn from_thresholds(
        grid_size: usize,
        thresholds: Vec<f64>,
    ) -> Result<Self, PercolationError> {
        if grid_size < 1 {
            return Err(PercolationError::InvalidArgument(format!(
                "grid size must be at least 1, got {}",
                grid_size
            )));
        }
        let mean = stats::mean(&thresholds).ok_or_else(|| {
            PercolationError::InvalidArgument(
                "thresholds must be a non-empty list of finite values".into(),
            )
        })?;
        let std_dev = stats::std_dev(&thresholds);
        Ok(Self {
            grid_size,
            thresholds,
            mean,
            std_dev,
        })
    }

    /// Side length of the grids the trials ran on.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of trials `T`.
    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Per-trial open fractions, in trial order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation; `None` for a single trial.
    pub fn std_dev(&self) -> Option<f64> {
        self.std_dev
    }

    /// Smallest per-trial threshold.
    pub fn min(&self) -> f64 {
        stats::min(&self.thresholds).unwrap_or(self.mean)
    }

    /// Largest per-trial threshold.
    pub fn max(&self) -> f64 {
        stats::max(&self.thresholds).unwrap_or(self.mean)
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> Option<f64> {
        self.confidence_interval().map(|(lo, _)| lo)
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> Option<f64> {
        self.confidence_interval().map(|(_, hi)| hi)
    }

    /// `(mean − 1.96·s/√T, mean + 1.96·s/√T)`.
    pub fn confidence_interval(&self) -> Option<(f64, f64)> {
        stats::confidence_interval(&self.thresholds, stats::Z_95)
    }
}

/// Replays trial `index` of `config` and returns its percolated grid.
///
/// Uses the same generator as [`PercolationStats::run`], so for
/// `index < config.trials` the grid's open fraction equals
/// `thresholds()[index]`. Any larger index gives a further independent trial.
pub fn percolate_trial(
    config: &ExperimentConfig,
    index: usize,
) -> Result<PercolationGrid, PercolationError> {
    let mut rng = create_rng(trial_seed(config.seed, index));
    percolate(config.grid_size, config.sampling, &mut rng)
}

fn trial(config: &ExperimentConfig, index: usize) -> Result<f64, PercolationError> {
    let mut rng = create_rng(trial_seed(config.seed, index));
    run_trial(config.grid_size, config.sampling, &mut rng)
}

#[cfg(feature = "parallel")]
fn run_trials(config: &ExperimentConfig) -> Result<Vec<f64>, PercolationError> {
    use rayon::prelude::*;
    (0..config.trials)
        .into_par_iter()
        .map(|index| trial(config, index))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run_trials(config: &ExperimentConfig) -> Result<Vec<f64>, PercolationError> {
    (0..config.trials).map(|index| trial(config, index)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(ExperimentConfig::new(1, 1).validate().is_ok());
        assert!(matches!(
            ExperimentConfig::new(0, 5).validate(),
            Err(PercolationError::InvalidArgument(_))
        ));
        assert!(matches!(
            ExperimentConfig::new(5, 0).validate(),
            Err(PercolationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        assert!(PercolationStats::run(&ExperimentConfig::new(0, 10)).is_err());
        assert!(PercolationStats::run(&ExperimentConfig::new(10, 0)).is_err());
    }

    #[test]
    fn test_single_site_threshold_is_one() {
        let mut rng = create_rng(9);
        for sampling in [Sampling::Uniform, Sampling::Permutation] {
            assert_eq!(run_trial(1, sampling, &mut rng), Ok(1.0));
        }
    }

    #[test]
    fn test_percolate_returns_percolating_grid() {
        let mut rng = create_rng(11);
        for sampling in [Sampling::Uniform, Sampling::Permutation] {
            let grid = percolate(8, sampling, &mut rng).unwrap();
            assert!(grid.percolates());
            assert!(grid.number_of_open_sites() >= 8);
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let config = ExperimentConfig::new(10, 12).with_seed(1234);
        let a = PercolationStats::run(&config).unwrap();
        let b = PercolationStats::run(&config).unwrap();
        assert_eq!(a.thresholds(), b.thresholds());
    }

    #[test]
    fn test_matches_sequential_trials() {
        let config = ExperimentConfig::new(6, 8).with_seed(5);
        let stats = PercolationStats::run(&config).unwrap();
        let expected: Vec<f64> = (0..8).map(|i| trial(&config, i).unwrap()).collect();
        assert_eq!(stats.thresholds(), expected.as_slice());
    }

    #[test]
    fn test_percolate_trial_replays_run() {
        let config = ExperimentConfig::new(9, 5)
            .with_seed(77)
            .with_sampling(Sampling::Permutation);
        let stats = PercolationStats::run(&config).unwrap();
        for (index, &threshold) in stats.thresholds().iter().enumerate() {
            let grid = percolate_trial(&config, index).unwrap();
            assert!(grid.percolates());
            assert_eq!(grid.number_of_open_sites() as f64 / 81.0, threshold);
        }

        // The trial after the last one follows the same seed scheme.
        let extra = percolate_trial(&config, config.trials).unwrap();
        let again = percolate_trial(&config, config.trials).unwrap();
        assert_eq!(extra.to_string(), again.to_string());
    }

    #[test]
    fn test_single_trial_has_no_interval() {
        let stats = PercolationStats::run(&ExperimentConfig::new(5, 1)).unwrap();
        assert_eq!(stats.trials(), 1);
        assert_eq!(stats.std_dev(), None);
        assert_eq!(stats.confidence_lo(), None);
        assert_eq!(stats.confidence_hi(), None);
        assert_eq!(stats.min(), stats.mean());
    }

    #[test]
    fn test_from_thresholds() {
        let stats = PercolationStats::from_thresholds(10, vec![0.5, 0.6, 0.7]).unwrap();
        assert!((stats.mean() - 0.6).abs() < 1e-12);
        assert!((stats.std_dev().unwrap() - 0.1).abs() < 1e-12);
        let half = 1.96 * 0.1 / 3.0_f64.sqrt();
        assert!((stats.confidence_lo().unwrap() - (0.6 - half)).abs() < 1e-12);
        assert!((stats.confidence_hi().unwrap() - (0.6 + half)).abs() < 1e-12);
        assert_eq!(stats.min(), 0.5);
        assert_eq!(stats.max(), 0.7);
        assert!(PercolationStats::from_thresholds(10, vec![]).is_err());
        assert!(PercolationStats::from_thresholds(0, vec![0.5]).is_err());
    }

    #[test]
    fn test_threshold_estimate_near_known_value() {
        // Site percolation on the square lattice: p* ≈ 0.5927.
        for sampling in [Sampling::Uniform, Sampling::Permutation] {
            let config = ExperimentConfig::new(50, 100)
                .with_seed(2017)
                .with_sampling(sampling);
            let stats = PercolationStats::run(&config).unwrap();
            assert!(
                (stats.mean() - 0.5927).abs() < 0.02,
                "{:?}: mean {} too far from 0.5927",
                sampling,
                stats.mean()
            );
        }
    }
}
