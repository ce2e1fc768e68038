//! # percolation
//!
//! Site percolation on an `n × n` grid and Monte Carlo estimation of its
//! percolation threshold.
//!
//! ## Modules
//!
//! - [`collections`] — Disjoint-set forest (union by rank, path compression)
//! - [`grid`] — Incremental percolation model with backwash-free fullness
//! - [`experiment`] — Threshold experiment over independent trials
//! - [`random`] — Seeded RNG, per-trial seeds, site sampling
//! - [`stats`] — Mean, standard deviation, confidence interval
//!
//! ## Example
//!
//! ```
//! use percolation::{ExperimentConfig, PercolationStats};
//!
//! let stats = PercolationStats::run(&ExperimentConfig::new(20, 50).with_seed(1)).unwrap();
//! assert!(stats.mean() > 0.4 && stats.mean() < 0.8);
//! ```

pub mod collections;
pub mod error;
pub mod experiment;
pub mod grid;
pub mod random;
pub mod stats;

pub use error::PercolationError;
pub use experiment::{
    percolate, percolate_trial, run_trial, ExperimentConfig, PercolationStats, Sampling,
};
pub use grid::PercolationGrid;
