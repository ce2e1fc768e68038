//! Descriptive statistics for threshold samples.
//!
//! All functions reject empty input and non-finite values by returning
//! `None` instead of propagating NaN.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier-compensated summation, O(ε) error independent of n.
//! - **Variance/StdDev**: Welford's online algorithm.
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).
//! - **Confidence interval**: normal approximation `x̄ ± z·s/√n`.

/// z-score of a two-sided 95% normal confidence interval.
pub const Z_95: f64 = 1.96;

fn all_finite(data: &[f64]) -> bool {
    data.iter().all(|x| x.is_finite())
}

/// Computes the arithmetic mean using compensated summation.
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use percolation::stats::mean;
/// let v = [0.55, 0.60, 0.65];
/// assert!((mean(&v).unwrap() - 0.6).abs() < 1e-15);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !all_finite(data) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Computes the sample variance (denominator `n − 1`) with Welford's method.
///
/// # Returns
/// - `None` if `data.len() < 2` or contains NaN/Inf.
pub fn variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 || !all_finite(data) {
        return None;
    }
    let mut count = 0.0_f64;
    let mut running_mean = 0.0_f64;
    let mut m2 = 0.0_f64;
    for &x in data {
        count += 1.0;
        let delta = x - running_mean;
        running_mean += delta / count;
        m2 += delta * (x - running_mean);
    }
    Some(m2 / (count - 1.0))
}

/// Computes the sample standard deviation, `sqrt(variance(data))`.
///
/// # Examples
/// ```
/// use percolation::stats::std_dev;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// let sd = std_dev(&v).unwrap();
/// assert!((sd - 2.138089935299395).abs() < 1e-10);
/// ```
pub fn std_dev(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}

/// Returns the minimum value in the slice, or `None` if empty or NaN-bearing.
pub fn min(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.min(x))
        }
    })
}

/// Returns the maximum value in the slice, or `None` if empty or NaN-bearing.
pub fn max(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::NEG_INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.max(x))
        }
    })
}

/// Normal-approximation confidence interval for the mean of `data`.
///
/// Returns `(x̄ − z·s/√n, x̄ + z·s/√n)`, or `None` when the sample
/// standard deviation is undefined (`n < 2` or non-finite input).
///
/// # Examples
/// ```
/// use percolation::stats::{confidence_interval, Z_95};
/// let (lo, hi) = confidence_interval(&[0.5, 0.6, 0.7], Z_95).unwrap();
/// assert!(lo < 0.6 && 0.6 < hi);
/// assert!(confidence_interval(&[0.5], Z_95).is_none());
/// ```
pub fn confidence_interval(data: &[f64], z: f64) -> Option<(f64, f64)> {
    let m = mean(data)?;
    let s = std_dev(data)?;
    let half_width = z * s / (data.len() as f64).sqrt();
    Some((m - half_width, m + half_width))
}

/// Neumaier's improved Kahan summation.
///
/// Reference: Neumaier (1974), *Zeitschrift für Angewandte Mathematik und
/// Mechanik* 54(1), pp. 39–51.
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}
