//! Per-group descriptive statistics
//!
//! Percentiles use linear interpolation between closest ranks: the value at
//! percentile `q` sits at fractional rank `(n - 1) * q / 100` of the sorted
//! sample.

use crate::error::{InsufficientDataError, Result};
use crate::model::{BoxSummary, GroupStatistics, ResultTable};

/// Minimum trials per group for any statistic
pub const MIN_TRIALS: usize = 2;

pub const CI_LOW_PERCENTILE: f64 = 2.5;
pub const CI_HIGH_PERCENTILE: f64 = 97.5;

/// Arithmetic mean with a second correction pass.
///
/// The result is clamped to the sample's range, so a constant sample has
/// exactly its value as mean. `NaN` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let n = values.len() as f64;
    let rough = values.iter().sum::<f64>() / n;
    let corrected = rough + values.iter().map(|v| v - rough).sum::<f64>() / n;

    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if lo <= hi {
        corrected.clamp(lo, hi)
    } else {
        corrected
    }
}

/// Standard deviation with divisor `n`
#[must_use]
pub fn population_std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Percentile `q` (0-100) of an ascending slice
#[must_use]
pub fn percentile_of_sorted(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let rank = (q / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            let fraction = rank - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
        }
    }
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

fn check_trials(group: usize, values: &[f64]) -> std::result::Result<(), InsufficientDataError> {
    if values.len() < MIN_TRIALS {
        return Err(InsufficientDataError::TooFewTrials {
            group,
            found: values.len(),
            required: MIN_TRIALS,
        });
    }
    Ok(())
}

/// Mean, standard deviation and 95% percentile interval of one group
pub fn group_statistics(group: usize, values: &[f64]) -> Result<GroupStatistics> {
    check_trials(group, values)?;
    let sorted = sorted_copy(values);

    let stats = GroupStatistics {
        group,
        mean: mean(values),
        std_dev: population_std_dev(values),
        ci_low: percentile_of_sorted(&sorted, CI_LOW_PERCENTILE),
        ci_high: percentile_of_sorted(&sorted, CI_HIGH_PERCENTILE),
    };

    if !stats.ci_contains_mean() {
        tracing::warn!(
            group = group,
            mean = stats.mean,
            ci_low = stats.ci_low,
            ci_high = stats.ci_high,
            "95% interval does not bracket the group mean"
        );
    }

    Ok(stats)
}

/// Statistics for every row of the table, in group order
pub fn summarize(table: &ResultTable) -> Result<Vec<GroupStatistics>> {
    table
        .rows()
        .enumerate()
        .map(|(group, row)| group_statistics(group, row))
        .collect()
}

/// Five-number summary of one group
pub fn box_summary(group: usize, values: &[f64]) -> Result<BoxSummary> {
    check_trials(group, values)?;
    let sorted = sorted_copy(values);
    Ok(BoxSummary {
        min: sorted[0],
        q1: percentile_of_sorted(&sorted, 25.0),
        median: percentile_of_sorted(&sorted, 50.0),
        q3: percentile_of_sorted(&sorted, 75.0),
        max: sorted[sorted.len() - 1],
    })
}

/// Five-number summaries for every row of the table
pub fn box_summaries(table: &ResultTable) -> Result<Vec<BoxSummary>> {
    table
        .rows()
        .enumerate()
        .map(|(group, row)| box_summary(group, row))
        .collect()
}
