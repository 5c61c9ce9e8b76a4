//! Simulation outputs
//!
//! `ResultTable` holds the raw per-trial performance values of one run. The
//! summary types are what the presentation layer consumes.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// One Monte Carlo draw and the performance derived from it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    pub stress: f64,
    pub strain: f64,
    pub flow_rate: f64,
    pub performance: f64,
}

/// Performance values indexed by `(group, trial)`, stored row-major.
///
/// Every row has exactly `num_trials` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    num_groups: usize,
    num_trials: usize,
    values: Vec<f64>,
}

impl ResultTable {
    pub(crate) fn zeros(num_groups: usize, num_trials: usize) -> Self {
        Self {
            num_groups,
            num_trials,
            values: vec![0.0; num_groups * num_trials],
        }
    }

    /// Build a table from explicit rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, SimulationError> {
        let num_groups = rows.len();
        let num_trials = rows.first().map_or(0, Vec::len);
        if let Some((group, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != num_trials)
        {
            return Err(SimulationError::invalid_argument(
                "rows",
                format!(
                    "row {group} has {} trials, expected {num_trials}",
                    row.len()
                ),
            ));
        }

        Ok(Self {
            num_groups,
            num_trials,
            values: rows.into_iter().flatten().collect(),
        })
    }

    #[must_use]
    pub fn num_groups(&self) -> usize {
        self.num_groups
    }

    #[must_use]
    pub fn num_trials(&self) -> usize {
        self.num_trials
    }

    #[must_use]
    pub fn get(&self, group: usize, trial: usize) -> Option<f64> {
        if group >= self.num_groups || trial >= self.num_trials {
            return None;
        }
        Some(self.values[group * self.num_trials + trial])
    }

    /// Trial vector of one group
    #[must_use]
    pub fn row(&self, group: usize) -> Option<&[f64]> {
        if group >= self.num_groups {
            return None;
        }
        let start = group * self.num_trials;
        Some(&self.values[start..start + self.num_trials])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.num_groups).filter_map(|g| self.row(g))
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }
}

/// Descriptive statistics of one group's trial vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupStatistics {
    pub group: usize,
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// 2.5th percentile
    pub ci_low: f64,
    /// 97.5th percentile
    pub ci_high: f64,
}

impl GroupStatistics {
    /// Whether the 95% interval brackets the mean
    #[must_use]
    pub fn ci_contains_mean(&self) -> bool {
        self.ci_low <= self.mean && self.mean <= self.ci_high
    }
}

/// Five-number summary used in place of a box plot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl BoxSummary {
    #[must_use]
    pub fn interquartile_range(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Result of a one-way ANOVA across porosity groups
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnovaOutcome {
    pub f_statistic: f64,
    pub p_value: f64,
    pub df_between: usize,
    pub df_within: usize,
    /// `p_value < 0.05`
    pub significant: bool,
}

/// Statistics of one porosity group, labelled for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupReport {
    pub porosity: f64,
    pub stats: GroupStatistics,
    pub box_plot: BoxSummary,
}

/// Everything a caller needs to present a Monte Carlo run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub num_trials: usize,
    /// Seed the run used; pass it back to reproduce the run
    pub seed: u64,
    pub per_group: Vec<GroupReport>,
    pub anova: AnovaOutcome,
}

impl SimulationSummary {
    /// Index of the group whose porosity is closest to `porosity`
    #[must_use]
    pub fn nearest_group(&self, porosity: f64) -> Option<usize> {
        self.per_group
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                (a.porosity - porosity)
                    .abs()
                    .total_cmp(&(b.porosity - porosity).abs())
            })
            .map(|(i, _)| i)
    }

    #[must_use]
    pub fn mean_performances(&self) -> Vec<f64> {
        self.per_group.iter().map(|g| g.stats.mean).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_layout() {
        let table = ResultTable::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();

        assert_eq!(table.num_groups(), 2);
        assert_eq!(table.num_trials(), 3);
        assert_eq!(table.get(1, 0), Some(4.0));
        assert_eq!(table.row(0), Some(&[1.0, 2.0, 3.0][..]));
        assert_eq!(table.get(2, 0), None);
        assert_eq!(table.get(0, 3), None);
        assert_eq!(table.rows().count(), 2);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = ResultTable::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidArgument { name: "rows", .. }
        ));
    }

    #[test]
    fn test_nearest_group() {
        let stats = GroupStatistics {
            group: 0,
            mean: 1.0,
            std_dev: 0.0,
            ci_low: 1.0,
            ci_high: 1.0,
        };
        let box_plot = BoxSummary {
            min: 1.0,
            q1: 1.0,
            median: 1.0,
            q3: 1.0,
            max: 1.0,
        };
        let summary = SimulationSummary {
            num_trials: 2,
            seed: 7,
            per_group: [30.0, 60.0, 90.0]
                .into_iter()
                .map(|porosity| GroupReport {
                    porosity,
                    stats,
                    box_plot,
                })
                .collect(),
            anova: AnovaOutcome {
                f_statistic: 0.0,
                p_value: 1.0,
                df_between: 2,
                df_within: 3,
                significant: false,
            },
        };

        assert_eq!(summary.nearest_group(70.0), Some(1));
        assert_eq!(summary.nearest_group(80.0), Some(2));
        assert_eq!(summary.nearest_group(0.0), Some(0));
    }
}
