//! One-way ANOVA across porosity groups

use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use crate::error::{InsufficientDataError, Result, SimulationError};
use crate::model::{AnovaOutcome, ResultTable};
use crate::statistics::{MIN_TRIALS, mean};

/// p-values below this mark a significant difference between groups
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

pub const MIN_GROUPS: usize = 2;

/// Run the ANOVA over every row of the table
pub fn compare(table: &ResultTable) -> Result<AnovaOutcome> {
    let groups: Vec<&[f64]> = table.rows().collect();
    one_way_anova(&groups)
}

/// One-way ANOVA of independent samples.
///
/// With zero within-group variance the F ratio is undefined; the outcome is
/// reported as `F = inf, p = 0` when the group means differ and `F = 0, p = 1`
/// when every observation is identical.
pub fn one_way_anova(groups: &[&[f64]]) -> Result<AnovaOutcome> {
    if groups.len() < MIN_GROUPS {
        return Err(InsufficientDataError::TooFewGroups {
            found: groups.len(),
            required: MIN_GROUPS,
        }
        .into());
    }
    if let Some((group, values)) = groups
        .iter()
        .enumerate()
        .find(|(_, values)| values.len() < MIN_TRIALS)
    {
        return Err(InsufficientDataError::TooFewTrials {
            group,
            found: values.len(),
            required: MIN_TRIALS,
        }
        .into());
    }

    let k = groups.len();
    let n: usize = groups.iter().map(|g| g.len()).sum();
    let pooled: Vec<f64> = groups.iter().flat_map(|g| g.iter().copied()).collect();
    let grand_mean = mean(&pooled);

    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for values in groups {
        let group_mean = mean(values);
        ss_between += values.len() as f64 * (group_mean - grand_mean).powi(2);
        ss_within += values.iter().map(|v| (v - group_mean).powi(2)).sum::<f64>();
    }

    let df_between = k - 1;
    let df_within = n - k;
    let ms_between = ss_between / df_between as f64;
    let ms_within = ss_within / df_within as f64;

    let (f_statistic, p_value) = if ms_within > 0.0 {
        let f = ms_between / ms_within;
        let dist = FisherSnedecor::new(df_between as f64, df_within as f64).map_err(|e| {
            SimulationError::invalid_argument("groups", format!("F distribution: {e}"))
        })?;
        (f, dist.sf(f).clamp(0.0, 1.0))
    } else if ss_between > 0.0 {
        (f64::INFINITY, 0.0)
    } else {
        (0.0, 1.0)
    };

    Ok(AnovaOutcome {
        f_statistic,
        p_value,
        df_between,
        df_within,
        significant: p_value < SIGNIFICANCE_LEVEL,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_example() {
        // Three groups of five; group means 5, 7 and 9, grand mean 7.
        let a = [4.0, 5.0, 5.0, 6.0, 5.0];
        let b = [6.0, 7.0, 8.0, 7.0, 7.0];
        let c = [9.0, 8.0, 10.0, 9.0, 9.0];
        let outcome = one_way_anova(&[&a, &b, &c]).unwrap();

        // SSB = 5 * (4 + 0 + 4) = 40, SSW = 2 + 2 + 2 = 6
        // F = (40 / 2) / (6 / 12) = 40
        assert_eq!(outcome.df_between, 2);
        assert_eq!(outcome.df_within, 12);
        assert!((outcome.f_statistic - 40.0).abs() < 1e-9);
        assert!(outcome.p_value < 1e-5, "p = {}", outcome.p_value);
        assert!(outcome.significant);
    }

    #[test]
    fn test_identical_groups_not_significant() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [4.0, 3.0, 2.0, 1.0];
        let outcome = one_way_anova(&[&a, &b]).unwrap();

        assert_eq!(outcome.f_statistic, 0.0);
        assert!((outcome.p_value - 1.0).abs() < 1e-9);
        assert!(!outcome.significant);
    }

    #[test]
    fn test_moderate_f_p_value() {
        // SSB = 1.5, SSW = 4, F(1, 4) = 1.5, upper tail ~0.29
        let a = [0.0, 1.0, 2.0];
        let b = [1.0, 2.0, 3.0];
        let outcome = one_way_anova(&[&a, &b]).unwrap();
        assert!((outcome.f_statistic - 1.5).abs() < 1e-12);
        assert!(
            outcome.p_value > 0.25 && outcome.p_value < 0.33,
            "p = {}",
            outcome.p_value
        );
        assert!(!outcome.significant);
    }

    #[test]
    fn test_zero_within_variance() {
        let outcome = one_way_anova(&[&[1.0, 1.0], &[2.0, 2.0]]).unwrap();
        assert_eq!(outcome.f_statistic, f64::INFINITY);
        assert_eq!(outcome.p_value, 0.0);
        assert!(outcome.significant);

        let outcome = one_way_anova(&[&[3.0, 3.0], &[3.0, 3.0]]).unwrap();
        assert_eq!(outcome.f_statistic, 0.0);
        assert_eq!(outcome.p_value, 1.0);
    }

    #[test]
    fn test_constant_rows_with_inexact_sums() {
        let a = [0.7; 10];
        let b = [0.1; 10];
        let outcome = one_way_anova(&[&a, &b]).unwrap();
        assert_eq!(outcome.f_statistic, f64::INFINITY);
        assert_eq!(outcome.p_value, 0.0);

        let outcome = one_way_anova(&[&a, &a, &a]).unwrap();
        assert_eq!(outcome.f_statistic, 0.0);
        assert_eq!(outcome.p_value, 1.0);
        assert!(!outcome.significant);
    }

    #[test]
    fn test_single_group_rejected() {
        let table = ResultTable::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
        let err = compare(&table).unwrap_err();
        assert_eq!(
            err,
            SimulationError::InsufficientData(InsufficientDataError::TooFewGroups {
                found: 1,
                required: 2
            })
        );
    }

    #[test]
    fn test_single_trial_rejected() {
        let err = one_way_anova(&[&[1.0, 2.0], &[3.0]]).unwrap_err();
        assert_eq!(
            err,
            SimulationError::InsufficientData(InsufficientDataError::TooFewTrials {
                group: 1,
                found: 1,
                required: 2
            })
        );
    }
}
