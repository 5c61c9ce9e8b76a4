//! Tests that sample statistics approach their analytic values

use super::{analytic_mean, chitosan_registry, relative_error};
use crate::simulation::simulate;

#[test]
fn test_group_means_converge() {
    let registry = chitosan_registry();
    let summary = simulate(&registry, 100_000, Some(2024)).unwrap();

    for (group, report) in registry.groups().iter().zip(&summary.per_group) {
        let expected = analytic_mean(&registry, group);
        let error = relative_error(report.stats.mean, expected);
        assert!(
            error < 0.01,
            "porosity {}%: mean {:.6e}, expected {:.6e} ({:.3}% off)",
            report.porosity,
            report.stats.mean,
            expected,
            error * 100.0
        );
    }
}

#[test]
fn test_intervals_bracket_means() {
    let registry = chitosan_registry();
    let summary = simulate(&registry, 100, Some(8)).unwrap();

    for report in &summary.per_group {
        assert!(report.stats.ci_low <= report.stats.mean);
        assert!(report.stats.mean <= report.stats.ci_high);
        assert!(report.box_plot.min <= report.box_plot.q1);
        assert!(report.box_plot.q1 <= report.box_plot.median);
        assert!(report.box_plot.median <= report.box_plot.q3);
        assert!(report.box_plot.q3 <= report.box_plot.max);
    }
}
