//! Full runs on the chitosan preset

use super::{analytic_mean, chitosan_registry, relative_error};
use crate::config::{GroupBuilder, PorosityRegistry, RegistryBuilder, presets};
use crate::error::{DomainError, InsufficientDataError, SimulationError};
use crate::model::CartilageReference;
use crate::simulation::simulate;

#[test]
fn test_chitosan_preset_run() {
    let registry = chitosan_registry();
    let summary = simulate(&registry, 10_000, Some(42)).unwrap();

    assert_eq!(summary.num_trials, 10_000);
    assert_eq!(summary.per_group.len(), 3);

    for (group, report) in registry.groups().iter().zip(&summary.per_group) {
        let expected = analytic_mean(&registry, group);
        assert!(
            relative_error(report.stats.mean, expected) < 0.02,
            "porosity {}%: mean {:.4e}, expected {:.4e}",
            report.porosity,
            report.stats.mean,
            expected
        );
        assert!(report.stats.ci_low < report.stats.mean);
        assert!(report.stats.mean < report.stats.ci_high);
    }

    // Stiffer, stronger scaffolds at low porosity dominate the metric.
    let means = summary.mean_performances();
    assert!(means[0] > means[1] && means[1] > means[2]);
    assert!((1.0..4.0).contains(&means[0]), "30% mean {}", means[0]);
    assert!((1e-5..1e-4).contains(&means[2]), "90% mean {}", means[2]);

    assert!(summary.anova.p_value.is_finite());
    assert!((0.0..=1.0).contains(&summary.anova.p_value));
    assert!(summary.anova.f_statistic > 0.0);
    assert_eq!(summary.anova.df_between, 2);
    assert_eq!(summary.anova.df_within, 29_997);
    assert!(summary.anova.significant);
}

#[test]
fn test_zero_trials_rejected() {
    let err = simulate(&chitosan_registry(), 0, Some(1)).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::InvalidArgument {
            name: "num_trials",
            ..
        }
    ));
}

#[test]
fn test_single_group_fails_comparison() {
    let registry = RegistryBuilder::new()
        .group(GroupBuilder::at_porosity(30.0).stress(5.0, 1.0).strain(8000.0, 1500.0))
        .build()
        .unwrap();

    let err = simulate(&registry, 100, Some(1)).unwrap_err();
    assert_eq!(
        err,
        SimulationError::InsufficientData(InsufficientDataError::TooFewGroups {
            found: 1,
            required: 2
        })
    );
}

#[test]
fn test_single_trial_fails_statistics() {
    let err = simulate(&chitosan_registry(), 1, Some(1)).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::InsufficientData(InsufficientDataError::TooFewTrials { .. })
    ));
}

#[test]
fn test_degenerate_cartilage_is_a_domain_error() {
    let mut config = presets::chitosan();
    config.cartilage = CartilageReference {
        youngs_modulus: 0.0,
        ..Default::default()
    };
    let registry = PorosityRegistry::from_config(&config).unwrap();

    let err = simulate(&registry, 100, Some(1)).unwrap_err();
    assert_eq!(err, SimulationError::Domain(DomainError::ZeroCartilageModulus));
}

#[test]
fn test_summary_serializes() {
    let summary = simulate(&chitosan_registry(), 200, Some(3)).unwrap();
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["seed"], 3);
    assert_eq!(json["per_group"][1]["porosity"], 60.0);
    assert!(json["anova"]["significant"].is_boolean());

    let back: crate::model::SimulationSummary = serde_json::from_value(json).unwrap();
    assert_eq!(back, summary);
}
