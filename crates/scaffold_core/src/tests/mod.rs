//! Integration tests for the scaffold Monte Carlo model
//!
//! Tests are organized by topic:
//! - `determinism` - Seeding, execution order and reproducibility
//! - `zero_variance` - Degenerate distributions collapse to fixed values
//! - `convergence` - Sample means against the analytic expectation
//! - `end_to_end` - Full runs on the chitosan preset

mod convergence;
mod end_to_end;

use crate::config::{PorosityRegistry, presets};
use crate::evaluate::PerformanceEvaluator;
use crate::model::PorosityGroup;

pub(crate) fn chitosan_registry() -> PorosityRegistry {
    PorosityRegistry::from_config(&presets::chitosan()).unwrap()
}

/// Expected performance of a group. Stress and strain are independent, so
/// E[stress * strain] = E[stress] * E[strain].
pub(crate) fn analytic_mean(registry: &PorosityRegistry, group: &PorosityGroup) -> f64 {
    let evaluator =
        PerformanceEvaluator::new(registry.cartilage(), registry.max_flow_rate_mean()).unwrap();
    evaluator.material_factor(&group.material) * 0.5 * group.stress.mean * group.strain.mean
}

pub(crate) fn relative_error(actual: f64, expected: f64) -> f64 {
    ((actual - expected) / expected).abs()
}
