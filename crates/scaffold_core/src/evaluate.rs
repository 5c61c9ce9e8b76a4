//! Scaffold performance metric
//!
//! ```text
//! stiffness_ratio = scaffold E / cartilage E
//! strength_ratio  = scaffold yield strength / mean cartilage yield stress
//! strain_energy   = 0.5 * stress * strain
//! performance     = stiffness_ratio * strength_ratio * strain_energy
//! ```
//!
//! The flow rate sample and its normalization reference are part of the
//! signature but do not enter the metric.

use crate::error::DomainError;
use crate::model::{CartilageReference, ScaffoldMaterialProperties};

/// Evaluate one trial against the cartilage reference
pub fn evaluate(
    scaffold: &ScaffoldMaterialProperties,
    cartilage: &CartilageReference,
    stress: f64,
    strain: f64,
    flow_rate: f64,
    max_flow_rate_mean: f64,
) -> Result<f64, DomainError> {
    let evaluator = PerformanceEvaluator::new(cartilage, max_flow_rate_mean)?;
    Ok(evaluator.evaluate(scaffold, stress, strain, flow_rate))
}

/// Performance formula with the cartilage-side quantities resolved once.
///
/// Construction fails on reference data that would divide by zero, so
/// `evaluate` itself is infallible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceEvaluator {
    cartilage_modulus: f64,
    mean_yield_stress: f64,
    max_flow_rate_mean: f64,
}

impl PerformanceEvaluator {
    pub fn new(
        cartilage: &CartilageReference,
        max_flow_rate_mean: f64,
    ) -> Result<Self, DomainError> {
        if cartilage.youngs_modulus == 0.0 {
            return Err(DomainError::ZeroCartilageModulus);
        }
        let mean_yield_stress = cartilage.mean_yield_stress();
        if mean_yield_stress == 0.0 {
            return Err(DomainError::ZeroMeanYieldStress);
        }
        Ok(Self {
            cartilage_modulus: cartilage.youngs_modulus,
            mean_yield_stress,
            max_flow_rate_mean,
        })
    }

    #[must_use]
    pub fn evaluate(
        &self,
        scaffold: &ScaffoldMaterialProperties,
        stress: f64,
        strain: f64,
        flow_rate: f64,
    ) -> f64 {
        let stiffness_ratio = scaffold.youngs_modulus / self.cartilage_modulus;
        let strength_ratio = scaffold.yield_strength / self.mean_yield_stress;
        let strain_energy = 0.5 * stress * strain;
        // Normalized flow is computed but not part of the metric.
        let _flow_factor = flow_rate / self.max_flow_rate_mean;
        stiffness_ratio * strength_ratio * strain_energy
    }

    /// `stiffness_ratio * strength_ratio` for a scaffold, the factor applied
    /// to the strain energy
    #[must_use]
    pub fn material_factor(&self, scaffold: &ScaffoldMaterialProperties) -> f64 {
        (scaffold.youngs_modulus / self.cartilage_modulus)
            * (scaffold.yield_strength / self.mean_yield_stress)
    }
}
