use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::model::ScaffoldMaterialProperties;

/// Mean and standard deviation of a normally distributed simulation output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionParams {
    pub mean: f64,
    pub std_dev: f64,
}

impl DistributionParams {
    #[must_use]
    pub const fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    /// Degenerate distribution that always yields `mean`
    #[must_use]
    pub const fn fixed(mean: f64) -> Self {
        Self { mean, std_dev: 0.0 }
    }

    pub(crate) fn validate(
        &self,
        group: usize,
        quantity: &'static str,
    ) -> Result<(), ConfigurationError> {
        if !self.mean.is_finite() {
            return Err(ConfigurationError::NonFinite {
                group,
                field: quantity,
            });
        }
        if self.std_dev.is_nan() || self.std_dev < 0.0 {
            return Err(ConfigurationError::NegativeStdDev {
                group,
                quantity,
                std_dev: self.std_dev,
            });
        }
        if !self.std_dev.is_finite() {
            return Err(ConfigurationError::NonFinite {
                group,
                field: quantity,
            });
        }
        Ok(())
    }
}

/// Everything the engine needs to simulate one porosity level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PorosityGroup {
    pub material: ScaffoldMaterialProperties,
    /// FEA von Mises stress
    pub stress: DistributionParams,
    /// FEA strain
    pub strain: DistributionParams,
    /// CFD flow rate in mL/min
    pub flow_rate: DistributionParams,
}

impl PorosityGroup {
    #[must_use]
    pub fn porosity(&self) -> f64 {
        self.material.porosity
    }
}
