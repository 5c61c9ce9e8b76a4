//! Quick placeholder estimate
//!
//! Produces illustrative figures without running the Monte Carlo model: every
//! quantity is a uniform draw over a fixed range. Useful for exercising a
//! front end; the numbers carry no physical meaning.

use std::ops::{Range, RangeInclusive};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::Biomaterial;
use crate::error::{Result, SimulationError};
use crate::statistics::mean;

/// Porosity range accepted from the user, in percent
pub const POROSITY_RANGE: RangeInclusive<f64> = 30.0..=90.0;

pub const SERIES_LEN: usize = 10;

const CELL_MIGRATION: Range<f64> = 75.0..95.0;
const MECHANICAL_STRENGTH: Range<f64> = 70.0..90.0;
const STRESS_MPA: Range<f64> = 5.0..20.0;
const STRAIN: Range<f64> = 0.0..0.1;
const FLOW_RATE_ML_MIN: Range<f64> = 10.0..50.0;
const SHEAR_STRESS_PA: Range<f64> = 100.0..500.0;

/// Placeholder FEA/CFD series and headline percentages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickEstimate {
    pub biomaterial: Biomaterial,
    pub porosity: f64,
    /// Percent
    pub cell_migration: f64,
    /// Percent
    pub mechanical_strength: f64,
    pub stress: Vec<f64>,
    pub strain: Vec<f64>,
    pub flow_rate: Vec<f64>,
    pub shear_stress: Vec<f64>,
}

impl QuickEstimate {
    #[must_use]
    pub fn average_stress(&self) -> f64 {
        mean(&self.stress)
    }

    #[must_use]
    pub fn average_strain(&self) -> f64 {
        mean(&self.strain)
    }

    #[must_use]
    pub fn average_flow_rate(&self) -> f64 {
        mean(&self.flow_rate)
    }

    #[must_use]
    pub fn average_shear_stress(&self) -> f64 {
        mean(&self.shear_stress)
    }
}

fn series<R: Rng + ?Sized>(rng: &mut R, range: &Range<f64>) -> Vec<f64> {
    (0..SERIES_LEN).map(|_| rng.random_range(range.clone())).collect()
}

/// Draw a placeholder estimate for the given inputs
pub fn quick_estimate(biomaterial: Biomaterial, porosity: f64, seed: u64) -> Result<QuickEstimate> {
    if !POROSITY_RANGE.contains(&porosity) {
        return Err(SimulationError::invalid_argument(
            "porosity",
            format!(
                "{porosity} is outside {}-{} %",
                POROSITY_RANGE.start(),
                POROSITY_RANGE.end()
            ),
        ));
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let cell_migration = rng.random_range(CELL_MIGRATION);
    let mechanical_strength = rng.random_range(MECHANICAL_STRENGTH);

    Ok(QuickEstimate {
        biomaterial,
        porosity,
        cell_migration,
        mechanical_strength,
        stress: series(&mut rng, &STRESS_MPA),
        strain: series(&mut rng, &STRAIN),
        flow_rate: series(&mut rng, &FLOW_RATE_ML_MIN),
        shear_stress: series(&mut rng, &SHEAR_STRESS_PA),
    })
}
