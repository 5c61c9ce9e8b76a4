//! Material records for scaffolds and the articular cartilage they replace

use serde::{Deserialize, Serialize};

/// Mechanical properties of a scaffold printed at one porosity level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldMaterialProperties {
    /// Porosity in percent
    pub porosity: f64,
    /// Young's modulus in GPa
    pub youngs_modulus: f64,
    pub poissons_ratio: f64,
    /// Yield strength in MPa
    pub yield_strength: f64,
    /// Tensile strength in MPa
    pub tensile_strength: f64,
}

/// Reference properties of native articular cartilage.
///
/// Shared by every porosity group. Only the mean of `yield_stress` feeds the
/// performance formula; the plastic strain curve is carried for completeness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartilageReference {
    /// Young's modulus in MPa
    pub youngs_modulus: f64,
    pub poissons_ratio: f64,
    /// Density in g/mm^3
    pub density: f64,
    /// Yield stress curve in MPa
    pub yield_stress: Vec<f64>,
    /// Plastic strain, index-aligned with `yield_stress`
    pub plastic_strain: Vec<f64>,
}

impl CartilageReference {
    /// Arithmetic mean of the yield stress curve, `0.0` when the curve is empty
    #[must_use]
    pub fn mean_yield_stress(&self) -> f64 {
        if self.yield_stress.is_empty() {
            return 0.0;
        }
        self.yield_stress.iter().sum::<f64>() / self.yield_stress.len() as f64
    }
}

impl Default for CartilageReference {
    fn default() -> Self {
        Self {
            youngs_modulus: 10.0,
            poissons_ratio: 0.3,
            density: 0.001101,
            yield_stress: vec![1.0, 3.0, 5.0],
            plastic_strain: vec![0.0, 2.7, 4.2],
        }
    }
}
