//! Parameter registry
//!
//! `RegistryConfig` is the serializable, column-oriented form of the input
//! data: one vector per property, indexed by porosity level. It is what gets
//! written to and read from registry files.
//!
//! `PorosityRegistry` is the validated form the engine consumes. It is built
//! once, never mutated, and passed by reference to every component.
//!
//! ```ignore
//! use scaffold_core::config::{PorosityRegistry, presets};
//!
//! let registry = PorosityRegistry::from_config(&presets::chitosan())?;
//! assert_eq!(registry.len(), 3);
//! ```
//!
//! For hand-built registries use the builder:
//!
//! ```ignore
//! use scaffold_core::config::{GroupBuilder, RegistryBuilder};
//!
//! let registry = RegistryBuilder::new()
//!     .group(
//!         GroupBuilder::at_porosity(50.0)
//!             .youngs_modulus(0.0005)
//!             .yield_strength(2.0)
//!             .stress(3.0, 0.5)
//!             .strain(8000.0, 1500.0)
//!             .flow_rate(0.4, 0.08),
//!     )
//!     .build()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::model::{CartilageReference, DistributionParams, PorosityGroup, ScaffoldMaterialProperties};

pub mod builder;
pub mod presets;

pub use builder::{GroupBuilder, RegistryBuilder};
pub use presets::Biomaterial;

/// Scaffold material columns, one entry per porosity level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialColumns {
    pub porosity: Vec<f64>,
    pub youngs_modulus: Vec<f64>,
    pub poissons_ratio: Vec<f64>,
    pub yield_strength: Vec<f64>,
    pub tensile_strength: Vec<f64>,
}

/// Finite element results approximated as normal distributions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaColumns {
    pub stress_mean: Vec<f64>,
    pub stress_std: Vec<f64>,
    pub strain_mean: Vec<f64>,
    pub strain_std: Vec<f64>,
}

/// Fluid dynamics results approximated as normal distributions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CfdColumns {
    pub flow_rate_mean: Vec<f64>,
    pub flow_rate_std: Vec<f64>,
}

/// Complete registry input in column form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub material: MaterialColumns,
    #[serde(default)]
    pub cartilage: CartilageReference,
    pub fea: FeaColumns,
    pub cfd: CfdColumns,
}

impl RegistryConfig {
    /// Number of porosity levels, taken from the `porosity` column
    #[must_use]
    pub fn num_levels(&self) -> usize {
        self.material.porosity.len()
    }

    fn columns(&self) -> [(&'static str, &[f64]); 11] {
        [
            ("material.porosity", &self.material.porosity),
            ("material.youngs_modulus", &self.material.youngs_modulus),
            ("material.poissons_ratio", &self.material.poissons_ratio),
            ("material.yield_strength", &self.material.yield_strength),
            ("material.tensile_strength", &self.material.tensile_strength),
            ("fea.stress_mean", &self.fea.stress_mean),
            ("fea.stress_std", &self.fea.stress_std),
            ("fea.strain_mean", &self.fea.strain_mean),
            ("fea.strain_std", &self.fea.strain_std),
            ("cfd.flow_rate_mean", &self.cfd.flow_rate_mean),
            ("cfd.flow_rate_std", &self.cfd.flow_rate_std),
        ]
    }
}

/// Validated, immutable per-porosity input data
#[derive(Debug, Clone, PartialEq)]
pub struct PorosityRegistry {
    groups: Vec<PorosityGroup>,
    cartilage: CartilageReference,
}

impl PorosityRegistry {
    /// Validate groups and cartilage data and assemble a registry
    pub fn new(
        groups: Vec<PorosityGroup>,
        cartilage: CartilageReference,
    ) -> Result<Self, ConfigurationError> {
        if groups.is_empty() {
            return Err(ConfigurationError::EmptyRegistry);
        }
        validate_cartilage(&cartilage)?;
        for (index, group) in groups.iter().enumerate() {
            validate_group(index, group)?;
        }
        Ok(Self { groups, cartilage })
    }

    /// Turn column data into a registry, checking that every column has one
    /// entry per porosity level
    pub fn from_config(config: &RegistryConfig) -> Result<Self, ConfigurationError> {
        let expected = config.num_levels();
        for (field, column) in config.columns() {
            if column.len() != expected {
                return Err(ConfigurationError::MismatchedLengths {
                    field,
                    expected,
                    actual: column.len(),
                });
            }
        }

        let groups = (0..expected)
            .map(|i| PorosityGroup {
                material: ScaffoldMaterialProperties {
                    porosity: config.material.porosity[i],
                    youngs_modulus: config.material.youngs_modulus[i],
                    poissons_ratio: config.material.poissons_ratio[i],
                    yield_strength: config.material.yield_strength[i],
                    tensile_strength: config.material.tensile_strength[i],
                },
                stress: DistributionParams::new(config.fea.stress_mean[i], config.fea.stress_std[i]),
                strain: DistributionParams::new(config.fea.strain_mean[i], config.fea.strain_std[i]),
                flow_rate: DistributionParams::new(
                    config.cfd.flow_rate_mean[i],
                    config.cfd.flow_rate_std[i],
                ),
            })
            .collect();

        Self::new(groups, config.cartilage.clone())
    }

    /// Column form of this registry, suitable for writing to a file
    #[must_use]
    pub fn to_config(&self) -> RegistryConfig {
        let column = |f: fn(&PorosityGroup) -> f64| self.groups.iter().map(f).collect::<Vec<_>>();
        RegistryConfig {
            material: MaterialColumns {
                porosity: column(|g| g.material.porosity),
                youngs_modulus: column(|g| g.material.youngs_modulus),
                poissons_ratio: column(|g| g.material.poissons_ratio),
                yield_strength: column(|g| g.material.yield_strength),
                tensile_strength: column(|g| g.material.tensile_strength),
            },
            cartilage: self.cartilage.clone(),
            fea: FeaColumns {
                stress_mean: column(|g| g.stress.mean),
                stress_std: column(|g| g.stress.std_dev),
                strain_mean: column(|g| g.strain.mean),
                strain_std: column(|g| g.strain.std_dev),
            },
            cfd: CfdColumns {
                flow_rate_mean: column(|g| g.flow_rate.mean),
                flow_rate_std: column(|g| g.flow_rate.std_dev),
            },
        }
    }

    #[must_use]
    pub fn groups(&self) -> &[PorosityGroup] {
        &self.groups
    }

    #[must_use]
    pub fn group(&self, index: usize) -> Option<&PorosityGroup> {
        self.groups.get(index)
    }

    #[must_use]
    pub fn cartilage(&self) -> &CartilageReference {
        &self.cartilage
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[must_use]
    pub fn porosities(&self) -> Vec<f64> {
        self.groups.iter().map(PorosityGroup::porosity).collect()
    }

    /// Largest mean flow rate across groups, the flow normalization reference
    #[must_use]
    pub fn max_flow_rate_mean(&self) -> f64 {
        self.groups
            .iter()
            .map(|g| g.flow_rate.mean)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

fn validate_cartilage(cartilage: &CartilageReference) -> Result<(), ConfigurationError> {
    if cartilage.yield_stress.is_empty() {
        return Err(ConfigurationError::EmptyYieldStress);
    }
    if cartilage.yield_stress.len() != cartilage.plastic_strain.len() {
        return Err(ConfigurationError::CartilageCurveMismatch {
            yield_stress: cartilage.yield_stress.len(),
            plastic_strain: cartilage.plastic_strain.len(),
        });
    }
    Ok(())
}

fn validate_group(index: usize, group: &PorosityGroup) -> Result<(), ConfigurationError> {
    let m = &group.material;
    for (field, value) in [
        ("porosity", m.porosity),
        ("youngs_modulus", m.youngs_modulus),
        ("poissons_ratio", m.poissons_ratio),
        ("yield_strength", m.yield_strength),
        ("tensile_strength", m.tensile_strength),
    ] {
        if !value.is_finite() {
            return Err(ConfigurationError::NonFinite {
                group: index,
                field,
            });
        }
    }

    if m.youngs_modulus <= 0.0 {
        return Err(ConfigurationError::NonPositiveModulus {
            group: index,
            youngs_modulus: m.youngs_modulus,
        });
    }
    if !(0.0..=100.0).contains(&m.porosity) {
        return Err(ConfigurationError::OutOfRange {
            group: index,
            field: "porosity",
            value: m.porosity,
            reason: "porosity is a percentage in [0, 100]",
        });
    }
    if m.poissons_ratio <= 0.0 || m.poissons_ratio >= 0.5 {
        return Err(ConfigurationError::OutOfRange {
            group: index,
            field: "poissons_ratio",
            value: m.poissons_ratio,
            reason: "must lie strictly between 0 and 0.5",
        });
    }
    for (field, value) in [
        ("yield_strength", m.yield_strength),
        ("tensile_strength", m.tensile_strength),
    ] {
        if value <= 0.0 {
            return Err(ConfigurationError::OutOfRange {
                group: index,
                field,
                value,
                reason: "must be positive",
            });
        }
    }

    group.stress.validate(index, "stress")?;
    group.strain.validate(index, "strain")?;
    group.flow_rate.validate(index, "flow_rate")?;
    Ok(())
}
