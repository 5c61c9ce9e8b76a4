//! Registry Builder
//!
//! Fluent construction of a `PorosityRegistry` one group at a time. Material
//! values not set explicitly default to the 30% chitosan figures, and every
//! distribution defaults to a fixed value of 1.0.

use super::PorosityRegistry;
use crate::error::ConfigurationError;
use crate::model::{
    CartilageReference, DistributionParams, PorosityGroup, ScaffoldMaterialProperties,
};

/// Builder for a single porosity group
#[derive(Debug, Clone)]
pub struct GroupBuilder {
    material: ScaffoldMaterialProperties,
    stress: DistributionParams,
    strain: DistributionParams,
    flow_rate: DistributionParams,
}

impl GroupBuilder {
    /// Start a group at `porosity` percent
    #[must_use]
    pub fn at_porosity(porosity: f64) -> Self {
        Self {
            material: ScaffoldMaterialProperties {
                porosity,
                youngs_modulus: 0.000732,
                poissons_ratio: 0.23,
                yield_strength: 3.92,
                tensile_strength: 89.19,
            },
            stress: DistributionParams::fixed(1.0),
            strain: DistributionParams::fixed(1.0),
            flow_rate: DistributionParams::fixed(1.0),
        }
    }

    /// Young's modulus in GPa
    #[must_use]
    pub fn youngs_modulus(mut self, gpa: f64) -> Self {
        self.material.youngs_modulus = gpa;
        self
    }

    #[must_use]
    pub fn poissons_ratio(mut self, ratio: f64) -> Self {
        self.material.poissons_ratio = ratio;
        self
    }

    /// Yield strength in MPa
    #[must_use]
    pub fn yield_strength(mut self, mpa: f64) -> Self {
        self.material.yield_strength = mpa;
        self
    }

    /// Tensile strength in MPa
    #[must_use]
    pub fn tensile_strength(mut self, mpa: f64) -> Self {
        self.material.tensile_strength = mpa;
        self
    }

    #[must_use]
    pub fn material(mut self, material: ScaffoldMaterialProperties) -> Self {
        self.material = material;
        self
    }

    #[must_use]
    pub fn stress(mut self, mean: f64, std_dev: f64) -> Self {
        self.stress = DistributionParams::new(mean, std_dev);
        self
    }

    #[must_use]
    pub fn strain(mut self, mean: f64, std_dev: f64) -> Self {
        self.strain = DistributionParams::new(mean, std_dev);
        self
    }

    #[must_use]
    pub fn flow_rate(mut self, mean: f64, std_dev: f64) -> Self {
        self.flow_rate = DistributionParams::new(mean, std_dev);
        self
    }

    #[must_use]
    pub fn build(self) -> PorosityGroup {
        PorosityGroup {
            material: self.material,
            stress: self.stress,
            strain: self.strain,
            flow_rate: self.flow_rate,
        }
    }
}

/// Builder for a complete registry
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    cartilage: CartilageReference,
    groups: Vec<GroupBuilder>,
}

impl RegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default articular cartilage reference
    #[must_use]
    pub fn cartilage(mut self, cartilage: CartilageReference) -> Self {
        self.cartilage = cartilage;
        self
    }

    /// Append a group; groups keep insertion order
    #[must_use]
    pub fn group(mut self, group: GroupBuilder) -> Self {
        self.groups.push(group);
        self
    }

    pub fn build(self) -> Result<PorosityRegistry, ConfigurationError> {
        let groups = self.groups.into_iter().map(GroupBuilder::build).collect();
        PorosityRegistry::new(groups, self.cartilage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_group_order() {
        let registry = RegistryBuilder::new()
            .group(GroupBuilder::at_porosity(80.0).stress(2.0, 0.1))
            .group(GroupBuilder::at_porosity(20.0).strain(100.0, 5.0))
            .build()
            .unwrap();

        assert_eq!(registry.porosities(), vec![80.0, 20.0]);
        assert_eq!(registry.group(0).unwrap().stress, DistributionParams::new(2.0, 0.1));
        assert_eq!(registry.group(1).unwrap().strain, DistributionParams::new(100.0, 5.0));
        assert_eq!(registry.cartilage(), &CartilageReference::default());
    }

    #[test]
    fn test_builder_validates() {
        let err = RegistryBuilder::new()
            .group(GroupBuilder::at_porosity(50.0).youngs_modulus(-1.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::NonPositiveModulus { group: 0, .. }));

        let err = RegistryBuilder::new().build().unwrap_err();
        assert_eq!(err, ConfigurationError::EmptyRegistry);
    }
}
