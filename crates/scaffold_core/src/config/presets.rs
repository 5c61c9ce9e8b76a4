//! Built-in registry data

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CfdColumns, FeaColumns, MaterialColumns, RegistryConfig};
use crate::model::CartilageReference;

/// Biomaterials offered to the user.
///
/// Only chitosan has measured scaffold data; the other choices currently
/// resolve to the same chitosan registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Biomaterial {
    #[default]
    Chitosan,
    ZincOxide,
    TypeIICollagen,
}

impl Biomaterial {
    pub const ALL: [Biomaterial; 3] = [
        Biomaterial::Chitosan,
        Biomaterial::ZincOxide,
        Biomaterial::TypeIICollagen,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Chitosan => "Chitosan",
            Self::ZincOxide => "Zinc Oxide",
            Self::TypeIICollagen => "Type II Collagen",
        }
    }

    /// Registry data used when simulating this biomaterial
    #[must_use]
    pub fn registry_config(&self) -> RegistryConfig {
        match self {
            Self::Chitosan | Self::ZincOxide | Self::TypeIICollagen => chitosan(),
        }
    }

    /// Whether measured data exists for this material
    #[must_use]
    pub fn has_measured_data(&self) -> bool {
        matches!(self, Self::Chitosan)
    }
}

impl fmt::Display for Biomaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Chitosan TPMS scaffolds at 30%, 60% and 90% porosity
#[must_use]
pub fn chitosan() -> RegistryConfig {
    RegistryConfig {
        material: MaterialColumns {
            porosity: vec![30.0, 60.0, 90.0],
            youngs_modulus: vec![0.000732, 0.000239, 0.0000149],
            poissons_ratio: vec![0.23, 0.185, 0.14],
            yield_strength: vec![3.92, 1.28, 0.08],
            tensile_strength: vec![89.19, 29.12, 1.82],
        },
        cartilage: CartilageReference::default(),
        fea: FeaColumns {
            stress_mean: vec![5.9217, 1.9162, 0.1203],
            stress_std: vec![1.1310, 0.3812, 0.0245],
            strain_mean: vec![8044.1258, 8023.3945, 8065.4403],
            strain_std: vec![1530.8782, 1551.4272, 1536.1475],
        },
        cfd: CfdColumns {
            flow_rate_mean: vec![0.3481, 0.5005, 0.6536],
            flow_rate_std: vec![0.0680, 0.1026, 0.1315],
        },
    }
}
