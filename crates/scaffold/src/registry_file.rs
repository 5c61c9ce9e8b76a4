//! Registry files
//!
//! A registry file is the YAML form of `RegistryConfig`: one list per
//! property, indexed by porosity level, plus the cartilage reference.
//!
//! ```yaml
//! material:
//!   porosity: [30.0, 60.0, 90.0]
//!   youngs_modulus: [0.000732, 0.000239, 0.0000149]
//!   ...
//! fea:
//!   stress_mean: [5.9217, 1.9162, 0.1203]
//!   ...
//! ```

use std::fs;
use std::path::Path;

use color_eyre::eyre::{WrapErr, eyre};
use scaffold_core::{PorosityRegistry, RegistryConfig};

/// Parse registry YAML without validating it
pub fn parse_registry(yaml: &str) -> color_eyre::Result<RegistryConfig> {
    serde_saphyr::from_str(yaml).map_err(|e| eyre!("invalid registry YAML: {e}"))
}

/// Read and validate a registry file
pub fn load_registry(path: &Path) -> color_eyre::Result<PorosityRegistry> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read registry file {}", path.display()))?;
    let config = parse_registry(&content)
        .wrap_err_with(|| format!("failed to parse registry file {}", path.display()))?;
    let registry = PorosityRegistry::from_config(&config)
        .wrap_err_with(|| format!("registry file {} is inconsistent", path.display()))?;

    tracing::info!(
        path = %path.display(),
        groups = registry.len(),
        "Loaded registry file"
    );
    Ok(registry)
}

/// Write a registry as YAML
pub fn save_registry(path: &Path, config: &RegistryConfig) -> color_eyre::Result<()> {
    let yaml = serde_saphyr::to_string(config).map_err(|e| eyre!("failed to serialize registry: {e}"))?;
    fs::write(path, yaml)
        .wrap_err_with(|| format!("failed to write registry file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffold_core::config::presets;
    use tempfile::tempdir;

    #[test]
    fn test_preset_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chitosan.yaml");

        save_registry(&path, &presets::chitosan()).unwrap();
        let registry = load_registry(&path).unwrap();

        assert_eq!(registry.to_config(), presets::chitosan());
    }

    #[test]
    fn test_missing_cartilage_uses_default() {
        let yaml = "\
material:
  porosity: [40.0, 70.0]
  youngs_modulus: [0.0005, 0.0002]
  poissons_ratio: [0.2, 0.2]
  yield_strength: [2.0, 1.0]
  tensile_strength: [50.0, 20.0]
fea:
  stress_mean: [3.0, 1.5]
  stress_std: [0.5, 0.3]
  strain_mean: [8000.0, 8000.0]
  strain_std: [1500.0, 1500.0]
cfd:
  flow_rate_mean: [0.4, 0.55]
  flow_rate_std: [0.08, 0.1]
";
        let config = parse_registry(yaml).unwrap();
        assert_eq!(config.num_levels(), 2);
        assert_eq!(config.cartilage.yield_stress, vec![1.0, 3.0, 5.0]);
        assert!(PorosityRegistry::from_config(&config).is_ok());
    }

    #[test]
    fn test_inconsistent_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        let mut config = presets::chitosan();
        config.cfd.flow_rate_std.truncate(1);
        save_registry(&path, &config).unwrap();

        let err = load_registry(&path).unwrap_err();
        assert!(format!("{err:#}").contains("cfd.flow_rate_std"));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = tempdir().unwrap();
        let err = load_registry(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("failed to read registry file"));
    }
}
