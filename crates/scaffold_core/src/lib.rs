//! TPMS scaffold performance prediction library
//!
//! This crate provides the Monte Carlo model behind the scaffold predictor.
//! It supports:
//! - A validated, immutable registry of per-porosity material, FEA and CFD inputs
//! - Seeded per-trial sampling that is independent of execution order
//! - The scaffold performance metric (stiffness ratio x strength ratio x strain energy)
//! - A parallel engine producing a groups x trials result table, with cancellation
//! - Per-group mean, standard deviation, 95% percentile interval and box summary
//! - One-way ANOVA across porosity groups
//!
//! # Example
//!
//! ```ignore
//! use scaffold_core::config::{PorosityRegistry, presets};
//! use scaffold_core::simulation::simulate;
//!
//! let registry = PorosityRegistry::from_config(&presets::chitosan())?;
//! let summary = simulate(&registry, 10_000, Some(42))?;
//!
//! for group in &summary.per_group {
//!     println!("{}%: {:.4e}", group.porosity, group.stats.mean);
//! }
//! if summary.anova.significant {
//!     println!("groups differ");
//! }
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod anova;
pub mod error;
pub mod evaluate;
pub mod preview;
pub mod sampler;
pub mod simulation;
pub mod statistics;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{Biomaterial, PorosityRegistry, RegistryBuilder, RegistryConfig};
pub use error::{Result, SimulationError};
pub use simulation::{MonteCarloConfig, SimulationProgress, simulate};
