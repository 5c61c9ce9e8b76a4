//! Stochastic inputs for a single trial
//!
//! Every `(group, trial)` pair gets its own generator, seeded from the run seed
//! mixed with the pair's coordinates. A trial's draws therefore never depend on
//! which worker ran it or in what order, and the stress, strain and flow rate
//! of one trial are consecutive draws from that trial's private stream.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng, distr::Distribution};

use crate::error::ConfigurationError;
use crate::model::{DistributionParams, PorosityGroup};

/// Draw one sample from a normal distribution.
///
/// A zero standard deviation returns `mean` exactly without consuming
/// randomness. A negative or non-finite standard deviation is rejected.
pub fn draw<R: Rng + ?Sized>(
    params: &DistributionParams,
    rng: &mut R,
) -> Result<f64, ConfigurationError> {
    if !(params.std_dev >= 0.0 && params.std_dev.is_finite()) {
        return Err(ConfigurationError::InvalidDistribution {
            mean: params.mean,
            std_dev: params.std_dev,
        });
    }
    if params.std_dev == 0.0 {
        return Ok(params.mean);
    }
    rand_distr::Normal::new(params.mean, params.std_dev)
        .map(|d| d.sample(rng))
        .map_err(|_| ConfigurationError::InvalidDistribution {
            mean: params.mean,
            std_dev: params.std_dev,
        })
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Sub-seed for one `(group, trial)` cell of a run
#[must_use]
pub fn trial_seed(seed: u64, group: usize, trial: usize) -> u64 {
    let group_stream = splitmix64(seed ^ splitmix64(group as u64));
    splitmix64(group_stream ^ (trial as u64).wrapping_mul(0xD1B5_4A32_D192_ED03))
}

/// Raw FEA/CFD draws for one trial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialDraw {
    pub stress: f64,
    pub strain: f64,
    pub flow_rate: f64,
}

/// Generator dedicated to a single trial
#[derive(Debug, Clone)]
pub struct TrialSampler {
    rng: SmallRng,
}

impl TrialSampler {
    #[must_use]
    pub fn for_trial(seed: u64, group: usize, trial: usize) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(trial_seed(seed, group, trial)),
        }
    }

    /// Draw stress, strain and flow rate, in that order
    pub fn sample(&mut self, group: &PorosityGroup) -> Result<TrialDraw, ConfigurationError> {
        let stress = draw(&group.stress, &mut self.rng)?;
        let strain = draw(&group.strain, &mut self.rng)?;
        let flow_rate = draw(&group.flow_rate, &mut self.rng)?;
        Ok(TrialDraw {
            stress,
            strain,
            flow_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GroupBuilder;

    #[test]
    fn test_zero_std_dev_returns_mean() {
        let mut rng = SmallRng::seed_from_u64(1);
        let params = DistributionParams::fixed(8044.1258);
        for _ in 0..10 {
            assert_eq!(draw(&params, &mut rng).unwrap(), 8044.1258);
        }
    }

    #[test]
    fn test_negative_std_dev_is_rejected() {
        let mut rng = SmallRng::seed_from_u64(1);
        let err = draw(&DistributionParams::new(1.0, -1.0), &mut rng).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::InvalidDistribution {
                mean: 1.0,
                std_dev: -1.0
            }
        );
    }

    #[test]
    fn test_non_finite_std_dev_is_rejected() {
        let mut rng = SmallRng::seed_from_u64(1);
        for std_dev in [f64::NAN, f64::INFINITY, -0.5] {
            let params = DistributionParams::new(2.0, std_dev);
            assert!(draw(&params, &mut rng).is_err());
        }
    }

    #[test]
    fn test_same_cell_same_draw() {
        let group = GroupBuilder::at_porosity(30.0)
            .stress(5.0, 1.0)
            .strain(8000.0, 1500.0)
            .flow_rate(0.35, 0.07)
            .build();

        let a = TrialSampler::for_trial(42, 1, 17).sample(&group).unwrap();
        let b = TrialSampler::for_trial(42, 1, 17).sample(&group).unwrap();
        assert_eq!(a, b);

        let other_trial = TrialSampler::for_trial(42, 1, 18).sample(&group).unwrap();
        let other_group = TrialSampler::for_trial(42, 2, 17).sample(&group).unwrap();
        let other_seed = TrialSampler::for_trial(43, 1, 17).sample(&group).unwrap();
        assert_ne!(a, other_trial);
        assert_ne!(a, other_group);
        assert_ne!(a, other_seed);
    }

    #[test]
    fn test_trial_seeds_do_not_collide_on_swapped_coordinates() {
        assert_ne!(trial_seed(0, 1, 2), trial_seed(0, 2, 1));
        assert_ne!(trial_seed(0, 0, 0), trial_seed(1, 0, 0));
    }

    #[test]
    fn test_sample_moments() {
        let params = DistributionParams::new(10.0, 2.0);
        let mut rng = SmallRng::seed_from_u64(7);
        let n = 50_000;
        let samples: Vec<f64> = (0..n).map(|_| draw(&params, &mut rng).unwrap()).collect();

        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        assert!((mean - 10.0).abs() < 0.05, "mean {mean}");
        assert!((var.sqrt() - 2.0).abs() < 0.05, "std {}", var.sqrt());
    }
}
