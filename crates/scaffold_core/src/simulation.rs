//! Monte Carlo engine
//!
//! Each porosity group row is cut into batches of `TRIAL_BATCH_SIZE` trials.
//! Batches own disjoint slices of the result table, so they can be filled on
//! the rayon pool without locking. Cancellation is checked before each batch
//! starts; a cancelled run never returns a partial table.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use crate::anova::compare;
use crate::config::PorosityRegistry;
use crate::error::{Result, SimulationError};
use crate::evaluate::PerformanceEvaluator;
use crate::model::{GroupReport, PorosityGroup, ResultTable, SimulationSummary, TrialResult};
use crate::sampler::TrialSampler;
use crate::statistics::{box_summaries, summarize};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

pub const TRIAL_BATCH_SIZE: usize = 1000;

/// Shared progress counter and cancellation flag for a run
#[derive(Debug, Clone)]
pub struct SimulationProgress {
    completed: Arc<AtomicUsize>,
    total: Arc<AtomicUsize>,
    cancelled: Arc<AtomicBool>,
}

impl SimulationProgress {
    #[must_use]
    pub fn new() -> Self {
        Self {
            completed: Arc::new(AtomicUsize::new(0)),
            total: Arc::new(AtomicUsize::new(0)),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Trials finished so far
    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    /// Trials in the current run
    #[must_use]
    pub fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    /// Fraction of trials finished, `0.0` before a run starts
    #[must_use]
    pub fn fraction(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.completed() as f64 / total as f64,
        }
    }

    fn add(&self, trials: usize) {
        self.completed.fetch_add(trials, Ordering::Relaxed);
    }

    fn reset(&self, total: usize) {
        self.completed.store(0, Ordering::Relaxed);
        self.total.store(total, Ordering::Relaxed);
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl Default for SimulationProgress {
    fn default() -> Self {
        Self::new()
    }
}

/// Run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    pub num_trials: usize,
    /// Fixed seed for reproducible runs; drawn from the OS when `None`
    pub seed: Option<u64>,
    /// Fill batches on the rayon pool. Ignored without the `parallel` feature.
    pub parallel: bool,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            num_trials: 10_000,
            seed: None,
            parallel: true,
        }
    }
}

impl MonteCarloConfig {
    #[must_use]
    pub fn new(num_trials: usize) -> Self {
        Self {
            num_trials,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

/// Simulate a single `(group, trial)` cell
pub fn simulate_trial(
    group: &PorosityGroup,
    evaluator: &PerformanceEvaluator,
    seed: u64,
    group_index: usize,
    trial: usize,
) -> Result<TrialResult> {
    let draw = TrialSampler::for_trial(seed, group_index, trial).sample(group)?;
    let performance = evaluator.evaluate(&group.material, draw.stress, draw.strain, draw.flow_rate);
    Ok(TrialResult {
        stress: draw.stress,
        strain: draw.strain,
        flow_rate: draw.flow_rate,
        performance,
    })
}

/// Build the `groups x num_trials` performance table
pub fn run(registry: &PorosityRegistry, num_trials: usize, seed: u64) -> Result<ResultTable> {
    let config = MonteCarloConfig::new(num_trials).with_seed(seed);
    run_with_progress(registry, &config, &SimulationProgress::default())
}

/// Build the performance table, reporting progress and honoring cancellation
pub fn run_with_progress(
    registry: &PorosityRegistry,
    config: &MonteCarloConfig,
    progress: &SimulationProgress,
) -> Result<ResultTable> {
    let num_trials = config.num_trials;
    if num_trials == 0 {
        return Err(SimulationError::invalid_argument(
            "num_trials",
            "at least one trial is required",
        ));
    }
    let seed = config.resolve_seed();
    let evaluator = PerformanceEvaluator::new(registry.cartilage(), registry.max_flow_rate_mean())?;

    progress.reset(registry.len() * num_trials);
    let mut table = ResultTable::zeros(registry.len(), num_trials);

    let batches: Vec<(usize, usize, &mut [f64])> = table
        .values_mut()
        .chunks_mut(num_trials)
        .enumerate()
        .flat_map(|(group, row)| {
            row.chunks_mut(TRIAL_BATCH_SIZE)
                .enumerate()
                .map(move |(b, cells)| (group, b * TRIAL_BATCH_SIZE, cells))
        })
        .collect();

    let fill = |(group, start, cells): (usize, usize, &mut [f64])| {
        fill_batch(registry, &evaluator, seed, group, start, cells, progress)
    };

    #[cfg(feature = "parallel")]
    let outcome = if config.parallel {
        batches.into_par_iter().try_for_each(fill)
    } else {
        batches.into_iter().try_for_each(fill)
    };
    #[cfg(not(feature = "parallel"))]
    let outcome = batches.into_iter().try_for_each(fill);

    outcome?;
    if progress.is_cancelled() {
        return Err(SimulationError::Cancelled);
    }
    Ok(table)
}

fn fill_batch(
    registry: &PorosityRegistry,
    evaluator: &PerformanceEvaluator,
    seed: u64,
    group_index: usize,
    start: usize,
    cells: &mut [f64],
    progress: &SimulationProgress,
) -> Result<()> {
    if progress.is_cancelled() {
        return Err(SimulationError::Cancelled);
    }
    let group = &registry.groups()[group_index];
    for (offset, cell) in cells.iter_mut().enumerate() {
        *cell = simulate_trial(group, evaluator, seed, group_index, start + offset)?.performance;
    }
    progress.add(cells.len());
    Ok(())
}

/// Run a simulation and reduce it to per-group statistics and an ANOVA
pub fn simulate(
    registry: &PorosityRegistry,
    num_trials: usize,
    seed: Option<u64>,
) -> Result<SimulationSummary> {
    let config = MonteCarloConfig {
        num_trials,
        seed,
        ..Default::default()
    };
    simulate_with_progress(registry, &config, &SimulationProgress::default())
}

pub fn simulate_with_progress(
    registry: &PorosityRegistry,
    config: &MonteCarloConfig,
    progress: &SimulationProgress,
) -> Result<SimulationSummary> {
    let seed = config.resolve_seed();
    let config = MonteCarloConfig {
        seed: Some(seed),
        ..config.clone()
    };

    tracing::info!(
        groups = registry.len(),
        num_trials = config.num_trials,
        seed = seed,
        parallel = config.parallel,
        "Starting Monte Carlo simulation"
    );

    let table = run_with_progress(registry, &config, progress)?;
    let stats = summarize(&table)?;
    let boxes = box_summaries(&table)?;
    let anova = compare(&table)?;

    let per_group: Vec<GroupReport> = registry
        .groups()
        .iter()
        .zip(stats)
        .zip(boxes)
        .map(|((group, stats), box_plot)| GroupReport {
            porosity: group.porosity(),
            stats,
            box_plot,
        })
        .collect();

    for report in &per_group {
        tracing::debug!(
            porosity = report.porosity,
            mean = report.stats.mean,
            std_dev = report.stats.std_dev,
            "Group summarized"
        );
    }
    tracing::info!(
        f_statistic = anova.f_statistic,
        p_value = anova.p_value,
        significant = anova.significant,
        "Monte Carlo simulation finished"
    );

    Ok(SimulationSummary {
        num_trials: config.num_trials,
        seed,
        per_group,
        anova,
    })
}
