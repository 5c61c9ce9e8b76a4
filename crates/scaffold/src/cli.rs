//! Command-line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::WrapErr;
use scaffold_core::preview::quick_estimate;
use scaffold_core::{Biomaterial, PorosityRegistry, simulate};

use crate::registry_file::load_registry;
use crate::report::{render_prediction, render_preview};

#[derive(Parser, Debug)]
#[command(name = "scaffold")]
#[command(about = "Monte Carlo performance predictor for TPMS cartilage scaffolds")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    pub log_level: String,

    /// Write logs to DIR/scaffold.log instead of stderr
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Monte Carlo prediction across porosity groups (default)
    Predict(PredictArgs),
    /// Placeholder quick estimate
    Preview(PreviewArgs),
}

#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct PredictArgs {
    #[arg(short, long, value_enum, default_value_t = BiomaterialArg::Chitosan)]
    pub biomaterial: BiomaterialArg,

    /// Target porosity in percent; selects the highlighted group
    #[arg(short, long, default_value_t = 70.0)]
    pub porosity: f64,

    /// Trials per porosity group
    #[arg(short = 'n', long, default_value_t = 10_000)]
    pub trials: usize,

    /// Seed for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Registry YAML file to use instead of the built-in data
    #[arg(short, long)]
    pub registry: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl Default for PredictArgs {
    fn default() -> Self {
        Self {
            biomaterial: BiomaterialArg::Chitosan,
            porosity: 70.0,
            trials: 10_000,
            seed: None,
            registry: None,
            json: false,
        }
    }
}

#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct PreviewArgs {
    #[arg(short, long, value_enum, default_value_t = BiomaterialArg::Chitosan)]
    pub biomaterial: BiomaterialArg,

    #[arg(short, long, default_value_t = 70.0)]
    pub porosity: f64,

    #[arg(short, long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiomaterialArg {
    Chitosan,
    ZincOxide,
    #[value(name = "type-ii-collagen")]
    TypeIICollagen,
}

impl From<BiomaterialArg> for Biomaterial {
    fn from(arg: BiomaterialArg) -> Self {
        match arg {
            BiomaterialArg::Chitosan => Biomaterial::Chitosan,
            BiomaterialArg::ZincOxide => Biomaterial::ZincOxide,
            BiomaterialArg::TypeIICollagen => Biomaterial::TypeIICollagen,
        }
    }
}

/// Run the selected command and return the text to print
pub fn execute(args: &Args) -> color_eyre::Result<String> {
    match &args.command {
        Some(Command::Predict(predict)) => run_predict(predict),
        Some(Command::Preview(preview)) => run_preview(preview),
        None => run_predict(&PredictArgs::default()),
    }
}

fn run_predict(args: &PredictArgs) -> color_eyre::Result<String> {
    let biomaterial = Biomaterial::from(args.biomaterial);
    let registry = match &args.registry {
        Some(path) => load_registry(path)?,
        None => PorosityRegistry::from_config(&biomaterial.registry_config())
            .wrap_err("built-in registry is invalid")?,
    };

    let summary = simulate(&registry, args.trials, args.seed)?;

    if args.json {
        Ok(serde_json::to_string_pretty(&summary)?)
    } else {
        Ok(render_prediction(&summary, biomaterial, args.porosity))
    }
}

fn run_preview(args: &PreviewArgs) -> color_eyre::Result<String> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let estimate = quick_estimate(args.biomaterial.into(), args.porosity, seed)?;

    if args.json {
        Ok(serde_json::to_string_pretty(&estimate)?)
    } else {
        Ok(render_preview(&estimate))
    }
}
