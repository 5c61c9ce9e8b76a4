//! Command-line front end for the scaffold performance predictor

pub mod cli;
pub mod logging;
pub mod registry_file;
pub mod report;
pub mod util;

pub use cli::{Args, execute};
pub use logging::init_logging;
