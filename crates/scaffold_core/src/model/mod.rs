mod distribution;
mod material;
mod results;

pub use distribution::{DistributionParams, PorosityGroup};
pub use material::{CartilageReference, ScaffoldMaterialProperties};
pub use results::{
    AnovaOutcome, BoxSummary, GroupReport, GroupStatistics, ResultTable, SimulationSummary,
    TrialResult,
};
