use std::fmt;

/// Malformed or inconsistent registry data. The simulation never starts.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// A porosity-indexed column does not have one entry per porosity level
    MismatchedLengths {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    NegativeStdDev {
        group: usize,
        quantity: &'static str,
        std_dev: f64,
    },
    NonPositiveModulus {
        group: usize,
        youngs_modulus: f64,
    },
    OutOfRange {
        group: usize,
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    NonFinite {
        group: usize,
        field: &'static str,
    },
    /// Normal distribution parameters rejected by the sampler
    InvalidDistribution {
        mean: f64,
        std_dev: f64,
    },
    EmptyRegistry,
    EmptyYieldStress,
    /// `yield_stress` and `plastic_strain` must be index-aligned
    CartilageCurveMismatch {
        yield_stress: usize,
        plastic_strain: usize,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::MismatchedLengths {
                field,
                expected,
                actual,
            } => write!(
                f,
                "{field} has {actual} entries but {expected} porosity levels are configured"
            ),
            ConfigurationError::NegativeStdDev {
                group,
                quantity,
                std_dev,
            } => write!(
                f,
                "group {group}: {quantity} std_dev must be non-negative (got {std_dev})"
            ),
            ConfigurationError::NonPositiveModulus {
                group,
                youngs_modulus,
            } => write!(
                f,
                "group {group}: youngs_modulus must be positive (got {youngs_modulus})"
            ),
            ConfigurationError::OutOfRange {
                group,
                field,
                value,
                reason,
            } => write!(f, "group {group}: {field}={value} is out of range: {reason}"),
            ConfigurationError::NonFinite { group, field } => {
                write!(f, "group {group}: {field} must be finite")
            }
            ConfigurationError::InvalidDistribution { mean, std_dev } => write!(
                f,
                "invalid normal distribution (mean={mean}, std_dev={std_dev}): std_dev must be non-negative and finite"
            ),
            ConfigurationError::EmptyRegistry => write!(f, "no porosity levels configured"),
            ConfigurationError::EmptyYieldStress => {
                write!(f, "cartilage yield_stress curve is empty")
            }
            ConfigurationError::CartilageCurveMismatch {
                yield_stress,
                plastic_strain,
            } => write!(
                f,
                "cartilage yield_stress has {yield_stress} points but plastic_strain has {plastic_strain}"
            ),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Division by zero in the performance formula caused by degenerate reference data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    ZeroCartilageModulus,
    ZeroMeanYieldStress,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::ZeroCartilageModulus => {
                write!(f, "cartilage youngs_modulus is zero (stiffness ratio undefined)")
            }
            DomainError::ZeroMeanYieldStress => write!(
                f,
                "mean cartilage yield stress is zero (strength ratio undefined)"
            ),
        }
    }
}

impl std::error::Error for DomainError {}

/// Too few groups or trials for statistics or ANOVA
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsufficientDataError {
    TooFewGroups {
        found: usize,
        required: usize,
    },
    TooFewTrials {
        group: usize,
        found: usize,
        required: usize,
    },
}

impl fmt::Display for InsufficientDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsufficientDataError::TooFewGroups { found, required } => {
                write!(f, "need at least {required} groups, found {found}")
            }
            InsufficientDataError::TooFewTrials {
                group,
                found,
                required,
            } => write!(
                f,
                "group {group} has {found} trials, at least {required} are required"
            ),
        }
    }
}

impl std::error::Error for InsufficientDataError {}

/// Top-level error returned by the simulation entry points
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    Configuration(ConfigurationError),
    Domain(DomainError),
    InvalidArgument {
        name: &'static str,
        reason: String,
    },
    InsufficientData(InsufficientDataError),
    /// Run was cancelled through its progress handle; no partial table is returned
    Cancelled,
}

impl SimulationError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        SimulationError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Configuration(e) => write!(f, "configuration error: {e}"),
            SimulationError::Domain(e) => write!(f, "domain error: {e}"),
            SimulationError::InvalidArgument { name, reason } => {
                write!(f, "invalid argument `{name}`: {reason}")
            }
            SimulationError::InsufficientData(e) => write!(f, "insufficient data: {e}"),
            SimulationError::Cancelled => write!(f, "simulation cancelled"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Configuration(e) => Some(e),
            SimulationError::Domain(e) => Some(e),
            SimulationError::InsufficientData(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigurationError> for SimulationError {
    fn from(err: ConfigurationError) -> Self {
        SimulationError::Configuration(err)
    }
}

impl From<DomainError> for SimulationError {
    fn from(err: DomainError) -> Self {
        SimulationError::Domain(err)
    }
}

impl From<InsufficientDataError> for SimulationError {
    fn from(err: InsufficientDataError) -> Self {
        SimulationError::InsufficientData(err)
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
