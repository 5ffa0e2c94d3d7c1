use std::fmt;

/// Errors related to distribution parameters
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionError {
    InvalidNormal {
        mean: f64,
        std_dev: f64,
    },
    InvalidUniform {
        low: f64,
        high: f64,
    },
    InvalidExponential {
        rate: f64,
    },
}

impl fmt::Display for DistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionError::InvalidNormal { mean, std_dev } => write!(
                f,
                "invalid Normal parameters (mean={mean}, std_dev={std_dev}): std_dev must be positive and finite"
            ),
            DistributionError::InvalidUniform { low, high } => write!(
                f,
                "invalid Uniform parameters (low={low}, high={high}): bounds must be finite with low < high"
            ),
            DistributionError::InvalidExponential { rate } => write!(
                f,
                "invalid Exponential parameters (rate={rate}): rate must be positive and finite"
            ),
        }
    }
}

impl std::error::Error for DistributionError {}

/// Errors related to sampling configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptySample,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptySample => write!(f, "sample size must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    Distribution(DistributionError),
    Config(ConfigError),
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::Distribution(e) => write!(f, "{e}"),
            SampleError::Config(e) => write!(f, "configuration error: {e}"),
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SampleError::Distribution(e) => Some(e),
            SampleError::Config(e) => Some(e),
        }
    }
}

impl From<DistributionError> for SampleError {
    fn from(err: DistributionError) -> Self {
        SampleError::Distribution(err)
    }
}

impl From<ConfigError> for SampleError {
    fn from(err: ConfigError) -> Self {
        SampleError::Config(err)
    }
}

pub type Result<T> = std::result::Result<T, SampleError>;
