//! Sampling configuration

use crate::error::ConfigError;

/// Number of draws per distribution
pub const DEFAULT_SAMPLE_SIZE: usize = 1000;
/// Fixed generator seed; every run draws the same samples
pub const DEFAULT_SEED: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleConfig {
    pub sample_size: usize,
    pub seed: u64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

impl SampleConfig {
    #[must_use]
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_size == 0 {
            return Err(ConfigError::EmptySample);
        }
        Ok(())
    }
}
