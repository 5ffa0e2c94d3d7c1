use std::f64::consts::PI;

use rand::{Rng, distr::Distribution};

use crate::error::DistributionError;

/// A continuous probability distribution with a closed-form density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistributionKind {
    Normal { mean: f64, std_dev: f64 },
    /// Half-open `[low, high)` when sampled; the density is non-zero on `[low, high]`.
    Uniform { low: f64, high: f64 },
    Exponential { rate: f64 },
}

impl DistributionKind {
    pub const STANDARD_NORMAL: DistributionKind = DistributionKind::Normal {
        mean: 0.0,
        std_dev: 1.0,
    };
    pub const STANDARD_UNIFORM: DistributionKind = DistributionKind::Uniform {
        low: 0.0,
        high: 1.0,
    };
    pub const STANDARD_EXPONENTIAL: DistributionKind = DistributionKind::Exponential { rate: 1.0 };

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DistributionKind::Normal { .. } => "Normal",
            DistributionKind::Uniform { .. } => "Uniform",
            DistributionKind::Exponential { .. } => "Exponential",
        }
    }

    pub fn validate(&self) -> Result<(), DistributionError> {
        match *self {
            DistributionKind::Normal { mean, std_dev } => {
                if mean.is_finite() && std_dev.is_finite() && std_dev > 0.0 {
                    Ok(())
                } else {
                    Err(DistributionError::InvalidNormal { mean, std_dev })
                }
            }
            DistributionKind::Uniform { low, high } => {
                if low.is_finite() && high.is_finite() && low < high {
                    Ok(())
                } else {
                    Err(DistributionError::InvalidUniform { low, high })
                }
            }
            DistributionKind::Exponential { rate } => {
                if rate.is_finite() && rate > 0.0 {
                    Ok(())
                } else {
                    Err(DistributionError::InvalidExponential { rate })
                }
            }
        }
    }

    /// Probability density at `x`. Zero outside the support.
    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        match *self {
            DistributionKind::Normal { mean, std_dev } => {
                let z = (x - mean) / std_dev;
                (-0.5 * z * z).exp() / (std_dev * (2.0 * PI).sqrt())
            }
            DistributionKind::Uniform { low, high } => {
                if (low..=high).contains(&x) {
                    1.0 / (high - low)
                } else {
                    0.0
                }
            }
            DistributionKind::Exponential { rate } => {
                if x >= 0.0 {
                    rate * (-rate * x).exp()
                } else {
                    0.0
                }
            }
        }
    }

    /// Theoretical mean and standard deviation.
    #[must_use]
    pub fn moments(&self) -> (f64, f64) {
        match *self {
            DistributionKind::Normal { mean, std_dev } => (mean, std_dev),
            DistributionKind::Uniform { low, high } => {
                ((low + high) / 2.0, (high - low) / 12.0_f64.sqrt())
            }
            DistributionKind::Exponential { rate } => (1.0 / rate, 1.0 / rate),
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, DistributionError> {
        Ok(self.sample_sequence(rng, 1)?[0])
    }

    /// Draw `n` independent values, building the sampler once.
    pub fn sample_sequence<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n: usize,
    ) -> Result<Vec<f64>, DistributionError> {
        self.validate()?;

        let values: Vec<f64> = match *self {
            DistributionKind::Normal { mean, std_dev } => {
                let dist = rand_distr::Normal::new(mean, std_dev)
                    .map_err(|_| DistributionError::InvalidNormal { mean, std_dev })?;
                dist.sample_iter(rng).take(n).collect()
            }
            DistributionKind::Uniform { low, high } => {
                let dist = rand::distr::Uniform::new(low, high)
                    .map_err(|_| DistributionError::InvalidUniform { low, high })?;
                dist.sample_iter(rng).take(n).collect()
            }
            DistributionKind::Exponential { rate } => {
                let dist = rand_distr::Exp::new(rate)
                    .map_err(|_| DistributionError::InvalidExponential { rate })?;
                dist.sample_iter(rng).take(n).collect()
            }
        };

        Ok(values)
    }
}
