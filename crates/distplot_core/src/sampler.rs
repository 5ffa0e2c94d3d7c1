//! Seeded sample generation for the plotted distributions

use rand::{Rng, SeedableRng};

use crate::config::SampleConfig;
use crate::error::Result;
use crate::model::{DistributionKind, DistributionSample};

/// Distributions in plotting order
pub const STANDARD_DISTRIBUTIONS: [DistributionKind; 3] = [
    DistributionKind::STANDARD_NORMAL,
    DistributionKind::STANDARD_UNIFORM,
    DistributionKind::STANDARD_EXPONENTIAL,
];

/// Draw one sample per standard distribution from a generator seeded with `config.seed`.
///
/// `StdRng` keeps the stream identical across platforms for a given `rand` version.
pub fn generate_distributions(config: &SampleConfig) -> Result<Vec<DistributionSample>> {
    config.validate()?;
    let mut rng = rand::rngs::StdRng::seed_from_u64(config.seed);
    sample_all(&mut rng, &STANDARD_DISTRIBUTIONS, config.sample_size)
}

/// Draw `sample_size` values from each distribution in order, sharing one generator.
pub fn sample_all<R: Rng + ?Sized>(
    rng: &mut R,
    kinds: &[DistributionKind],
    sample_size: usize,
) -> Result<Vec<DistributionSample>> {
    kinds
        .iter()
        .map(|kind| -> Result<DistributionSample> {
            let data = kind.sample_sequence(rng, sample_size)?;
            Ok(DistributionSample::new(*kind, data))
        })
        .collect()
}
