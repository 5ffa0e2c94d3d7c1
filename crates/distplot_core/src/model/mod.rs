//! Distribution types and drawn samples

mod distribution;
mod sample;

pub use distribution::DistributionKind;
pub use sample::DistributionSample;
