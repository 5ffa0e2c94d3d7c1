//! Sampling and summary statistics for distribution plots
//!
//! This crate draws reproducible samples from the standard Normal, Uniform and
//! Exponential distributions and computes what is needed to plot them:
//! - Seeded sampling with a fixed generator stream
//! - Closed-form probability density functions
//! - Boxplot statistics (quartiles, Tukey whiskers, outliers)
//! - Density-normalised histograms and evaluation grids
//!
//! ```ignore
//! use distplot_core::{SampleConfig, generate_distributions};
//!
//! let samples = generate_distributions(&SampleConfig::default())?;
//! for sample in &samples {
//!     let curve = sample.density_curve(100);
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod model;
pub mod sampler;
pub mod stats;

#[cfg(test)]
mod tests;

pub use config::SampleConfig;
pub use model::{DistributionKind, DistributionSample};
pub use sampler::generate_distributions;
