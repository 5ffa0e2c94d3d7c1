//! Summary statistics behind the plots
//!
//! - `boxplot` - quartiles, whiskers and outliers
//! - `histogram` - equal-width density histograms
//! - `grid` - evenly spaced evaluation points

mod boxplot;
mod grid;
mod histogram;

pub use boxplot::{BoxplotStats, WHISKER_IQR_FACTOR, quantile_sorted};
pub use grid::linspace;
pub use histogram::Histogram;
