//! Boxplots and density histograms for popular distributions
//!
//! Draws seeded samples from the standard Normal, Uniform and Exponential
//! distributions, renders a horizontal boxplot and a density histogram with
//! the theoretical PDF for each, and saves the figure as a PNG.

pub mod error;
pub mod figure;
pub mod logging;
pub mod output;

use std::io::Write;

use distplot_core::stats::quantile_sorted;
use distplot_core::{DistributionSample, SampleConfig, generate_distributions};

pub use error::PlotError;
pub use figure::FigureConfig;
pub use logging::init_logging;

/// Generate the samples, save the figure and print the confirmation line.
pub fn run(sample_config: &SampleConfig, figure_config: &FigureConfig) -> color_eyre::Result<()> {
    run_with_output(sample_config, figure_config, &mut std::io::stdout().lock())
}

/// Like [`run`], writing the confirmation line to `out`.
///
/// Nothing is written to `out` unless the figure was saved.
pub fn run_with_output<W: Write>(
    sample_config: &SampleConfig,
    figure_config: &FigureConfig,
    out: &mut W,
) -> color_eyre::Result<()> {
    let samples = generate_distributions(sample_config)?;
    tracing::info!(
        "Generated {} samples of size {} (seed={})",
        samples.len(),
        sample_config.sample_size,
        sample_config.seed
    );
    for sample in &samples {
        log_sample_summary(sample);
    }

    let path = output::save_figure(&samples, figure_config)?;
    writeln!(out, "{}", output::confirmation_message(&path))?;

    Ok(())
}

fn log_sample_summary(sample: &DistributionSample) {
    let mut sorted = sample.data.clone();
    sorted.sort_by(f64::total_cmp);

    let (Some(min), Some(max), Some(median)) = (
        sorted.first(),
        sorted.last(),
        quantile_sorted(&sorted, 0.5),
    ) else {
        return;
    };

    tracing::debug!(
        distribution = sample.name(),
        n = sample.len(),
        min,
        max,
        median,
        "Sample summary"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::fonts_available;

    #[test]
    fn test_missing_directory_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = FigureConfig {
            output_path: dir.path().join("missing").join("figure.png"),
            ..FigureConfig::default()
        };
        let mut out = Vec::new();

        let result = run_with_output(&SampleConfig::default(), &config, &mut out);

        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_unwritable_output_prints_nothing() {
        // The output path is an existing directory, so the PNG write itself fails
        let dir = tempfile::tempdir().unwrap();
        let config = FigureConfig {
            dpi: 50,
            output_path: dir.path().to_path_buf(),
            ..FigureConfig::default()
        };
        let mut out = Vec::new();

        let result = run_with_output(&SampleConfig::default(), &config, &mut out);

        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_success_prints_confirmation_line() {
        if !fonts_available() {
            eprintln!("skipping: no system fonts for text rendering");
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let config = FigureConfig {
            dpi: 50,
            output_path: dir.path().join(figure::DEFAULT_OUTPUT),
            ..FigureConfig::default()
        };
        let mut out = Vec::new();

        run_with_output(&SampleConfig::default(), &config, &mut out).unwrap();

        let expected = format!("Figure saved as {}\n", config.output_path.display());
        assert_eq!(String::from_utf8(out).unwrap(), expected);
        assert!(config.output_path.is_file());
    }
}
