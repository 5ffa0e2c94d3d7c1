//! Writes the rendered figure to a PNG file

use std::path::{Path, PathBuf};

use distplot_core::DistributionSample;
use plotters::prelude::*;

use crate::error::{PlotError, Result};
use crate::figure::{FigureConfig, render_figure};

/// Line printed to standard output once the file has been written
#[must_use]
pub fn confirmation_message(path: &Path) -> String {
    format!("Figure saved as {}", path.display())
}

/// Fail early when the directory that should hold the file is missing.
pub fn check_output_location(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => {
            Err(PlotError::OutputLocation(dir.to_path_buf()))
        }
        _ => Ok(()),
    }
}

/// Render `samples` and save the figure as a PNG at `config.output_path`.
///
/// Returns the path that was written.
pub fn save_figure(samples: &[DistributionSample], config: &FigureConfig) -> Result<PathBuf> {
    let path = &config.output_path;
    check_output_location(path)?;

    let (width, height) = config.pixel_size();
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();

    render_figure(&root, samples, config)?;
    tracing::debug!(width, height, "Figure rendered");

    root.present().map_err(|e| PlotError::FileSave {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    tracing::info!(
        "Figure written (path={}, size={}x{})",
        path.display(),
        width,
        height
    );
    Ok(path.clone())
}
