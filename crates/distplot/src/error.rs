use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while rendering or saving the figure
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save figure to {path}: {reason}")]
    FileSave { path: PathBuf, reason: String },

    #[error("Output directory {0} does not exist")]
    OutputLocation(PathBuf),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = core::result::Result<T, PlotError>;
