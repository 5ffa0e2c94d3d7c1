//! Figure rendering with [`plotters`]
//!
//! The figure is a 2 x 3 grid under a bold title: one column per distribution,
//! a horizontal boxplot in the top row and a density histogram with the
//! theoretical PDF in the bottom row.

mod boxplot;
mod histogram;
mod layout;

use std::path::PathBuf;

use distplot_core::DistributionSample;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::{PlotError, Result};

pub use layout::Layout;

pub const DEFAULT_TITLE: &str =
    "Boxplots and normalized histograms with probability density functions";
pub const DEFAULT_OUTPUT: &str = "boxplots-for-popular-distributions.png";

/// Grid shape as (rows, columns)
pub const GRID: (usize, usize) = (2, 3);

const LIGHT_SKY_BLUE: RGBColor = RGBColor(135, 206, 250);
/// Median line colour of the box
const MEDIAN_ORANGE: RGBColor = RGBColor(255, 127, 14);
const HISTOGRAM_ALPHA: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct FigureConfig {
    /// Figure width in inches
    pub width_in: f64,
    /// Figure height in inches
    pub height_in: f64,
    pub dpi: u32,
    pub bins: usize,
    /// Points on each PDF curve
    pub curve_points: usize,
    pub title: String,
    pub output_path: PathBuf,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width_in: 12.0,
            height_in: 7.0,
            dpi: 300,
            bins: 40,
            curve_points: 100,
            title: DEFAULT_TITLE.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl FigureConfig {
    /// Bitmap size in pixels
    #[must_use]
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (self.width_in * dpi).round() as u32,
            (self.height_in * dpi).round() as u32,
        )
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::for_dpi(self.dpi)
    }
}

/// Render every sample into its column of the grid.
///
/// Samples beyond the third column are rejected rather than silently dropped.
pub fn render_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    samples: &[DistributionSample],
    config: &FigureConfig,
) -> Result<()> {
    let (rows, cols) = GRID;
    if samples.is_empty() || samples.len() > cols {
        return Err(PlotError::InvalidData(format!(
            "expected 1 to {cols} distributions, got {}",
            samples.len()
        )));
    }

    let layout = config.layout();

    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let (title_band, body) = root.split_vertically(layout.suptitle_area());
    draw_suptitle(&title_band, &config.title, &layout)?;

    let cells = body.split_evenly((rows, cols));

    for (col, sample) in samples.iter().enumerate() {
        tracing::debug!(distribution = sample.name(), column = col, "Drawing sub-plots");
        boxplot::draw_boxplot(&cells[col], sample, &layout)?;
        histogram::draw_histogram(&cells[cols + col], sample, config, &layout)?;
    }

    Ok(())
}

/// Draw the figure title centred in `band`.
///
/// Font matching may hand back the regular face for a bold request, so the
/// text is overstruck with a small horizontal offset to keep it heavy.
fn draw_suptitle<DB: DrawingBackend>(
    band: &DrawingArea<DB, Shift>,
    title: &str,
    layout: &Layout,
) -> Result<()> {
    let (width, height) = band.dim_in_pixel();
    let style = TextStyle::from(layout.suptitle_font()).pos(Pos::new(HPos::Center, VPos::Center));
    let center = ((width / 2) as i32, (height / 2) as i32);

    for dx in 0..=layout.bold_offset() as i32 {
        band.draw_text(title, &style, (center.0 + dx, center.1))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }
    Ok(())
}

/// Whether text can be laid out with the system fonts; rendering tests skip otherwise.
#[cfg(test)]
pub(crate) fn fonts_available() -> bool {
    let mut buffer = vec![255u8; 64 * 64 * 3];
    let root = BitMapBackend::with_buffer(&mut buffer, (64, 64)).into_drawing_area();
    let ok = root.titled("Ag", ("sans-serif", 12.0).into_font()).is_ok();
    ok
}

/// Pad an axis range by `fraction` of its span on both sides.
///
/// A zero-width range is widened to one unit.
fn padded_range(min: f64, max: f64, fraction: f64) -> (f64, f64) {
    let span = max - min;
    if span <= 0.0 {
        return (min - 0.5, max + 0.5);
    }
    (min - span * fraction, max + span * fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pixel_size() {
        let config = FigureConfig::default();
        assert_eq!(config.pixel_size(), (3600, 2100));
        assert_eq!(config.bins, 40);
        assert_eq!(config.curve_points, 100);
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_pixel_size_follows_dpi() {
        let config = FigureConfig {
            dpi: 100,
            ..FigureConfig::default()
        };
        assert_eq!(config.pixel_size(), (1200, 700));
    }

    /// Dark pixels (any channel below 128) in an RGB buffer
    fn dark_pixels(buffer: &[u8]) -> usize {
        buffer
            .chunks(3)
            .filter(|px| px.iter().any(|&c| c < 128))
            .count()
    }

    #[test]
    fn test_suptitle_is_overstruck() {
        if !fonts_available() {
            eprintln!("skipping: no system fonts for text rendering");
            return;
        }
        let (width, height) = (600, 60);
        let title = "Boxplots and normalized histograms";

        let mut bold = vec![255u8; width * height * 3];
        {
            let band = BitMapBackend::with_buffer(&mut bold, (width as u32, height as u32))
                .into_drawing_area();
            draw_suptitle(&band, title, &Layout::for_dpi(144)).unwrap();
            band.present().unwrap();
        }

        let mut single = vec![255u8; width * height * 3];
        {
            let band = BitMapBackend::with_buffer(&mut single, (width as u32, height as u32))
                .into_drawing_area();
            let style = TextStyle::from(Layout::for_dpi(144).suptitle_font())
                .pos(Pos::new(HPos::Center, VPos::Center));
            band.draw_text(title, &style, (300, 30)).unwrap();
            band.present().unwrap();
        }

        assert!(dark_pixels(&single) > 0);
        assert!(dark_pixels(&bold) > dark_pixels(&single));
    }

    #[test]
    fn test_padded_range() {
        assert_eq!(padded_range(0.0, 10.0, 0.05), (-0.5, 10.5));
        assert_eq!(padded_range(2.0, 2.0, 0.05), (1.5, 2.5));
    }

    #[test]
    fn test_render_rejects_wrong_column_count() {
        let mut buffer = vec![0u8; 30 * 20 * 3];
        let root = BitMapBackend::with_buffer(&mut buffer, (30, 20)).into_drawing_area();
        let config = FigureConfig::default();

        let result = render_figure(&root, &[], &config);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));

        let sample = DistributionSample::new(
            distplot_core::DistributionKind::STANDARD_NORMAL,
            vec![0.0, 1.0],
        );
        let four = vec![sample; 4];
        let result = render_figure(&root, &four, &config);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }
}
