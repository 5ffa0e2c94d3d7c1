//! Point-based sizing for the figure, scaled to the output DPI
//!
//! Sizes are specified in typographic points (1/72 in) and converted to pixels,
//! so titles, tick labels and label areas keep the same proportions at any
//! resolution and do not overlap neighbouring sub-plots.

use plotters::style::{FontDesc, FontStyle, IntoFont};

const POINTS_PER_INCH: f64 = 72.0;

const SUPTITLE_PT: f64 = 14.0;
const AXIS_TITLE_PT: f64 = 12.0;
const TICK_LABEL_PT: f64 = 10.0;
const MARGIN_PT: f64 = 6.0;
const CURVE_WIDTH_PT: f64 = 2.0;
const EDGE_WIDTH_PT: f64 = 1.0;
const MARKER_RADIUS_PT: f64 = 3.0;
const BOLD_OFFSET_PT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Pixels per point
    scale: f64,
}

impl Layout {
    #[must_use]
    pub fn for_dpi(dpi: u32) -> Self {
        Self {
            scale: f64::from(dpi) / POINTS_PER_INCH,
        }
    }

    /// Convert points to whole pixels, never below one pixel
    #[must_use]
    pub fn px(&self, points: f64) -> u32 {
        ((points * self.scale).round() as u32).max(1)
    }

    #[must_use]
    pub fn suptitle_font(&self) -> FontDesc<'static> {
        ("sans-serif", f64::from(self.px(SUPTITLE_PT)))
            .into_font()
            .style(FontStyle::Bold)
    }

    /// Height of the band holding the figure title
    #[must_use]
    pub fn suptitle_area(&self) -> u32 {
        self.px(SUPTITLE_PT * 2.0)
    }

    /// Horizontal overstrike distance that thickens the figure title
    #[must_use]
    pub fn bold_offset(&self) -> u32 {
        self.px(BOLD_OFFSET_PT)
    }

    #[must_use]
    pub fn axis_title_font(&self) -> FontDesc<'static> {
        ("sans-serif", f64::from(self.px(AXIS_TITLE_PT))).into_font()
    }

    #[must_use]
    pub fn tick_font(&self) -> FontDesc<'static> {
        ("sans-serif", f64::from(self.px(TICK_LABEL_PT))).into_font()
    }

    #[must_use]
    pub fn margin(&self) -> u32 {
        self.px(MARGIN_PT)
    }

    /// Height reserved below each plot for x tick labels
    #[must_use]
    pub fn x_label_area(&self) -> u32 {
        self.px(TICK_LABEL_PT * 2.2)
    }

    /// Width reserved left of each plot for y tick labels and the y axis title
    #[must_use]
    pub fn y_label_area(&self) -> u32 {
        self.px(TICK_LABEL_PT * 5.0)
    }

    #[must_use]
    pub fn curve_width(&self) -> u32 {
        self.px(CURVE_WIDTH_PT)
    }

    #[must_use]
    pub fn edge_width(&self) -> u32 {
        self.px(EDGE_WIDTH_PT)
    }

    #[must_use]
    pub fn marker_radius(&self) -> u32 {
        self.px(MARKER_RADIUS_PT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_at_72_dpi_are_pixels() {
        let layout = Layout::for_dpi(72);
        assert_eq!(layout.px(10.0), 10);
        assert_eq!(layout.curve_width(), 2);
        assert_eq!(layout.edge_width(), 1);
    }

    #[test]
    fn test_scales_with_dpi() {
        let low = Layout::for_dpi(100);
        let high = Layout::for_dpi(300);

        assert_eq!(high.px(12.0), 50);
        assert_eq!(high.curve_width(), 8);
        assert!(high.margin() >= 3 * low.margin() - 1);
        assert!(high.y_label_area() >= 3 * low.y_label_area() - 1);
    }

    #[test]
    fn test_title_band_fits_title() {
        let layout = Layout::for_dpi(300);
        assert_eq!(layout.suptitle_area(), 117);
        assert_eq!(layout.bold_offset(), 2);
        assert!(layout.suptitle_area() > layout.px(SUPTITLE_PT));
    }

    #[test]
    fn test_never_zero_width() {
        let layout = Layout::for_dpi(1);
        assert_eq!(layout.edge_width(), 1);
        assert_eq!(layout.marker_radius(), 1);
        assert_eq!(layout.bold_offset(), 1);
    }
}
