use distplot_core::DistributionSample;
use distplot_core::stats::BoxplotStats;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::{Layout, MEDIAN_ORANGE, padded_range};
use crate::error::{PlotError, Result};

/// Vertical position of the single box
const BOX_CENTER: f64 = 1.0;
const BOX_HALF_HEIGHT: f64 = 0.25;
/// Whisker caps are half the box height
const CAP_HALF_HEIGHT: f64 = 0.125;

/// Draw a horizontal boxplot of the raw sample.
pub(super) fn draw_boxplot<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    sample: &DistributionSample,
    layout: &Layout,
) -> Result<()> {
    let stats = BoxplotStats::from_samples(&sample.data).ok_or_else(|| {
        PlotError::InvalidData(format!("{} sample is empty or contains NaN", sample.name()))
    })?;

    let (min, max) = stats.extent();
    let (x_min, x_max) = padded_range(min, max, 0.05);

    let mut chart = ChartBuilder::on(area)
        .caption(format!("{} data boxplot", sample.name()), layout.axis_title_font())
        .margin(layout.margin())
        .x_label_area_size(layout.x_label_area())
        .y_label_area_size(layout.y_label_area())
        .build_cartesian_2d(x_min..x_max, 0.5f64..1.5f64)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .y_labels(3)
        .y_label_formatter(&|y| {
            if (*y - BOX_CENTER).abs() < 1e-9 {
                "1".to_string()
            } else {
                String::new()
            }
        })
        .label_style(layout.tick_font())
        .axis_style(BLACK.stroke_width(layout.edge_width()))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let edge = BLACK.stroke_width(layout.edge_width());
    let box_low = BOX_CENTER - BOX_HALF_HEIGHT;
    let box_high = BOX_CENTER + BOX_HALF_HEIGHT;

    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(stats.q1, box_low), (stats.q3, box_high)],
            edge,
        )))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let whiskers = [
        vec![(stats.whisker_low, BOX_CENTER), (stats.q1, BOX_CENTER)],
        vec![(stats.q3, BOX_CENTER), (stats.whisker_high, BOX_CENTER)],
        vec![
            (stats.whisker_low, BOX_CENTER - CAP_HALF_HEIGHT),
            (stats.whisker_low, BOX_CENTER + CAP_HALF_HEIGHT),
        ],
        vec![
            (stats.whisker_high, BOX_CENTER - CAP_HALF_HEIGHT),
            (stats.whisker_high, BOX_CENTER + CAP_HALF_HEIGHT),
        ],
    ];
    chart
        .draw_series(
            whiskers
                .into_iter()
                .map(|points| PathElement::new(points, edge)),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(stats.median, box_low), (stats.median, box_high)],
            MEDIAN_ORANGE.stroke_width(layout.edge_width()),
        )))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let radius = layout.marker_radius();
    chart
        .draw_series(
            stats
                .outliers
                .iter()
                .map(|&x| Circle::new((x, BOX_CENTER), radius, edge)),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}
