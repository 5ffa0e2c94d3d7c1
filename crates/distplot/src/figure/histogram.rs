use distplot_core::DistributionSample;
use distplot_core::stats::Histogram;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::{FigureConfig, HISTOGRAM_ALPHA, LIGHT_SKY_BLUE, Layout, padded_range};
use crate::error::{PlotError, Result};

/// Fill and edge styles of the bars; both share the bar transparency.
fn bar_styles(layout: &Layout) -> (ShapeStyle, ShapeStyle) {
    let fill = LIGHT_SKY_BLUE.mix(HISTOGRAM_ALPHA).filled();
    let edge = BLACK
        .mix(HISTOGRAM_ALPHA)
        .stroke_width(layout.edge_width());
    (fill, edge)
}

/// Draw the density histogram with the theoretical PDF on top.
pub(super) fn draw_histogram<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    sample: &DistributionSample,
    config: &FigureConfig,
    layout: &Layout,
) -> Result<()> {
    let hist = Histogram::from_samples(&sample.data, config.bins).ok_or_else(|| {
        PlotError::InvalidData(format!(
            "cannot bin {} sample into {} bins",
            sample.name(),
            config.bins
        ))
    })?;
    let curve = sample.density_curve(config.curve_points);

    let first_edge = hist.edges[0];
    let last_edge = hist.edges[hist.bins()];
    let (x_min, x_max) = padded_range(first_edge, last_edge, 0.05);

    let curve_max = curve.iter().map(|&(_, y)| y).fold(0.0, f64::max);
    let y_max = hist.max_density().max(curve_max) * 1.05;

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("{} data histogram and PDF", sample.name()),
            layout.axis_title_font(),
        )
        .margin(layout.margin())
        .x_label_area_size(layout.x_label_area())
        .y_label_area_size(layout.y_label_area())
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .y_desc("Density")
        .axis_desc_style(layout.tick_font())
        .label_style(layout.tick_font())
        .axis_style(BLACK.stroke_width(layout.edge_width()))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let (fill, edge) = bar_styles(layout);
    chart
        .draw_series(
            hist.bars()
                .map(|(left, right, density)| Rectangle::new([(left, 0.0), (right, density)], fill)),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(
            hist.bars()
                .map(|(left, right, density)| Rectangle::new([(left, 0.0), (right, density)], edge)),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(
            curve,
            RED.stroke_width(layout.curve_width()),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}
