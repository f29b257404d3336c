// ─────────────────────────────────────────────────────────────────────
// SCPN QED Scan — Line Plots
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! 2D line plots with optional logarithmic y axis.

use crate::segments::visible_segments;
use crate::{render_err, FIGURE_SIZE};
use ndarray::Array1;
use plotters::coord::ranged1d::ValueFormatter;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use qed_types::error::QedResult;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YScale {
    Linear,
    Log,
}

/// One labelled curve.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub color: RGBColor,
    pub x: Array1<f64>,
    pub y: Array1<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>, color: RGBColor, x: Array1<f64>, y: Array1<f64>) -> Self {
        Series {
            label: label.into(),
            color,
            x,
            y,
        }
    }
}

/// Description of a 2D figure. Rendering is separate so figures can be
/// inspected without touching the filesystem.
#[derive(Debug, Clone)]
pub struct LinePlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub y_scale: YScale,
    pub series: Vec<Series>,
}

/// Render `plot` as a PNG at `path`.
pub fn render_line_plot(path: &Path, plot: &LinePlot) -> QedResult<()> {
    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let (x0, x1) = plot.x_range;
    let (y0, y1) = plot.y_range;
    let mut builder = ChartBuilder::on(&root);
    builder
        .caption(&plot.title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(80);

    match plot.y_scale {
        YScale::Log => {
            let mut chart = builder
                .build_cartesian_2d(x0..x1, (y0..y1).log_scale())
                .map_err(render_err)?;
            draw_curves(&mut chart, plot)?;
        }
        YScale::Linear => {
            let mut chart = builder.build_cartesian_2d(x0..x1, y0..y1).map_err(render_err)?;
            draw_curves(&mut chart, plot)?;
        }
    }

    root.present().map_err(render_err)?;
    tracing::info!(path = %path.display(), series = plot.series.len(), "figure written");
    Ok(())
}

fn draw_curves<'a, Y>(
    chart: &mut ChartContext<'a, BitMapBackend<'a>, Cartesian2d<RangedCoordf64, Y>>,
    plot: &LinePlot,
) -> QedResult<()>
where
    Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    chart
        .configure_mesh()
        .x_desc(plot.x_label.as_str())
        .y_desc(plot.y_label.as_str())
        .draw()
        .map_err(render_err)?;

    let (lo, hi) = plot.y_range;
    let mut labelled = 0;
    for series in &plot.series {
        let color = series.color;
        let mut first = true;
        for segment in visible_segments(&series.x, &series.y, lo, hi) {
            let anno = chart
                .draw_series(LineSeries::new(segment, color.stroke_width(2)))
                .map_err(render_err)?;
            if first {
                anno.label(series.label.as_str()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
                first = false;
                labelled += 1;
            }
        }
        if first {
            tracing::warn!(label = %series.label, "series has no visible samples");
        }
    }

    if labelled > 0 {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_err)?;
    }
    Ok(())
}
