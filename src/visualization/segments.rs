//! Time vs segments line chart

use crate::config::ChartConfig;
use crate::error::{ReportError, Result};
use crate::records::{RecordSet, Series};
use plotters::coord::types::RangedCoordf64;
use plotters::element::ComposedElement;
use plotters::prelude::*;
use std::ops::Range;

/// Same as `plotters_backend::BackendCoord`, which plotters does not re-export
type BackendCoord = (i32, i32);

type SegmentsChart<'a, 'b> = ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

pub struct SegmentsPlotter;

impl SegmentsPlotter {
    /// Plot one line per algorithm and write the PNG to `config.output_path`.
    ///
    /// The output directory is not created; a missing one fails on present.
    /// Points with a non-finite coordinate are left out.
    pub fn plot(records: &RecordSet, config: &ChartConfig) -> Result<()> {
        config.validate()?;

        let series = records.series();
        let x_range = x_range(&series);
        let y_range = y_range(&series);

        let root = BitMapBackend::new(&config.output_path, (config.width, config.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(plot_error)?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(15);
        if config.draw_text {
            builder
                .caption(&config.title, ("sans-serif", 30))
                .x_label_area_size(50)
                .y_label_area_size(70);
        }
        let mut chart = builder
            .build_cartesian_2d(x_range, y_range)
            .map_err(plot_error)?;

        if config.draw_text {
            chart
                .configure_mesh()
                .x_desc(config.x_label.as_str())
                .y_desc(config.y_label.as_str())
                .x_label_formatter(&|x| format!("{:.0}", x))
                .y_label_formatter(&|y| format!("{:.2}", y))
                .draw()
                .map_err(plot_error)?;
        }

        for (idx, s) in series.iter().enumerate() {
            draw_series(&mut chart, s, Palette99::pick(idx).to_rgba())?;
        }

        if config.draw_text && !series.is_empty() {
            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(plot_error)?;
        }

        root.present().map_err(|e| {
            ReportError::Plot(format!(
                "failed to write {}: {}",
                config.output_path.display(),
                e
            ))
        })?;

        Ok(())
    }
}

fn draw_series<'a, 'b: 'a>(chart: &mut SegmentsChart<'a, 'b>, series: &Series, color: RGBAColor) -> Result<()> {
    let points: Vec<(f64, f64)> = series
        .points
        .iter()
        .copied()
        .filter(|&(x, y)| x.is_finite() && y.is_finite())
        .collect();

    chart
        .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
        .map_err(plot_error)?
        .label(series.label.as_str())
        .legend(move |pos| legend_glyph(pos, color));

    chart
        .draw_series(points.iter().map(|&p| Circle::new(p, 4, color.filled())))
        .map_err(plot_error)?;

    tracing::debug!(alg = %series.label, points = points.len(), "Drew series");
    Ok(())
}

/// Legend sample: a short line with the series marker on it
fn legend_glyph<DB: DrawingBackend>(
    (x, y): BackendCoord,
    color: RGBAColor,
) -> ComposedElement<BackendCoord, DB, PathElement<BackendCoord>, Circle<BackendCoord, i32>> {
    EmptyElement::at((x, y))
        + PathElement::new(vec![(0, 0), (20, 0)], color)
        + Circle::new((10, 0), 4, color.filled())
}

fn plot_error<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::Plot(err.to_string())
}

/// Segment axis: data extent padded by 10% on both sides
fn x_range(series: &[Series]) -> Range<f64> {
    let (min, max) = extent(series.iter().flat_map(|s| s.points.iter().map(|p| p.0)));
    match (min, max) {
        (Some(min), Some(max)) if max > min => {
            let pad = (max - min) * 0.1;
            if (min - pad).is_finite() && (max + pad).is_finite() {
                (min - pad)..(max + pad)
            } else {
                min..max
            }
        }
        (Some(v), Some(_)) => (v - 1.0)..(v + 1.0),
        _ => 0.0..1.0,
    }
}

/// Time axis: zero up to the largest time plus 10%
fn y_range(series: &[Series]) -> Range<f64> {
    let (_, max) = extent(series.iter().flat_map(|s| s.points.iter().map(|p| p.1)));
    match max {
        Some(max) if max > 0.0 => {
            let top = max * 1.1;
            0.0..(if top.is_finite() { top } else { max })
        }
        _ => 0.0..1.0,
    }
}

/// Smallest and largest finite value
fn extent(values: impl Iterator<Item = f64>) -> (Option<f64>, Option<f64>) {
    values
        .filter(|v| v.is_finite())
        .fold((None, None), |(min, max), v| {
            (
                Some(min.map_or(v, |m: f64| m.min(v))),
                Some(max.map_or(v, |m: f64| m.max(v))),
            )
        })
}
