//! Distribution visualizations: histogram with density overlay, count bars,
//! boxplot.

use plotters::prelude::*;

use super::common::{
    CHART_MARGIN, DEFAULT_HEIGHT, FONT, X_LABEL_AREA, category_label, category_ticks, draw_note,
    fill, format_tick, padded_range, rgb, svg,
};
use crate::Result;
use crate::core::{Distribution, Style};
use crate::stats::{BoxSummary, HistogramBin};

const BAR_HALF_WIDTH: f64 = 0.4;
const BOX_HALF_WIDTH: f64 = 0.25;

pub fn draw_distribution(dist: &Distribution, width: u32) -> Result<String> {
    match dist {
        Distribution::Histogram {
            bins,
            kde,
            style,
            x_label,
            y_label,
            ..
        } => draw_histogram(
            bins,
            kde.as_deref(),
            style,
            x_label.as_deref(),
            y_label.as_deref(),
            width,
        ),
        Distribution::Counts {
            bars,
            style,
            x_label,
            y_label,
            ..
        } => draw_counts(bars, style, x_label.as_deref(), y_label.as_deref(), width),
        Distribution::BoxPlot {
            summary,
            style,
            x_label,
            ..
        } => draw_boxplot(summary.as_ref(), style, x_label.as_deref(), width),
    }
}

/// Draw pre-binned counts with an optional density curve in count units.
pub fn draw_histogram(
    bins: &[HistogramBin],
    kde: Option<&[glam::Vec2]>,
    style: &Style,
    x_label: Option<&str>,
    y_label: Option<&str>,
    width: u32,
) -> Result<String> {
    svg((width, DEFAULT_HEIGHT), |root| {
        let (Some(first), Some(last)) = (bins.first(), bins.last()) else {
            return draw_note(root, "No numeric values to plot");
        };

        let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0) as f64;
        let max_density = kde
            .into_iter()
            .flatten()
            .map(|p| f64::from(p.y))
            .fold(0.0, f64::max);
        let top = max_count.max(max_density).max(1.0) * 1.1;

        let mut chart = ChartBuilder::on(root)
            .margin(CHART_MARGIN)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(50)
            .build_cartesian_2d(padded_range(first.start, last.end), 0.0..top)?;

        let fmt = |v: &f64| format_tick(*v);
        let mut mesh = chart.configure_mesh();
        mesh.x_label_formatter(&fmt)
            .y_label_formatter(&fmt)
            .label_style((FONT, 12));
        if let Some(label) = x_label {
            mesh.x_desc(label);
        }
        if let Some(label) = y_label {
            mesh.y_desc(label);
        }
        mesh.draw()?;

        let bar = fill(style);
        let edge = rgb(style.color);
        chart.draw_series(bins.iter().map(|b| {
            Rectangle::new([(b.start, 0.0), (b.end, b.count as f64)], bar.filled())
        }))?;
        chart.draw_series(
            bins.iter()
                .map(|b| Rectangle::new([(b.start, 0.0), (b.end, b.count as f64)], edge)),
        )?;

        if let Some(curve) = kde {
            chart.draw_series(LineSeries::new(
                curve
                    .iter()
                    .map(|p| (f64::from(p.x), f64::from(p.y))),
                edge.stroke_width(2),
            ))?;
        }
        Ok(())
    })
}

/// One bar per category, in the given order.
pub fn draw_counts(
    bars: &[(String, usize)],
    style: &Style,
    x_label: Option<&str>,
    y_label: Option<&str>,
    width: u32,
) -> Result<String> {
    svg((width, DEFAULT_HEIGHT), |root| {
        if bars.is_empty() {
            return draw_note(root, "No values to plot");
        }

        let labels: Vec<String> = bars.iter().map(|(l, _)| l.clone()).collect();
        let max_count = bars.iter().map(|(_, n)| *n).max().unwrap_or(0) as f64;

        let mut chart = ChartBuilder::on(root)
            .margin(CHART_MARGIN)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(50)
            .build_cartesian_2d(
                -0.5..bars.len() as f64 - 0.5,
                0.0..max_count.max(1.0) * 1.1,
            )?;

        let x_fmt = |v: &f64| category_label(&labels, *v);
        let y_fmt = |v: &f64| format_tick(*v);
        let mut mesh = chart.configure_mesh();
        mesh.x_labels(category_ticks(labels.len()))
            .x_label_formatter(&x_fmt)
            .y_label_formatter(&y_fmt)
            .disable_x_mesh()
            .label_style((FONT, 12));
        if let Some(label) = x_label {
            mesh.x_desc(label);
        }
        if let Some(label) = y_label {
            mesh.y_desc(label);
        }
        mesh.draw()?;

        let color = fill(style);
        chart.draw_series(bars.iter().enumerate().map(|(i, (_, n))| {
            let x = i as f64;
            Rectangle::new(
                [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, *n as f64)],
                color.filled(),
            )
        }))?;
        Ok(())
    })
}

/// Horizontal box from the quartiles, whiskers to the last points within
/// 1.5 IQR, outliers as points.
pub fn draw_boxplot(
    summary: Option<&BoxSummary>,
    style: &Style,
    label: Option<&str>,
    width: u32,
) -> Result<String> {
    svg((width, DEFAULT_HEIGHT), |root| {
        let Some(s) = summary else {
            return draw_note(root, "No numeric values to summarize");
        };

        let lo = s.outliers.iter().copied().fold(s.lower_whisker, f64::min);
        let hi = s.outliers.iter().copied().fold(s.upper_whisker, f64::max);

        let mut chart = ChartBuilder::on(root)
            .margin(CHART_MARGIN)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(20)
            .build_cartesian_2d(padded_range(lo, hi), -1.0..1.0)?;

        let x_fmt = |v: &f64| format_tick(*v);
        let y_fmt = |_: &f64| String::new();
        let mut mesh = chart.configure_mesh();
        mesh.x_label_formatter(&x_fmt)
            .y_label_formatter(&y_fmt)
            .disable_y_mesh()
            .label_style((FONT, 12));
        if let Some(label) = label {
            mesh.x_desc(label);
        }
        mesh.draw()?;

        let edge = rgb(style.color).stroke_width(2);
        let body = fill(style).mix(0.4);
        let w = BOX_HALF_WIDTH;

        chart.draw_series(std::iter::once(Rectangle::new(
            [(s.q1, -w), (s.q3, w)],
            body.filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new([(s.q1, -w), (s.q3, w)], edge)))?;

        let segments = [
            vec![(s.median, -w), (s.median, w)],
            vec![(s.q3, 0.0), (s.upper_whisker, 0.0)],
            vec![(s.q1, 0.0), (s.lower_whisker, 0.0)],
            vec![(s.upper_whisker, -w / 2.0), (s.upper_whisker, w / 2.0)],
            vec![(s.lower_whisker, -w / 2.0), (s.lower_whisker, w / 2.0)],
        ];
        chart.draw_series(segments.into_iter().map(|seg| PathElement::new(seg, edge)))?;

        let dot = rgb(style.color);
        chart.draw_series(
            s.outliers
                .iter()
                .map(|&x| Circle::new((x, 0.0), 3, dot.filled())),
        )?;
        Ok(())
    })
}
