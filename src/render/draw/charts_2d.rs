//! 2D chart rendering: line charts and scatter plots.

use plotters::prelude::*;

use super::common::{
    CHART_MARGIN, DEFAULT_HEIGHT, FONT, X_LABEL_AREA, category_label, category_ticks, draw_note,
    fill, format_tick, padded_range, rgb, svg,
};
use crate::Result;
use crate::core::{Geometry2D, Graph2D, Scale};

/// Draw a 2D plot with multiple layers (lines, points).
pub fn draw_2d_plot(graph: &Graph2D, width: u32) -> Result<String> {
    let height = graph.height.unwrap_or(DEFAULT_HEIGHT);
    svg((width, height), |root| {
        let Some((min, max)) = graph.bounds() else {
            return draw_note(root, "No data for the current selection");
        };

        let x_range = padded_range(f64::from(min[0]), f64::from(max[0]));
        let (y_range, y_labels, y_area) = match &graph.y_scale {
            Scale::Categorical(labels) => {
                let longest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
                (
                    -0.5..labels.len() as f64 - 0.5,
                    category_ticks(labels.len()),
                    (longest as u32 * 7 + 16).max(50),
                )
            }
            Scale::Linear => (padded_range(f64::from(min[1]), f64::from(max[1])), 6, 50),
        };

        let mut chart = ChartBuilder::on(root)
            .margin(CHART_MARGIN)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(y_area)
            .build_cartesian_2d(x_range, y_range)?;

        let x_fmt = |v: &f64| format_tick(*v);
        let y_fmt = |v: &f64| match &graph.y_scale {
            Scale::Categorical(labels) => category_label(labels, *v),
            Scale::Linear => format_tick(*v),
        };
        let mut mesh = chart.configure_mesh();
        mesh.x_labels(8)
            .y_labels(y_labels)
            .x_label_formatter(&x_fmt)
            .y_label_formatter(&y_fmt)
            .label_style((FONT, 12));
        if let Some(label) = &graph.x_label {
            mesh.x_desc(label.as_str());
        }
        if let Some(label) = &graph.y_label {
            mesh.y_desc(label.as_str());
        }
        mesh.draw()?;

        for layer in &graph.layers {
            let points = layer
                .xy
                .iter()
                .filter(|p| p.is_finite())
                .map(|p| (f64::from(p.x), f64::from(p.y)));

            match layer.geometry {
                Geometry2D::Line => {
                    let stroke = rgb(layer.style.color)
                        .stroke_width(layer.style.size.round().max(1.0) as u32);
                    let anno = chart.draw_series(LineSeries::new(points, stroke))?;
                    if let Some(label) = &layer.label {
                        anno.label(label.as_str()).legend(move |(x, y)| {
                            PathElement::new(vec![(x, y), (x + 20, y)], stroke)
                        });
                    }
                }
                Geometry2D::Points => {
                    let color = fill(&layer.style);
                    let radius = layer.style.size.round().max(1.0) as u32;
                    let anno = chart
                        .draw_series(points.map(|p| Circle::new(p, radius, color.filled())))?;
                    if let Some(label) = &layer.label {
                        anno.label(label.as_str())
                            .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));
                    }
                }
            }
        }

        if graph.layers.iter().any(|l| l.label.is_some()) {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .label_font((FONT, 12))
                .draw()?;
        }
        Ok(())
    })
}
