//! Radial visualizations: pie and donut charts.

use std::f64::consts::{FRAC_PI_2, TAU};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::common::{Canvas, DrawResult, FONT, draw_note, rgb, svg};
use crate::Result;
use crate::charts::percent_label;
use crate::core::{self, Radial, Slice};

const SIZE: (u32, u32) = (480, 300);
const SEGMENTS_PER_TURN: f64 = 128.0;
const LEGEND_WIDTH: i32 = 150;
/// Narrowest sweep, in radians, whose label fits inside the ring.
const MIN_INNER_LABEL_SWEEP: f64 = 0.25;
/// Gap between the outer edge and labels placed outside the ring.
const OUTER_LABEL_GAP: f64 = 12.0;

/// Draw a radial chart.
pub fn draw_radial(radial: &Radial) -> Result<String> {
    match radial {
        Radial::Pie { slices, hole, .. } => svg(SIZE, |root| draw_pie(root, slices, *hole)),
    }
}

fn draw_pie(root: &Canvas<'_>, slices: &[Slice], hole: f32) -> DrawResult {
    let total: usize = slices.iter().map(|s| s.count).sum();
    if total == 0 {
        return draw_note(root, "No records in the selected age range");
    }

    let (w, h) = root.dim_in_pixel();
    let plot_w = (w as i32 - LEGEND_WIDTH).max(h as i32);
    let center = (plot_w / 2, h as i32 / 2);
    let radius = f64::from(plot_w.min(h as i32)) * 0.42;
    let inner = radius * f64::from(hole);

    let inside = TextStyle::from((FONT, 12).into_font())
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let outside = inside.color(&BLACK);

    let mut start = -FRAC_PI_2;
    for (i, slice) in slices.iter().enumerate() {
        if slice.count == 0 {
            continue;
        }
        let sweep = slice.count as f64 / total as f64 * TAU;
        let color = rgb(core::Color::palette(i));

        root.draw(&Polygon::new(
            annular_sector(center, inner, radius, start, sweep),
            color.filled(),
        ))?;

        // Slivers too thin for their label get it just outside the ring.
        let (r, style) = if sweep > MIN_INNER_LABEL_SWEEP {
            ((inner + radius) * 0.5, &inside)
        } else {
            (radius + OUTER_LABEL_GAP, &outside)
        };
        root.draw(&Text::new(
            percent_label(slice.percent),
            polar(center, r, start + sweep * 0.5),
            style.clone(),
        ))?;
        start += sweep;
    }

    draw_legend(root, slices, plot_w + 10)
}

fn draw_legend(root: &Canvas<'_>, slices: &[Slice], x: i32) -> DrawResult {
    let style = TextStyle::from((FONT, 12).into_font()).pos(Pos::new(HPos::Left, VPos::Center));
    for (i, slice) in slices.iter().enumerate() {
        let y = 24 + i as i32 * 20;
        root.draw(&Rectangle::new(
            [(x, y - 6), (x + 12, y + 6)],
            rgb(core::Color::palette(i)).filled(),
        ))?;
        root.draw(&Text::new(slice.label.clone(), (x + 18, y), style.clone()))?;
    }
    Ok(())
}

fn polar(center: (i32, i32), r: f64, angle: f64) -> (i32, i32) {
    (
        center.0 + (r * angle.cos()).round() as i32,
        center.1 + (r * angle.sin()).round() as i32,
    )
}

/// Outline of a ring segment; a zero inner radius gives a pie wedge.
fn annular_sector(
    center: (i32, i32),
    inner: f64,
    outer: f64,
    start: f64,
    sweep: f64,
) -> Vec<(i32, i32)> {
    let steps = ((sweep / TAU) * SEGMENTS_PER_TURN).ceil().max(1.0) as usize;
    let angle = |j: usize| start + sweep * j as f64 / steps as f64;

    let mut points: Vec<(i32, i32)> = (0..=steps)
        .map(|j| polar(center, outer, angle(j)))
        .collect();
    if inner > 0.0 {
        points.extend((0..=steps).rev().map(|j| polar(center, inner, angle(j))));
    } else {
        points.push(center);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dash::RadialBuilder;

    #[test]
    fn donut_has_slices_labels_and_legend() {
        let radial = RadialBuilder::new()
            .pie(vec![("Normal weight".into(), 3), ("Obese".into(), 1)])
            .hole(0.45)
            .build();
        let out = draw_radial(&radial).unwrap();

        assert_eq!(out.matches("<polygon").count(), 2);
        assert!(out.contains("75.0%"));
        assert!(out.contains("Normal weight"));
        assert!(out.contains("Obese"));
    }

    #[test]
    fn thin_slices_are_labeled_outside_the_ring() {
        let radial = RadialBuilder::new()
            .pie(vec![("Normal weight".into(), 97), ("Underweight".into(), 3)])
            .hole(0.45)
            .build();
        let out = draw_radial(&radial).unwrap();

        assert!(out.contains("97.0%"));
        assert!(out.contains("3.0%"));
    }

    #[test]
    fn empty_donut_draws_a_note() {
        let radial = RadialBuilder::new().pie(vec![]).build();
        let out = draw_radial(&radial).unwrap();

        assert!(out.contains("No records in the selected age range"));
    }

    #[test]
    fn sector_closes_on_the_inner_ring() {
        let ring = annular_sector((0, 0), 5.0, 10.0, 0.0, TAU / 4.0);
        let wedge = annular_sector((0, 0), 0.0, 10.0, 0.0, TAU / 4.0);

        assert_eq!(ring.len(), 2 * wedge.len() - 2);
        assert_eq!(ring[0], (10, 0));
        assert_eq!(*ring.last().unwrap(), (5, 0));
        assert_eq!(*wedge.last().unwrap(), (0, 0));
    }
}
