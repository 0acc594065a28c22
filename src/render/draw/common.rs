//! Common drawing utilities shared across chart types.

use std::ops::Range;

use error_stack::ResultExt;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

pub use crate::core::{CHART_MARGIN, DEFAULT_HEIGHT, X_LABEL_AREA};
use crate::core::Style;
use crate::{DashError, Result};

pub const FONT: &str = "sans-serif";
const NOTE_GREY: RGBColor = RGBColor(110, 110, 110);

pub type Canvas<'a> = DrawingArea<SVGBackend<'a>, Shift>;
pub type DrawResult = std::result::Result<(), DrawingAreaErrorKind<std::io::Error>>;

/// Run `draw` on a fresh white canvas and return the SVG markup.
pub fn svg<F>(size: (u32, u32), draw: F) -> Result<String>
where
    F: FnOnce(&Canvas<'_>) -> DrawResult,
{
    let mut out = String::new();
    {
        let root = SVGBackend::with_string(&mut out, size).into_drawing_area();
        root.fill(&WHITE).change_context(DashError::Render)?;
        draw(&root).change_context(DashError::Render)?;
        root.present().change_context(DashError::Render)?;
    }
    Ok(out)
}

pub fn rgb(c: crate::core::Color) -> RGBColor {
    let (r, g, b) = c.to_rgb8();
    RGBColor(r, g, b)
}

/// Fill color of a style, with its opacity applied.
pub fn fill(style: &Style) -> RGBAColor {
    rgb(style.color).mix(f64::from((style.color.a * style.opacity).clamp(0.0, 1.0)))
}

/// Centered message for charts with nothing to show.
pub fn draw_note(root: &Canvas<'_>, message: &str) -> DrawResult {
    let (w, h) = root.dim_in_pixel();
    let style = TextStyle::from((FONT, 14).into_font())
        .color(&NOTE_GREY)
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw(&Text::new(
        message.to_string(),
        (w as i32 / 2, h as i32 / 2),
        style,
    ))
}

/// Calculate nice tick step for given range.
pub fn nice_step(range: f64, target_ticks: usize) -> f64 {
    if range <= 0.0 || !range.is_finite() {
        return 1.0;
    }
    let rough = range / target_ticks.max(1) as f64;
    let exp = rough.log10().floor();
    let base = 10f64.powf(exp);

    let normalized = rough / base;
    let nice = if normalized <= 1.5 {
        1.0
    } else if normalized <= 3.0 {
        2.0
    } else if normalized <= 7.0 {
        5.0
    } else {
        10.0
    };

    nice * base
}

/// Axis range covering `[min, max]`, widened outward to whole tick steps.
pub fn padded_range(min: f64, max: f64) -> Range<f64> {
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    if max - min <= f64::EPSILON {
        return (min - 1.0)..(max + 1.0);
    }
    let step = nice_step(max - min, 8);
    let lo = (min / step).floor() * step;
    let hi = (max / step).ceil() * step;
    lo..hi
}

/// Format tick value for display.
pub fn format_tick(val: f64) -> String {
    if val.abs() < 0.001 && val != 0.0 {
        format!("{:.1e}", val)
    } else if val.abs() >= 100_000.0 {
        format!("{:.1e}", val)
    } else if val.fract().abs() < 0.001 {
        format!("{:.0}", val)
    } else if val.abs() < 1.0 {
        format!("{:.2}", val)
    } else {
        format!("{:.1}", val)
    }
}

/// Label for a categorical axis position: the category at whole positions,
/// nothing in between.
pub fn category_label(labels: &[String], pos: f64) -> String {
    let rounded = pos.round();
    if (pos - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

/// Enough requested labels that every whole position gets a tick.
pub fn category_ticks(n: usize) -> usize {
    2 * n + 2
}
