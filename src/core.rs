use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::stats::{BoxSummary, CategoricalSummary, HistogramBin, NumericSummary};

/// Rendered chart height in pixels when a plot does not set its own.
pub const DEFAULT_HEIGHT: u32 = 360;
/// Outer margin of a drawn chart, in pixels.
pub const CHART_MARGIN: u32 = 12;
/// Height of the x axis label area, in pixels.
pub const X_LABEL_AREA: u32 = 40;

/// Common metadata for all plot types
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotMeta {
    /// Title displayed at the top of the plot
    pub title: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// 8-bit RGB components.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (c(self.r), c(self.g), c(self.b))
    }

    /// Cycled categorical palette, one color per series or slice.
    pub fn palette(i: usize) -> Self {
        PALETTE[i % PALETTE.len()]
    }
}

const PALETTE: [Color; 8] = [
    Color::rgb(0.122, 0.467, 0.706),
    Color::rgb(1.0, 0.498, 0.055),
    Color::rgb(0.173, 0.627, 0.173),
    Color::rgb(0.839, 0.153, 0.157),
    Color::rgb(0.580, 0.404, 0.741),
    Color::rgb(0.549, 0.337, 0.294),
    Color::rgb(0.890, 0.467, 0.761),
    Color::rgb(0.498, 0.498, 0.498),
];

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: Color,
    pub size: f32,    // line width / point radius / etc
    pub opacity: f32, // multiplied into alpha
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color::palette(0),
            size: 2.0,
            opacity: 1.0,
        }
    }
}

impl Style {
    #[inline]
    pub const fn color(mut self, c: Color) -> Self {
        self.color = c;
        self
    }

    #[inline]
    pub const fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    #[inline]
    pub const fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Scale {
    #[default]
    Linear,
    /// Integer positions `0..labels.len()` stand for the labels.
    Categorical(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Plot {
    Metrics(Metrics),
    Graph2D(Graph2D),
    Distribution(Distribution),
    Radial(Radial),
    Statistics(Statistics),
    Table(DataTable),
}

impl Plot {
    pub fn meta(&self) -> &PlotMeta {
        match self {
            Plot::Metrics(m) => &m.meta,
            Plot::Graph2D(g) => &g.meta,
            Plot::Distribution(d) => d.meta(),
            Plot::Radial(r) => r.meta(),
            Plot::Statistics(s) => &s.meta,
            Plot::Table(t) => &t.meta,
        }
    }
}

/// Headline numbers rendered as text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub meta: PlotMeta,
    pub items: Vec<Metric>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph2D {
    pub meta: PlotMeta,
    pub layers: Vec<Layer2D>,
    pub y_scale: Scale,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    /// Rendered height in pixels; [`DEFAULT_HEIGHT`] when `None`.
    pub height: Option<u32>,
}

impl Graph2D {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pixels left for the plotting area at a given total height.
    pub fn plot_area_height(height: u32) -> u32 {
        height.saturating_sub(2 * CHART_MARGIN + X_LABEL_AREA)
    }

    pub fn bounds(&self) -> Option<([f32; 2], [f32; 2])> {
        let mut min = [f32::INFINITY; 2];
        let mut max = [f32::NEG_INFINITY; 2];
        let mut any = false;
        for l in &self.layers {
            for p in &l.xy {
                if !p.x.is_finite() || !p.y.is_finite() {
                    continue;
                }
                min[0] = min[0].min(p.x);
                min[1] = min[1].min(p.y);
                max[0] = max[0].max(p.x);
                max[1] = max[1].max(p.y);
                any = true;
            }
        }
        any.then_some((min, max))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Geometry2D {
    Line,
    Points,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layer2D {
    pub geometry: Geometry2D,
    pub xy: Vec<Vec2>,
    pub style: Style,
    /// Legend entry
    pub label: Option<String>,
}

impl Layer2D {
    pub fn new(geometry: Geometry2D, xy: Vec<Vec2>) -> Self {
        Self {
            geometry,
            xy,
            style: Style::default(),
            label: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Distribution {
    /// Pre-binned counts with an optional density curve already scaled to
    /// counts.
    Histogram {
        meta: PlotMeta,
        bins: Vec<HistogramBin>,
        kde: Option<Vec<Vec2>>,
        style: Style,
        x_label: Option<String>,
        y_label: Option<String>,
    },
    /// Count bar per category, for non-numeric features.
    Counts {
        meta: PlotMeta,
        bars: Vec<(String, usize)>,
        style: Style,
        x_label: Option<String>,
        y_label: Option<String>,
    },
    /// `summary` is `None` when there is nothing to summarize.
    BoxPlot {
        meta: PlotMeta,
        summary: Option<BoxSummary>,
        style: Style,
        x_label: Option<String>,
    },
}

impl Distribution {
    pub fn meta(&self) -> &PlotMeta {
        match self {
            Distribution::Histogram { meta, .. }
            | Distribution::Counts { meta, .. }
            | Distribution::BoxPlot { meta, .. } => meta,
        }
    }

    pub(crate) fn meta_mut(&mut self) -> &mut PlotMeta {
        match self {
            Distribution::Histogram { meta, .. }
            | Distribution::Counts { meta, .. }
            | Distribution::BoxPlot { meta, .. } => meta,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub count: usize,
    /// Share of the total in percent.
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Radial {
    Pie {
        meta: PlotMeta,
        slices: Vec<Slice>,
        /// Inner radius as a fraction of the outer one; 0 draws a full pie.
        hole: f32,
    },
}

impl Radial {
    pub fn meta(&self) -> &PlotMeta {
        match self {
            Radial::Pie { meta, .. } => meta,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Summary {
    Numeric(NumericSummary),
    Categorical(CategoricalSummary),
}

/// `describe` output for one column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub meta: PlotMeta,
    pub column: String,
    pub summary: Summary,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    pub meta: PlotMeta,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A headed group of plots laid out in a grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub header: Option<String>,
    pub plots: Vec<Plot>,
    pub columns: Option<usize>,
}

impl Section {
    pub fn new(header: Option<String>) -> Self {
        Self {
            header,
            plots: vec![],
            columns: None,
        }
    }

    /// Columns per row: explicit, else one.
    pub fn effective_columns(&self) -> usize {
        self.columns.unwrap_or(1).max(1)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub title: String,
    pub intro: Option<String>,
    pub background: Color,
    pub sections: Vec<Section>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            title: String::new(),
            intro: None,
            background: Color::WHITE,
            sections: vec![],
        }
    }
}

impl Dashboard {
    pub fn plots(&self) -> impl Iterator<Item = &Plot> {
        self.sections.iter().flat_map(|s| s.plots.iter())
    }

    /// Section headers, for navigation.
    pub fn headers(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter_map(|s| s.header.as_deref())
            .collect()
    }
}
