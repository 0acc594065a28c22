use crate::core::{
    DataTable, Dashboard, Distribution, Geometry2D, Graph2D, Layer2D, Metric, Metrics,
    Plot, PlotMeta, Radial, Scale, Section, Slice, Statistics, Style, Summary,
};
use crate::stats::{BoxSummary, HistogramBin};
use glam::Vec2;

pub fn dash() -> DashBuilder {
    DashBuilder {
        dash: Dashboard::default(),
    }
}

pub struct DashBuilder {
    dash: Dashboard,
}

impl DashBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.dash.title = title.into();
        self
    }

    pub fn intro(mut self, intro: impl Into<String>) -> Self {
        self.dash.intro = Some(intro.into());
        self
    }

    /// Add a section with a header
    pub fn add_section<F>(mut self, header: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(SectionBuilder) -> SectionBuilder,
    {
        let b = f(SectionBuilder::new(Some(header.into())));
        self.dash.sections.push(b.section);
        self
    }

    /// Add a section without a header (e.g. side-by-side panels that carry
    /// their own titles)
    pub fn add_row<F>(mut self, f: F) -> Self
    where
        F: FnOnce(SectionBuilder) -> SectionBuilder,
    {
        let b = f(SectionBuilder::new(None));
        self.dash.sections.push(b.section);
        self
    }

    /// Add a section only when `cond` holds
    pub fn add_section_if<F>(self, cond: bool, header: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(SectionBuilder) -> SectionBuilder,
    {
        if cond { self.add_section(header, f) } else { self }
    }

    pub fn build(self) -> Dashboard {
        self.dash
    }
}

// Section builder

pub struct SectionBuilder {
    section: Section,
}

impl SectionBuilder {
    fn new(header: Option<String>) -> Self {
        Self {
            section: Section::new(header),
        }
    }

    /// Set the number of columns per row for this section
    pub fn columns(mut self, cols: usize) -> Self {
        self.section.columns = Some(cols.max(1));
        self
    }

    /// Add an already built plot
    pub fn add(mut self, plot: Plot) -> Self {
        self.section.plots.push(plot);
        self
    }
}

// Plot 2D builder

pub struct Plot2DBuilder {
    graph: Graph2D,
}

impl Plot2DBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph2D::new(),
        }
    }

    fn push_layer(
        mut self,
        geometry: Geometry2D,
        xy: Vec<Vec2>,
        label: String,
        style: Option<Style>,
    ) -> Self {
        let mut layer = Layer2D::new(geometry, xy);
        layer.label = Some(label);
        if let Some(st) = style {
            layer.style = st;
        }
        self.graph.layers.push(layer);
        self
    }

    /// Line with a legend entry
    pub fn labeled_line(
        self,
        label: impl Into<String>,
        xy: Vec<Vec2>,
        style: impl Into<Option<Style>>,
    ) -> Self {
        self.push_layer(Geometry2D::Line, xy, label.into(), style.into())
    }

    /// Scatter with a legend entry
    pub fn labeled_scatter(
        self,
        label: impl Into<String>,
        xy: Vec<Vec2>,
        style: impl Into<Option<Style>>,
    ) -> Self {
        self.push_layer(Geometry2D::Points, xy, label.into(), style.into())
    }

    /// Set the X-axis label
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.graph.x_label = Some(label.into());
        self
    }

    /// Set the Y-axis label
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.graph.y_label = Some(label.into());
        self
    }

    /// Place the given labels at integer y positions
    pub fn y_categories(mut self, labels: Vec<String>) -> Self {
        self.graph.y_scale = Scale::Categorical(labels);
        self
    }

    /// Set the plot title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.graph.meta.title = Some(title.into());
        self
    }

    /// Rendered height in pixels
    pub fn height(mut self, px: u32) -> Self {
        self.graph.height = Some(px);
        self
    }

    pub fn build(self) -> Graph2D {
        self.graph
    }
}

impl Default for Plot2DBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// Distribution builder

pub struct DistBuilder {
    dist: Distribution,
}

impl DistBuilder {
    pub fn new() -> Self {
        Self {
            dist: Distribution::Histogram {
                meta: PlotMeta::default(),
                bins: vec![],
                kde: None,
                style: Style::default(),
                x_label: None,
                y_label: None,
            },
        }
    }

    pub fn histogram(mut self, bins: Vec<HistogramBin>) -> Self {
        self.dist = Distribution::Histogram {
            meta: PlotMeta::default(),
            bins,
            kde: None,
            style: Style::default(),
            x_label: None,
            y_label: Some("Count".to_string()),
        };
        self
    }

    /// Overlay a density curve on a histogram
    pub fn kde(mut self, curve: Vec<Vec2>) -> Self {
        if let Distribution::Histogram { kde, .. } = &mut self.dist {
            *kde = Some(curve);
        }
        self
    }

    pub fn counts(mut self, bars: Vec<(String, usize)>) -> Self {
        self.dist = Distribution::Counts {
            meta: PlotMeta::default(),
            bars,
            style: Style::default(),
            x_label: None,
            y_label: Some("Count".to_string()),
        };
        self
    }

    pub fn boxplot(mut self, summary: Option<BoxSummary>) -> Self {
        self.dist = Distribution::BoxPlot {
            meta: PlotMeta::default(),
            summary,
            style: Style::default(),
            x_label: None,
        };
        self
    }

    pub fn style(mut self, s: Style) -> Self {
        match &mut self.dist {
            Distribution::Histogram { style, .. } => *style = s,
            Distribution::Counts { style, .. } => *style = s,
            Distribution::BoxPlot { style, .. } => *style = s,
        }
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        match &mut self.dist {
            Distribution::Histogram { x_label, .. } => *x_label = Some(label.into()),
            Distribution::Counts { x_label, .. } => *x_label = Some(label.into()),
            Distribution::BoxPlot { x_label, .. } => *x_label = Some(label.into()),
        }
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.dist.meta_mut().title = Some(title.into());
        self
    }

    pub fn build(self) -> Distribution {
        self.dist
    }
}

impl Default for DistBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// Radial builder

pub struct RadialBuilder {
    rad: Radial,
}

impl RadialBuilder {
    pub fn new() -> Self {
        Self {
            rad: Radial::Pie {
                meta: PlotMeta::default(),
                slices: vec![],
                hole: 0.0,
            },
        }
    }

    /// Slices from raw counts; percentages are computed from their total.
    pub fn pie(mut self, counts: Vec<(String, usize)>) -> Self {
        let total: usize = counts.iter().map(|(_, n)| n).sum();
        let slices = counts
            .into_iter()
            .map(|(label, count)| Slice {
                percent: if total == 0 {
                    0.0
                } else {
                    count as f64 * 100.0 / total as f64
                },
                label,
                count,
            })
            .collect();

        if let Radial::Pie { slices: s, .. } = &mut self.rad {
            *s = slices;
        }
        self
    }

    /// Cut a hole of the given relative radius, turning the pie into a donut
    pub fn hole(mut self, ratio: f32) -> Self {
        if let Radial::Pie { hole, .. } = &mut self.rad {
            *hole = ratio.clamp(0.0, 0.95);
        }
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        match &mut self.rad {
            Radial::Pie { meta, .. } => meta.title = Some(title.into()),
        }
        self
    }

    pub fn build(self) -> Radial {
        self.rad
    }
}

impl Default for RadialBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// Panels

pub fn metrics(items: Vec<(impl Into<String>, String)>) -> Metrics {
    Metrics {
        meta: PlotMeta::default(),
        items: items
            .into_iter()
            .map(|(label, value)| Metric {
                label: label.into(),
                value,
            })
            .collect(),
    }
}

pub fn statistics(column: impl Into<String>, summary: Summary) -> Statistics {
    Statistics {
        meta: PlotMeta::default(),
        column: column.into(),
        summary,
    }
}

pub fn data_table(headers: Vec<String>, rows: Vec<Vec<String>>) -> DataTable {
    DataTable {
        meta: PlotMeta::default(),
        headers,
        rows,
    }
}
