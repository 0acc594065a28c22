//! HTML rendering of a [`Dashboard`]: a sidebar form next to the sections,
//! each chart inlined as SVG.

pub mod draw;
pub mod html;
pub mod sidebar;

use std::fmt::Write;

use tracing::debug;

use crate::Result;
use crate::core::{Dashboard, Plot, Section};
use html::escape;
pub use sidebar::{DATASET_URL, Sidebar, render_sidebar};

const STYLE: &str = include_str!("assets/style.css");

/// Drawing width of the main column; multi-column sections split it.
pub const PAGE_WIDTH: u32 = 960;

/// Render the whole page.
pub fn render_page(dashboard: &Dashboard, sidebar: &Sidebar<'_>) -> Result<String> {
    debug!(sections = dashboard.sections.len(), "rendering page");

    let mut main = String::new();
    let _ = write!(main, "<h1>{}</h1>", escape(&dashboard.title));
    if let Some(intro) = &dashboard.intro {
        let _ = write!(main, "<p class=\"intro\">{}</p>", escape(intro));
    }
    for section in &dashboard.sections {
        render_section(&mut main, section)?;
    }

    let (r, g, b) = dashboard.background.to_rgb8();
    Ok(format!(
        "<!DOCTYPE html>\
         <html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title}</title><style>{STYLE}</style></head>\
         <body style=\"background: rgb({r}, {g}, {b})\">{sidebar}<main>{main}</main></body></html>",
        title = escape(&dashboard.title),
        sidebar = render_sidebar(sidebar),
    ))
}

fn render_section(out: &mut String, section: &Section) -> Result<()> {
    let columns = section.effective_columns();
    let width = PAGE_WIDTH / columns as u32;

    out.push_str("<section>");
    if let Some(header) = &section.header {
        let _ = write!(out, "<h2>{}</h2>", escape(header));
    }
    let _ = write!(
        out,
        "<div class=\"grid\" style=\"grid-template-columns: repeat({columns}, minmax(0, 1fr))\">"
    );
    for plot in &section.plots {
        out.push_str("<figure class=\"panel\">");
        if let Some(title) = &plot.meta().title {
            let _ = write!(out, "<h3>{}</h3>", escape(title));
        }
        out.push_str(&render_plot(plot, width)?);
        out.push_str("</figure>");
    }
    out.push_str("</div></section>");
    Ok(())
}

/// One plot as an HTML fragment: inline SVG for charts, markup for panels.
pub fn render_plot(plot: &Plot, width: u32) -> Result<String> {
    match plot {
        Plot::Metrics(m) => Ok(html::metrics_panel(m)),
        Plot::Graph2D(g) => draw::draw_2d_plot(g, width),
        Plot::Distribution(d) => draw::draw_distribution(d, width),
        Plot::Radial(r) => draw::draw_radial(r),
        Plot::Statistics(s) => Ok(html::statistics_panel(s)),
        Plot::Table(t) => Ok(html::data_table(t)),
    }
}
