//! Drawing functions for all chart types.
//!
//! This module is organized into focused submodules:
//! - `common`: Shared utilities (canvas setup, colors, axis ranges and ticks)
//! - `charts_2d`: 2D line and scatter plots
//! - `distribution`: Histogram, count bars, boxplot
//! - `radial`: Pie and donut charts
//!
//! Every function returns one standalone SVG document.

mod charts_2d;
mod common;
mod distribution;
mod radial;

pub use charts_2d::draw_2d_plot;
pub use distribution::{draw_boxplot, draw_counts, draw_distribution, draw_histogram};
pub use radial::draw_radial;
