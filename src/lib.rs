pub mod charts;
pub mod core;
pub mod dash;
pub mod data;
pub mod filter;
pub mod page;
pub mod render;
pub mod selection;
pub mod stats;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DashError {
    #[error("failed to fetch dataset")]
    Fetch,
    #[error("failed to parse dataset")]
    Parse,
    #[error("column not found: {0}")]
    MissingColumn(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to render chart")]
    Render,
}

pub type Result<T> = std::result::Result<T, error_stack::Report<DashError>>;

pub mod prelude {
    pub use crate::core::*;
    pub use crate::dash::*;
    pub use crate::data::{DataSource, RecordTable, Schema, TableView};
    pub use crate::filter::filter_by_age;
    pub use crate::page::build_dashboard;
    pub use crate::render::{Sidebar, render_page};
    pub use crate::selection::{SelectionOptions, SelectionRequest, SelectionState};
    pub use crate::{DashError, Result};
}
