//! Record table, schema descriptor and dataset loading.

mod loader;
mod schema;
mod table;

pub use loader::{DEFAULT_DATA_URL, DataSource, load};
pub use schema::{ColumnKind, ColumnSpec, Schema};
pub use table::{Column, ColumnData, RecordTable, TableView};

/// Column names the dashboard references directly.
pub mod columns {
    pub const AGE: &str = "Age";
    pub const HEIGHT: &str = "Height";
    pub const WEIGHT: &str = "Weight";
    pub const OBESITY_CATEGORY: &str = "ObesityCategory";
}
