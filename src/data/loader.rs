use std::fmt;
use std::fs::File;
use std::path::PathBuf;

use error_stack::ResultExt;
use tracing::{debug, info};

use super::table::RecordTable;
use crate::{DashError, Result};

/// Location of the obesity prediction dataset.
pub const DEFAULT_DATA_URL: &str =
    "https://drive.google.com/uc?export=download&id=1oqeQp6QwkaWscEek68eoYMvmQsWrhZ8t";

/// Where the record table comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl Default for DataSource {
    fn default() -> Self {
        Self::Url(DEFAULT_DATA_URL.to_string())
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load the whole dataset into memory.
///
/// This blocks on network or disk I/O. Failures are not retried.
pub fn load(source: &DataSource) -> Result<RecordTable> {
    info!(%source, "loading dataset");

    let table = match source {
        DataSource::Url(url) => fetch(url)?,
        DataSource::File(path) => {
            let file = File::open(path).change_context(DashError::Fetch)?;
            RecordTable::from_reader(file)?
        }
    };

    info!(
        rows = table.len(),
        columns = table.schema().len(),
        "dataset loaded"
    );
    Ok(table)
}

fn fetch(url: &str) -> Result<RecordTable> {
    let mut response = ureq::get(url).call().change_context(DashError::Fetch)?;
    debug!(status = %response.status(), "dataset response");

    let body = response
        .body_mut()
        .read_to_string()
        .change_context(DashError::Fetch)?;

    RecordTable::from_csv_str(&body)
}
