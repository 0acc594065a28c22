use std::io::Read;

use error_stack::{Report, ResultExt};
use tracing::warn;

use super::schema::{ColumnKind, ColumnSpec, Schema};
use crate::{DashError, Result};

#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
    /// Missing cells are stored as NaN.
    Numeric(Vec<f64>),
    /// Missing cells are stored as empty strings.
    Categorical(Vec<String>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
    /// Cells exactly as read.
    pub raw: Vec<String>,
}

impl Column {
    /// Infer the column kind from its raw cells: numeric when every
    /// non-blank cell parses as a number. Surrounding whitespace is ignored
    /// when parsing numbers; categorical cells are kept verbatim.
    pub fn infer(name: impl Into<String>, raw: Vec<String>) -> Self {
        let numeric = raw
            .iter()
            .map(|cell| cell.trim())
            .filter(|cell| !cell.is_empty())
            .all(|cell| cell.parse::<f64>().is_ok());

        let data = if numeric {
            ColumnData::Numeric(
                raw.iter()
                    .map(|cell| cell.trim().parse::<f64>().unwrap_or(f64::NAN))
                    .collect(),
            )
        } else {
            ColumnData::Categorical(raw.clone())
        };

        Self {
            name: name.into(),
            data,
            raw,
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self.data {
            ColumnData::Numeric(_) => ColumnKind::Numeric,
            ColumnData::Categorical(_) => ColumnKind::Categorical,
        }
    }

    pub fn len(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Categorical(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell text as loaded, for the raw data panel.
    pub fn cell_text(&self, row: usize) -> &str {
        self.raw.get(row).map(String::as_str).unwrap_or("")
    }
}

/// The full dataset. Immutable once loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordTable {
    columns: Vec<Column>,
    rows: usize,
    schema: Schema,
}

impl RecordTable {
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let rows = columns.first().map(Column::len).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| c.len() != rows) {
            warn!(
                column = %bad.name,
                len = bad.len(),
                expected = rows,
                "column length mismatch"
            );
            return Err(Report::new(DashError::Parse));
        }

        let schema = Schema::new(
            columns
                .iter()
                .map(|c| ColumnSpec {
                    name: c.name.clone(),
                    kind: c.kind(),
                })
                .collect(),
        );

        Ok(Self {
            columns,
            rows,
            schema,
        })
    }

    /// Parse a delimited dataset with a header row. Headers and cells are
    /// kept exactly as written.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::None)
            .from_reader(reader);

        let headers = reader.headers().change_context(DashError::Parse)?.clone();
        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

        for record in reader.records() {
            let record = record.change_context(DashError::Parse)?;
            for (i, cell) in record.iter().enumerate() {
                cells[i].push(cell.to_string());
            }
        }

        let columns = headers
            .iter()
            .zip(cells)
            .map(|(name, raw)| Column::infer(name, raw))
            .collect();

        Self::from_columns(columns)
    }

    pub fn from_csv_str(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| Report::new(DashError::MissingColumn(name.to_string())))
    }

    pub fn numeric(&self, name: &str) -> Result<&[f64]> {
        match &self.column(name)?.data {
            ColumnData::Numeric(v) => Ok(v),
            ColumnData::Categorical(_) => Err(Report::new(DashError::InvalidInput(format!(
                "column {name} is not numeric"
            )))),
        }
    }

    pub fn categorical(&self, name: &str) -> Result<&[String]> {
        match &self.column(name)?.data {
            ColumnData::Categorical(v) => Ok(v),
            ColumnData::Numeric(_) => Err(Report::new(DashError::InvalidInput(format!(
                "column {name} is not categorical"
            )))),
        }
    }

    /// A view over every row.
    pub fn view_all(&self) -> TableView<'_> {
        TableView {
            table: self,
            rows: (0..self.rows).collect(),
        }
    }

    /// A view over the given row indices. Indices must be in range.
    pub fn view(&self, rows: Vec<usize>) -> TableView<'_> {
        debug_assert!(rows.iter().all(|&r| r < self.rows));
        TableView { table: self, rows }
    }
}

/// Borrowed subset of a [`RecordTable`]'s rows, in table order.
#[derive(Clone, Debug)]
pub struct TableView<'a> {
    table: &'a RecordTable,
    rows: Vec<usize>,
}

impl<'a> TableView<'a> {
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn numeric(&self, name: &str) -> Result<Vec<f64>> {
        let values = self.table.numeric(name)?;
        Ok(self.rows.iter().map(|&r| values[r]).collect())
    }

    pub fn categorical(&self, name: &str) -> Result<Vec<&'a str>> {
        let values = self.table.categorical(name)?;
        Ok(self.rows.iter().map(|&r| values[r].as_str()).collect())
    }
}
