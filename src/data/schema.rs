use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub kind: ColumnKind,
}

/// Column descriptor computed once when the table is loaded.
///
/// Selection widgets are built from this partition instead of inspecting
/// column types on every render.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub columns: Vec<ColumnSpec>,
}

impl Schema {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn numeric(&self) -> Vec<&str> {
        self.of_kind(ColumnKind::Numeric)
    }

    pub fn categorical(&self) -> Vec<&str> {
        self.of_kind(ColumnKind::Categorical)
    }

    fn of_kind(&self, kind: ColumnKind) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str, kind: ColumnKind) -> ColumnSpec {
        ColumnSpec {
            name: name.to_string(),
            kind,
        }
    }

    #[test]
    fn partitions_columns_in_order() {
        let schema = Schema::new(vec![
            spec("Age", ColumnKind::Numeric),
            spec("Gender", ColumnKind::Categorical),
            spec("Height", ColumnKind::Numeric),
            spec("ObesityCategory", ColumnKind::Categorical),
        ]);

        assert_eq!(schema.numeric(), vec!["Age", "Height"]);
        assert_eq!(schema.categorical(), vec!["Gender", "ObesityCategory"]);
        assert_eq!(schema.len(), 4);
    }
}
