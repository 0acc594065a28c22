use crate::Result;
use crate::core::{DataTable, Statistics, Summary};
use crate::dash;
use crate::data::{ColumnData, RecordTable};
use crate::stats;

/// `describe` of the feature over the whole table.
pub fn statistics(table: &RecordTable, feature: &str) -> Result<Statistics> {
    let summary = match &table.column(feature)?.data {
        ColumnData::Numeric(values) => Summary::Numeric(stats::describe_numeric(values)),
        ColumnData::Categorical(values) => Summary::Categorical(stats::describe_categorical(
            values.iter().map(String::as_str),
        )),
    };

    let mut s = dash::statistics(feature, summary);
    s.meta.title = Some(format!("Statistics of {feature}"));
    Ok(s)
}

/// Every row and column of the table as loaded. Not affected by the age
/// filter.
pub fn raw_data(table: &RecordTable) -> DataTable {
    let columns = table.columns();
    let headers = columns.iter().map(|c| c.name.clone()).collect();
    let rows = (0..table.len())
        .map(|r| columns.iter().map(|c| c.cell_text(r).to_string()).collect())
        .collect();

    let mut t = dash::data_table(headers, rows);
    t.meta.title = Some("Raw Data".to_string());
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::fixtures;

    #[test]
    fn numeric_statistics() {
        let s = statistics(&fixtures::table(), "Height").unwrap();
        let Summary::Numeric(d) = s.summary else {
            panic!("expected numeric summary");
        };

        assert_eq!(d.count, 5);
        assert_eq!(d.mean, Some(166.0));
        assert_eq!(d.min, Some(150.0));
        assert_eq!(d.median, Some(170.0));
        assert_eq!(d.max, Some(180.0));
        assert_eq!(s.meta.title.as_deref(), Some("Statistics of Height"));
    }

    #[test]
    fn categorical_statistics() {
        let s = statistics(&fixtures::table(), "ObesityCategory").unwrap();
        let Summary::Categorical(d) = s.summary else {
            panic!("expected categorical summary");
        };

        assert_eq!(d.count, 5);
        assert_eq!(d.unique, 3);
        assert_eq!(d.top.as_deref(), Some("Normal weight"));
        assert_eq!(d.freq, 3);
    }

    #[test]
    fn raw_data_is_the_whole_table() {
        let table = fixtures::table();
        let t = raw_data(&table);

        assert_eq!(t.headers.len(), 7);
        assert_eq!(t.rows.len(), 5);
        assert_eq!(
            t.rows[0],
            vec!["18", "Male", "170.0", "60.0", "20.8", "2", "Normal weight"]
        );
    }
}
