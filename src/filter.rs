//! Age-range filter producing the view that the filtered charts consume.

use tracing::debug;

use crate::Result;
use crate::data::{RecordTable, TableView, columns};

/// Rows with `min_age <= Age <= max_age`, in table order.
///
/// The bounds are not reordered: `min_age > max_age` yields an empty view,
/// not an error. Rows with a missing age never match. A table without an
/// `Age` column is a schema mismatch and fails.
pub fn filter_by_age(table: &RecordTable, min_age: f64, max_age: f64) -> Result<TableView<'_>> {
    let ages = table.numeric(columns::AGE)?;
    let rows: Vec<usize> = ages
        .iter()
        .enumerate()
        .filter(|(_, age)| **age >= min_age && **age <= max_age)
        .map(|(i, _)| i)
        .collect();

    debug!(min_age, max_age, kept = rows.len(), total = table.len(), "age filter");
    Ok(table.view(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DashError;

    fn table(ages: &[&str]) -> RecordTable {
        let mut csv = String::from("Age,ObesityCategory\n");
        for (i, age) in ages.iter().enumerate() {
            csv.push_str(&format!("{age},c{i}\n"));
        }
        RecordTable::from_csv_str(&csv).unwrap()
    }

    #[test]
    fn keeps_rows_within_inclusive_bounds() {
        let t = table(&["18", "25", "40", "70"]);
        let view = filter_by_age(&t, 20.0, 50.0).unwrap();

        assert_eq!(view.numeric("Age").unwrap(), vec![25.0, 40.0]);
        assert_eq!(view.rows(), &[1, 2]);
    }

    #[test]
    fn bounds_are_inclusive() {
        let t = table(&["20", "50", "51"]);
        let view = filter_by_age(&t, 20.0, 50.0).unwrap();

        assert_eq!(view.rows(), &[0, 1]);
    }

    #[test]
    fn inverted_bounds_yield_empty_view() {
        let t = table(&["18", "25", "40", "70"]);
        let view = filter_by_age(&t, 60.0, 10.0).unwrap();

        assert!(view.is_empty());
    }

    #[test]
    fn missing_age_never_matches() {
        let t = table(&["", "30"]);
        let view = filter_by_age(&t, 0.0, 150.0).unwrap();

        assert_eq!(view.rows(), &[1]);
    }

    #[test]
    fn preserves_original_order() {
        let t = table(&["40", "10", "30", "20"]);
        let view = filter_by_age(&t, 15.0, 45.0).unwrap();

        assert_eq!(view.numeric("Age").unwrap(), vec![40.0, 30.0, 20.0]);
    }

    #[test]
    fn missing_age_column_is_fatal() {
        let t = RecordTable::from_csv_str("Height\n170\n").unwrap();
        let err = filter_by_age(&t, 0.0, 100.0).unwrap_err();

        assert_eq!(
            err.current_context(),
            &DashError::MissingColumn("Age".to_string())
        );
    }
}
