use crate::Result;
use crate::core::Metrics;
use crate::dash;
use crate::data::{RecordTable, columns};
use crate::stats;

/// Average age, height and weight over the whole table. The age filter
/// does not apply here.
pub fn metrics(table: &RecordTable) -> Result<Metrics> {
    let avg = |name: &str, unit: &str| -> Result<String> {
        let mean = stats::mean(table.numeric(name)?).unwrap_or(f64::NAN);
        Ok(format!("{mean:.1} {unit}"))
    };

    let mut m = dash::metrics(vec![
        ("Average Age", avg(columns::AGE, "years old")?),
        ("Average Height", avg(columns::HEIGHT, "cm")?),
        ("Average Weight", avg(columns::WEIGHT, "kg")?),
    ]);
    m.meta.title = Some("Metrics".to_string());
    Ok(m)
}
