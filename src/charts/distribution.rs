use glam::Vec2;

use crate::Result;
use crate::core::{Color, Distribution, Style};
use crate::dash::DistBuilder;
use crate::data::{ColumnData, RecordTable};
use crate::stats;

const KDE_SAMPLES: usize = 200;

/// Histogram of the feature over the whole table, with a density curve
/// scaled to bin counts. Categorical features get one count bar per value.
pub fn distribution_chart(table: &RecordTable, feature: &str) -> Result<Distribution> {
    let builder = match &table.column(feature)?.data {
        ColumnData::Numeric(values) => {
            let bins = stats::histogram(values, stats::auto_bin_count(values));
            let n = stats::finite(values).len() as f64;
            let width = bins.first().map(|b| b.end - b.start).unwrap_or(0.0);
            let curve: Vec<Vec2> = stats::kde(values, KDE_SAMPLES)
                .into_iter()
                .map(|(x, d)| Vec2::new(x as f32, (d * n * width) as f32))
                .collect();

            let b = DistBuilder::new().histogram(bins);
            if curve.is_empty() { b } else { b.kde(curve) }
        }
        ColumnData::Categorical(values) => {
            DistBuilder::new().counts(stats::value_counts(values.iter().map(String::as_str)))
        }
    };

    Ok(builder
        .title("Distribution Plot")
        .x_label(feature)
        .style(Style::default().opacity(0.6))
        .build())
}

/// Box-and-whisker summary of the feature over the whole table.
/// Categorical features have nothing to summarize and yield an empty box.
pub fn box_chart(table: &RecordTable, feature: &str) -> Result<Distribution> {
    let summary = match &table.column(feature)?.data {
        ColumnData::Numeric(values) => stats::box_summary(values),
        ColumnData::Categorical(_) => None,
    };

    Ok(DistBuilder::new()
        .boxplot(summary)
        .title("Box Plot")
        .x_label(feature)
        .style(Style::default().color(Color::palette(0)).opacity(0.8))
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DashError;
    use crate::charts::fixtures;

    #[test]
    fn numeric_feature_gets_histogram_and_density() {
        let table = fixtures::table();
        let Distribution::Histogram { bins, kde, x_label, .. } =
            distribution_chart(&table, "Age").unwrap()
        else {
            panic!("expected histogram");
        };

        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 5);
        assert_eq!(kde.map(|c| c.len()), Some(KDE_SAMPLES));
        assert_eq!(x_label.as_deref(), Some("Age"));
    }

    #[test]
    fn categorical_feature_gets_counts() {
        let table = fixtures::table();
        let Distribution::Counts { bars, .. } = distribution_chart(&table, "Gender").unwrap() else {
            panic!("expected counts");
        };

        assert_eq!(bars, vec![("Female".to_string(), 3), ("Male".to_string(), 2)]);
    }

    #[test]
    fn box_over_full_table() {
        let table = fixtures::table();
        let Distribution::BoxPlot { summary, .. } = box_chart(&table, "Age").unwrap() else {
            panic!("expected box plot");
        };
        let summary = summary.unwrap();

        assert_eq!(summary.median, 40.0);
        assert_eq!((summary.q1, summary.q3), (25.0, 40.0));
        assert_eq!(summary.outliers, vec![70.0]);
    }

    #[test]
    fn categorical_box_is_degenerate() {
        let table = fixtures::table();
        assert!(matches!(
            box_chart(&table, "ObesityCategory").unwrap(),
            Distribution::BoxPlot { summary: None, .. }
        ));
    }

    #[test]
    fn unknown_feature_is_fatal() {
        let table = fixtures::table();
        let err = distribution_chart(&table, "Nope").unwrap_err();
        assert_eq!(
            err.current_context(),
            &DashError::MissingColumn("Nope".to_string())
        );
    }
}
