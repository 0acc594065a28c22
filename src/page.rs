//! Page layout: runs every chart renderer for one selection and arranges
//! the results into sections.

use tracing::debug;

use crate::Result;
use crate::charts;
use crate::core::{Dashboard, Plot};
use crate::dash::dash;
use crate::data::RecordTable;
use crate::filter::filter_by_age;
use crate::selection::SelectionState;

pub const PAGE_TITLE: &str = "Simple Obesity Category Site";
pub const INTRO: &str = "This is a simple website for the Final Project in ITC130.";

/// Build the whole dashboard for one selection.
///
/// Metrics, distribution, box, statistics and raw data use the full table;
/// the donut, line and relationship charts use the age-filtered view.
pub fn build_dashboard(table: &RecordTable, selection: &SelectionState) -> Result<Dashboard> {
    let view = filter_by_age(table, selection.min_age, selection.max_age)?;
    debug!(
        feature = %selection.feature,
        rows = view.len(),
        "building dashboard"
    );

    let metrics = charts::metrics(table)?;
    let donut = charts::donut_chart(&view, selection.donut_field.as_deref())?;
    let line = charts::line_chart(&view, &selection.line_fields, selection.plot_height)?;
    let distribution = charts::distribution_chart(table, &selection.feature)?;
    let boxplot = charts::box_chart(table, &selection.feature)?;
    let statistics = if selection.show_statistics {
        Some(charts::statistics(table, &selection.feature)?)
    } else {
        None
    };
    let relationship = charts::age_category_chart(&view)?;

    let feature = &selection.feature;
    Ok(dash()
        .title(PAGE_TITLE)
        .intro(INTRO)
        .add_row(|s| {
            s.columns(2)
                .add(Plot::Metrics(metrics))
                .add(Plot::Radial(donut))
        })
        .add_section("Line chart", |s| s.add(Plot::Graph2D(line)))
        .add_section(format!("Distribution and Box Plot of {feature}"), |s| {
            s.columns(2)
                .add(Plot::Distribution(distribution))
                .add(Plot::Distribution(boxplot))
        })
        .add_section_if(
            statistics.is_some(),
            format!("Statistics of {feature}"),
            |s| match statistics {
                Some(stats) => s.add(Plot::Statistics(stats)),
                None => s,
            },
        )
        .add_section_if(selection.show_raw_data, "Raw Data", |s| {
            s.add(Plot::Table(charts::raw_data(table)))
        })
        .add_section("Relationship Between Age and Obesity Category", |s| {
            s.add(Plot::Graph2D(relationship))
        })
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::fixtures;
    use crate::selection::SelectionOptions;

    fn selection() -> SelectionState {
        SelectionState::initial(&SelectionOptions::from_schema(fixtures::table().schema()))
    }

    #[test]
    fn default_layout() {
        let d = build_dashboard(&fixtures::table(), &selection()).unwrap();

        assert_eq!(d.title, PAGE_TITLE);
        assert_eq!(
            d.headers(),
            vec![
                "Line chart",
                "Distribution and Box Plot of Age",
                "Relationship Between Age and Obesity Category",
            ]
        );
        assert_eq!(d.plots().count(), 6);
    }

    #[test]
    fn toggles_add_panels() {
        let mut sel = selection();
        sel.show_statistics = true;
        sel.show_raw_data = true;
        sel.feature = "Weight".to_string();
        let d = build_dashboard(&fixtures::table(), &sel).unwrap();

        assert!(d.headers().contains(&"Statistics of Weight"));
        assert!(d.headers().contains(&"Raw Data"));
        assert_eq!(d.plots().count(), 8);
    }

    #[test]
    fn metrics_ignore_age_bounds() {
        let table = fixtures::table();
        let mut narrow = selection();
        narrow.min_age = 20.0;
        narrow.max_age = 30.0;

        let all = build_dashboard(&table, &selection()).unwrap();
        let some = build_dashboard(&table, &narrow).unwrap();
        let metrics = |d: &Dashboard| d.plots().find(|p| matches!(p, Plot::Metrics(_))).cloned();

        assert_eq!(metrics(&all), metrics(&some));
    }

    #[test]
    fn raw_data_ignores_age_bounds() {
        let table = fixtures::table();
        let mut sel = selection();
        sel.show_raw_data = true;
        sel.min_age = 60.0;
        sel.max_age = 10.0;
        let d = build_dashboard(&table, &sel).unwrap();

        let Some(Plot::Table(t)) = d.plots().find(|p| matches!(p, Plot::Table(_))) else {
            panic!("raw data panel missing");
        };
        assert_eq!(t.rows.len(), table.len());
        assert_eq!(t.headers.len(), table.columns().len());
    }

    #[test]
    fn missing_category_column_is_fatal() {
        let table = RecordTable::from_csv_str("Age,Height,Weight\n30,170,70\n").unwrap();
        let sel = SelectionState::initial(&SelectionOptions::from_schema(table.schema()));

        assert!(build_dashboard(&table, &sel).is_err());
    }
}
