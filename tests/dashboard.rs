//! End-to-end tests: load the sample dataset from disk, resolve sidebar
//! query pairs, build the dashboard and render the page.

use std::path::PathBuf;

use obesity_dash::prelude::*;

fn sample() -> RecordTable {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/obesity_sample.csv");
    obesity_dash::data::load(&DataSource::File(path)).unwrap()
}

fn resolve(table: &RecordTable, pairs: &[(&str, &str)]) -> SelectionState {
    let options = SelectionOptions::from_schema(table.schema());
    SelectionState::resolve(
        &SelectionRequest::from_pairs(pairs.iter().copied()),
        &options,
    )
    .unwrap()
}

#[test]
fn loads_and_classifies_columns() {
    let table = sample();

    assert_eq!(table.len(), 12);
    assert_eq!(
        table.schema().numeric(),
        vec!["Age", "Height", "Weight", "BMI", "PhysicalActivityLevel"]
    );
    assert_eq!(table.schema().categorical(), vec!["Gender", "ObesityCategory"]);
    assert!(table.numeric("Height").unwrap()[11].is_nan());
}

#[test]
fn age_filter_keeps_rows_in_bounds_in_order() {
    let table = sample();
    let view = filter_by_age(&table, 30.0, 60.0).unwrap();

    assert_eq!(view.rows(), &[0, 2, 3, 4, 7, 8, 10, 11]);
    assert!(filter_by_age(&table, 60.0, 30.0).unwrap().is_empty());
}

#[test]
fn metrics_ignore_the_age_filter() {
    let table = sample();
    let wide = build_dashboard(&table, &resolve(&table, &[])).unwrap();
    let narrow = build_dashboard(
        &table,
        &resolve(&table, &[("min_age", "70"), ("max_age", "80")]),
    )
    .unwrap();

    let metrics = |d: &Dashboard| {
        d.plots()
            .find_map(|p| match p {
                Plot::Metrics(m) => Some(m.clone()),
                _ => None,
            })
            .unwrap()
    };
    assert_eq!(metrics(&wide), metrics(&narrow));
    assert_eq!(metrics(&wide).items[0].value, "50.9 years old");
}

#[test]
fn plot_height_only_changes_the_line_chart_height() {
    let table = sample();
    let low = build_dashboard(&table, &resolve(&table, &[("plot_height", "200")])).unwrap();
    let high = build_dashboard(&table, &resolve(&table, &[("plot_height", "500")])).unwrap();

    let line = |d: &Dashboard| {
        d.plots()
            .find_map(|p| match p {
                Plot::Graph2D(g) if g.meta.title.as_deref() == Some("Line Chart") => {
                    Some(g.clone())
                }
                _ => None,
            })
            .unwrap()
    };
    let (a, b) = (line(&low), line(&high));
    assert_eq!(a.height, Some(200));
    assert_eq!(b.height, Some(500));
    assert_eq!(a.layers, b.layers);
}

#[test]
fn no_line_fields_gives_an_empty_chart() {
    let table = sample();
    let selection = resolve(&table, &[("submitted", "1")]);
    assert!(selection.line_fields.is_empty());

    let dashboard = build_dashboard(&table, &selection).unwrap();
    let page = render_page(
        &dashboard,
        &Sidebar::new(
            &table,
            &SelectionOptions::from_schema(table.schema()),
            &selection,
        ),
    )
    .unwrap();
    assert!(page.contains("No data for the current selection"));
}

#[test]
fn raw_data_shows_cells_as_loaded() {
    let table = sample();
    let selection = resolve(&table, &[("raw", "on"), ("min_age", "70")]);
    let dashboard = build_dashboard(&table, &selection).unwrap();

    let raw = dashboard
        .plots()
        .find_map(|p| match p {
            Plot::Table(t) => Some(t),
            _ => None,
        })
        .unwrap();
    assert_eq!(raw.rows.len(), 12);
    assert_eq!(raw.rows[0][2], "173.575262");
    assert_eq!(raw.rows[11][2], "");
}

#[test]
fn dashboard_serializes_for_the_json_api() {
    let table = sample();
    let dashboard = build_dashboard(&table, &resolve(&table, &[("stats", "on")])).unwrap();
    let json = serde_json::to_value(&dashboard).unwrap();

    assert_eq!(json["title"], "Simple Obesity Category Site");
    assert_eq!(json["sections"][3]["header"], "Statistics of Age");
}
