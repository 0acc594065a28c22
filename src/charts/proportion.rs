use crate::Result;
use crate::core::Radial;
use crate::dash::RadialBuilder;
use crate::data::TableView;
use crate::stats;

const DONUT_HOLE: f32 = 0.45;

/// Share of each value of a categorical column within the filtered view.
///
/// No field (a table without categorical columns) or an empty view gives a
/// donut without slices.
pub fn donut_chart(view: &TableView<'_>, field: Option<&str>) -> Result<Radial> {
    let counts = match field {
        Some(field) => stats::value_counts(view.categorical(field)?),
        None => vec![],
    };

    Ok(RadialBuilder::new()
        .pie(counts)
        .hole(DONUT_HOLE)
        .title("Donut chart")
        .build())
}

/// Slice label as shown on the chart.
pub fn percent_label(percent: f64) -> String {
    format!("{percent:.1}%")
}
