use glam::Vec2;

use crate::Result;
use crate::core::{Color, Graph2D, Style};
use crate::dash::Plot2DBuilder;
use crate::data::{TableView, columns};
use crate::stats;

/// One line per selected numeric field against age, over the filtered
/// view. Repeated ages are averaged. `height` only affects rendering.
pub fn line_chart(view: &TableView<'_>, fields: &[String], height: u32) -> Result<Graph2D> {
    let ages = view.numeric(columns::AGE)?;

    let mut plot = Plot2DBuilder::new()
        .title("Line Chart")
        .x_label(columns::AGE)
        .y_label("Value")
        .height(height);

    for (i, field) in fields.iter().enumerate() {
        let values = view.numeric(field)?;
        let xy = stats::mean_by(&ages, &values)
            .into_iter()
            .map(|(x, y)| Vec2::new(x as f32, y as f32))
            .collect();
        plot = plot.labeled_line(field.clone(), xy, Style::default().color(Color::palette(i)));
    }

    Ok(plot.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::fixtures;
    use crate::filter::filter_by_age;

    #[test]
    fn one_labeled_series_per_field() {
        let table = fixtures::table();
        let view = filter_by_age(&table, 20.0, 50.0).unwrap();
        let fields = vec!["Height".to_string(), "Weight".to_string()];
        let graph = line_chart(&view, &fields, 250).unwrap();

        assert_eq!(graph.layers.len(), 2);
        assert_eq!(graph.layers[0].label.as_deref(), Some("Height"));
        // ages 25 and 40 (two rows at 40 averaged)
        assert_eq!(
            graph.layers[1].xy,
            vec![Vec2::new(25.0, 80.0), Vec2::new(40.0, 80.0)]
        );
        assert_ne!(graph.layers[0].style.color, graph.layers[1].style.color);
    }

    #[test]
    fn no_fields_no_series() {
        let table = fixtures::table();
        let graph = line_chart(&table.view_all(), &[], 250).unwrap();

        assert!(graph.layers.is_empty());
        assert_eq!(graph.meta.title.as_deref(), Some("Line Chart"));
    }

    #[test]
    fn height_changes_only_height() {
        let table = fixtures::table();
        let view = table.view_all();
        let fields = vec!["BMI".to_string()];
        let short = line_chart(&view, &fields, 200).unwrap();
        let tall = line_chart(&view, &fields, 500).unwrap();

        assert_eq!(short.height, Some(200));
        assert_eq!(tall.height, Some(500));
        assert_eq!(short.layers, tall.layers);
    }
}
