use std::collections::HashMap;

use glam::Vec2;

use crate::Result;
use crate::core::{Color, DEFAULT_HEIGHT, Graph2D, Style};
use crate::dash::Plot2DBuilder;
use crate::data::{TableView, columns};

/// Half the vertical space a category band may use for spreading points.
const BAND_HALF_WIDTH: f32 = 0.4;
/// Largest gap between stacked points of the same age.
const MAX_STEP: f32 = 0.1;
/// Rendered point radius in pixels.
const POINT_RADIUS: f32 = 3.0;
/// Tallest the chart grows to keep stacked points apart.
const MAX_HEIGHT: u32 = 4000;

/// Age against obesity category over the filtered view.
///
/// Categories sit at integer y positions in first-seen order. Points that
/// share a category and an age are spread symmetrically around the category
/// line so none hide each other. When the stacks are tall the chart is
/// drawn taller, so neighbours stay at least one point diameter apart.
pub fn age_category_chart(view: &TableView<'_>) -> Result<Graph2D> {
    let ages = view.numeric(columns::AGE)?;
    let cats = view.categorical(columns::OBESITY_CATEGORY)?;

    let mut labels: Vec<String> = Vec::new();
    let mut points: Vec<(usize, f64)> = Vec::new();
    for (age, cat) in ages.iter().zip(&cats) {
        if !age.is_finite() || cat.is_empty() {
            continue;
        }
        let idx = match labels.iter().position(|l| l == cat) {
            Some(idx) => idx,
            None => {
                labels.push(cat.to_string());
                labels.len() - 1
            }
        };
        points.push((idx, *age));
    }

    let (xy, step) = swarm(&points);
    let mut plot = Plot2DBuilder::new()
        .title("Age vs. Obesity Category")
        .x_label("Age")
        .y_label("Obesity Category")
        .y_categories(labels.clone());
    if let Some(px) = step.and_then(|step| height_for(labels.len(), step)) {
        plot = plot.height(px);
    }

    for (i, label) in labels.iter().enumerate() {
        let layer: Vec<Vec2> = xy
            .iter()
            .zip(&points)
            .filter(|(_, (idx, _))| *idx == i)
            .map(|(p, _)| *p)
            .collect();
        plot = plot.labeled_scatter(
            label.clone(),
            layer,
            Style::default().color(Color::palette(i)).size(POINT_RADIUS),
        );
    }

    Ok(plot.build())
}

/// Chart height, when taller than the default, at which points `step`
/// category units apart are one diameter apart on screen.
fn height_for(categories: usize, step: f32) -> Option<u32> {
    let px_per_unit = 2.0 * POINT_RADIUS / step;
    let area = (categories as f32 * px_per_unit).ceil() as u32;
    let needed = area + DEFAULT_HEIGHT - Graph2D::plot_area_height(DEFAULT_HEIGHT);
    (needed > DEFAULT_HEIGHT).then_some(needed.min(MAX_HEIGHT))
}

/// Deterministic swarm offsets: the k-th of m points at the same
/// (category, age) lands at `(k - (m - 1) / 2) * step` from the line.
/// The step is `None` when no two points share a position.
fn swarm(points: &[(usize, f64)]) -> (Vec<Vec2>, Option<f32>) {
    let mut group_sizes: HashMap<(usize, u64), usize> = HashMap::new();
    for (idx, age) in points {
        *group_sizes.entry((*idx, age.to_bits())).or_default() += 1;
    }
    let widest = group_sizes.values().copied().max().unwrap_or(1);
    let step = (2.0 * BAND_HALF_WIDTH / widest as f32).min(MAX_STEP);

    let mut seen: HashMap<(usize, u64), usize> = HashMap::new();
    let xy = points
        .iter()
        .map(|(idx, age)| {
            let key = (*idx, age.to_bits());
            let m = group_sizes[&key];
            let k = seen.entry(key).or_default();
            let offset = (*k as f32 - (m as f32 - 1.0) / 2.0) * step;
            *k += 1;
            Vec2::new(*age as f32, *idx as f32 + offset)
        })
        .collect();
    (xy, (widest > 1).then_some(step))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::fixtures;
    use crate::core::Scale;
    use crate::data::RecordTable;
    use crate::filter::filter_by_age;

    #[test]
    fn categories_in_first_seen_order() {
        let table = fixtures::table();
        let view = filter_by_age(&table, 20.0, 100.0).unwrap();
        let graph = age_category_chart(&view).unwrap();

        assert_eq!(
            graph.y_scale,
            Scale::Categorical(vec![
                "Obese".to_string(),
                "Overweight".to_string(),
                "Normal weight".to_string(),
            ])
        );
        let total: usize = graph.layers.iter().map(|l| l.xy.len()).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn shared_positions_are_spread_within_band() {
        let (xy, step) = swarm(&[(0, 30.0), (0, 30.0), (0, 30.0), (1, 30.0)]);
        assert_eq!(step, Some(MAX_STEP));

        assert_eq!(xy[1].y, 0.0);
        assert!(xy[0].y < 0.0 && xy[2].y > 0.0);
        assert!((xy[0].y + xy[2].y).abs() < 1e-6);
        assert!(xy.iter().take(3).all(|p| p.y.abs() <= BAND_HALF_WIDTH));
        assert_eq!(xy[3], Vec2::new(30.0, 1.0));
    }

    #[test]
    fn small_stacks_keep_the_default_height() {
        let table = fixtures::table();
        let graph = age_category_chart(&table.view_all()).unwrap();

        assert_eq!(graph.height, None);
    }

    #[test]
    fn tall_stacks_grow_the_chart_past_a_point_diameter() {
        let mut csv = String::from("Age,ObesityCategory\n");
        for _ in 0..40 {
            csv.push_str("30,Obese\n");
        }
        for cat in ["Overweight", "Normal weight", "Underweight"] {
            csv.push_str(&format!("45,{cat}\n"));
        }
        let table = RecordTable::from_csv_str(&csv).unwrap();
        let graph = age_category_chart(&table.view_all()).unwrap();

        let height = graph.height.unwrap();
        assert!(height > DEFAULT_HEIGHT);
        let px_per_unit = Graph2D::plot_area_height(height) as f32 / 4.0;
        let stack = &graph.layers[0].xy;
        let gap = (stack[1].y - stack[0].y) * px_per_unit;
        assert!(gap >= 2.0 * POINT_RADIUS - 1e-3, "gap {gap}");
    }

    #[test]
    fn empty_view_has_no_points() {
        let table = fixtures::table();
        let view = filter_by_age(&table, 100.0, 0.0).unwrap();
        let graph = age_category_chart(&view).unwrap();

        assert!(graph.layers.is_empty());
        assert_eq!(graph.y_scale, Scale::Categorical(vec![]));
    }
}
