//! Sidebar selections.
//!
//! Every interaction submits the raw widget values as a [`SelectionRequest`];
//! resolving it against the [`SelectionOptions`] computed at load time yields
//! a fresh, immutable [`SelectionState`] for one render.

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::data::Schema;
use crate::{DashError, Result};

pub const AGE_LIMITS: (f64, f64) = (0.0, 150.0);
pub const DEFAULT_MIN_AGE: f64 = 0.0;
pub const DEFAULT_MAX_AGE: f64 = 100.0;
pub const PLOT_HEIGHT_LIMITS: (u32, u32) = (200, 500);
pub const DEFAULT_PLOT_HEIGHT: u32 = 250;

/// Choices offered by each selection widget.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOptions {
    /// Every column, for the inspected feature.
    pub features: Vec<String>,
    /// Categorical columns, for the donut chart.
    pub donut_fields: Vec<String>,
    /// Numeric columns, for the line chart.
    pub line_fields: Vec<String>,
}

impl SelectionOptions {
    pub fn from_schema(schema: &Schema) -> Self {
        let owned = |names: Vec<&str>| names.into_iter().map(str::to_string).collect();
        Self {
            features: owned(schema.names()),
            donut_fields: owned(schema.categorical()),
            line_fields: owned(schema.numeric()),
        }
    }
}

/// Raw widget values as submitted by the sidebar form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRequest {
    pub feature: Option<String>,
    pub donut: Option<String>,
    pub lines: Vec<String>,
    pub show_raw_data: bool,
    pub show_statistics: bool,
    pub min_age: Option<String>,
    pub max_age: Option<String>,
    pub plot_height: Option<String>,
    /// Set once the form has been submitted. Before that the line chart
    /// shows every numeric column; afterwards an empty `lines` means none.
    pub submitted: bool,
}

impl SelectionRequest {
    /// Build a request from decoded query pairs. `line` may repeat; unknown
    /// keys are ignored.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut req = Self::default();
        for (key, value) in pairs {
            let value: String = value.into();
            match key.as_ref() {
                "feature" => req.feature = Some(value),
                "donut" => req.donut = Some(value),
                "line" => req.lines.push(value),
                "raw" => req.show_raw_data = is_checked(&value),
                "stats" => req.show_statistics = is_checked(&value),
                "min_age" => req.min_age = Some(value),
                "max_age" => req.max_age = Some(value),
                "plot_height" => req.plot_height = Some(value),
                "submitted" => req.submitted = true,
                _ => {}
            }
        }
        req
    }
}

fn is_checked(value: &str) -> bool {
    matches!(value, "on" | "true" | "1" | "yes")
}

/// The parameters of one render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub feature: String,
    pub donut_field: Option<String>,
    pub line_fields: Vec<String>,
    pub show_raw_data: bool,
    pub show_statistics: bool,
    pub min_age: f64,
    pub max_age: f64,
    pub plot_height: u32,
}

impl SelectionState {
    /// Defaults shown on first load.
    pub fn initial(options: &SelectionOptions) -> Self {
        Self {
            feature: options.features.first().cloned().unwrap_or_default(),
            donut_field: options.donut_fields.first().cloned(),
            line_fields: options.line_fields.clone(),
            show_raw_data: false,
            show_statistics: false,
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
            plot_height: DEFAULT_PLOT_HEIGHT,
        }
    }

    /// Resolve submitted widget values.
    ///
    /// Names that are not among the offered choices fall back to the
    /// defaults (or are dropped, for line fields). Numbers are clamped to
    /// their widget limits; `min_age > max_age` is kept as submitted.
    pub fn resolve(req: &SelectionRequest, options: &SelectionOptions) -> Result<Self> {
        let initial = Self::initial(options);

        let feature = req
            .feature
            .as_ref()
            .filter(|f| options.features.contains(f))
            .cloned()
            .unwrap_or(initial.feature);

        let donut_field = req
            .donut
            .as_ref()
            .filter(|f| options.donut_fields.contains(f))
            .cloned()
            .or(initial.donut_field);

        let line_fields = if req.submitted {
            options
                .line_fields
                .iter()
                .filter(|f| req.lines.contains(f))
                .cloned()
                .collect()
        } else {
            initial.line_fields
        };

        let min_age = parse_bounded("min_age", req.min_age.as_deref(), DEFAULT_MIN_AGE, AGE_LIMITS)?;
        let max_age = parse_bounded("max_age", req.max_age.as_deref(), DEFAULT_MAX_AGE, AGE_LIMITS)?;
        let (lo, hi) = PLOT_HEIGHT_LIMITS;
        let plot_height = parse_bounded(
            "plot_height",
            req.plot_height.as_deref(),
            f64::from(DEFAULT_PLOT_HEIGHT),
            (f64::from(lo), f64::from(hi)),
        )?
        .round() as u32;

        Ok(Self {
            feature,
            donut_field,
            line_fields,
            show_raw_data: req.show_raw_data,
            show_statistics: req.show_statistics,
            min_age,
            max_age,
            plot_height,
        })
    }
}

fn parse_bounded(name: &str, raw: Option<&str>, default: f64, (lo, hi): (f64, f64)) -> Result<f64> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(default),
        Some(raw) => raw,
    };
    let value: f64 = raw.parse().map_err(|_| {
        Report::new(DashError::InvalidInput(format!("{name} must be a number, got {raw:?}")))
    })?;
    if !value.is_finite() {
        return Err(Report::new(DashError::InvalidInput(format!(
            "{name} must be finite"
        ))));
    }
    Ok(value.clamp(lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ColumnKind, ColumnSpec};

    fn options() -> SelectionOptions {
        let schema = Schema::new(
            [
                ("Age", ColumnKind::Numeric),
                ("Gender", ColumnKind::Categorical),
                ("Height", ColumnKind::Numeric),
                ("Weight", ColumnKind::Numeric),
                ("ObesityCategory", ColumnKind::Categorical),
            ]
            .into_iter()
            .map(|(name, kind)| ColumnSpec {
                name: name.to_string(),
                kind,
            })
            .collect(),
        );
        SelectionOptions::from_schema(&schema)
    }

    #[test]
    fn options_partition_schema() {
        let opts = options();
        assert_eq!(opts.features.len(), 5);
        assert_eq!(opts.donut_fields, vec!["Gender", "ObesityCategory"]);
        assert_eq!(opts.line_fields, vec!["Age", "Height", "Weight"]);
    }

    #[test]
    fn first_load_uses_defaults() {
        let state = SelectionState::resolve(&SelectionRequest::default(), &options()).unwrap();

        assert_eq!(state.feature, "Age");
        assert_eq!(state.donut_field.as_deref(), Some("Gender"));
        assert_eq!(state.line_fields, vec!["Age", "Height", "Weight"]);
        assert!(!state.show_raw_data);
        assert!(!state.show_statistics);
        assert_eq!((state.min_age, state.max_age), (0.0, 100.0));
        assert_eq!(state.plot_height, 250);
    }

    #[test]
    fn parses_query_pairs() {
        let req = SelectionRequest::from_pairs([
            ("feature", "Weight"),
            ("donut", "ObesityCategory"),
            ("line", "Height"),
            ("line", "Age"),
            ("raw", "on"),
            ("min_age", "20"),
            ("max_age", "50"),
            ("plot_height", "400"),
            ("submitted", "1"),
            ("unrelated", "x"),
        ]);
        let state = SelectionState::resolve(&req, &options()).unwrap();

        assert_eq!(state.feature, "Weight");
        assert_eq!(state.donut_field.as_deref(), Some("ObesityCategory"));
        // option order, not submission order
        assert_eq!(state.line_fields, vec!["Age", "Height"]);
        assert!(state.show_raw_data);
        assert!(!state.show_statistics);
        assert_eq!((state.min_age, state.max_age), (20.0, 50.0));
        assert_eq!(state.plot_height, 400);
    }

    #[test]
    fn submitted_without_lines_selects_none() {
        let req = SelectionRequest::from_pairs([("submitted", "1")]);
        let state = SelectionState::resolve(&req, &options()).unwrap();

        assert!(state.line_fields.is_empty());
    }

    #[test]
    fn unknown_or_mistyped_choices_fall_back() {
        let req = SelectionRequest::from_pairs([
            ("feature", "Nope"),
            ("donut", "Height"),
            ("line", "Gender"),
            ("submitted", "1"),
        ]);
        let state = SelectionState::resolve(&req, &options()).unwrap();

        assert_eq!(state.feature, "Age");
        assert_eq!(state.donut_field.as_deref(), Some("Gender"));
        assert!(state.line_fields.is_empty());
    }

    #[test]
    fn numbers_are_clamped_to_widget_limits() {
        let req = SelectionRequest::from_pairs([
            ("min_age", "-5"),
            ("max_age", "999"),
            ("plot_height", "100"),
        ]);
        let state = SelectionState::resolve(&req, &options()).unwrap();

        assert_eq!((state.min_age, state.max_age), (0.0, 150.0));
        assert_eq!(state.plot_height, 200);
    }

    #[test]
    fn inverted_age_bounds_are_kept() {
        let req = SelectionRequest::from_pairs([("min_age", "60"), ("max_age", "30")]);
        let state = SelectionState::resolve(&req, &options()).unwrap();

        assert_eq!((state.min_age, state.max_age), (60.0, 30.0));
    }

    #[test]
    fn non_numeric_bound_is_rejected() {
        let req = SelectionRequest::from_pairs([("min_age", "ten")]);
        let err = SelectionState::resolve(&req, &options()).unwrap_err();

        assert!(matches!(err.current_context(), DashError::InvalidInput(_)));
    }

    #[test]
    fn no_categorical_columns_means_no_donut_field() {
        let opts = SelectionOptions {
            features: vec!["Age".into()],
            donut_fields: vec![],
            line_fields: vec!["Age".into()],
        };
        let state = SelectionState::initial(&opts);

        assert_eq!(state.donut_field, None);
    }
}
