//! The sidebar form. Submitting it reloads the page with every widget value
//! in the query string.

use std::fmt::Write;

use super::html::escape;
use crate::data::RecordTable;
use crate::selection::{AGE_LIMITS, PLOT_HEIGHT_LIMITS, SelectionOptions, SelectionState};

pub const DATASET_URL: &str = "https://www.kaggle.com/datasets/mrsimple07/obesity-prediction/data";

/// What the sidebar shows: the widget choices, the current values and a
/// short description of the loaded dataset.
#[derive(Clone, Debug)]
pub struct Sidebar<'a> {
    pub options: &'a SelectionOptions,
    pub selection: &'a SelectionState,
    pub records: usize,
    pub columns: usize,
}

impl<'a> Sidebar<'a> {
    pub fn new(
        table: &RecordTable,
        options: &'a SelectionOptions,
        selection: &'a SelectionState,
    ) -> Self {
        Self {
            options,
            selection,
            records: table.len(),
            columns: table.columns().len(),
        }
    }
}

pub fn render_sidebar(sidebar: &Sidebar<'_>) -> String {
    let opts = sidebar.options;
    let sel = sidebar.selection;
    let mut out = String::from("<aside class=\"sidebar\"><form method=\"get\" action=\"/\">");

    out.push_str("<h2>Dataset Information</h2><p>Obesity Category Dataset by Kaggle</p>");
    let _ = write!(
        out,
        "<p><strong>This is the source of the dataset and problem statement</strong> \
         <a href=\"{DATASET_URL}\">Kaggle Link</a><br>\
         The dataset consists of {} records of data, {} features + target</p>",
        sidebar.records,
        sidebar.columns.saturating_sub(1)
    );

    out.push_str("<h2>Select Feature</h2>");
    select(&mut out, "feature", "Choose a feature", &opts.features, Some(&sel.feature));

    out.push_str("<h2>Additional Options</h2>");
    checkbox(&mut out, "raw", "Show raw data", sel.show_raw_data);
    checkbox(&mut out, "stats", "Show statistics", sel.show_statistics);

    out.push_str("<h2>Filter by Age</h2>");
    number(&mut out, "min_age", "Minimum Age", sel.min_age);
    number(&mut out, "max_age", "Maximum Age", sel.max_age);

    out.push_str("<h3>Donut chart parameter</h3>");
    select(
        &mut out,
        "donut",
        "Select data",
        &opts.donut_fields,
        sel.donut_field.as_ref(),
    );

    out.push_str("<h3>Line chart parameters</h3>");
    multi_select(&mut out, "line", "Select data", &opts.line_fields, &sel.line_fields);
    let (lo, hi) = PLOT_HEIGHT_LIMITS;
    let _ = write!(
        out,
        "<label>Specify plot height <output>{h}</output>\
         <input type=\"range\" name=\"plot_height\" min=\"{lo}\" max=\"{hi}\" value=\"{h}\" \
         oninput=\"this.previousElementSibling.value = this.value\"></label>",
        h = sel.plot_height
    );

    out.push_str(
        "<input type=\"hidden\" name=\"submitted\" value=\"1\">\
         <button type=\"submit\">Apply</button></form></aside>",
    );
    out
}

fn select(
    out: &mut String,
    name: &str,
    label: &str,
    choices: &[String],
    current: Option<&String>,
) {
    let disabled = if choices.is_empty() { " disabled" } else { "" };
    let _ = write!(out, "<label>{label}<select name=\"{name}\"{disabled}>");
    for choice in choices {
        let selected = if Some(choice) == current { " selected" } else { "" };
        let c = escape(choice);
        let _ = write!(out, "<option value=\"{c}\"{selected}>{c}</option>");
    }
    out.push_str("</select></label>");
}

fn multi_select(
    out: &mut String,
    name: &str,
    label: &str,
    choices: &[String],
    current: &[String],
) {
    let _ = write!(
        out,
        "<label>{label}<select name=\"{name}\" multiple size=\"{}\">",
        choices.len().max(1)
    );
    for choice in choices {
        let selected = if current.contains(choice) { " selected" } else { "" };
        let c = escape(choice);
        let _ = write!(out, "<option value=\"{c}\"{selected}>{c}</option>");
    }
    out.push_str("</select></label>");
}

fn checkbox(out: &mut String, name: &str, label: &str, checked: bool) {
    let checked = if checked { " checked" } else { "" };
    let _ = write!(
        out,
        "<label class=\"check\"><input type=\"checkbox\" name=\"{name}\"{checked}> {label}</label>"
    );
}

fn number(out: &mut String, name: &str, label: &str, value: f64) {
    let (lo, hi) = AGE_LIMITS;
    let _ = write!(
        out,
        "<label>{label}<input type=\"number\" name=\"{name}\" min=\"{lo}\" max=\"{hi}\" \
         step=\"1\" value=\"{value}\"></label>"
    );
}
