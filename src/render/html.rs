//! Text panels: metrics, statistics and tables.

use std::fmt::Write;

use crate::core::{DataTable, Metrics, Statistics, Summary};

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn metrics_panel(metrics: &Metrics) -> String {
    let mut out = String::from("<div class=\"metrics\">");
    for m in &metrics.items {
        let _ = write!(
            out,
            "<div class=\"metric\"><span class=\"metric-label\">{}</span>\
             <span class=\"metric-value\">{}</span></div>",
            escape(&m.label),
            escape(&m.value)
        );
    }
    out.push_str("</div>");
    out
}

/// Two-column table of `describe` rows.
pub fn statistics_panel(stats: &Statistics) -> String {
    let rows: Vec<(&str, String)> = match &stats.summary {
        Summary::Numeric(s) => vec![
            ("count", format!("{:.6}", s.count as f64)),
            ("mean", stat(s.mean)),
            ("std", stat(s.std)),
            ("min", stat(s.min)),
            ("25%", stat(s.q1)),
            ("50%", stat(s.median)),
            ("75%", stat(s.q3)),
            ("max", stat(s.max)),
        ],
        Summary::Categorical(s) => vec![
            ("count", s.count.to_string()),
            ("unique", s.unique.to_string()),
            ("top", s.top.clone().unwrap_or_else(|| "NaN".to_string())),
            ("freq", s.freq.to_string()),
        ],
    };

    let mut out = String::from("<table class=\"stats\"><thead><tr><th></th>");
    let _ = write!(out, "<th>{}</th></tr></thead><tbody>", escape(&stats.column));
    for (name, value) in rows {
        let _ = write!(out, "<tr><th>{name}</th><td>{}</td></tr>", escape(&value));
    }
    out.push_str("</tbody></table>");
    out
}

fn stat(value: Option<f64>) -> String {
    value.map_or_else(|| "NaN".to_string(), |v| format!("{v:.6}"))
}

/// Every row, with a leading index column.
pub fn data_table(table: &DataTable) -> String {
    let mut out =
        String::from("<div class=\"table-scroll\"><table class=\"raw\"><thead><tr><th></th>");
    for h in &table.headers {
        let _ = write!(out, "<th>{}</th>", escape(h));
    }
    out.push_str("</tr></thead><tbody>");
    for (i, row) in table.rows.iter().enumerate() {
        let _ = write!(out, "<tr><th>{i}</th>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", escape(cell));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table></div>");
    out
}
