//! Plain-text rendering of a dashboard page for the terminal.
mod gauge;
mod tables;

pub use gauge::gauge_bar;
pub use tables::{cost_table, key_value_table};

use crate::{
    analysis::{CostColumn, month_table_columns},
    app::DashboardView,
    utils::format_date,
};

/// Everything except the chart JSON, section by section.
pub fn render_view(view: &DashboardView) -> String {
    let mut out = String::new();

    out.push_str(&format!("== {} :: {} ==\n\n", view.title, view.year_month));
    out.push_str(&cost_table(&view.month_rows, &month_table_columns()));
    out.push_str("\n\n");

    out.push_str("== Bake % ==\n");
    out.push_str("Bake % is a measure to track how close we are to finishing a cohort month.\n");
    out.push_str(&gauge_bar(&view.gauge));
    if view.gauge.fell_back {
        out.push_str(" (month still in progress)");
    }
    out.push_str("\n\n");

    out.push_str(&format!("== Cost Per Unit :: {} ==\n", view.unit));
    out.push_str(&cost_table(&view.month_rows, CostColumn::for_unit(view.unit)));
    out.push_str("\n\n");

    out.push_str(&format!(
        "== Cost Metrics over Time :: {} :: {} ==\n",
        view.lead_source, view.chart.metric
    ));
    out.push_str(&format!("Lead sources: {}\n", view.lead_sources.join(", ")));
    for note in &view.chart.notes {
        out.push_str(note);
        out.push('\n');
    }
    if view.chart.shading.is_empty() {
        out.push_str("No immature cohort months to shade.\n");
    } else {
        let pairs: Vec<(String, String)> = view
            .chart
            .shading
            .iter()
            .map(|s| {
                (
                    format!("{} .. {}", format_date(s.x0), format_date(s.x1)),
                    format!("{:.3}", s.opacity),
                )
            })
            .collect();
        out.push_str(&key_value_table(("Cohort window", "Opacity"), &pairs));
        out.push('\n');
    }

    out
}
