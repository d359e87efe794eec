//! End-to-end: JSON exports on disk -> provider -> dashboard view -> text + chart JSON.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde_json::json;

use cohort_bake::config::MonotonicityPolicy;
use cohort_bake::data::{DatasetProvider, JsonDirProvider};
use cohort_bake::domain::{FunnelMetric, FunnelStage, FunnelUnit};
use cohort_bake::{Dashboard, Selection, ui};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn cost_row(ym: &str, source: &str, leads: f64, cost_per_closing: Option<f64>) -> serde_json::Value {
    json!({
        "YearMonth": ym,
        "Lead Source": source,
        "Leads": leads,
        "Allocations": leads / 2.0,
        "Credits": leads / 4.0,
        "Submissions": leads / 8.0,
        "Closings": 3,
        "Expected Closings": 4.5,
        "Cost ($)": 2500.5,
        "Cost per Lead ($)": 25.49,
        "Cost per Allocation ($)": 50.0,
        "Cost per Credit ($)": null,
        "Cost per Submission ($)": 200.0,
        "Cost per Closing ($)": cost_per_closing,
        "Cost per Expected Closing ($)": 555.55,
        "% Lead to Allocate (cohort)": 0.5,
        "% Lead to Credit (cohort)": 0.25,
        "% Lead to Submit (cohort)": 0.125,
        "% Lead to Close (cohort)": 0.0312,
        "% Expected Lead to Close (cohort)": 0.045
    })
}

fn write_json(dir: &Path, name: &str, value: serde_json::Value) {
    fs::write(dir.join(name), serde_json::to_string(&value).unwrap()).unwrap();
}

fn seed(dir: &Path) {
    write_json(
        dir,
        "lead_cost_breakdown.json",
        json!([
            cost_row("2024 01", "LowestRates", 100.0, Some(833.4)),
            cost_row("2024 01", "Acme", 400.0, Some(700.0)),
            cost_row("2024 02", "LowestRates", 120.0, Some(900.0)),
            cost_row("2024 03", "LowestRates", 90.0, None),
        ]),
    );
    let curve = json!([
        {"TTDAYS": 60, "CUMULATIVE_PERCENT": 0.97},
        {"TTDAYS": 0, "CUMULATIVE_PERCENT": 0.1},
        {"TTDAYS": 30, "CUMULATIVE_PERCENT": 0.6}
    ]);
    for key in ["leadtoallocate", "leadtocredit", "leadtosubmit", "leadtoclose"] {
        write_json(dir, &format!("{key}_bake.json"), curve.clone());
    }
}

#[test]
fn renders_full_dashboard() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());
    let provider = JsonDirProvider::new(dir.path(), MonotonicityPolicy::Reject);

    let selection = Selection::new(2024, 1, d(2024, 3, 15))
        .unwrap()
        .with_unit(FunnelUnit::Closings);
    let view = Dashboard::render(&provider, &selection).unwrap();

    // Month table: biggest source first, money rounded, ratios as percentage points
    let sources: Vec<&str> = view.month_rows.iter().map(|r| r.lead_source.as_str()).collect();
    assert_eq!(sources, vec!["Acme", "LowestRates"]);
    assert_eq!(view.month_rows[0].cost, Some(2500.0));
    assert_eq!(view.month_rows[0].cost_per_lead, Some(25.0));
    assert_eq!(view.month_rows[0].pct_lead_to_close, Some(3.12));

    // Jan 31 -> Mar 15 is 44 days: 30-day bucket
    assert_eq!(view.gauge.days_since.value(), 44);
    assert_eq!(view.gauge.bake.value(), 0.6);
    assert!(!view.gauge.fell_back);

    assert_eq!(view.lead_sources, vec!["Acme", "LowestRates"]);
    assert_eq!(view.lead_source, "LowestRates");

    // Mar: 14 days (0.1), Feb: 43 days (0.6), Jan: 74 days (0.97, stop)
    assert_eq!(view.chart.metric, FunnelMetric::CostPerClosing);
    assert_eq!(view.chart.shading.len(), 2);
    assert_eq!(view.chart.series.len(), 2);
    assert_eq!(view.chart.series[0].points.len(), 2);
    assert!((view.chart.y_range.1 - 945.0).abs() < 1e-9);

    let text = ui::render_view(&view);
    assert!(text.contains("Cost Per Closing"));
    assert!(text.contains("60%"));
    assert!(text.contains("% Lead to Close (cohort)"));

    let chart: serde_json::Value = serde_json::from_str(&view.chart.to_json().unwrap()).unwrap();
    assert_eq!(chart["shading"][0]["x0"], "2024-03-01");
    assert_eq!(chart["shading"][0]["x1"], "2024-03-15");
    assert_eq!(chart["x_range"][0], "2020-03-01");
}

#[test]
fn cost_per_lead_skips_bake_tables_beyond_close() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());
    fs::remove_file(dir.path().join("leadtosubmit_bake.json")).unwrap();
    let provider = JsonDirProvider::new(dir.path(), MonotonicityPolicy::Reject);

    let selection = Selection::new(2024, 2, d(2024, 3, 15))
        .unwrap()
        .with_metric(FunnelMetric::CostPerLead);
    let view = Dashboard::render(&provider, &selection).unwrap();
    assert!(view.chart.shading.is_empty());
    assert_eq!(view.chart.series.len(), 1);

    // The missing submit table only matters once something asks for it
    let selection = selection.with_metric(FunnelMetric::CostPerSubmission);
    let err = Dashboard::render(&provider, &selection).unwrap_err();
    assert!(format!("{err:#}").contains("leadtosubmit_bake.json"));
}

#[test]
fn unfinished_month_and_unknown_source() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());
    let provider = JsonDirProvider::new(dir.path(), MonotonicityPolicy::Reject);

    let selection = Selection::new(2024, 3, d(2024, 3, 15)).unwrap();
    let view = Dashboard::render(&provider, &selection).unwrap();
    assert!(view.gauge.fell_back);
    assert_eq!(view.gauge.bake.value(), 0.0);

    let selection = selection.with_lead_source("Nobody");
    assert!(Dashboard::render(&provider, &selection).is_err());
}

#[test]
fn non_monotonic_table_depends_on_policy() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());
    write_json(
        dir.path(),
        "leadtoclose_bake.json",
        json!([
            {"TTDAYS": 0, "CUMULATIVE_PERCENT": 0.3},
            {"TTDAYS": 30, "CUMULATIVE_PERCENT": 0.2},
            {"TTDAYS": 60, "CUMULATIVE_PERCENT": 0.99}
        ]),
    );

    let strict = JsonDirProvider::new(dir.path(), MonotonicityPolicy::Reject);
    let err = strict.bake_table(FunnelStage::Close).unwrap_err();
    assert!(err.downcast_ref::<cohort_bake::BakeError>().is_some());

    let lenient = JsonDirProvider::new(dir.path(), MonotonicityPolicy::RunningMax);
    let table = lenient.bake_table(FunnelStage::Close).unwrap();
    let pcts: Vec<f64> = table.rows().iter().map(|r| r.cumulative_percent).collect();
    assert_eq!(pcts, vec![0.3, 0.3, 0.99]);
}
