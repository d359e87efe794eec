use {
    crate::{
        analysis::{BakeTable, CohortShader, CostBreakdown},
        config::{DASHBOARD, ShaderConfig},
        domain::{CohortBand, FunnelMetric},
        utils::{get_max, parse_date},
    },
    anyhow::{Context, Result},
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// First day of the cohort month
    pub month: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub color: String,
    pub points: Vec<ChartPoint>,
}

/// A rectangle drawn under the traces to flag an immature cohort month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadeRect {
    pub x0: NaiveDate,
    pub x1: NaiveDate,
    pub y0: f64,
    pub y1: f64,
    pub fill: String,
    pub opacity: f64,
}

impl ShadeRect {
    fn from_band(band: &CohortBand, y_max: f64) -> Self {
        Self {
            x0: band.start_date,
            x1: band.end_date,
            y0: 0.0,
            y1: y_max,
            fill: DASHBOARD.chart.shade_color.to_string(),
            opacity: band.opacity,
        }
    }
}

/// Declarative description of the "Cost Metrics over Time" chart, handed to a renderer as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendChart {
    pub lead_source: String,
    pub metric: FunnelMetric,
    pub series: Vec<ChartSeries>,
    pub x_range: (NaiveDate, NaiveDate),
    pub y_range: (f64, f64),
    pub shading: Vec<ShadeRect>,
    pub legend_title: String,
    pub notes: Vec<String>,
}

impl TrendChart {
    /// `bake_table` is the curve for the metric's funnel stage, None when the metric has no stage.
    pub fn build(
        breakdown: &CostBreakdown,
        lead_source: &str,
        metric: FunnelMetric,
        bake_table: Option<&BakeTable>,
        shader_config: ShaderConfig,
        reference_date: NaiveDate,
    ) -> Result<Self> {
        let records = breakdown.for_source(lead_source);
        if records.is_empty() {
            log::warn!("No breakdown rows for lead source '{}'", lead_source);
        }

        let series_for = |m: FunnelMetric, name: String, color: &str| ChartSeries {
            name,
            color: color.to_string(),
            points: records
                .iter()
                .filter_map(|r| {
                    let month = r.year_month.first_day()?;
                    let value = r.row.metric(m)?;
                    Some(ChartPoint { month, value })
                })
                .collect(),
        };

        let mut series = vec![series_for(
            metric,
            metric.to_string(),
            DASHBOARD.chart.primary_color,
        )];
        let mut notes = vec![
            "The shaded regions represent the bake % of the cohort based on the selected metric, \
             with full transparency signifying >95% bake."
                .to_string(),
        ];

        if metric == FunnelMetric::CostPerClosing {
            series.push(ChartSeries {
                name: "Cost per Expected Closing ($)".to_string(),
                color: DASHBOARD.chart.companion_color.to_string(),
                points: records
                    .iter()
                    .filter_map(|r| {
                        Some(ChartPoint {
                            month: r.year_month.first_day()?,
                            value: r.row.cost_per_expected_closing?,
                        })
                    })
                    .collect(),
            });
            notes.push("Click on any line in the legend to toggle its display!".to_string());
        }

        // Only the selected metric sets the y-axis, the companion may overflow it
        let values: Vec<f64> = series[0].points.iter().map(|p| p.value).collect();
        let y_max = get_max(&values).map_or(0.0, |m| m * DASHBOARD.chart.y_headroom);

        let shading = match bake_table {
            Some(table) => {
                let shader = CohortShader::new(table, shader_config)?;
                shader
                    .bands(reference_date)?
                    .iter()
                    .map(|band| ShadeRect::from_band(band, y_max))
                    .collect()
            }
            None => Vec::new(),
        };

        let x_start = parse_date(DASHBOARD.chart.x_axis_start)
            .with_context(|| format!("bad chart start date '{}'", DASHBOARD.chart.x_axis_start))?;

        Ok(Self {
            lead_source: lead_source.to_string(),
            metric,
            series,
            x_range: (x_start, reference_date),
            y_range: (0.0, y_max),
            shading,
            legend_title: DASHBOARD.chart.legend_title.to_string(),
            notes,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serializing trend chart")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analysis::CostRow, domain::BakeRow};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn breakdown() -> CostBreakdown {
        let mk = |ym: &str, cpl: Option<f64>, cpc: Option<f64>, cpec: Option<f64>| CostRow {
            year_month: ym.to_string(),
            lead_source: "LowestRates".to_string(),
            leads: 100.0,
            allocations: 0.0,
            credits: 0.0,
            submissions: 0.0,
            closings: 0.0,
            expected_closings: 0.0,
            cost: Some(1000.0),
            cost_per_lead: cpl,
            cost_per_allocation: None,
            cost_per_credit: None,
            cost_per_submission: None,
            cost_per_closing: cpc,
            cost_per_expected_closing: cpec,
            pct_lead_to_allocate: None,
            pct_lead_to_credit: None,
            pct_lead_to_submit: None,
            pct_lead_to_close: None,
            pct_expected_lead_to_close: None,
        };
        CostBreakdown::prepare(vec![
            mk("2024 02", Some(10.0), Some(400.0), Some(380.0)),
            mk("2024 01", Some(12.0), Some(500.0), Some(900.0)),
            mk("2024 03", Some(11.0), None, Some(420.0)),
        ])
        .unwrap()
    }

    fn close_table() -> BakeTable {
        BakeTable::new([(0_i64, 0.2), (30, 0.6), (60, 0.97)].map(BakeRow::from)).unwrap()
    }

    #[test]
    fn closing_chart_has_companion_and_shading() {
        let table = close_table();
        let chart = TrendChart::build(
            &breakdown(),
            "LowestRates",
            FunnelMetric::CostPerClosing,
            Some(&table),
            ShaderConfig::default(),
            d(2024, 3, 20),
        )
        .unwrap();

        assert_eq!(chart.series.len(), 2);
        let months: Vec<NaiveDate> = chart.series[0].points.iter().map(|p| p.month).collect();
        assert_eq!(months, vec![d(2024, 1, 1), d(2024, 2, 1)]);
        assert_eq!(chart.series[1].points.len(), 3);
        assert!((chart.y_range.1 - 525.0).abs() < 1e-9);
        assert_eq!(chart.x_range, (d(2020, 3, 1), d(2024, 3, 20)));
        assert_eq!(chart.notes.len(), 2);

        // Mar: 19 days (0.2), Feb: 48 days (0.6), Jan: 79 days (0.97, stop)
        assert_eq!(chart.shading.len(), 2);
        assert!(chart.shading.iter().all(|s| s.y1 == chart.y_range.1 && s.y0 == 0.0));
        assert!((chart.shading[1].opacity - 0.4).abs() < 1e-12);
    }

    #[test]
    fn cost_per_lead_is_never_shaded() {
        let chart = TrendChart::build(
            &breakdown(),
            "LowestRates",
            FunnelMetric::CostPerLead,
            None,
            ShaderConfig::default(),
            d(2024, 3, 20),
        )
        .unwrap();
        assert_eq!(chart.series.len(), 1);
        assert!(chart.shading.is_empty());
        assert!((chart.y_range.1 - 12.6).abs() < 1e-9);
    }

    #[test]
    fn unknown_source_gives_empty_chart() {
        let table = close_table();
        let chart = TrendChart::build(
            &breakdown(),
            "Nobody",
            FunnelMetric::CostPerClosing,
            Some(&table),
            ShaderConfig::default(),
            d(2024, 3, 20),
        )
        .unwrap();
        assert!(chart.series[0].points.is_empty());
        assert_eq!(chart.y_range, (0.0, 0.0));
        assert!(chart.to_json().unwrap().contains("\"legend_title\": \"Cost by Metric\""));
    }
}
