use {
    crate::{
        analysis::{BakeGauge, CostRow, TrendChart},
        app::Selection,
        config::DASHBOARD,
        data::DatasetProvider,
        domain::{FunnelStage, FunnelUnit, YearMonth},
    },
    anyhow::{Result, bail},
};

/// One fully computed page of the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub title: String,
    pub year_month: YearMonth,
    /// The selected cohort month, biggest lead sources first
    pub month_rows: Vec<CostRow>,
    pub unit: FunnelUnit,
    pub gauge: BakeGauge,
    pub lead_sources: Vec<String>,
    pub lead_source: String,
    pub chart: TrendChart,
}

pub struct Dashboard;

impl Dashboard {
    /// Fetches everything fresh from `provider` and computes the page for `selection`.
    pub fn render<P: DatasetProvider + ?Sized>(
        provider: &P,
        selection: &Selection,
    ) -> Result<DashboardView> {
        let breakdown = crate::trace_time!("Load cost breakdown", 50_000, {
            provider.cost_breakdown()?
        });

        let month_rows: Vec<CostRow> = breakdown
            .for_month(selection.year_month)
            .into_iter()
            .cloned()
            .collect();
        if month_rows.is_empty() {
            log::warn!("No breakdown rows for {}", selection.year_month);
        }

        let close_table = provider.bake_table(FunnelStage::Close)?;
        let gauge = BakeGauge::measure(&close_table, selection.year_month, selection.reference_date)?;

        let lead_sources = breakdown.lead_sources();
        let lead_source = match &selection.lead_source {
            Some(source) if lead_sources.contains(source) => source.clone(),
            Some(source) => bail!(
                "unknown lead source '{}' (available: {})",
                source,
                lead_sources.join(", ")
            ),
            None => match breakdown.default_lead_source() {
                Some(source) => source,
                None => bail!("cost breakdown has no lead sources"),
            },
        };

        let metric_table = match selection.metric.bake_stage() {
            Some(FunnelStage::Close) => Some(close_table),
            Some(stage) => Some(provider.bake_table(stage)?),
            None => None,
        };

        let chart = TrendChart::build(
            &breakdown,
            &lead_source,
            selection.metric,
            metric_table.as_ref(),
            selection.shader,
            selection.reference_date,
        )?;

        Ok(DashboardView {
            title: DASHBOARD.title.to_string(),
            year_month: selection.year_month,
            month_rows,
            unit: selection.unit,
            gauge,
            lead_sources,
            lead_source,
            chart,
        })
    }
}
