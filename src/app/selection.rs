use {
    crate::{
        config::{DASHBOARD, ShaderConfig},
        domain::{FunnelMetric, FunnelUnit, YearMonth},
    },
    anyhow::{Result, bail},
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

/// Everything the user picks on the dashboard, plus the date the view is rendered for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub year_month: YearMonth,
    /// None picks the default lead source of the dataset
    pub lead_source: Option<String>,
    pub metric: FunnelMetric,
    pub unit: FunnelUnit,
    pub reference_date: NaiveDate,
    pub shader: ShaderConfig,
}

impl Selection {
    pub fn new(year: i32, month: u32, reference_date: NaiveDate) -> Result<Self> {
        let bounds = &DASHBOARD.selection;
        if !(bounds.min_year..=bounds.max_year).contains(&year) {
            bail!(
                "year {} outside {}..={}",
                year,
                bounds.min_year,
                bounds.max_year
            );
        }
        Ok(Self {
            year_month: YearMonth::new(year, month)?,
            lead_source: None,
            metric: FunnelMetric::default(),
            unit: FunnelUnit::default(),
            reference_date,
            shader: ShaderConfig::default(),
        })
    }

    pub fn with_lead_source(mut self, lead_source: impl Into<String>) -> Self {
        self.lead_source = Some(lead_source.into());
        self
    }

    pub fn with_metric(mut self, metric: FunnelMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_unit(mut self, unit: FunnelUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_shader(mut self, shader: ShaderConfig) -> Self {
        self.shader = shader;
        self
    }
}
