use {
    crate::{
        config::DASHBOARD,
        domain::{FunnelMetric, FunnelUnit, YearMonth},
        utils::round_to,
    },
    anyhow::{Context, Result},
    itertools::Itertools,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// One row of the lead cost breakdown export. Field names follow the export headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRow {
    #[serde(rename = "YearMonth")]
    pub year_month: String,
    #[serde(rename = "Lead Source")]
    pub lead_source: String,

    #[serde(rename = "Leads", default)]
    pub leads: f64,
    #[serde(rename = "Allocations", default)]
    pub allocations: f64,
    #[serde(rename = "Credits", default)]
    pub credits: f64,
    #[serde(rename = "Submissions", default)]
    pub submissions: f64,
    #[serde(rename = "Closings", default)]
    pub closings: f64,
    #[serde(rename = "Expected Closings", default)]
    pub expected_closings: f64,

    #[serde(rename = "Cost ($)", default)]
    pub cost: Option<f64>,
    #[serde(rename = "Cost per Lead ($)", default)]
    pub cost_per_lead: Option<f64>,
    #[serde(rename = "Cost per Allocation ($)", default)]
    pub cost_per_allocation: Option<f64>,
    #[serde(rename = "Cost per Credit ($)", default)]
    pub cost_per_credit: Option<f64>,
    #[serde(rename = "Cost per Submission ($)", default)]
    pub cost_per_submission: Option<f64>,
    #[serde(rename = "Cost per Closing ($)", default)]
    pub cost_per_closing: Option<f64>,
    #[serde(rename = "Cost per Expected Closing ($)", default)]
    pub cost_per_expected_closing: Option<f64>,

    #[serde(rename = "% Lead to Allocate (cohort)", default)]
    pub pct_lead_to_allocate: Option<f64>,
    #[serde(rename = "% Lead to Credit (cohort)", default)]
    pub pct_lead_to_credit: Option<f64>,
    #[serde(rename = "% Lead to Submit (cohort)", default)]
    pub pct_lead_to_submit: Option<f64>,
    #[serde(rename = "% Lead to Close (cohort)", default)]
    pub pct_lead_to_close: Option<f64>,
    #[serde(rename = "% Expected Lead to Close (cohort)", default)]
    pub pct_expected_lead_to_close: Option<f64>,
}

impl CostRow {
    /// Whole dollars for money columns, percentage points with 2 decimals for cohort ratios.
    /// Note: "Cost per Allocation" and "Cost per Credit" stay unrounded, as in the source report.
    fn rounded(mut self) -> Self {
        let dollars = |v: Option<f64>| v.map(|x| round_to(x, 0));
        let pct = |v: Option<f64>| v.map(|x| round_to(x * 100.0, 2));

        self.cost = dollars(self.cost);
        self.cost_per_lead = dollars(self.cost_per_lead);
        self.cost_per_submission = dollars(self.cost_per_submission);
        self.cost_per_closing = dollars(self.cost_per_closing);
        self.cost_per_expected_closing = dollars(self.cost_per_expected_closing);

        self.pct_lead_to_allocate = pct(self.pct_lead_to_allocate);
        self.pct_lead_to_credit = pct(self.pct_lead_to_credit);
        self.pct_lead_to_submit = pct(self.pct_lead_to_submit);
        self.pct_lead_to_close = pct(self.pct_lead_to_close);
        self.pct_expected_lead_to_close = pct(self.pct_expected_lead_to_close);
        self
    }

    pub fn metric(&self, metric: FunnelMetric) -> Option<f64> {
        match metric {
            FunnelMetric::CostPerLead => self.cost_per_lead,
            FunnelMetric::CostPerAllocation => self.cost_per_allocation,
            FunnelMetric::CostPerCredit => self.cost_per_credit,
            FunnelMetric::CostPerSubmission => self.cost_per_submission,
            FunnelMetric::CostPerClosing => self.cost_per_closing,
        }
    }
}

/// A displayable column of the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum CostColumn {
    #[strum(to_string = "Lead Source")]
    LeadSource,
    Leads,
    Allocations,
    Credits,
    Submissions,
    Closings,
    #[strum(to_string = "Expected Closings")]
    ExpectedClosings,
    #[strum(to_string = "Cost ($)")]
    Cost,
    #[strum(to_string = "Cost per Lead ($)")]
    CostPerLead,
    #[strum(to_string = "Cost per Allocation ($)")]
    CostPerAllocation,
    #[strum(to_string = "Cost per Credit ($)")]
    CostPerCredit,
    #[strum(to_string = "Cost per Submission ($)")]
    CostPerSubmission,
    #[strum(to_string = "Cost per Closing ($)")]
    CostPerClosing,
    #[strum(to_string = "Cost per Expected Closing ($)")]
    CostPerExpectedClosing,
    #[strum(to_string = "% Lead to Allocate (cohort)")]
    PctLeadToAllocate,
    #[strum(to_string = "% Lead to Credit (cohort)")]
    PctLeadToCredit,
    #[strum(to_string = "% Lead to Submit (cohort)")]
    PctLeadToSubmit,
    #[strum(to_string = "% Lead to Close (cohort)")]
    PctLeadToClose,
    #[strum(to_string = "% Expected Lead to Close (cohort)")]
    PctExpectedLeadToClose,
}

impl CostColumn {
    /// Cell text. Nulls render as "-".
    pub fn cell(&self, row: &CostRow) -> String {
        let num = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_else(|| "-".to_string());
        match self {
            Self::LeadSource => row.lead_source.clone(),
            Self::Leads => row.leads.to_string(),
            Self::Allocations => row.allocations.to_string(),
            Self::Credits => row.credits.to_string(),
            Self::Submissions => row.submissions.to_string(),
            Self::Closings => row.closings.to_string(),
            Self::ExpectedClosings => row.expected_closings.to_string(),
            Self::Cost => num(row.cost),
            Self::CostPerLead => num(row.cost_per_lead),
            Self::CostPerAllocation => num(row.cost_per_allocation),
            Self::CostPerCredit => num(row.cost_per_credit),
            Self::CostPerSubmission => num(row.cost_per_submission),
            Self::CostPerClosing => num(row.cost_per_closing),
            Self::CostPerExpectedClosing => num(row.cost_per_expected_closing),
            Self::PctLeadToAllocate => num(row.pct_lead_to_allocate),
            Self::PctLeadToCredit => num(row.pct_lead_to_credit),
            Self::PctLeadToSubmit => num(row.pct_lead_to_submit),
            Self::PctLeadToClose => num(row.pct_lead_to_close),
            Self::PctExpectedLeadToClose => num(row.pct_expected_lead_to_close),
        }
    }

    /// Columns shown in the "Cost Per Unit" table for `unit`.
    pub fn for_unit(unit: FunnelUnit) -> &'static [CostColumn] {
        use CostColumn::*;
        match unit {
            FunnelUnit::Leads => &[LeadSource, Leads, Cost, CostPerLead],
            FunnelUnit::Allocations => &[
                LeadSource,
                Leads,
                Allocations,
                Cost,
                CostPerAllocation,
                PctLeadToAllocate,
            ],
            FunnelUnit::Credits => &[LeadSource, Leads, Credits, Cost, CostPerCredit, PctLeadToCredit],
            FunnelUnit::Submissions => &[
                LeadSource,
                Leads,
                Submissions,
                Cost,
                CostPerSubmission,
                PctLeadToSubmit,
            ],
            FunnelUnit::Closings => &[LeadSource, Leads, Closings, Cost, CostPerClosing, PctLeadToClose],
            FunnelUnit::ExpectedClosings => &[
                LeadSource,
                Leads,
                ExpectedClosings,
                Cost,
                CostPerExpectedClosing,
                PctExpectedLeadToClose,
            ],
        }
    }
}

/// A breakdown row with its parsed cohort month.
#[derive(Debug, Clone, PartialEq)]
pub struct CostRecord {
    pub year_month: YearMonth,
    pub row: CostRow,
}

/// The rounded cost breakdown for every lead source and cohort month.
#[derive(Debug, Clone, Default)]
pub struct CostBreakdown {
    records: Vec<CostRecord>,
}

impl CostBreakdown {
    pub fn prepare(rows: Vec<CostRow>) -> Result<Self> {
        let records = rows
            .into_iter()
            .map(|row| -> Result<CostRecord> {
                let year_month = YearMonth::parse(&row.year_month)
                    .with_context(|| format!("row for lead source '{}'", row.lead_source))?;
                Ok(CostRecord {
                    year_month,
                    row: row.rounded(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[CostRecord] {
        &self.records
    }

    /// One cohort month, biggest lead sources first.
    pub fn for_month(&self, year_month: YearMonth) -> Vec<&CostRow> {
        self.records
            .iter()
            .filter(|r| r.year_month == year_month)
            .map(|r| &r.row)
            .sorted_by(|a, b| b.leads.total_cmp(&a.leads))
            .collect()
    }

    /// Every month of one lead source, oldest first.
    pub fn for_source(&self, lead_source: &str) -> Vec<&CostRecord> {
        self.records
            .iter()
            .filter(|r| r.row.lead_source == lead_source)
            .sorted_by_key(|r| r.year_month)
            .collect()
    }

    /// Distinct lead sources, alphabetical.
    pub fn lead_sources(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.row.lead_source.clone())
            .sorted()
            .dedup()
            .collect()
    }

    /// `LowestRates` when present, otherwise the first source alphabetically.
    pub fn default_lead_source(&self) -> Option<String> {
        let sources = self.lead_sources();
        let preferred = DASHBOARD.selection.default_lead_source;
        if sources.iter().any(|s| s == preferred) {
            Some(preferred.to_string())
        } else {
            sources.into_iter().next()
        }
    }
}

/// Every column except the YearMonth key, in export order.
pub fn month_table_columns() -> Vec<CostColumn> {
    use strum::IntoEnumIterator;
    CostColumn::iter().collect()
}
