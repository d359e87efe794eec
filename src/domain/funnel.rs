use {
    clap::ValueEnum,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// Funnel stages that have their own maturity curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
pub enum FunnelStage {
    #[strum(to_string = "Lead to Allocate")]
    Allocate,
    #[strum(to_string = "Lead to Credit")]
    Credit,
    #[strum(to_string = "Lead to Submit")]
    Submit,
    #[strum(to_string = "Lead to Close")]
    Close,
}

impl FunnelStage {
    /// Export table name without the `_bake` suffix
    pub fn table_key(&self) -> &'static str {
        match self {
            Self::Allocate => "leadtoallocate",
            Self::Credit => "leadtocredit",
            Self::Submit => "leadtosubmit",
            Self::Close => "leadtoclose",
        }
    }
}

/// Cost metrics that can be plotted over time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display, ValueEnum, Default,
)]
pub enum FunnelMetric {
    #[strum(to_string = "Cost per Lead ($)")]
    CostPerLead,
    #[strum(to_string = "Cost per Allocation ($)")]
    CostPerAllocation,
    #[strum(to_string = "Cost per Credit ($)")]
    CostPerCredit,
    #[strum(to_string = "Cost per Submission ($)")]
    CostPerSubmission,
    #[default]
    #[strum(to_string = "Cost per Closing ($)")]
    CostPerClosing,
}

impl FunnelMetric {
    /// The maturity curve that shades this metric. Leads are known immediately, so none.
    pub fn bake_stage(&self) -> Option<FunnelStage> {
        match self {
            Self::CostPerLead => None,
            Self::CostPerAllocation => Some(FunnelStage::Allocate),
            Self::CostPerCredit => Some(FunnelStage::Credit),
            Self::CostPerSubmission => Some(FunnelStage::Submit),
            Self::CostPerClosing => Some(FunnelStage::Close),
        }
    }
}

/// The unit a "Cost Per Unit" table is expressed in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display, ValueEnum, Default,
)]
pub enum FunnelUnit {
    #[default]
    Leads,
    Allocations,
    Credits,
    Submissions,
    Closings,
    #[strum(to_string = "Expected Closings")]
    ExpectedClosings,
}
