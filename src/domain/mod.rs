// Domain types and value objects
mod bake_row;
mod cohort_band;
mod funnel;
mod year_month;

// Re-export commonly used types to the world
pub use bake_row::BakeRow;
pub use cohort_band::CohortBand;
pub use funnel::{FunnelMetric, FunnelStage, FunnelUnit};
pub use year_month::YearMonth;
