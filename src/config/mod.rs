//! Configuration module for the cohort bake dashboard.

// Can all be private now because we have a public re-export.
mod bake;
mod dashboard;
mod debug;
mod persistence;
mod types;

// Re-export commonly used items
pub use bake::{
    BAKE, BakeConfig, DEFAULT_MATURITY_THRESHOLD, DEFAULT_MAX_LOOKBACK_MONTHS,
    MonotonicityPolicy, ShaderConfig,
};
pub use dashboard::{DASHBOARD, DashboardConfig};
pub use debug::DF;
pub use persistence::{PERSISTENCE, bake_table_filename, cost_breakdown_filename};
pub use types::{BakePct, DaysElapsed};
