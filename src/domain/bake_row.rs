use serde::{Deserialize, Serialize};

/// One point on a cohort maturity curve.
/// Field names follow the bake export columns (`TTDAYS`, `CUMULATIVE_PERCENT`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BakeRow {
    #[serde(rename = "TTDAYS", alias = "days_elapsed")]
    pub days_elapsed: i64,
    #[serde(rename = "CUMULATIVE_PERCENT", alias = "cumulative_percent")]
    pub cumulative_percent: f64,
}

impl BakeRow {
    pub const fn new(days_elapsed: i64, cumulative_percent: f64) -> Self {
        Self {
            days_elapsed,
            cumulative_percent,
        }
    }
}

impl From<(i64, f64)> for BakeRow {
    fn from((days_elapsed, cumulative_percent): (i64, f64)) -> Self {
        Self::new(days_elapsed, cumulative_percent)
    }
}
