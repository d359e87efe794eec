use {
    crate::utils::TimeUtils,
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

/// A shaded rectangle over one immature cohort month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CohortBand {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// 1 - bake fraction at `start_date`. Fully transparent means fully baked.
    pub opacity: f64,
}

impl CohortBand {
    /// Inclusive length of the band in days
    pub fn days(&self) -> i64 {
        self.end_date.signed_duration_since(self.start_date).num_days() + 1
    }
}

impl std::fmt::Display for CohortBand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} .. {} (opacity {:.3})",
            self.start_date.format(TimeUtils::STANDARD_TIME_FORMAT),
            self.end_date.format(TimeUtils::STANDARD_TIME_FORMAT),
            self.opacity
        )
    }
}
