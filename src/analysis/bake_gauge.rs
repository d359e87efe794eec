use {
    crate::{
        analysis::BakeTable,
        config::{BakePct, DaysElapsed},
        domain::YearMonth,
        error::BakeError,
        utils::whole_days_between,
    },
    anyhow::{Context, Result},
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

/// The "how close is this cohort month to done" display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BakeGauge {
    pub year_month: YearMonth,
    /// Days from the last day of the cohort month to the reference date
    pub days_since: DaysElapsed,
    pub bake: BakePct,
    /// Set when the month has not ended yet and the gauge shows 0 instead of a lookup
    pub fell_back: bool,
}

impl BakeGauge {
    /// Measures from the last day of the selected month, so a month still in progress
    /// reads as not started.
    pub fn measure(table: &BakeTable, year_month: YearMonth, reference_date: NaiveDate) -> Result<Self> {
        let month_end = year_month
            .last_day()
            .with_context(|| format!("no calendar date for {}", year_month))?;
        let days_since = whole_days_between(reference_date, month_end);

        match table.lookup(days_since) {
            Ok(bake) => Ok(Self {
                year_month,
                days_since,
                bake,
                fell_back: false,
            }),
            Err(BakeError::InvalidInput(reason)) => {
                log::warn!(
                    "Cohort {} has not finished as of {} ({}); showing 0% bake",
                    year_month,
                    reference_date,
                    reason
                );
                Ok(Self {
                    year_month,
                    days_since,
                    bake: BakePct::ZERO,
                    fell_back: true,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Progress-bar split on a 0..100 axis: (completed, remaining)
    pub fn segments(&self) -> ((f64, f64), (f64, f64)) {
        let split = self.bake.value() * 100.0;
        ((0.0, split), (split, 100.0))
    }

    pub fn label(&self) -> String {
        self.bake.to_string()
    }
}
