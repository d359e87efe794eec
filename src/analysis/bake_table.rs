use crate::{
    config::{BakePct, DF, DaysElapsed, MonotonicityPolicy},
    domain::BakeRow,
    error::{BakeError, BakeResult},
};

/// A cohort maturity curve: sorted (days elapsed, cumulative %) steps.
///
/// Lookups are floor lookups. New conversions land in discrete day buckets, so the
/// answer for day N is the last bucket at or before N, never an interpolation.
#[derive(Debug, Clone, PartialEq)]
pub struct BakeTable {
    rows: Vec<BakeRow>,
}

impl BakeTable {
    /// Builds a table with the default (rejecting) monotonicity policy.
    pub fn new(rows: impl IntoIterator<Item = BakeRow>) -> BakeResult<Self> {
        Self::with_policy(rows, MonotonicityPolicy::Reject)
    }

    pub fn with_policy(
        rows: impl IntoIterator<Item = BakeRow>,
        policy: MonotonicityPolicy,
    ) -> BakeResult<Self> {
        let mut rows: Vec<BakeRow> = rows.into_iter().collect();
        if rows.is_empty() {
            return Err(BakeError::InvalidTable("table has no rows".to_string()));
        }

        // Range checks come first. No policy repairs a value outside [0, 1].
        for row in &rows {
            if row.days_elapsed < 0 {
                return Err(BakeError::InvalidTable(format!(
                    "negative days_elapsed {}",
                    row.days_elapsed
                )));
            }
            if !(0.0..=1.0).contains(&row.cumulative_percent) {
                return Err(BakeError::InvalidTable(format!(
                    "cumulative_percent {} at day {} is outside [0, 1]",
                    row.cumulative_percent, row.days_elapsed
                )));
            }
        }

        // Rows sharing a day sort by percent, so the day resolves to its highest value
        // whatever the input order. Percents are finite here.
        rows.sort_by(|a, b| {
            a.days_elapsed
                .cmp(&b.days_elapsed)
                .then(a.cumulative_percent.total_cmp(&b.cumulative_percent))
        });

        let mut running_max = 0.0_f64;
        for row in rows.iter_mut() {
            if row.cumulative_percent < running_max {
                match policy {
                    MonotonicityPolicy::Reject => {
                        return Err(BakeError::InvalidTable(format!(
                            "cumulative_percent drops to {} at day {} after reaching {}",
                            row.cumulative_percent, row.days_elapsed, running_max
                        )));
                    }
                    MonotonicityPolicy::RunningMax => {
                        log::warn!(
                            "Bake table dips to {} at day {}; lifting to {}",
                            row.cumulative_percent,
                            row.days_elapsed,
                            running_max
                        );
                        row.cumulative_percent = running_max;
                    }
                }
            }
            running_max = row.cumulative_percent;
        }

        Ok(Self { rows })
    }

    /// Cumulative percent reached by `days_elapsed`.
    /// Before the first row nothing has converted yet (0.0); past the last row the curve plateaus.
    pub fn lookup(&self, days_elapsed: DaysElapsed) -> BakeResult<BakePct> {
        let days = days_elapsed.value();
        if days < 0 {
            return Err(BakeError::InvalidInput(format!(
                "days_elapsed must be >= 0, got {}",
                days
            )));
        }

        let idx = self.rows.partition_point(|row| row.days_elapsed <= days);
        let pct = match idx {
            0 => BakePct::ZERO,
            i => BakePct::new(self.rows[i - 1].cumulative_percent),
        };

        if DF.log_bake_lookup {
            log::info!("Bake lookup: day {} -> {}", days, pct);
        }
        Ok(pct)
    }

    /// The value the curve levels off at.
    pub fn plateau(&self) -> BakePct {
        self.rows
            .last()
            .map(|row| BakePct::new(row.cumulative_percent))
            .unwrap_or(BakePct::ZERO)
    }

    pub fn rows(&self) -> &[BakeRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Never true for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
