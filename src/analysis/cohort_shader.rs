use {
    crate::{
        analysis::BakeTable,
        config::{DF, ShaderConfig},
        domain::CohortBand,
        error::{BakeError, BakeResult},
        utils::{first_day_of_month, whole_days_between},
    },
    chrono::NaiveDate,
};

/// Walks back from a reference date one calendar month at a time and emits a band
/// for every cohort month whose bake % is still below the maturity threshold.
pub struct CohortShader<'a> {
    table: &'a BakeTable,
    config: ShaderConfig,
}

impl<'a> CohortShader<'a> {
    pub fn new(table: &'a BakeTable, config: ShaderConfig) -> BakeResult<Self> {
        if !(0.0..=1.0).contains(&config.threshold) {
            return Err(BakeError::InvalidInput(format!(
                "maturity threshold {} is outside [0, 1]",
                config.threshold
            )));
        }
        Ok(Self { table, config })
    }

    /// Bands ordered most recent month first. The first band ends on `reference_date`;
    /// every other band covers a whole calendar month.
    ///
    /// Stops at the first mature month, or after `max_lookback_months` bands when the
    /// curve plateaus below the threshold.
    pub fn bands(&self, reference_date: NaiveDate) -> BakeResult<Vec<CohortBand>> {
        let mut bands = Vec::new();
        let mut window_end = reference_date;
        let mut window_start = first_day_of_month(reference_date);

        for _ in 0..self.config.max_lookback_months {
            let days_elapsed = whole_days_between(reference_date, window_start);
            let pct = self.table.lookup(days_elapsed)?;

            if pct.value() >= self.config.threshold {
                if DF.log_shader {
                    log::info!(
                        "Shader: {} is {} baked at {}, stopping",
                        window_start,
                        pct,
                        days_elapsed
                    );
                }
                return Ok(bands);
            }

            let band = CohortBand {
                start_date: window_start,
                end_date: window_end,
                opacity: pct.remaining(),
            };
            if DF.log_shader {
                log::info!("Shader: band {}", band);
            }
            bands.push(band);

            let Some(prev_end) = window_start.pred_opt() else {
                break;
            };
            window_end = prev_end;
            window_start = first_day_of_month(window_end);
        }

        if DF.log_shader {
            log::info!(
                "Shader: hit the {} month look-back cap",
                self.config.max_lookback_months
            );
        }
        Ok(bands)
    }
}
