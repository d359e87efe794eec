#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use analysis::{BakeTable, CohortShader};
pub use app::{Dashboard, DashboardView, Selection};
pub use domain::{BakeRow, CohortBand};
pub use error::{BakeError, BakeResult};

use {
    anyhow::{Context, Result, bail},
    chrono::{Datelike, Month, NaiveDate},
    clap::Parser,
    config::{
        DEFAULT_MATURITY_THRESHOLD, DEFAULT_MAX_LOOKBACK_MONTHS, MonotonicityPolicy, PERSISTENCE,
        ShaderConfig,
    },
    data::JsonDirProvider,
    domain::{FunnelMetric, FunnelUnit},
    std::path::PathBuf,
};

// CLI argument parsing
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the JSON dataset exports
    #[arg(long, default_value = PERSISTENCE.datasets.directory)]
    pub data_dir: PathBuf,

    /// Cohort year (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Cohort month, by name ("March", "mar") or number
    #[arg(long, default_value = "January")]
    pub month: String,

    /// Lead source for the trend chart (defaults to LowestRates)
    #[arg(long)]
    pub source: Option<String>,

    #[arg(long, value_enum, default_value_t = FunnelMetric::CostPerClosing)]
    pub metric: FunnelMetric,

    #[arg(long, value_enum, default_value_t = FunnelUnit::Leads)]
    pub unit: FunnelUnit,

    /// Reference date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Bake fraction at which a cohort month stops being shaded
    #[arg(long, default_value_t = DEFAULT_MATURITY_THRESHOLD)]
    pub threshold: f64,

    /// Maximum number of months the shading may reach back
    #[arg(long, default_value_t = DEFAULT_MAX_LOOKBACK_MONTHS)]
    pub max_lookback: u32,

    /// Repair non-monotonic bake tables instead of rejecting them
    #[arg(long, default_value_t = false)]
    pub lenient_tables: bool,

    /// Write the trend chart JSON here instead of stdout
    #[arg(long)]
    pub chart_out: Option<PathBuf>,
}

/// Accepts "3", "03", "March" or "mar".
pub fn parse_month(text: &str) -> Result<u32> {
    if let Ok(n) = text.trim().parse::<u32>() {
        if !(1..=12).contains(&n) {
            bail!("month {} out of range 1..=12", n);
        }
        return Ok(n);
    }
    let month: Month = text
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("unrecognised month '{}'", text))?;
    Ok(month.number_from_month())
}

impl Cli {
    pub fn selection(&self) -> Result<Selection> {
        let today = self.today.unwrap_or_else(utils::local_today);
        let year = self.year.unwrap_or(today.year());
        let month = parse_month(&self.month)?;

        let mut selection = Selection::new(year, month, today)?
            .with_metric(self.metric)
            .with_unit(self.unit)
            .with_shader(ShaderConfig {
                threshold: self.threshold,
                max_lookback_months: self.max_lookback,
            });
        if let Some(source) = &self.source {
            selection = selection.with_lead_source(source.clone());
        }
        Ok(selection)
    }

    pub fn policy(&self) -> MonotonicityPolicy {
        if self.lenient_tables {
            MonotonicityPolicy::RunningMax
        } else {
            config::BAKE.monotonicity
        }
    }
}

/// Computes the dashboard for `args`, prints it, and emits the chart JSON.
pub fn run(args: Cli) -> Result<()> {
    let selection = args.selection()?;
    let provider = JsonDirProvider::new(&args.data_dir, args.policy());
    log::info!(
        "Rendering {} for {} from {}",
        selection.year_month,
        selection.reference_date,
        provider.dir().display()
    );

    let view = Dashboard::render(&provider, &selection)?;
    println!("{}", ui::render_view(&view));

    let json = view.chart.to_json()?;
    match &args.chart_out {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write chart to {}", path.display()))?;
            log::info!("Chart written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
