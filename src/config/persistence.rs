//! Dataset file naming

/// Where the exported datasets live and what they are called
pub struct DatasetFilesConfig {
    /// Default directory when none is given on the command line
    pub directory: &'static str,
    /// Cost breakdown export, without extension
    pub cost_breakdown: &'static str,
    /// Suffix shared by every bake table export (e.g. "leadtoclose_bake")
    pub bake_suffix: &'static str,
    pub extension: &'static str,
}

pub struct PersistenceConfig {
    pub datasets: DatasetFilesConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    datasets: DatasetFilesConfig {
        directory: "datasets",
        cost_breakdown: "lead_cost_breakdown",
        bake_suffix: "_bake",
        extension: "json",
    },
};

/// Example: "lead_cost_breakdown.json"
pub fn cost_breakdown_filename() -> String {
    format!(
        "{}.{}",
        PERSISTENCE.datasets.cost_breakdown, PERSISTENCE.datasets.extension
    )
}

/// Example: "leadtoclose_bake.json"
pub fn bake_table_filename(stage_key: &str) -> String {
    format!(
        "{}{}.{}",
        stage_key, PERSISTENCE.datasets.bake_suffix, PERSISTENCE.datasets.extension
    )
}
