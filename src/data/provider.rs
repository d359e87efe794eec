use {
    crate::{
        analysis::{BakeTable, CostBreakdown, CostRow},
        config::{DF, MonotonicityPolicy, bake_table_filename, cost_breakdown_filename},
        domain::{BakeRow, FunnelStage},
    },
    anyhow::{Context, Result},
    serde::de::DeserializeOwned,
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

/// Where the dashboard gets its datasets from. Implementations re-read on every call.
pub trait DatasetProvider {
    fn cost_breakdown(&self) -> Result<CostBreakdown>;
    fn bake_table(&self, stage: FunnelStage) -> Result<BakeTable>;
}

/// Reads JSON exports (arrays of row objects) from one directory.
pub struct JsonDirProvider {
    dir: PathBuf,
    policy: MonotonicityPolicy,
}

impl JsonDirProvider {
    pub fn new(dir: impl Into<PathBuf>, policy: MonotonicityPolicy) -> Self {
        Self {
            dir: dir.into(),
            policy,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_rows<T: DeserializeOwned>(&self, filename: &str) -> Result<Vec<T>> {
        let path = self.dir.join(filename);
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read dataset {}", path.display()))?;
        let rows: Vec<T> = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse dataset {}", path.display()))?;
        if DF.log_loader {
            log::info!("Loaded {} rows from {}", rows.len(), path.display());
        }
        Ok(rows)
    }
}

impl DatasetProvider for JsonDirProvider {
    fn cost_breakdown(&self) -> Result<CostBreakdown> {
        let rows: Vec<CostRow> = self.read_rows(&cost_breakdown_filename())?;
        CostBreakdown::prepare(rows)
    }

    fn bake_table(&self, stage: FunnelStage) -> Result<BakeTable> {
        let filename = bake_table_filename(stage.table_key());
        let rows: Vec<BakeRow> = self.read_rows(&filename)?;
        BakeTable::with_policy(rows, self.policy)
            .with_context(|| format!("{} bake table ({})", stage, filename))
    }
}
