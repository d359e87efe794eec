//! Maturity curve and shading configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_MATURITY_THRESHOLD: f64 = 0.95;
pub const DEFAULT_MAX_LOOKBACK_MONTHS: u32 = 36;

/// What to do when a bake table dips once sorted by day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MonotonicityPolicy {
    /// Refuse the table.
    #[default]
    Reject,
    /// Lift each dip up to the running maximum and warn.
    RunningMax,
}

/// Runtime knobs for the immaturity shading walk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShaderConfig {
    /// Bake fraction at which a cohort month counts as mature (no shading)
    pub threshold: f64,
    /// Hard cap on how many months the walk may step back
    pub max_lookback_months: u32,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        BAKE.shader
    }
}

pub struct BakeConfig {
    pub shader: ShaderConfig,
    pub monotonicity: MonotonicityPolicy,
}

pub const BAKE: BakeConfig = BakeConfig {
    shader: ShaderConfig {
        threshold: DEFAULT_MATURITY_THRESHOLD,
        // Three years. Curves that never reach the threshold stop here.
        max_lookback_months: DEFAULT_MAX_LOOKBACK_MONTHS,
    },
    monotonicity: MonotonicityPolicy::Reject,
};
