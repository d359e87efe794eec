//! Value newtypes shared across the crate

use serde::{Deserialize, Serialize};

/// A cumulative bake fraction, 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct BakePct(f64);

impl BakePct {
    pub const ZERO: Self = Self(0.0);

    // Clamped between 0 and 1. Table validation happens before values get here.
    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 {
            0.0
        } else if val > 1.0 {
            1.0
        } else {
            val
        };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// The share of the cohort still to come in. Used as band opacity.
    #[inline]
    pub fn remaining(self) -> f64 {
        1.0 - self.0
    }

    /// Percentage points rounded to 2 decimals (e.g. 0.45123 -> 45.12)
    pub fn as_display_pct(self) -> f64 {
        crate::utils::round_to(self.0 * 100.0, 2)
    }
}

impl std::fmt::Display for BakePct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.as_display_pct())
    }
}

/// Whole days since a cohort started. Negative means the cohort lies in the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct DaysElapsed(i64);

impl DaysElapsed {
    pub const fn new(val: i64) -> Self {
        Self(val)
    }

    #[inline]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for DaysElapsed {
    fn from(val: i64) -> Self {
        Self(val)
    }
}

impl std::fmt::Display for DaysElapsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d", self.0)
    }
}
