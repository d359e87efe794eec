// Bake engine and dashboard computations
mod bake_gauge;
mod bake_table;
mod cohort_shader;
mod cost_breakdown;
mod trend_chart;

pub use bake_gauge::BakeGauge;
pub use bake_table::BakeTable;
pub use cohort_shader::CohortShader;
pub use cost_breakdown::{CostBreakdown, CostColumn, CostRecord, CostRow, month_table_columns};
pub use trend_chart::{ChartPoint, ChartSeries, ShadeRect, TrendChart};
