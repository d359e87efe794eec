mod dashboard;
mod selection;

pub use dashboard::{Dashboard, DashboardView};
pub use selection::Selection;
