//! Dashboard presentation configuration

pub struct ChartConfig {
    /// Left edge of the trend chart x-axis
    pub x_axis_start: &'static str,
    /// y-axis headroom above the largest plotted value
    pub y_headroom: f64,
    pub primary_color: &'static str,
    pub companion_color: &'static str,
    pub shade_color: &'static str,
    pub legend_title: &'static str,
}

pub struct GaugeConfig {
    /// Character width of the terminal progress bar
    pub bar_width: usize,
}

pub struct SelectionConfig {
    pub min_year: i32,
    pub max_year: i32,
    pub default_lead_source: &'static str,
}

pub struct DashboardConfig {
    pub title: &'static str,
    pub chart: ChartConfig,
    pub gauge: GaugeConfig,
    pub selection: SelectionConfig,
}

pub const DASHBOARD: DashboardConfig = DashboardConfig {
    title: "Cost Per Closing",
    chart: ChartConfig {
        x_axis_start: "2020-03-01",
        y_headroom: 1.05,
        primary_color: "lightblue",
        companion_color: "pink",
        shade_color: "red",
        legend_title: "Cost by Metric",
    },
    gauge: GaugeConfig {
        bar_width: 50,
    },
    selection: SelectionConfig {
        min_year: 2020,
        max_year: 2030,
        default_lead_source: "LowestRates",
    },
};
