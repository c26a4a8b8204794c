//! Chart and animation constants.

pub struct ChartConfig {
    /// Delay between successive animated point insertions (the cadence)
    pub animation_interval_ms: u64,
    pub x_axis_label: &'static str,
    pub y_axis_label: &'static str,
}

pub const CHART: ChartConfig = ChartConfig {
    animation_interval_ms: 8,
    x_axis_label: "Date",
    y_axis_label: "Rate",
};
