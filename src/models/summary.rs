// Whole-dataset summary metrics

use serde::{Deserialize, Serialize};

/// Min/max date keys after an ascending string sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    /// All parsed rows, dated or not.
    pub total_records: usize,
    /// Rows without a resolvable date (counted in `total_records`, absent from per-day views).
    pub undated_records: usize,
    pub distinct_dates: usize,
    /// total_records ÷ distinct_dates, unrounded; 0 when there are no dates.
    pub daily_inputs: f64,
    /// Means over every record in column units (%, bytes/s, W), unrounded.
    pub avg_cpu: f64,
    pub avg_memory: f64,
    pub avg_network: f64,
    pub avg_power: f64,
    pub date_range: DateRange,
}

/// Percentage change of recent daily averages versus the window before them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTrends {
    pub window_days: usize,
    pub cpu: Option<f64>,
    pub memory: Option<f64>,
    pub network: Option<f64>,
    pub power: Option<f64>,
}
