// Per-day and per-month derived summaries

use serde::{Deserialize, Serialize};

use super::YearMonth;

/// Averages for one date. CPU/memory in %, network in MB/s, power in KW; all rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAggregate {
    pub date: String,
    pub input_count: usize,
    pub cpu: f64,
    pub memory: f64,
    pub network: f64,
    pub power: f64,
}

/// Row count for one date (input-frequency chart).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyInputCount {
    pub date: String,
    pub inputs: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputFrequency {
    pub days: Vec<DailyInputCount>,
    /// Mean inputs per day, rounded to a whole number.
    pub average: u64,
    pub peak: usize,
}

/// Mean of the day-level averages within one month; every day weighs the same.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAggregate {
    pub month: YearMonth,
    pub days: usize,
    pub total_inputs: usize,
    pub avg_cpu: f64,
    pub avg_memory: f64,
    pub avg_network: f64,
    pub avg_power: f64,
}
