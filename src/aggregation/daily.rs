// Per-day resource averages and input counts

use super::raw_mean;
use crate::grouping::DateGroup;
use crate::models::{DailyAggregate, DailyInputCount, InputFrequency, Metric, RowRecord};

/// One aggregate per date, ascending by date key.
pub fn daily_resource_averages(group: &DateGroup<'_>) -> Vec<DailyAggregate> {
    group
        .sorted()
        .into_iter()
        .map(|(date, rows)| daily_aggregate(date, rows))
        .collect()
}

/// Averages for a single day's rows, converted to display units.
pub fn daily_aggregate(date: &str, rows: &[&RowRecord]) -> DailyAggregate {
    DailyAggregate {
        date: date.to_string(),
        input_count: rows.len(),
        cpu: Metric::Cpu.to_display(raw_mean(rows, Metric::Cpu)),
        memory: Metric::Memory.to_display(raw_mean(rows, Metric::Memory)),
        network: Metric::Network.to_display(raw_mean(rows, Metric::Network)),
        power: Metric::Power.to_display(raw_mean(rows, Metric::Power)),
    }
}

pub fn daily_input_counts(group: &DateGroup<'_>) -> Vec<DailyInputCount> {
    group
        .sorted()
        .into_iter()
        .map(|(date, rows)| DailyInputCount {
            date: date.to_string(),
            inputs: rows.len(),
        })
        .collect()
}

/// Daily counts plus rounded mean and peak; zeros when there are no days.
pub fn input_frequency(group: &DateGroup<'_>) -> InputFrequency {
    let days = daily_input_counts(group);
    if days.is_empty() {
        return InputFrequency::default();
    }
    let total: usize = days.iter().map(|d| d.inputs).sum();
    let average = (total as f64 / days.len() as f64).round() as u64;
    let peak = days.iter().map(|d| d.inputs).max().unwrap_or(0);
    InputFrequency {
        days,
        average,
        peak,
    }
}
