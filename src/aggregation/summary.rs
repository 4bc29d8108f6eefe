// Whole-dataset metrics and period-over-period trends

use std::collections::BTreeSet;

use super::mean_f64;
use crate::models::{DailyAggregate, DateRange, Metric, MetricTrends, RowRecord, SummaryMetrics};

/// Totals and means over every record. Undated rows count toward `total_records` and the
/// metric means but not toward `distinct_dates`. Means are in column units, not converted.
pub fn summary_metrics(records: &[RowRecord]) -> SummaryMetrics {
    let dates: BTreeSet<&str> = records.iter().filter_map(RowRecord::date_key).collect();
    let undated_records = records.iter().filter(|r| r.date_key().is_none()).count();

    let daily_inputs = if dates.is_empty() {
        0.0
    } else {
        records.len() as f64 / dates.len() as f64
    };

    let mean = |metric: Metric| mean_f64(records.iter().map(|r| r.metric_or_zero(metric)));

    SummaryMetrics {
        total_records: records.len(),
        undated_records,
        distinct_dates: dates.len(),
        daily_inputs,
        avg_cpu: mean(Metric::Cpu),
        avg_memory: mean(Metric::Memory),
        avg_network: mean(Metric::Network),
        avg_power: mean(Metric::Power),
        date_range: DateRange {
            start: dates.first().map(|d| d.to_string()),
            end: dates.last().map(|d| d.to_string()),
        },
    }
}

/// Compares the mean of the last `window_days` daily averages with the mean of the
/// `window_days` before them. `daily` must be in ascending date order.
pub fn metric_trends(daily: &[DailyAggregate], window_days: usize) -> MetricTrends {
    let mut trends = MetricTrends {
        window_days,
        ..Default::default()
    };
    let Some(span) = window_days.checked_mul(2) else {
        return trends;
    };
    if window_days == 0 || daily.len() < span {
        return trends;
    }

    let recent = &daily[daily.len() - window_days..];
    let prior = &daily[daily.len() - span..daily.len() - window_days];
    let change = |pick: fn(&DailyAggregate) -> f64| {
        let before = mean_f64(prior.iter().map(pick));
        let after = mean_f64(recent.iter().map(pick));
        (before != 0.0).then(|| ((after - before) / before * 1000.0).round() / 10.0)
    };

    trends.cpu = change(|d| d.cpu);
    trends.memory = change(|d| d.memory);
    trends.network = change(|d| d.network);
    trends.power = change(|d| d.power);
    trends
}
