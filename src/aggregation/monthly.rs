// Month roll-up: mean of the day-level averages, so each day weighs the same
// regardless of how many rows it had.

use std::collections::BTreeMap;

use tracing::debug;

use super::daily::daily_aggregate;
use crate::grouping::{DateGroup, parse_date_key};
use crate::models::{MonthlyAggregate, YearMonth, round2};

#[derive(Default)]
struct MonthBucket {
    days: usize,
    total_inputs: usize,
    cpu: f64,
    memory: f64,
    network: f64,
    power: f64,
}

/// One aggregate per month that has at least one parseable date, ascending by month.
pub fn monthly_stats(group: &DateGroup<'_>) -> Vec<MonthlyAggregate> {
    let mut buckets: BTreeMap<YearMonth, MonthBucket> = BTreeMap::new();

    for (date, rows) in group.sorted() {
        let Some(day) = parse_date_key(date) else {
            debug!(date, "skipping unparseable date in monthly roll-up");
            continue;
        };
        let daily = daily_aggregate(date, rows);
        let bucket = buckets.entry(YearMonth::of(day)).or_default();
        bucket.days += 1;
        bucket.total_inputs += daily.input_count;
        bucket.cpu += daily.cpu;
        bucket.memory += daily.memory;
        bucket.network += daily.network;
        bucket.power += daily.power;
    }

    buckets
        .into_iter()
        .map(|(month, b)| {
            let days = b.days as f64;
            MonthlyAggregate {
                month,
                days: b.days,
                total_inputs: b.total_inputs,
                avg_cpu: round2(b.cpu / days),
                avg_memory: round2(b.memory / days),
                avg_network: round2(b.network / days),
                avg_power: round2(b.power / days),
            }
        })
        .collect()
}
