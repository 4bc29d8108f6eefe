// Shared test helpers
#![allow(dead_code)]

use capdash::models::RowRecord;

pub const HEADER: &str = "date,cpu_usage,memory_usage,network_traffic,power_consumption";

/// `n` rows on `date`, all with the same cpu value and fixed other metrics.
pub fn day_rows(date: &str, n: usize, cpu: f64) -> Vec<RowRecord> {
    (0..n)
        .map(|_| {
            RowRecord::from_pairs([
                ("date", date.to_string()),
                ("cpu_usage", cpu.to_string()),
                ("memory_usage", "40".to_string()),
                ("network_traffic", "2000000".to_string()),
                ("power_consumption", "1500".to_string()),
            ])
        })
        .collect()
}

pub fn record(pairs: &[(&str, &str)]) -> RowRecord {
    RowRecord::from_pairs(pairs.iter().copied())
}

/// CSV text with the standard header and `rows` as body lines.
pub fn csv(rows: &[&str]) -> String {
    let mut out = String::from(HEADER);
    for row in rows {
        out.push('\n');
        out.push_str(row);
    }
    out.push('\n');
    out
}

/// One row per day for `days` consecutive days starting 2024-01-01.
pub fn consecutive_days(days: u32, rows_per_day: usize, cpu: f64) -> Vec<RowRecord> {
    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..days)
        .flat_map(|i| {
            let date = (start + chrono::Days::new(u64::from(i))).format("%Y-%m-%d").to_string();
            day_rows(&date, rows_per_day, cpu)
        })
        .collect()
}
