// Pure aggregators over grouped rows. Every function takes its input explicitly and
// returns a fresh value; nothing is cached between calls.

pub mod daily;
pub mod maintenance;
pub mod monthly;
pub mod summary;

pub use daily::{daily_input_counts, daily_resource_averages, input_frequency};
pub use maintenance::{MaintenanceRules, evaluate_maintenance};
pub use monthly::monthly_stats;
pub use summary::{metric_trends, summary_metrics};

use crate::models::{Metric, RowRecord};

/// Mean of the zero-substituted metric over `rows`; 0 for no rows.
pub(crate) fn raw_mean(rows: &[&RowRecord], metric: Metric) -> f64 {
    mean_f64(rows.iter().map(|r| r.metric_or_zero(metric)))
}

pub(crate) fn mean_f64(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        return 0.0;
    }
    sum / (n as f64)
}
