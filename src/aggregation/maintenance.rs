// Rule-based maintenance alerts. Deterministic heuristics, not a model:
//   - more than `storage_reclaim_min_inputs` rows on a day  → storage reclaim, +3 days
//   - every `backup_every_n_days`-th distinct date (index 0 included) → backup, +7 days
//   - day's mean CPU above `index_rebuild_cpu_percent`       → index rebuild, +1 day
// Pooled alerts are stably sorted by scheduled date and truncated to `max_alerts`.

use chrono::{Days, NaiveDate};
use tracing::debug;

use super::raw_mean;
use crate::grouping::{DateGroup, parse_date_key};
use crate::models::{AlertKind, MaintenanceAlert, Metric};

const STORAGE_RECLAIM_OFFSET_DAYS: u64 = 3;
const BACKUP_OFFSET_DAYS: u64 = 7;
const INDEX_REBUILD_OFFSET_DAYS: u64 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceRules {
    pub storage_reclaim_min_inputs: usize,
    pub index_rebuild_cpu_percent: f64,
    pub backup_every_n_days: usize,
    pub max_alerts: usize,
}

impl Default for MaintenanceRules {
    fn default() -> Self {
        Self {
            storage_reclaim_min_inputs: 800,
            index_rebuild_cpu_percent: 70.0,
            backup_every_n_days: 7,
            max_alerts: 10,
        }
    }
}

pub fn evaluate_maintenance(
    group: &DateGroup<'_>,
    rules: &MaintenanceRules,
) -> Vec<MaintenanceAlert> {
    let mut alerts = Vec::new();

    for (index, (date, rows)) in group.sorted().into_iter().enumerate() {
        let Some(day) = parse_date_key(date) else {
            debug!(date, index, "unparseable date; no alerts scheduled");
            continue;
        };
        let schedule = |kind: AlertKind| {
            scheduled_date(kind, day).map(|at| MaintenanceAlert::new(kind, date, at))
        };

        // Order within a day is fixed so ties on scheduled date stay reproducible.
        if rows.len() > rules.storage_reclaim_min_inputs {
            alerts.extend(schedule(AlertKind::StorageReclaim));
        }
        if rules.backup_every_n_days > 0 && index % rules.backup_every_n_days == 0 {
            alerts.extend(schedule(AlertKind::Backup));
        }
        if raw_mean(rows, Metric::Cpu) > rules.index_rebuild_cpu_percent {
            alerts.extend(schedule(AlertKind::IndexRebuild));
        }
    }

    alerts.sort_by_key(|a| a.scheduled_date);
    alerts.truncate(rules.max_alerts);
    alerts
}

/// Scheduled date for `kind` triggered on `day`.
pub fn scheduled_date(kind: AlertKind, day: NaiveDate) -> Option<NaiveDate> {
    let offset = match kind {
        AlertKind::StorageReclaim => STORAGE_RECLAIM_OFFSET_DAYS,
        AlertKind::Backup => BACKUP_OFFSET_DAYS,
        AlertKind::IndexRebuild => INDEX_REBUILD_OFFSET_DAYS,
    };
    day.checked_add_days(Days::new(offset))
}
