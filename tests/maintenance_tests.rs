// Maintenance heuristic: thresholds, weekly backups, scheduling, ordering, truncation

mod common;

use capdash::aggregation::{MaintenanceRules, evaluate_maintenance};
use capdash::grouping::group_by_date;
use capdash::models::{AlertKind, AlertStatus, MaintenanceAlert, RowRecord, Severity};
use chrono::NaiveDate;
use common::day_rows;

fn alerts_for(records: &[RowRecord]) -> Vec<MaintenanceAlert> {
    evaluate_maintenance(&group_by_date(records), &MaintenanceRules::default())
}

fn of_kind(alerts: &[MaintenanceAlert], kind: AlertKind) -> Vec<&MaintenanceAlert> {
    alerts.iter().filter(|a| a.kind == kind).collect()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn storage_reclaim_boundary_is_strictly_above_800() {
    let at_800 = alerts_for(&day_rows("2024-01-01", 800, 10.0));
    assert!(of_kind(&at_800, AlertKind::StorageReclaim).is_empty());

    let at_801 = alerts_for(&day_rows("2024-01-01", 801, 10.0));
    let reclaim = of_kind(&at_801, AlertKind::StorageReclaim);
    assert_eq!(reclaim.len(), 1);
    let a = reclaim[0];
    assert_eq!(a.scheduled_date, ymd(2024, 1, 4));
    assert_eq!(a.severity, Severity::Medium);
    assert_eq!(a.estimated_duration, "2-4 hours");
    assert_eq!(a.status, AlertStatus::Pending);
    assert_eq!(a.id, "vacuum-2024-01-01");
}

#[test]
fn index_rebuild_fires_above_70_percent_cpu() {
    let mut records = day_rows("2024-01-01", 2, 70.0);
    records.extend(day_rows("2024-01-02", 1, 70.5));
    let alerts = alerts_for(&records);
    let index = of_kind(&alerts, AlertKind::IndexRebuild);
    assert_eq!(index.len(), 1);
    assert_eq!(index[0].triggered_by, "2024-01-02");
    assert_eq!(index[0].scheduled_date, ymd(2024, 1, 3));
    assert_eq!(index[0].severity, Severity::High);
    assert_eq!(index[0].estimated_duration, "30-60 minutes");
    assert_eq!(index[0].status, AlertStatus::Pending);
}

#[test]
fn index_rebuild_uses_zero_substituted_mean() {
    let mut records = day_rows("2024-01-01", 1, 100.0);
    records.push(RowRecord::from_pairs([("date", "2024-01-01"), ("cpu_usage", "")]));
    let alerts = alerts_for(&records);
    assert!(of_kind(&alerts, AlertKind::IndexRebuild).is_empty());
}

#[test]
fn backups_follow_sequence_index_not_calendar() {
    // Irregular gaps: backups land on the 1st, 8th and 15th distinct dates.
    let dates: Vec<String> = (0..15)
        .map(|i| {
            let d = ymd(2024, 1, 1) + chrono::Days::new(i * 3);
            d.format("%Y-%m-%d").to_string()
        })
        .collect();
    let records: Vec<RowRecord> = dates.iter().flat_map(|d| day_rows(d, 1, 10.0)).collect();
    let rules = MaintenanceRules {
        max_alerts: 100,
        ..Default::default()
    };
    let alerts = evaluate_maintenance(&group_by_date(&records), &rules);

    let backups = of_kind(&alerts, AlertKind::Backup);
    let triggers: Vec<&str> = backups.iter().map(|a| a.triggered_by.as_str()).collect();
    assert_eq!(triggers, vec![dates[0].as_str(), dates[7].as_str(), dates[14].as_str()]);
    assert!(backups.iter().all(|a| a.status == AlertStatus::Scheduled));
    assert_eq!(backups[0].scheduled_date, ymd(2024, 1, 8));
    assert_eq!(backups[0].estimated_duration, "1-3 hours");
}

#[test]
fn alerts_sorted_by_schedule_with_stable_ties() {
    // Day 1: reclaim (+3 → Jan 4), backup (+7 → Jan 8), index (+1 → Jan 2).
    // Day 3: index (+1 → Jan 4) ties with day 1's reclaim and must come after it.
    let mut records = day_rows("2024-01-01", 801, 95.0);
    records.extend(day_rows("2024-01-03", 1, 95.0));
    let alerts = alerts_for(&records);

    let summary: Vec<(AlertKind, NaiveDate)> =
        alerts.iter().map(|a| (a.kind, a.scheduled_date)).collect();
    assert_eq!(
        summary,
        vec![
            (AlertKind::IndexRebuild, ymd(2024, 1, 2)),
            (AlertKind::StorageReclaim, ymd(2024, 1, 4)),
            (AlertKind::IndexRebuild, ymd(2024, 1, 4)),
            (AlertKind::Backup, ymd(2024, 1, 8)),
        ]
    );
}

#[test]
fn truncates_to_first_ten() {
    let records = common::consecutive_days(30, 1, 99.0);
    let alerts = alerts_for(&records);
    assert_eq!(alerts.len(), 10);
    assert!(alerts.windows(2).all(|w| w[0].scheduled_date <= w[1].scheduled_date));
    assert_eq!(alerts[0].scheduled_date, ymd(2024, 1, 2));
}

#[test]
fn unparseable_dates_keep_their_index_but_schedule_nothing() {
    let mut records = day_rows("0000-bad", 900, 99.0);
    records.extend(day_rows("2024-01-01", 1, 10.0));
    let alerts = alerts_for(&records);
    // "0000-bad" sorts first and takes index 0, so 2024-01-01 (index 1) gets no backup.
    assert!(alerts.is_empty());
}

#[test]
fn no_records_no_alerts() {
    assert!(alerts_for(&[]).is_empty());
}
