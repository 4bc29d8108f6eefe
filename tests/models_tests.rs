// Model serialization (JSON camelCase / lowercase enums) and metric coercion

use capdash::models::*;
use chrono::NaiveDate;

#[test]
fn coerce_number_accepts_trimmed_finite_numbers() {
    assert_eq!(coerce_number(" 12.5 "), Some(12.5));
    assert_eq!(coerce_number("1e6"), Some(1_000_000.0));
    assert_eq!(coerce_number(""), None);
    assert_eq!(coerce_number("abc"), None);
    assert_eq!(coerce_number("NaN"), None);
    assert_eq!(coerce_number("inf"), None);
}

#[test]
fn coerce_number_takes_leading_numeric_prefix() {
    assert_eq!(coerce_number("45.5%"), Some(45.5));
    assert_eq!(coerce_number("95 ms"), Some(95.0));
    assert_eq!(coerce_number("1,200"), Some(1.0));
    assert_eq!(coerce_number("-3.5e2W"), Some(-350.0));
    assert_eq!(coerce_number("5e"), Some(5.0));
    assert_eq!(coerce_number(".5x"), Some(0.5));
    assert_eq!(coerce_number("abc"), None);
    assert_eq!(coerce_number("-"), None);
    assert_eq!(coerce_number("."), None);

    let row = RowRecord::from_pairs([("cpu_usage", "abc"), ("memory_usage", "12abc")]);
    assert_eq!(row.metric_or_zero(Metric::Cpu), 0.0);
    assert_eq!(row.metric_or_zero(Metric::Memory), 12.0);
}

#[test]
fn metric_display_units() {
    assert_eq!(Metric::Network.to_display(1_500_000.0), 1.5);
    assert_eq!(Metric::Power.to_display(2_250.0), 2.25);
    assert_eq!(Metric::Cpu.to_display(33.333), 33.33);
    assert_eq!(Metric::Network.display_unit(), "MB/s");
    assert_eq!(Metric::Power.column(), "power_consumption");
}

#[test]
fn daily_aggregate_serializes_camel_case() {
    let d = DailyAggregate {
        date: "2024-01-01".into(),
        input_count: 3,
        cpu: 1.0,
        memory: 2.0,
        network: 3.0,
        power: 4.0,
    };
    let json = serde_json::to_string(&d).unwrap();
    assert!(json.contains("\"inputCount\":3"));
    let back: DailyAggregate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);
}

#[test]
fn monthly_aggregate_month_is_a_string() {
    let m = MonthlyAggregate {
        month: YearMonth::new(2024, 3).unwrap(),
        days: 2,
        total_inputs: 11,
        avg_cpu: 70.0,
        avg_memory: 0.0,
        avg_network: 0.0,
        avg_power: 0.0,
    };
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["month"], "2024-03");
    assert_eq!(v["totalInputs"], 11);
}

#[test]
fn alert_serializes_kind_severity_status() {
    let alert = MaintenanceAlert::new(
        AlertKind::StorageReclaim,
        "2024-01-01",
        NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
    );
    let v = serde_json::to_value(&alert).unwrap();
    assert_eq!(v["id"], "vacuum-2024-01-01");
    assert_eq!(v["kind"], "storageReclaim");
    assert_eq!(v["severity"], "medium");
    assert_eq!(v["status"], "pending");
    assert_eq!(v["scheduledDate"], "2024-01-04");
    assert_eq!(v["estimatedDuration"], "2-4 hours");
    assert_eq!(v["title"], "Database Vacuum Required");
}

#[test]
fn row_record_serializes_as_plain_map() {
    let r = RowRecord::from_pairs([("date", "2024-01-01"), ("cpu_usage", "5")]);
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["date"], "2024-01-01");
    assert_eq!(v["cpu_usage"], "5");
}
