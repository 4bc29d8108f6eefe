// Root application state and the view model derived from it.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::aggregation::{self, daily::daily_aggregate};
use crate::calendar::{self, CalendarMonth};
use crate::config::AppConfig;
use crate::grouping::{group_by_date, parse_date_key};
use crate::models::{
    DailyAggregate, InputFrequency, MaintenanceAlert, Metric, MetricTrends, MonthlyAggregate,
    RowRecord, SummaryMetrics, YearMonth,
};

/// Explicit application state. Replaced wholesale on every successful upload.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub file_name: Option<String>,
    pub records: Arc<Vec<RowRecord>>,
    pub selected_date: Option<String>,
    /// User-visible message from the last failed or rejected upload.
    pub error: Option<String>,
    pub loading: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewStatus {
    Ready,
    /// No dated records: every per-day view is empty.
    NoData,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub status: ViewStatus,
    pub file_name: Option<String>,
    pub error: Option<String>,
    /// Units of the daily, monthly and calendar values. Summary means stay in column units.
    pub display_units: BTreeMap<Metric, &'static str>,
    pub summary: SummaryMetrics,
    pub trends: MetricTrends,
    pub daily: Vec<DailyAggregate>,
    pub input_frequency: InputFrequency,
    pub monthly: Vec<MonthlyAggregate>,
    pub alerts: Vec<MaintenanceAlert>,
    pub selected_day: Option<DailyAggregate>,
    pub calendar: Option<CalendarMonth>,
}

impl DashboardView {
    /// Recomputes every view from `state`. `month` picks the calendar page; otherwise the
    /// selected date's month, else the latest month in the data.
    pub fn derive(state: &DashboardState, config: &AppConfig, month: Option<YearMonth>) -> Self {
        let records = state.records.as_slice();
        let group = group_by_date(records);

        let daily = aggregation::daily_resource_averages(&group);
        let monthly = aggregation::monthly_stats(&group);
        let selected = state.selected_date.as_deref();

        let calendar_month = month
            .or_else(|| selected.and_then(parse_date_key).map(YearMonth::of))
            .or_else(|| monthly.last().map(|m| m.month));

        Self {
            status: if group.is_empty() {
                ViewStatus::NoData
            } else {
                ViewStatus::Ready
            },
            file_name: state.file_name.clone(),
            error: state.error.clone(),
            display_units: Metric::ALL.iter().map(|m| (*m, m.display_unit())).collect(),
            summary: aggregation::summary_metrics(records),
            trends: aggregation::metric_trends(&daily, config.summary.trend_window_days),
            input_frequency: aggregation::input_frequency(&group),
            alerts: aggregation::evaluate_maintenance(&group, &config.alerts.rules()),
            selected_day: selected
                .and_then(|d| group.get(d).map(|rows| daily_aggregate(d, rows))),
            calendar: calendar_month
                .map(|m| calendar::month_view(&group, m, selected, &monthly)),
            daily,
            monthly,
        }
    }
}
