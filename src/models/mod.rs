// Domain models

mod aggregate;
mod alert;
mod month;
mod record;
mod summary;

pub use aggregate::{DailyAggregate, DailyInputCount, InputFrequency, MonthlyAggregate};
pub use alert::{AlertKind, AlertStatus, MaintenanceAlert, Severity};
pub use month::{ParseYearMonthError, YearMonth};
pub use record::{DATE_COLUMNS, Metric, RowRecord, coerce_number, round2};
pub use summary::{DateRange, MetricTrends, SummaryMetrics};
