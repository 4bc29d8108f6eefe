// Calendar heat-map view: one cell per day of a month with its input count and intensity.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::grouping::DateGroup;
use crate::models::{MonthlyAggregate, YearMonth};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    None,
    Low,
    Medium,
    High,
    Peak,
}

impl Intensity {
    pub fn for_inputs(inputs: usize) -> Self {
        match inputs {
            0 => Intensity::None,
            1..200 => Intensity::Low,
            200..500 => Intensity::Medium,
            500..800 => Intensity::High,
            _ => Intensity::Peak,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub day: u32,
    pub date: String,
    pub inputs: usize,
    pub intensity: Intensity,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    pub month: YearMonth,
    /// Weekday of the 1st, Sunday = 0.
    pub first_weekday: u32,
    pub days: Vec<CalendarDay>,
    pub stats: Option<MonthlyAggregate>,
}

/// Builds the grid for `month`. Cells look up rows by zero-padded `YYYY-MM-DD` keys.
pub fn month_view(
    group: &DateGroup<'_>,
    month: YearMonth,
    selected: Option<&str>,
    monthly: &[MonthlyAggregate],
) -> CalendarMonth {
    let first_weekday = month
        .first_day()
        .map_or(0, |d| d.weekday().num_days_from_sunday());
    let days = (1..=month.days_in_month())
        .map(|day| {
            let date = format!("{month}-{day:02}");
            let inputs = group.count(&date);
            CalendarDay {
                day,
                selected: selected == Some(date.as_str()),
                inputs,
                intensity: Intensity::for_inputs(inputs),
                date,
            }
        })
        .collect();

    CalendarMonth {
        month,
        first_weekday,
        days,
        stats: monthly.iter().find(|m| m.month == month).cloned(),
    }
}
