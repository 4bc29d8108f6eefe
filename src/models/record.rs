// Parsed CSV rows and the numeric metrics read from them

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Columns tried, in order, when resolving a row's date.
pub const DATE_COLUMNS: [&str; 2] = ["date", "dates"];

/// One parsed data row. Every field keeps its raw text; numeric coercion happens
/// through [`RowRecord::metric_or_zero`] at aggregation time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowRecord {
    fields: BTreeMap<String, String>,
}

impl RowRecord {
    /// Build from `(column, value)` pairs; a repeated column keeps its last value.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// First non-empty value among `date`, then `dates`.
    pub fn date_key(&self) -> Option<&str> {
        DATE_COLUMNS
            .iter()
            .filter_map(|c| self.get(c))
            .map(str::trim)
            .find(|v| !v.is_empty())
    }

    /// Parsed metric value; `None` when the column is absent or not a finite number.
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        self.get(metric.column()).and_then(coerce_number)
    }

    /// Parse-or-zero: absent and unparsable values count as 0 in every aggregate.
    pub fn metric_or_zero(&self, metric: Metric) -> f64 {
        self.metric(metric).unwrap_or(0.0)
    }
}

/// Numeric coercion applied uniformly to all metric columns: the longest leading decimal
/// number after leading whitespace, so `"45.5%"` is 45.5 and `"1,200"` is 1. `None` when
/// there is no leading number or it is not finite.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let b = s.as_bytes();
    let digits_from = |mut i: usize| {
        while b.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let sign = usize::from(matches!(b.first(), Some(b'+' | b'-')));
    let int_end = digits_from(sign);
    let mut end = int_end;
    let mut has_digits = int_end > sign;
    if b.get(int_end) == Some(&b'.') {
        let frac_end = digits_from(int_end + 1);
        has_digits |= frac_end > int_end + 1;
        end = frac_end;
    }
    if !has_digits {
        return None;
    }

    // Exponent only counts when it has digits: "5e" is 5.
    if matches!(b.get(end), Some(b'e' | b'E')) {
        let exp_start = end + 1 + usize::from(matches!(b.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Recognized metric columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Cpu,
    Memory,
    Network,
    Power,
}

impl Metric {
    pub const ALL: [Metric; 4] = [Metric::Cpu, Metric::Memory, Metric::Network, Metric::Power];

    /// CSV column name.
    pub fn column(self) -> &'static str {
        match self {
            Metric::Cpu => "cpu_usage",
            Metric::Memory => "memory_usage",
            Metric::Network => "network_traffic",
            Metric::Power => "power_consumption",
        }
    }

    /// Divisor from raw column units to display units (bytes/s → MB/s, W → KW).
    pub fn display_divisor(self) -> f64 {
        match self {
            Metric::Cpu | Metric::Memory => 1.0,
            Metric::Network => 1_000_000.0,
            Metric::Power => 1_000.0,
        }
    }

    pub fn display_unit(self) -> &'static str {
        match self {
            Metric::Cpu | Metric::Memory => "%",
            Metric::Network => "MB/s",
            Metric::Power => "KW",
        }
    }

    /// Raw mean → display value, rounded to 2 decimals.
    pub fn to_display(self, raw_mean: f64) -> f64 {
        round2(raw_mean / self.display_divisor())
    }
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
