// Date grouping: partitions rows by their date key. Iteration follows first-seen order;
// consumers that need chronological order sort the keys themselves.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::RowRecord;

/// Insertion-ordered mapping from date key to the rows observed for that day.
#[derive(Debug, Clone, Default)]
pub struct DateGroup<'a> {
    entries: Vec<(&'a str, Vec<&'a RowRecord>)>,
    index: HashMap<&'a str, usize>,
    undated: usize,
}

impl<'a> DateGroup<'a> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows dropped because no date column resolved.
    pub fn undated(&self) -> usize {
        self.undated
    }

    pub fn get(&self, date: &str) -> Option<&[&'a RowRecord]> {
        self.index
            .get(date)
            .map(|&i| self.entries[i].1.as_slice())
    }

    /// Row count for `date`, 0 when absent.
    pub fn count(&self, date: &str) -> usize {
        self.get(date).map_or(0, <[_]>::len)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a RowRecord])> + '_ {
        self.entries.iter().map(|(d, rows)| (*d, rows.as_slice()))
    }

    /// Entries sorted by ascending date key (string order).
    pub fn sorted(&self) -> Vec<(&'a str, &[&'a RowRecord])> {
        let mut out: Vec<_> = self.iter().collect();
        out.sort_by(|a, b| a.0.cmp(b.0));
        out
    }

    /// All grouped rows, day by day in first-seen order.
    pub fn flatten(&self) -> impl Iterator<Item = &'a RowRecord> + '_ {
        self.entries.iter().flat_map(|(_, rows)| rows.iter().copied())
    }

    fn push(&mut self, date: &'a str, record: &'a RowRecord) {
        match self.index.get(date) {
            Some(&i) => self.entries[i].1.push(record),
            None => {
                self.index.insert(date, self.entries.len());
                self.entries.push((date, vec![record]));
            }
        }
    }
}

/// Groups `records` by [`RowRecord::date_key`]; rows without a date are counted and dropped.
pub fn group_by_date(records: &[RowRecord]) -> DateGroup<'_> {
    let mut group = DateGroup::default();
    for record in records {
        match record.date_key() {
            Some(date) => group.push(date, record),
            None => group.undated += 1,
        }
    }
    group
}

/// Parses a date key to a calendar day. Accepts `YYYY-MM-DD` (optionally followed by a time
/// part), `YYYY/MM/DD` and `MM/DD/YYYY`.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let day = key
        .trim()
        .split(['T', ' '])
        .next()
        .unwrap_or_default();
    ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(day, fmt).ok())
}
