use cadence_model::entry::Entry;
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Days covered by the grid before it is widened back to a Monday.
const SPAN_DAYS: u64 = 365;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub count: u32,
    /// 0 for no entries, 1 for one, 2 for two or three, 3 for more.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthLabel {
    pub name: String,
    pub column: usize,
}

/// A year of activity laid out in week columns, Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    pub cells: Vec<HeatmapCell>,
    pub months: Vec<MonthLabel>,
}

impl Heatmap {
    #[must_use]
    pub fn columns(&self) -> usize {
        self.cells.len().div_ceil(7)
    }
}

#[must_use]
pub fn daily_counts(entries: &[Entry]) -> BTreeMap<NaiveDate, u32> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.day()).or_insert(0) += 1;
    }
    counts
}

#[must_use]
pub fn intensity(count: u32) -> u8 {
    match count {
        0 => 0,
        1 => 1,
        2..=3 => 2,
        _ => 3,
    }
}

#[must_use]
pub fn heatmap(entries: &[Entry], today: NaiveDate) -> Heatmap {
    let counts = daily_counts(entries);
    let year_ago = today.checked_sub_days(Days::new(SPAN_DAYS)).unwrap_or(NaiveDate::MIN);
    let start = year_ago
        .checked_sub_days(Days::new(u64::from(year_ago.weekday().num_days_from_monday())))
        .unwrap_or(year_ago);

    let cells: Vec<_> = start
        .iter_days()
        .take_while(|day| *day <= today)
        .map(|date| {
            let count = counts.get(&date).copied().unwrap_or(0);
            HeatmapCell {
                date,
                count,
                level: intensity(count),
            }
        })
        .collect();

    let mut months = Vec::new();
    let mut last_month = None;
    for (column, week) in cells.chunks(7).enumerate() {
        let first = week[0].date;
        if last_month != Some(first.month()) {
            months.push(MonthLabel {
                name: first.format("%b").to_string(),
                column,
            });
            last_month = Some(first.month());
        }
    }

    Heatmap { cells, months }
}
