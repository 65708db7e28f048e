//! Grid-window construction for the calendar views.
//!
//! A window is a span of calendar days partitioned into Sunday-start weeks,
//! padded with out-of-range cells so every week is complete.

use crate::{intensity_level, DayBuckets, TaskDetail};
use chrono::{Datelike, Duration, Months, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Week,
    Month,
    Quarter,
    Year,
    Range,
}

impl ViewMode {
    pub fn all() -> &'static [ViewMode] {
        &[
            ViewMode::Week,
            ViewMode::Month,
            ViewMode::Quarter,
            ViewMode::Year,
            ViewMode::Range,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Week => "week",
            ViewMode::Month => "month",
            ViewMode::Quarter => "quarter",
            ViewMode::Year => "year",
            ViewMode::Range => "range",
        }
    }

    /// Only week and month views page with an offset.
    pub fn pages(&self) -> bool {
        matches!(self, ViewMode::Week | ViewMode::Month)
    }
}

impl std::str::FromStr for ViewMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            "quarter" => Ok(ViewMode::Quarter),
            "year" => Ok(ViewMode::Year),
            "range" => Ok(ViewMode::Range),
            _ => Err(()),
        }
    }
}

/// Which window to build. `offset` pages week/month views backward or
/// forward in whole weeks/months and is ignored by the other modes.
/// `range` supplies the inclusive bounds for [`ViewMode::Range`].
#[derive(Debug, Clone, Copy)]
pub struct GridRequest {
    pub mode: ViewMode,
    pub offset: i32,
    pub range: Option<(NaiveDate, NaiveDate)>,
}

impl GridRequest {
    pub fn new(mode: ViewMode) -> Self {
        Self {
            mode,
            offset: 0,
            range: None,
        }
    }

    pub fn with_offset(mode: ViewMode, offset: i32) -> Self {
        Self {
            mode,
            offset,
            range: None,
        }
    }

    pub fn range(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            mode: ViewMode::Range,
            offset: 0,
            range: Some((start, end)),
        }
    }
}

/// One rendered day. Value attribution is mutually exclusive by time
/// orientation: a future cell carries due values only, a past or current
/// cell carries activity and overdue values only.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: NaiveDate,
    pub activity: u32,
    pub due: u32,
    pub overdue: u32,
    pub activity_intensity: u8,
    pub due_intensity: u8,
    pub overdue_intensity: u8,
    pub due_details: Vec<TaskDetail>,
    pub overdue_details: Vec<TaskDetail>,
    pub is_today: bool,
    pub is_future: bool,
    pub in_range: bool,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridWindow {
    pub mode: ViewMode,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Sunday-start weeks of exactly 7 cells. Empty for a degenerate range.
    pub weeks: Vec<Vec<DayCell>>,
}

impl GridWindow {
    /// Build the window for `request` around an explicit `today`. A range
    /// request with `end < start` (or no bounds at all) yields an empty
    /// window rather than an error.
    pub fn build(request: GridRequest, today: NaiveDate, buckets: &DayBuckets) -> Self {
        let (start, end) = window_span(&request, today);
        if end < start {
            return Self {
                mode: request.mode,
                start,
                end,
                weeks: Vec::new(),
            };
        }

        let lead = start.weekday().num_days_from_sunday() as i64;
        let trail = 6 - end.weekday().num_days_from_sunday() as i64;
        let grid_start = start - Duration::days(lead);
        let grid_end = end + Duration::days(trail);

        // Each stream classifies against its own maximum over the window.
        let max_activity = buckets.activity.max_value_in(start, end);
        let max_due = buckets.due.max_value_in(start, end);
        let max_overdue = buckets.overdue.max_value_in(start, end);

        let mut weeks: Vec<Vec<DayCell>> = Vec::new();
        let mut week: Vec<DayCell> = Vec::with_capacity(7);
        let mut date = grid_start;
        while date <= grid_end {
            let is_future = date > today;
            let in_range = date >= start && date <= end;

            let (activity, overdue, due) = if is_future {
                (0, 0, buckets.due.value(date))
            } else {
                (
                    buckets.activity.value(date),
                    buckets.overdue.value(date),
                    0,
                )
            };

            let due_details = if is_future {
                buckets
                    .due
                    .get(date)
                    .map(|e| e.details.clone())
                    .unwrap_or_default()
            } else {
                Vec::new()
            };
            let overdue_details = if is_future {
                Vec::new()
            } else {
                buckets
                    .overdue
                    .get(date)
                    .map(|e| e.details.clone())
                    .unwrap_or_default()
            };

            week.push(DayCell {
                date,
                activity,
                due,
                overdue,
                activity_intensity: intensity_level(activity, max_activity),
                due_intensity: intensity_level(due, max_due),
                overdue_intensity: intensity_level(overdue, max_overdue),
                due_details,
                overdue_details,
                is_today: date == today,
                is_future,
                in_range,
            });

            if week.len() == 7 {
                weeks.push(week);
                week = Vec::with_capacity(7);
            }
            date += Duration::days(1);
        }

        Self {
            mode: request.mode,
            start,
            end,
            weeks,
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|w| w.iter())
    }

    pub fn in_range_count(&self) -> usize {
        self.cells().filter(|c| c.in_range).count()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}

fn window_span(request: &GridRequest, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    match request.mode {
        ViewMode::Week => {
            let back = today.weekday().num_days_from_sunday() as i64;
            let anchor = today - Duration::days(back);
            let start = anchor + Duration::weeks(request.offset as i64);
            (start, start + Duration::days(6))
        }
        ViewMode::Month => {
            let first = shift_months(today.with_day(1).unwrap_or(today), request.offset);
            (first, last_day_of_month(first))
        }
        ViewMode::Quarter => {
            let start_month = today.month0() / 3 * 3 + 1;
            let first = NaiveDate::from_ymd_opt(today.year(), start_month, 1).unwrap_or(today);
            let last_first = shift_months(first, 2);
            (first, last_day_of_month(last_first))
        }
        ViewMode::Year => {
            let first = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
            let last = NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today);
            (first, last)
        }
        ViewMode::Range => match request.range {
            Some((start, end)) => (start, end),
            // No bounds supplied: degenerate, same as end < start.
            None => (today, today - Duration::days(1)),
        },
    }
}

fn shift_months(first: NaiveDate, offset: i32) -> NaiveDate {
    if offset >= 0 {
        first
            .checked_add_months(Months::new(offset as u32))
            .unwrap_or(first)
    } else {
        first
            .checked_sub_months(Months::new(offset.unsigned_abs()))
            .unwrap_or(first)
    }
}

fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    shift_months(first, 1) - Duration::days(1)
}
