//! Day-keyed aggregation of observation streams
//!
//! Uses rayon for parallel fold/reduce operations.

use crate::{ActivityStreams, DatedObservation, TaskDetail};
use chrono::NaiveDate;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Aggregated value (and task details) for one calendar day.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct DayEntry {
    pub value: u32,
    pub details: Vec<TaskDetail>,
}

impl DayEntry {
    fn absorb(&mut self, value: u32, details: Vec<TaskDetail>) {
        self.value = self.value.saturating_add(value);
        self.details.extend(details);
    }
}

/// Sparse map from calendar day to aggregated value for one stream. Days
/// absent from the input never appear as keys.
#[derive(Debug, Clone, Default)]
pub struct DayBucket {
    days: BTreeMap<NaiveDate, DayEntry>,
}

impl DayBucket {
    /// Aggregate observations into day entries. Summation is commutative
    /// and associative, so any permutation of the input produces the same
    /// per-day values.
    pub fn collect(observations: Vec<DatedObservation>) -> Self {
        if observations.is_empty() {
            return Self::default();
        }

        let days: BTreeMap<NaiveDate, DayEntry> = observations
            .into_par_iter()
            .fold(
                BTreeMap::new,
                |mut acc: BTreeMap<NaiveDate, DayEntry>, obs| {
                    acc.entry(obs.day).or_default().absorb(obs.value, obs.details);
                    acc
                },
            )
            .reduce(BTreeMap::new, |mut a, b| {
                for (day, entry) in b {
                    a.entry(day).or_default().absorb(entry.value, entry.details);
                }
                a
            });

        Self { days }
    }

    pub fn value(&self, day: NaiveDate) -> u32 {
        self.days.get(&day).map(|e| e.value).unwrap_or(0)
    }

    pub fn get(&self, day: NaiveDate) -> Option<&DayEntry> {
        self.days.get(&day)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Days in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &DayEntry)> {
        self.days.iter().map(|(d, e)| (*d, e))
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.days.keys().next_back().copied()
    }

    pub fn max_value(&self) -> u32 {
        self.days.values().map(|e| e.value).max().unwrap_or(0)
    }

    /// Maximum value over days in `start..=end`.
    pub fn max_value_in(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        if end < start {
            return 0;
        }
        self.days
            .range(start..=end)
            .map(|(_, e)| e.value)
            .max()
            .unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.days.values().map(|e| e.value as u64).sum()
    }
}

/// The three streams in bucketed form.
#[derive(Debug, Clone, Default)]
pub struct DayBuckets {
    pub activity: DayBucket,
    pub due: DayBucket,
    pub overdue: DayBucket,
}

impl DayBuckets {
    pub fn collect(streams: ActivityStreams) -> Self {
        Self {
            activity: DayBucket::collect(streams.activity),
            due: DayBucket::collect(streams.due),
            overdue: DayBucket::collect(streams.overdue),
        }
    }
}

/// Classify a day's value against the window maximum into the 0-4 ordinal
/// used for heatmap color density. Fixed quartile bands, not adaptive
/// binning: (0, 0.25] -> 1, (0.25, 0.5] -> 2, (0.5, 0.75] -> 3,
/// (0.75, 1.0] -> 4. Zero value or zero max is level 0.
pub fn intensity_level(value: u32, max: u32) -> u8 {
    if value == 0 || max == 0 {
        return 0;
    }
    let ratio = value as f64 / max as f64;
    if ratio <= 0.25 {
        1
    } else if ratio <= 0.5 {
        2
    } else if ratio <= 0.75 {
        3
    } else {
        4
    }
}
