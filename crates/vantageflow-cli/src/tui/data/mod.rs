use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use vantageflow_core::{load_streams, DayBuckets, GridRequest, GridWindow, StreakStats};

/// One row in the Daily tab: the per-day totals of all three streams.
#[derive(Debug, Clone)]
pub struct DailyActivity {
    pub date: NaiveDate,
    pub completed: u32,
    pub due: u32,
    pub overdue: u32,
}

#[derive(Default)]
pub struct DashboardData {
    pub buckets: DayBuckets,
    pub stats: StreakStats,
    pub heatmap: Option<GridWindow>,
    pub daily: Vec<DailyActivity>,
    pub open_due: u64,
    pub open_overdue: u64,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct DataLoader {
    dir: PathBuf,
    today: NaiveDate,
}

impl DataLoader {
    pub fn new(dir: PathBuf, today: NaiveDate) -> Self {
        Self { dir, today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn load(&self) -> Result<DashboardData> {
        if !self.dir.is_dir() {
            anyhow::bail!("'{}' is not a directory", self.dir.display());
        }

        let buckets = DayBuckets::collect(load_streams(&self.dir, self.today));
        let stats = StreakStats::compute(&buckets.activity, self.today);

        // Trailing year, padded to full Sunday-to-Saturday weeks.
        let heatmap = GridWindow::build(
            GridRequest::range(self.today - Duration::days(364), self.today),
            self.today,
            &buckets,
        );

        let daily = build_daily(&buckets);
        let open_due = buckets.due.total();
        let open_overdue = buckets.overdue.total();

        Ok(DashboardData {
            buckets,
            stats,
            heatmap: Some(heatmap),
            daily,
            open_due,
            open_overdue,
            loading: false,
            error: None,
        })
    }
}

fn build_daily(buckets: &DayBuckets) -> Vec<DailyActivity> {
    let mut merged: BTreeMap<NaiveDate, DailyActivity> = BTreeMap::new();

    fn entry(
        merged: &mut BTreeMap<NaiveDate, DailyActivity>,
        date: NaiveDate,
    ) -> &mut DailyActivity {
        merged.entry(date).or_insert(DailyActivity {
            date,
            completed: 0,
            due: 0,
            overdue: 0,
        })
    }

    for (date, day) in buckets.activity.iter() {
        entry(&mut merged, date).completed = day.value;
    }
    for (date, day) in buckets.due.iter() {
        entry(&mut merged, date).due = day.value;
    }
    for (date, day) in buckets.overdue.iter() {
        entry(&mut merged, date).overdue = day.value;
    }

    let mut daily: Vec<DailyActivity> = merged.into_values().collect();
    daily.sort_by(|a, b| b.date.cmp(&a.date));
    daily
}
