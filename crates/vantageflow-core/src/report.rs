//! Serializable activity report for JSON export.

use chrono::NaiveDate;

use crate::{intensity_level, DayBuckets, StreakStats};

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMeta {
    pub generated_at: String,
    pub version: String,
    pub date_range_start: Option<NaiveDate>,
    pub date_range_end: Option<NaiveDate>,
}

/// One activity day with its intensity against the whole-stream maximum.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub date: NaiveDate,
    pub value: u32,
    pub intensity: u8,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityReport {
    pub meta: ReportMeta,
    pub stats: StreakStats,
    pub active_days: u32,
    pub max_in_single_day: u32,
    pub open_due: u64,
    pub open_overdue: u64,
    pub days: Vec<DaySummary>,
}

/// Summarize bucketed streams. Streak stats honor the injected `today`;
/// only the meta timestamp consults the wall clock.
pub fn build_report(buckets: &DayBuckets, today: NaiveDate) -> ActivityReport {
    let max = buckets.activity.max_value();
    let days: Vec<DaySummary> = buckets
        .activity
        .iter()
        .map(|(date, entry)| DaySummary {
            date,
            value: entry.value,
            intensity: intensity_level(entry.value, max),
        })
        .collect();

    let active_days = days.iter().filter(|d| d.value > 0).count() as u32;

    ActivityReport {
        meta: ReportMeta {
            generated_at: chrono::Utc::now().to_rfc3339(),
            version: crate::version(),
            date_range_start: buckets.activity.first_day(),
            date_range_end: buckets.activity.last_day(),
        },
        stats: StreakStats::compute(&buckets.activity, today),
        active_days,
        max_in_single_day: max,
        open_due: buckets.due.total(),
        open_overdue: buckets.overdue.total(),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActivityStreams, DatedObservation};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_report_empty() {
        let report = build_report(&DayBuckets::default(), date("2025-06-10"));
        assert_eq!(report.days.len(), 0);
        assert_eq!(report.active_days, 0);
        assert_eq!(report.stats, StreakStats::default());
        assert!(report.meta.date_range_start.is_none());
        assert_eq!(report.meta.version, crate::version());
    }

    #[test]
    fn test_report_with_data() {
        let buckets = DayBuckets::collect(ActivityStreams {
            activity: vec![
                DatedObservation::new(date("2025-06-09"), 2),
                DatedObservation::new(date("2025-06-10"), 6),
            ],
            due: vec![DatedObservation::new(date("2025-06-12"), 3)],
            overdue: vec![DatedObservation::new(date("2025-06-01"), 1)],
        });

        let report = build_report(&buckets, date("2025-06-10"));
        assert_eq!(report.days.len(), 2);
        assert_eq!(report.active_days, 2);
        assert_eq!(report.stats.total, 8);
        assert_eq!(report.stats.current_streak, 2);
        assert_eq!(report.max_in_single_day, 6);
        assert_eq!(report.open_due, 3);
        assert_eq!(report.open_overdue, 1);
        assert_eq!(report.meta.date_range_start, Some(date("2025-06-09")));
        assert_eq!(report.meta.date_range_end, Some(date("2025-06-10")));
        // 2/6 of max -> band 2, 6/6 -> band 4
        assert_eq!(report.days[0].intensity, 2);
        assert_eq!(report.days[1].intensity, 4);
    }
}
