//! Streak statistics over the past-activity stream.

use crate::DayBucket;
use chrono::{Duration, NaiveDate};

/// Totals and consecutive-day runs for the activity stream. The due and
/// overdue streams never contribute here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakStats {
    pub total: u64,
    pub current_streak: u32,
    pub longest_streak: u32,
}

impl StreakStats {
    /// Compute stats against an explicit `today`. The current streak walks
    /// backward from today; a quiet today does not break an ongoing streak,
    /// the walk just starts from yesterday instead.
    pub fn compute(activity: &DayBucket, today: NaiveDate) -> Self {
        Self {
            total: activity.total(),
            current_streak: current_streak(activity, today),
            longest_streak: longest_streak(activity),
        }
    }
}

fn current_streak(activity: &DayBucket, today: NaiveDate) -> u32 {
    let mut check = if activity.value(today) > 0 {
        today
    } else {
        today - Duration::days(1)
    };

    let mut streak = 0u32;
    while activity.value(check) > 0 {
        streak += 1;
        check -= Duration::days(1);
    }
    streak
}

fn longest_streak(activity: &DayBucket) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;

    // DayBucket iterates in ascending date order.
    for (day, entry) in activity.iter() {
        if entry.value == 0 {
            continue;
        }
        run = match prev {
            Some(p) if day == p + Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatedObservation;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn bucket(days: &[(&str, u32)]) -> DayBucket {
        DayBucket::collect(
            days.iter()
                .map(|(d, v)| DatedObservation::new(date(d), *v))
                .collect(),
        )
    }

    #[test]
    fn test_empty_bucket_is_all_zero() {
        let stats = StreakStats::compute(&DayBucket::default(), date("2025-06-10"));
        assert_eq!(stats, StreakStats::default());
    }

    #[test]
    fn test_current_streak_through_today() {
        let activity = bucket(&[("2025-06-08", 1), ("2025-06-09", 2), ("2025-06-10", 1)]);
        let stats = StreakStats::compute(&activity, date("2025-06-10"));
        assert_eq!(stats.current_streak, 3);
    }

    #[test]
    fn test_quiet_today_falls_back_to_yesterday() {
        let activity = bucket(&[("2025-06-08", 1), ("2025-06-09", 2)]);
        let stats = StreakStats::compute(&activity, date("2025-06-10"));
        assert_eq!(stats.current_streak, 2);
    }

    #[test]
    fn test_gap_before_yesterday_breaks_streak() {
        // Activity only two days ago: the grace period covers today, not
        // the day before.
        let activity = bucket(&[("2025-06-08", 3)]);
        let stats = StreakStats::compute(&activity, date("2025-06-10"));
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn test_zero_valued_day_breaks_streak() {
        let activity = bucket(&[("2025-06-08", 1), ("2025-06-09", 0), ("2025-06-10", 1)]);
        let stats = StreakStats::compute(&activity, date("2025-06-10"));
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn test_longest_streak_picks_longest_run() {
        // D, D+1, D+2 then a gap to D+5: longest run is 3, not 4.
        let activity = bucket(&[
            ("2025-06-01", 1),
            ("2025-06-02", 1),
            ("2025-06-03", 1),
            ("2025-06-06", 1),
        ]);
        let stats = StreakStats::compute(&activity, date("2025-06-10"));
        assert_eq!(stats.longest_streak, 3);
    }

    #[test]
    fn test_longest_streak_single_day() {
        let activity = bucket(&[("2025-06-01", 5)]);
        let stats = StreakStats::compute(&activity, date("2025-06-10"));
        assert_eq!(stats.longest_streak, 1);
    }

    #[test]
    fn test_six_day_run_ending_today() {
        let activity = bucket(&[
            ("2025-06-05", 1),
            ("2025-06-06", 2),
            ("2025-06-07", 1),
            ("2025-06-08", 4),
            ("2025-06-09", 1),
            ("2025-06-10", 2),
        ]);
        let stats = StreakStats::compute(&activity, date("2025-06-10"));
        assert_eq!(stats.current_streak, 6);
        assert!(stats.longest_streak >= 6);
        assert_eq!(stats.total, 11);
    }
}
