//! Weekly statistics aggregation.
//!
//! Scans the whole session table on every call. The table is memory-resident
//! and small, so there is no incremental state to keep consistent; at larger
//! scale this is the first thing to revisit.

use chrono::{DateTime, Datelike, Duration, Local, Utc};

use fitlog_core::stats::{DayStat, WeeklyStats};

use crate::Store;

/// Albanian weekday display names, Sunday-first to match
/// `Weekday::num_days_from_sunday`.
const DAY_NAMES: [&str; 7] = ["Diel", "Hënë", "Martë", "Mërkurë", "Enjte", "Premte", "Shtunë"];

impl Store {
    /// Aggregate the trailing 7-day window ending now.
    pub fn weekly_stats(&self) -> WeeklyStats {
        self.weekly_stats_at(Local::now())
    }

    /// Aggregation with an explicit "now", so tests control the clock.
    ///
    /// Only completed sessions started at or after `now - 7 days` count;
    /// incomplete sessions are excluded from every statistic even when their
    /// start time is in range. A session with no duration counts as 0
    /// seconds. Day buckets match on local calendar date, not a rolling 24h
    /// window.
    pub(crate) fn weekly_stats_at(&self, now: DateTime<Local>) -> WeeklyStats {
        let cutoff = now.with_timezone(&Utc) - Duration::days(7);

        let weekly: Vec<_> = self
            .inner
            .sessions
            .read()
            .list()
            .into_iter()
            .filter(|s| s.completed && s.start_time >= cutoff)
            .collect();

        let total_workouts = weekly.len() as i64;
        let total_time: i64 = weekly.iter().map(|s| s.duration.unwrap_or(0)).sum();
        let average_workout_time = if total_workouts > 0 {
            total_time as f64 / total_workouts as f64
        } else {
            0.0
        };

        // Seven calendar days ending today, oldest first.
        let workouts_by_day = (0..7)
            .map(|i| {
                let date = (now - Duration::days(6 - i)).date_naive();
                let duration = weekly
                    .iter()
                    .filter(|s| s.start_time.with_timezone(&Local).date_naive() == date)
                    .map(|s| s.duration.unwrap_or(0))
                    .sum();
                DayStat {
                    day: DAY_NAMES[date.weekday().num_days_from_sunday() as usize].to_string(),
                    duration,
                }
            })
            .collect();

        WeeklyStats {
            total_workouts,
            total_time,
            average_workout_time,
            workouts_by_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitlog_core::ids::PlanId;
    use fitlog_core::models::NewWorkoutSession;

    fn completed_session(start: DateTime<Utc>, duration: i64) -> NewWorkoutSession {
        NewWorkoutSession {
            workout_plan_id: PlanId::from_raw(1),
            start_time: start,
            end_time: Some(start + Duration::seconds(duration)),
            duration: Some(duration),
            completed: true,
            exercises_completed: vec![],
            notes: None,
        }
    }

    #[test]
    fn aggregates_the_trailing_week() {
        let store = Store::empty();
        let now = Local::now();
        let today = now.with_timezone(&Utc);

        store.create_workout_session(completed_session(today, 600));
        store.create_workout_session(completed_session(today - Duration::days(1), 1200));
        // Outside the 7-day window.
        store.create_workout_session(completed_session(today - Duration::days(10), 900));

        let stats = store.weekly_stats_at(now);
        assert_eq!(stats.total_workouts, 2);
        assert_eq!(stats.total_time, 1800);
        assert_eq!(stats.average_workout_time, 900.0);

        assert_eq!(stats.workouts_by_day.len(), 7);
        assert_eq!(stats.workouts_by_day[6].duration, 600);
        assert_eq!(stats.workouts_by_day[5].duration, 1200);
        for bucket in &stats.workouts_by_day[..5] {
            assert_eq!(bucket.duration, 0);
        }
    }

    #[test]
    fn incomplete_sessions_are_excluded_everywhere() {
        let store = Store::empty();
        let now = Local::now();
        let today = now.with_timezone(&Utc);

        let mut in_progress = completed_session(today, 600);
        in_progress.completed = false;
        store.create_workout_session(in_progress);

        let stats = store.weekly_stats_at(now);
        assert_eq!(stats.total_workouts, 0);
        assert_eq!(stats.total_time, 0);
        assert!(stats.workouts_by_day.iter().all(|b| b.duration == 0));
    }

    #[test]
    fn average_is_zero_not_nan_for_empty_window() {
        let store = Store::empty();
        let stats = store.weekly_stats_at(Local::now());
        assert_eq!(stats.total_workouts, 0);
        assert_eq!(stats.average_workout_time, 0.0);
        assert!(!stats.average_workout_time.is_nan());
    }

    #[test]
    fn missing_duration_counts_as_zero() {
        let store = Store::empty();
        let now = Local::now();
        let today = now.with_timezone(&Utc);

        let mut no_duration = completed_session(today, 600);
        no_duration.duration = None;
        store.create_workout_session(no_duration);
        store.create_workout_session(completed_session(today, 300));

        let stats = store.weekly_stats_at(now);
        assert_eq!(stats.total_workouts, 2);
        assert_eq!(stats.total_time, 300);
        assert_eq!(stats.average_workout_time, 150.0);
    }

    #[test]
    fn buckets_run_oldest_to_today_with_albanian_names() {
        let store = Store::empty();
        let now = Local::now();
        let stats = store.weekly_stats_at(now);

        let today_name = DAY_NAMES[now.date_naive().weekday().num_days_from_sunday() as usize];
        assert_eq!(stats.workouts_by_day[6].day, today_name);

        let oldest = (now - Duration::days(6)).date_naive();
        let oldest_name = DAY_NAMES[oldest.weekday().num_days_from_sunday() as usize];
        assert_eq!(stats.workouts_by_day[0].day, oldest_name);

        for bucket in &stats.workouts_by_day {
            assert!(DAY_NAMES.contains(&bucket.day.as_str()), "got: {}", bucket.day);
        }
    }

    #[test]
    fn multiple_sessions_same_day_share_a_bucket() {
        let store = Store::empty();
        let now = Local::now();
        // Noon local time avoids the two sessions straddling midnight.
        let noon = now
            .date_naive()
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_local_timezone(Local)
            .single()
            .unwrap()
            .with_timezone(&Utc);

        store.create_workout_session(completed_session(noon, 600));
        store.create_workout_session(completed_session(noon + Duration::hours(2), 900));

        let stats = store.weekly_stats_at(now);
        assert_eq!(stats.workouts_by_day[6].duration, 1500);
        assert_eq!(stats.total_time, 1500);
    }
}
