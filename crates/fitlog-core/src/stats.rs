//! Weekly statistics aggregate types.

use serde::{Deserialize, Serialize};

/// One calendar-day bucket of the trailing week.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DayStat {
    /// Albanian weekday display name (Diel .. Shtunë).
    pub day: String,
    /// Summed session duration for that calendar date, seconds.
    pub duration: i64,
}

/// Aggregate over completed sessions started in the last 7 days.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStats {
    pub total_workouts: i64,
    /// Seconds.
    pub total_time: i64,
    /// Seconds. Exactly 0.0 when there were no workouts, never NaN.
    pub average_workout_time: f64,
    /// Seven buckets, oldest day first, today last.
    pub workouts_by_day: Vec<DayStat>,
}
